// Keyboard teleop: WASD drive, Q/E head, R/F T/G neck, U/J eyes, I/K arms,
// space stop, C center, X/Esc quit
use std::io::Write;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use tracing::info;

use crate::command::Maneuver;
use crate::config::{TELEOP_POLL, TELEOP_SERVO_STEP, TELEOP_WHEEL_STEP};
use crate::motor::{ControlInterface, Result};

/// Degrees sent per key press
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steps {
    pub wheel: f32,
    pub servo: f32,
}

impl Default for Steps {
    fn default() -> Self {
        Self {
            wheel: TELEOP_WHEEL_STEP,
            servo: TELEOP_SERVO_STEP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Perform(Maneuver),
    Quit,
}

/// Map a key press to what teleop should do, `None` for unbound keys
pub fn action_for_key(key: KeyEvent, steps: &Steps) -> Option<KeyAction> {
    // raw mode swallows SIGINT
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyAction::Quit),
            _ => None,
        };
    }

    let wheel = steps.wheel;
    let servo = steps.servo;
    let maneuver = match key.code {
        // Drive
        KeyCode::Char('w') => Maneuver::MoveForward { degrees: wheel },
        KeyCode::Char('s') => Maneuver::MoveBackward { degrees: wheel },
        KeyCode::Char('a') => Maneuver::TurnLeft { degrees: wheel },
        KeyCode::Char('d') => Maneuver::TurnRight { degrees: wheel },

        // Head and neck
        KeyCode::Char('q') => Maneuver::RotateHead { degrees: -servo },
        KeyCode::Char('e') => Maneuver::RotateHead { degrees: servo },
        KeyCode::Char('r') => Maneuver::MoveNeckTop { degrees: servo },
        KeyCode::Char('f') => Maneuver::MoveNeckTop { degrees: -servo },
        KeyCode::Char('t') => Maneuver::MoveNeckBottom { degrees: servo },
        KeyCode::Char('g') => Maneuver::MoveNeckBottom { degrees: -servo },

        // Eyes and arms
        KeyCode::Char('u') => Maneuver::MoveBothEyes { degrees: servo },
        KeyCode::Char('j') => Maneuver::MoveBothEyes { degrees: -servo },
        KeyCode::Char('i') => Maneuver::MoveBothArms { degrees: servo },
        KeyCode::Char('k') => Maneuver::MoveBothArms { degrees: -servo },

        KeyCode::Char(' ') => Maneuver::StopAll,
        KeyCode::Char('c') => Maneuver::ResetToCenter,

        KeyCode::Char('x') | KeyCode::Esc => return Some(KeyAction::Quit),
        _ => return None,
    };
    Some(KeyAction::Perform(maneuver))
}

/// Run teleop until quit, then stop all motors and restore the terminal
pub fn run<W: Write>(iface: &mut ControlInterface<W>, steps: Steps) -> Result<()> {
    info!(
        "Controls: WASD=drive, Q/E=head, R/F=neck top, T/G=neck bottom, U/J=eyes, I/K=arms, \
         SPACE=stop, C=center, X=quit"
    );
    info!("Steps: wheels {} deg, servos {} deg", steps.wheel, steps.servo);

    enable_raw_mode()?;
    let result = drive(iface, &steps);
    let stopped = iface.stop_all();
    disable_raw_mode()?;

    result.and(stopped)
}

fn drive<W: Write>(iface: &mut ControlInterface<W>, steps: &Steps) -> Result<()> {
    loop {
        if !event::poll(TELEOP_POLL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        match action_for_key(key, steps) {
            Some(KeyAction::Quit) => break,
            Some(KeyAction::Perform(maneuver)) => iface.perform(&maneuver)?,
            None => {}
        }
    }
    Ok(())
}
