// Command types: motors, wire lines, and named maneuvers

use std::fmt;

use clap::Subcommand;
use serde::{Deserialize, Serialize};

/// The nine actuators on the robot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motor {
    Head,
    NeckTop,
    NeckBottom,
    LeftEye,
    RightEye,
    LeftArm,
    RightArm,
    LeftWheel,
    RightWheel,
}

impl Motor {
    pub const ALL: [Motor; 9] = [
        Motor::Head,
        Motor::NeckTop,
        Motor::NeckBottom,
        Motor::LeftEye,
        Motor::RightEye,
        Motor::LeftArm,
        Motor::RightArm,
        Motor::LeftWheel,
        Motor::RightWheel,
    ];

    /// Label the motor controller expects in front of the `:`
    pub fn token(self) -> &'static str {
        match self {
            Motor::Head => "HEAD_ROTATE",
            Motor::NeckTop => "NECK_TOP",
            Motor::NeckBottom => "NECK_BOTTOM",
            Motor::LeftEye => "LEFT_EYE",
            Motor::RightEye => "RIGHT_EYE",
            Motor::LeftArm => "LEFT_ARM",
            Motor::RightArm => "RIGHT_ARM",
            Motor::LeftWheel => "LEFT_WHEEL",
            Motor::RightWheel => "RIGHT_WHEEL",
        }
    }
}

/// One line on the wire
///
/// `Display` renders the line without its terminator, e.g. `NECK_TOP:-15.00`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotorCommand {
    Move { motor: Motor, degrees: f32 },
    StopAll,
    ResetCenter,
}

impl MotorCommand {
    pub fn new(motor: Motor, degrees: f32) -> Self {
        MotorCommand::Move { motor, degrees }
    }

    /// The full newline-terminated line
    pub fn to_line(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for MotorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorCommand::Move { motor, degrees } => {
                write!(f, "{}:{}", motor.token(), Degrees(*degrees))
            }
            MotorCommand::StopAll => f.write_str("STOP_ALL"),
            MotorCommand::ResetCenter => f.write_str("RESET_CENTER"),
        }
    }
}

// Two decimals via `{:.2}`, no `ovf` cutoff and no Arduino-style rounding
struct Degrees(f32);

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = self.0;
        if degrees.is_nan() {
            f.write_str("nan")
        } else if degrees.is_infinite() {
            f.write_str(if degrees < 0.0 { "-inf" } else { "inf" })
        } else if degrees == 0.0 {
            // covers -0.0, which would otherwise print as "-0.00"
            f.write_str("0.00")
        } else {
            write!(f, "{:.2}", degrees)
        }
    }
}

/// A named operation of the control interface together with its argument
///
/// Scripts store maneuvers as `{"op": "turn_left", "degrees": 90}`, the CLI
/// exposes each one as a subcommand (`turn-left 90`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Subcommand)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Maneuver {
    /// Rotate head (positive = right, negative = left)
    RotateHead {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Move neck top joint (positive = up)
    MoveNeckTop {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Move neck bottom joint (positive = up)
    MoveNeckBottom {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Move right eye (positive = up)
    MoveRightEye {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Move left eye (positive = up)
    MoveLeftEye {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Move left arm (positive = up)
    MoveLeftArm {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Move right arm (positive = up)
    MoveRightArm {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Rotate left wheel (positive = forward, 360 = one revolution)
    RotateLeftWheel {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Rotate right wheel (positive = forward, 360 = one revolution)
    RotateRightWheel {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Stop all motors
    StopAll,
    /// Return all servos to their center positions
    ResetToCenter,
    /// Move both eyes by the same amount
    MoveBothEyes {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Move both arms by the same amount
    MoveBothArms {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Rotate both wheels by the same amount
    MoveBothWheels {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Turn in place (positive = right)
    TurnRobot {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Drive forward
    MoveForward {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Drive backward
    MoveBackward {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Turn left in place
    TurnLeft {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Turn right in place
    TurnRight {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
    /// Spin in place (positive = right)
    SpinRobot {
        #[arg(allow_negative_numbers = true)]
        degrees: f32,
    },
}
