// Degree-based control interface for WALL-E
//
// Every primitive call writes exactly one line to the sink. The derived calls
// (both eyes, turn, forward...) are compositions of primitives, written in a
// fixed order so wire traces stay comparable.

use std::io::Write;

use serialport::SerialPort;
use tracing::debug;

use super::link::{self, Result};
use crate::command::{Maneuver, Motor, MotorCommand};

/// Control interface writing motor commands to an owned sink
///
/// The sink is usually the serial port; any `Write` works (a `Vec<u8>` in
/// tests, stdout for dry runs). Wrap the interface in a `Mutex` if it has to be
/// shared between threads.
pub struct ControlInterface<W: Write> {
    sink: W,
}

impl ControlInterface<Box<dyn SerialPort>> {
    /// Open the serial port at the default baudrate
    pub fn open(port: &str) -> Result<Self> {
        Ok(Self::new(link::open(port)?))
    }

    /// Open with custom baudrate
    pub fn open_with_baudrate(port: &str, baudrate: u32) -> Result<Self> {
        Ok(Self::new(link::open_with_baudrate(port, baudrate)?))
    }
}

impl<W: Write> ControlInterface<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Encode one command and write it as a single line
    ///
    /// Write errors are returned as-is, nothing is retried.
    pub fn send(&mut self, command: MotorCommand) -> Result<()> {
        let line = command.to_line();
        debug!("Sending {}", command);
        self.sink.write_all(line.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }

    fn move_motor(&mut self, motor: Motor, degrees: f32) -> Result<()> {
        self.send(MotorCommand::new(motor, degrees))
    }

    // === Servo motors ===

    /// Rotate head left/right (positive = right, 360 = full rotation)
    pub fn rotate_head(&mut self, degrees: f32) -> Result<()> {
        self.move_motor(Motor::Head, degrees)
    }

    /// Move neck top joint (positive = up)
    pub fn move_neck_top(&mut self, degrees: f32) -> Result<()> {
        self.move_motor(Motor::NeckTop, degrees)
    }

    /// Move neck bottom joint (positive = up)
    pub fn move_neck_bottom(&mut self, degrees: f32) -> Result<()> {
        self.move_motor(Motor::NeckBottom, degrees)
    }

    pub fn move_right_eye(&mut self, degrees: f32) -> Result<()> {
        self.move_motor(Motor::RightEye, degrees)
    }

    pub fn move_left_eye(&mut self, degrees: f32) -> Result<()> {
        self.move_motor(Motor::LeftEye, degrees)
    }

    pub fn move_left_arm(&mut self, degrees: f32) -> Result<()> {
        self.move_motor(Motor::LeftArm, degrees)
    }

    pub fn move_right_arm(&mut self, degrees: f32) -> Result<()> {
        self.move_motor(Motor::RightArm, degrees)
    }

    // === Drive motors ===

    /// Rotate left wheel (positive = forward, 360 = full rotation)
    pub fn rotate_left_wheel(&mut self, degrees: f32) -> Result<()> {
        self.move_motor(Motor::LeftWheel, degrees)
    }

    /// Rotate right wheel (positive = forward, 360 = full rotation)
    pub fn rotate_right_wheel(&mut self, degrees: f32) -> Result<()> {
        self.move_motor(Motor::RightWheel, degrees)
    }

    pub fn stop_all(&mut self) -> Result<()> {
        self.send(MotorCommand::StopAll)
    }

    /// Return all servos to their center positions
    pub fn reset_to_center(&mut self) -> Result<()> {
        self.send(MotorCommand::ResetCenter)
    }

    // === Convenience ===

    /// Right eye first, then left
    pub fn move_both_eyes(&mut self, degrees: f32) -> Result<()> {
        self.move_right_eye(degrees)?;
        self.move_left_eye(degrees)
    }

    pub fn move_both_arms(&mut self, degrees: f32) -> Result<()> {
        self.move_left_arm(degrees)?;
        self.move_right_arm(degrees)
    }

    pub fn move_both_wheels(&mut self, degrees: f32) -> Result<()> {
        self.rotate_left_wheel(degrees)?;
        self.rotate_right_wheel(degrees)
    }

    /// Turn by driving the wheels in opposite directions (positive = right)
    pub fn turn_robot(&mut self, degrees: f32) -> Result<()> {
        self.rotate_left_wheel(-degrees)?;
        self.rotate_right_wheel(degrees)
    }

    pub fn move_forward(&mut self, degrees: f32) -> Result<()> {
        self.move_both_wheels(degrees)
    }

    pub fn move_backward(&mut self, degrees: f32) -> Result<()> {
        self.move_both_wheels(-degrees)
    }

    pub fn turn_left(&mut self, degrees: f32) -> Result<()> {
        self.turn_robot(-degrees)
    }

    pub fn turn_right(&mut self, degrees: f32) -> Result<()> {
        self.turn_robot(degrees)
    }

    /// Spin in place (positive = right)
    pub fn spin_robot(&mut self, degrees: f32) -> Result<()> {
        self.turn_robot(degrees)
    }

    /// Run the call a maneuver names
    pub fn perform(&mut self, maneuver: &Maneuver) -> Result<()> {
        match *maneuver {
            Maneuver::RotateHead { degrees } => self.rotate_head(degrees),
            Maneuver::MoveNeckTop { degrees } => self.move_neck_top(degrees),
            Maneuver::MoveNeckBottom { degrees } => self.move_neck_bottom(degrees),
            Maneuver::MoveRightEye { degrees } => self.move_right_eye(degrees),
            Maneuver::MoveLeftEye { degrees } => self.move_left_eye(degrees),
            Maneuver::MoveLeftArm { degrees } => self.move_left_arm(degrees),
            Maneuver::MoveRightArm { degrees } => self.move_right_arm(degrees),
            Maneuver::RotateLeftWheel { degrees } => self.rotate_left_wheel(degrees),
            Maneuver::RotateRightWheel { degrees } => self.rotate_right_wheel(degrees),
            Maneuver::StopAll => self.stop_all(),
            Maneuver::ResetToCenter => self.reset_to_center(),
            Maneuver::MoveBothEyes { degrees } => self.move_both_eyes(degrees),
            Maneuver::MoveBothArms { degrees } => self.move_both_arms(degrees),
            Maneuver::MoveBothWheels { degrees } => self.move_both_wheels(degrees),
            Maneuver::TurnRobot { degrees } => self.turn_robot(degrees),
            Maneuver::MoveForward { degrees } => self.move_forward(degrees),
            Maneuver::MoveBackward { degrees } => self.move_backward(degrees),
            Maneuver::TurnLeft { degrees } => self.turn_left(degrees),
            Maneuver::TurnRight { degrees } => self.turn_right(degrees),
            Maneuver::SpinRobot { degrees } => self.spin_robot(degrees),
        }
    }
}
