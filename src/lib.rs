pub mod command;
pub mod config;
pub mod motor;
pub mod script;
pub mod teleop;

pub use command::{Maneuver, Motor, MotorCommand};
pub use motor::{ControlError, ControlInterface};
