// Motor control module for WALL-E
//
// Provides:
// - Serial link setup and the crate error type
// - Degree-based control interface (one text line per motor command)

mod interface;
pub mod link;

pub use interface::ControlInterface;
pub use link::{ControlError, Result};
