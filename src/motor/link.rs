// Serial link to the WALL-E motor controller
//
// The Arduino reads newline-terminated text commands; nothing is ever read back.

use std::io;
use std::path::PathBuf;

use serialport::SerialPort;
use tracing::info;

use crate::config::{DEFAULT_BAUDRATE, WRITE_TIMEOUT};

/// Error types for the control interface
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid script: {0}")]
    Script(#[from] serde_json::Error),

    #[error("Cannot read script {}: {source}", .path.display())]
    ScriptFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ControlError>;

/// Open the serial port at the default baudrate
pub fn open(port_name: &str) -> Result<Box<dyn SerialPort>> {
    open_with_baudrate(port_name, DEFAULT_BAUDRATE)
}

/// Open with custom baudrate
pub fn open_with_baudrate(port_name: &str, baudrate: u32) -> Result<Box<dyn SerialPort>> {
    info!("Opening serial port {} at {} baud", port_name, baudrate);
    let port = serialport::new(port_name, baudrate)
        .timeout(WRITE_TIMEOUT)
        .open()?;
    Ok(port)
}

/// Names of the serial ports present on this machine
pub fn available_ports() -> Result<Vec<String>> {
    let ports = serialport::available_ports()?;
    Ok(ports.into_iter().map(|p| p.port_name).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_port_fails() {
        let result = open("/dev/walle-control-no-such-port");
        assert!(matches!(result, Err(ControlError::Serial(_))));
    }

    #[test]
    fn test_script_file_error_message() {
        let err = ControlError::ScriptFile {
            path: PathBuf::from("moves.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "Cannot read script moves.json: missing");
    }
}
