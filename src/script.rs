// Maneuver scripts: a JSON list of steps replayed through the interface
//
// {
//   "delay_ms": 500,
//   "steps": [
//     {"op": "reset_to_center"},
//     {"op": "move_forward", "degrees": 720},
//     {"op": "turn_left", "degrees": 90}
//   ]
// }

use std::fs;
use std::io::Write;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::command::Maneuver;
use crate::motor::{ControlError, ControlInterface, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Pause between consecutive steps
    #[serde(default)]
    pub delay_ms: u64,
    pub steps: Vec<Maneuver>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ControlError::ScriptFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Perform every step in order, stopping at the first failed write
    pub fn run<W: Write>(&self, iface: &mut ControlInterface<W>) -> Result<()> {
        info!(
            "Running script: {} steps, {}ms between steps",
            self.steps.len(),
            self.delay_ms
        );
        let delay = Duration::from_millis(self.delay_ms);

        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                sleep(delay);
            }
            debug!("Step {}: {:?}", i + 1, step);
            iface.perform(step)?;
        }

        info!("Script complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::time::Instant;

    /// Sink that accepts `accept` writes, then fails every further one
    struct FlakySink {
        accept: usize,
        attempts: usize,
        written: Vec<u8>,
    }

    impl FlakySink {
        fn new(accept: usize) -> Self {
            Self {
                accept,
                attempts: 0,
                written: Vec::new(),
            }
        }
    }

    impl Write for FlakySink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            if self.attempts > self.accept {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "unplugged"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    const PATROL: &str = r#"{
        "steps": [
            {"op": "reset_to_center"},
            {"op": "move_forward", "degrees": 720},
            {"op": "turn_left", "degrees": 90},
            {"op": "move_both_eyes", "degrees": -5.5},
            {"op": "stop_all"}
        ]
    }"#;

    #[test]
    fn test_parse_defaults_delay() {
        let script = Script::from_json(PATROL).unwrap();
        assert_eq!(script.delay_ms, 0);
        assert_eq!(script.steps.len(), 5);
        assert_eq!(script.steps[2], Maneuver::TurnLeft { degrees: 90.0 });
    }

    #[test]
    fn test_run_writes_steps_in_order() {
        let script = Script::from_json(PATROL).unwrap();
        let mut iface = ControlInterface::new(Vec::new());
        script.run(&mut iface).unwrap();

        let out = String::from_utf8(iface.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "RESET_CENTER",
                "LEFT_WHEEL:720.00",
                "RIGHT_WHEEL:720.00",
                "LEFT_WHEEL:90.00",
                "RIGHT_WHEEL:-90.00",
                "RIGHT_EYE:-5.50",
                "LEFT_EYE:-5.50",
                "STOP_ALL",
            ]
        );
    }

    #[test]
    fn test_run_stops_at_first_failed_write() {
        let script = Script::from_json(
            r#"{"steps": [
                {"op": "reset_to_center"},
                {"op": "stop_all"},
                {"op": "rotate_head", "degrees": 10}
            ]}"#,
        )
        .unwrap();
        let mut iface = ControlInterface::new(FlakySink::new(1));

        let err = script.run(&mut iface).unwrap_err();
        assert!(matches!(err, ControlError::Io(_)));
        // the third step never reached the sink
        assert_eq!(iface.sink().attempts, 2);
        assert_eq!(iface.sink().written, b"RESET_CENTER\n");
    }

    #[test]
    fn test_no_delay_after_last_step() {
        let script = Script::from_json(r#"{"delay_ms": 1000, "steps": [{"op": "stop_all"}]}"#)
            .unwrap();
        let mut iface = ControlInterface::new(Vec::new());

        let started = Instant::now();
        script.run(&mut iface).unwrap();
        assert!(started.elapsed() < Duration::from_millis(500));
        assert_eq!(iface.into_inner(), b"STOP_ALL\n");
    }

    #[test]
    fn test_delay_between_steps() {
        let script = Script::from_json(
            r#"{"delay_ms": 30, "steps": [{"op": "stop_all"}, {"op": "stop_all"}]}"#,
        )
        .unwrap();
        let mut iface = ControlInterface::new(Vec::new());

        let started = Instant::now();
        script.run(&mut iface).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_unknown_op_rejected() {
        let err = Script::from_json(r#"{"steps": [{"op": "moonwalk", "degrees": 1}]}"#)
            .unwrap_err();
        assert!(matches!(err, ControlError::Script(_)));
    }

    #[test]
    fn test_missing_degrees_rejected() {
        let err = Script::from_json(r#"{"steps": [{"op": "rotate_head"}]}"#).unwrap_err();
        assert!(matches!(err, ControlError::Script(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("walle-script-{}.json", std::process::id()));
        fs::write(&path, r#"{"delay_ms": 5, "steps": [{"op": "stop_all"}]}"#).unwrap();

        let script = Script::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(script.delay_ms, 5);
        assert_eq!(script.steps, vec![Maneuver::StopAll]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Script::load("/nonexistent/walle/patrol.json").unwrap_err();
        assert!(matches!(err, ControlError::ScriptFile { .. }));
    }
}
