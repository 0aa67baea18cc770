// Serial link defaults and teleop step sizes
use std::time::Duration;

// Serial port the WALL-E Arduino enumerates as on the Raspberry Pi
pub const DEFAULT_PORT: &str = "/dev/ttyACM0";

// Environment variable that overrides the port for the CLI
pub const PORT_ENV: &str = "WALLE_PORT";

// The Arduino sketch listens at 115200 baud
pub const DEFAULT_BAUDRATE: u32 = 115_200;

// Write timeout on the serial port
pub const WRITE_TIMEOUT: Duration = Duration::from_millis(100);

// Teleop: degrees per key press
pub const TELEOP_WHEEL_STEP: f32 = 90.0; // wheels, a quarter turn
pub const TELEOP_SERVO_STEP: f32 = 10.0; // head, neck, eyes, arms

// Teleop key poll period
pub const TELEOP_POLL: Duration = Duration::from_millis(20);
