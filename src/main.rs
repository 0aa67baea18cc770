use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use walle_control::config::{
    DEFAULT_BAUDRATE, DEFAULT_PORT, PORT_ENV, TELEOP_SERVO_STEP, TELEOP_WHEEL_STEP,
};
use walle_control::motor::{self, ControlInterface, Result};
use walle_control::script::Script;
use walle_control::teleop::{self, Steps};
use walle_control::Maneuver;

/// Send degree-based motor commands to WALL-E over serial
#[derive(Debug, Parser)]
#[command(name = "walle-control", version)]
struct Cli {
    /// Serial port of the motor controller
    #[arg(long, env = PORT_ENV, default_value = DEFAULT_PORT, global = true)]
    port: String,

    #[arg(long, default_value_t = DEFAULT_BAUDRATE, global = true)]
    baud: u32,

    /// Print wire lines to stdout instead of writing to the port
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(flatten)]
    Maneuver(Maneuver),

    /// Replay a JSON maneuver script
    Run { script: PathBuf },

    /// Drive the robot from the keyboard
    Teleop {
        /// Wheel degrees per key press
        #[arg(long, default_value_t = TELEOP_WHEEL_STEP, allow_negative_numbers = true)]
        wheel_step: f32,

        /// Servo degrees per key press
        #[arg(long, default_value_t = TELEOP_SERVO_STEP, allow_negative_numbers = true)]
        servo_step: f32,
    },

    /// List serial ports on this machine
    Ports,
}

fn main() {
    // Setup logging (set RUST_LOG=info or debug), stderr keeps dry-run output clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("walle-control error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.dry_run || matches!(cli.command, Command::Ports) {
        let mut iface = ControlInterface::new(io::stdout());
        return execute(&mut iface, cli.command);
    }

    let mut iface = ControlInterface::open_with_baudrate(&cli.port, cli.baud)?;
    execute(&mut iface, cli.command)
}

fn execute<W: Write>(iface: &mut ControlInterface<W>, command: Command) -> Result<()> {
    match command {
        Command::Maneuver(maneuver) => {
            info!("Sending {:?}", maneuver);
            iface.perform(&maneuver)
        }
        Command::Run { script } => Script::load(&script)?.run(iface),
        Command::Teleop {
            wheel_step,
            servo_step,
        } => teleop::run(
            iface,
            Steps {
                wheel: wheel_step,
                servo: servo_step,
            },
        ),
        Command::Ports => {
            let ports = motor::link::available_ports()?;
            if ports.is_empty() {
                info!("No serial ports found");
            }
            for name in ports {
                println!("{}", name);
            }
            Ok(())
        }
    }
}
