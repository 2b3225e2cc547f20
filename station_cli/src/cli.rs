//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Default config location; a missing file at this path means built-in defaults.
pub const DEFAULT_CONFIG: &str = "etc/station.toml";

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "station", version, about = "Pumping station supervisor")]
pub struct Cli {
    /// Path to config TOML
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Log as JSON lines instead of pretty
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace); default: logging.level, then info
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP gateway and the operator console
    Run {
        /// Override server.bind from the config
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
        /// Override server.port from the config (0 = any free port)
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,
        /// Run without the interactive console; stop with Ctrl-C
        #[arg(long, action = ArgAction::SetTrue)]
        headless: bool,
    },
    /// Load and validate the config, then print the effective settings
    CheckConfig,
}
