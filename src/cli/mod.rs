//! CLI argument parsing

mod context;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use context::{ConfigAction, DeleteContextArgs, SetContextArgs, UseContextArgs};

/// Platform CLI working against named contexts
#[derive(Parser, Debug)]
#[command(name = "platctl")]
#[command(version)]
#[command(about = "Run platform operations against named contexts", long_about = None)]
pub struct Cli {
    /// Context to use (overrides PLATCTL_CONTEXT and current-context)
    #[arg(short = 'c', long, global = true)]
    pub context: Option<String>,

    /// Suppress progress output
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage named contexts
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Validate the active context
    Check(CheckArgs),
}

/// Arguments for 'check' command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Give up after this many seconds
    #[arg(long, default_value_t = defaults::CHECK_TIMEOUT_SECS)]
    pub timeout: u64,
}
