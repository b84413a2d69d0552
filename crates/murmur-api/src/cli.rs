//! CLI argument definitions for the `murmur` binary.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Murmur -- chat-session manager with profile memory.
#[derive(Debug, Parser)]
#[command(name = "murmur", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit machine-readable JSON output.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Bind port (overrides config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Bind host (overrides config.toml).
        #[arg(long)]
        host: Option<String>,
    },

    /// Show stored chats and profile memory.
    Status,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}
