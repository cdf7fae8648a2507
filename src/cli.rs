//! CLI definitions for AgentGate.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// AgentGate CLI.
#[derive(Debug, Parser)]
#[command(name = "agentgate")]
#[command(about = "HTTP host for multi-agent workflows with artifact capture")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "AGENTGATE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Working directory
    #[arg(short, long, global = true)]
    pub work_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Run the server in foreground (default)
    Run {
        /// Server host, overrides HOST
        #[arg(long)]
        host: Option<String>,

        /// Server port, overrides PORT
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate the configuration, then exit
    CheckConfig,
}
