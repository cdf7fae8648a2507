//! AgentGate - HTTP host for multi-agent workflows
//!
//! Main entry point for the AgentGate CLI and server.

mod cli;
mod logging;
mod server;

use clap::Parser;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(dir) = &cli.work_dir {
        std::env::set_current_dir(dir)?;
    }

    match cli.command {
        None => {
            let config = server::load_config(cli.config.as_deref(), None, None)?;
            logging::init_tracing(&config)?;
            server::run_server(config).await
        }
        Some(Commands::Run { host, port }) => {
            let config = server::load_config(cli.config.as_deref(), host, port)?;
            logging::init_tracing(&config)?;
            server::run_server(config).await
        }
        Some(Commands::CheckConfig) => {
            let config = server::load_config(cli.config.as_deref(), None, None)?;
            if !server::check_config(&config) {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
