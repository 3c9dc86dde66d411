use std::io;

use clap::Parser;
use scripts::{cli::Cli, errors::ScriptError};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let cli = Cli::parse();

    // Logs go to stderr so that stdout carries only the deployed addresses
    tracing_subscriber::fmt()
        .pretty()
        .with_writer(io::stderr)
        .with_max_level(cli.log_level)
        .init();

    cli.run().await
}
