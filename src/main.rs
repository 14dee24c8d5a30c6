//! Furry Fists console game.

mod cli;

use std::io;

use anyhow::Result;
use cli::{App, CliConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = CliConfig::from_env();
    tracing::debug!(?config, "configuration loaded");

    let stdin = io::stdin();
    App::new(config, stdin.lock(), io::stdout(), io::stdout()).run()
}
