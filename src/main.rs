mod app;
mod cli;
mod clock;
mod flip;
mod picker;
mod recents;
mod screen;
mod theme;
mod ticker;
mod util;
mod views;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::cli::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flip_timer={}", config.log_level())));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!(?config, "configuration");

    app::run(config).context("flip-timer window failed")
}
