//! Configuration and CLI argument handling

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::flip::DEFAULT_FLIP_DURATION;
use crate::recents::json::default_store_path;
use crate::theme::ThemeMode;

const MIN_FLIP_MS: u64 = 100;
const MAX_FLIP_MS: u64 = 5000;

/// CLI argument parsing structure
#[derive(Debug, Clone, Parser)]
#[command(name = "flip-timer")]
#[command(about = "A countdown timer with a split-flap clock face")]
#[command(version)]
pub struct Config {
    /// File holding recently used durations
    #[arg(long, env = "FLIP_TIMER_STORE")]
    pub store: Option<PathBuf>,

    /// Keep recents in memory only
    #[arg(long, conflicts_with = "store")]
    pub ephemeral: bool,

    /// Color theme
    #[arg(long, value_enum, env = "FLIP_TIMER_THEME", default_value = "dark")]
    pub theme: ThemeMode,

    /// Duration of one digit flip in milliseconds
    #[arg(long, default_value_t = DEFAULT_FLIP_DURATION.as_millis() as u64)]
    pub flip_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn store_path(&self) -> PathBuf {
        self.store.clone().unwrap_or_else(default_store_path)
    }

    pub fn flip_duration(&self) -> Duration {
        Duration::from_millis(self.flip_ms.clamp(MIN_FLIP_MS, MAX_FLIP_MS))
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
