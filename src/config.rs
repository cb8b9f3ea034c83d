// ⚙️ Configuration - command line + environment

use crate::store::DEFAULT_STORE_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "record-collector", version, about = "Collect person records into a JSON store")]
pub struct Cli {
    /// Store file to load from and save to
    #[arg(long, env = "RECORD_STORE", default_value = DEFAULT_STORE_FILE)]
    pub store: PathBuf,

    /// Raise diagnostic logging (-v info, -vv debug). RUST_LOG wins when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    pub verbose: u8,
}

impl Config {
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Config {
            store_path: store_path.into(),
            verbose: 0,
        }
    }

    /// Filter used when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            store_path: cli.store,
            verbose: cli.verbose,
        }
    }
}
