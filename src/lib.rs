// Record Collector - Core Library
// Exposes all modules for use by the CLI and tests

pub mod collector;
pub mod config;
pub mod logging;
pub mod prompt;
pub mod record;
pub mod schema;
pub mod store;

// Re-export commonly used types
pub use collector::{run, RunSummary};
pub use config::{Cli, Config};
pub use prompt::{Console, PromptError};
pub use record::{Collection, Record};
pub use schema::{
    parse_age, parse_balance, parse_count, parse_name, split_interests,
    ErrorKind, ValidationError, ValidationResult,
};
pub use store::{
    load_collection, save_collection, LoadOutcome, StoreError, DEFAULT_STORE_FILE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
