use clap::Parser;
use std::io;

use record_collector::{logging, run, Cli, Config, Console};

fn main() {
    let config = Config::from(Cli::parse());
    logging::init(config.default_log_filter());
    tracing::debug!(version = record_collector::VERSION, store = %config.store_path.display(), "starting");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), io::stderr());
    let result = run(&config, &mut console);

    // Release the input stream before reporting
    drop(console);

    if let Err(err) = result {
        eprintln!("❌ {err:#}");
        tracing::error!(error = ?err, "run failed");
        std::process::exit(1);
    }
}
