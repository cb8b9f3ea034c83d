// 📋 Record Collector - load, prompt, append, save
//
// One pass, in order:
//   1. load the store (missing/empty/corrupt all end up as a collection)
//   2. ask how many records to add
//   3. read each record, appending as soon as it is complete
//   4. overwrite the store with prior + new records
// Only step 4 can fail the run.

use crate::config::Config;
use crate::prompt::{Console, PromptError};
use crate::record::Collection;
use crate::store::{self, LoadOutcome};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// What a finished run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Records found in the store at start
    pub prior: usize,
    /// Records entered this run
    pub added: usize,
    pub saved_to: PathBuf,
}

pub fn run<R, W, E>(config: &Config, console: &mut Console<R, W, E>) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let path = config.store_path.as_path();
    let file = path.display().to_string();

    let mut collection = match store::load_collection(path) {
        Ok(LoadOutcome::Loaded(collection)) => {
            say(
                console,
                &format!(
                    "Existing data loaded from {file} ({} records)",
                    collection.len()
                ),
            );
            collection
        }
        Ok(LoadOutcome::Missing | LoadOutcome::Empty) => Collection::new(),
        Err(err) => {
            tracing::info!(error = %err, "store unreadable, starting empty");
            report(
                console,
                &format!("❌ Error reading existing data from {file}: {err}"),
            );
            report(console, "Starting with an empty list for new data.");
            Collection::new()
        }
    };
    let prior = collection.len();

    let added = collect_entries(console, &mut collection);

    // The only failure that ends the run
    store::save_collection(path, &collection)
        .with_context(|| format!("Error saving data to {file}"))?;

    let saved_to = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    say(
        console,
        &format!(
            "\n✅ Successfully saved all data (including new entries) to: {}",
            saved_to.display()
        ),
    );

    Ok(RunSummary {
        prior,
        added,
        saved_to,
    })
}

/// Prompt for the count, then that many records. Returns how many were appended.
///
/// A closed or failing console stops entry early; whatever was completed
/// stays in the collection.
fn collect_entries<R, W, E>(console: &mut Console<R, W, E>, collection: &mut Collection) -> usize
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let count = match console.read_count() {
        Ok(count) => count,
        Err(err) => {
            report_stopped(console, &err, 0, None);
            return 0;
        }
    };
    tracing::debug!(count, "entry count accepted");

    for index in 1..=count {
        match console.read_record(index) {
            Ok(record) => {
                tracing::debug!(index, name = %record.name, "record appended");
                collection.push(record);
            }
            Err(err) => {
                let added = index - 1;
                report_stopped(console, &err, added, Some(count));
                return added;
            }
        }
    }

    count
}

fn report_stopped<R, W, E>(
    console: &mut Console<R, W, E>,
    err: &PromptError,
    added: usize,
    expected: Option<usize>,
) where
    R: BufRead,
    W: Write,
    E: Write,
{
    tracing::info!(error = %err, added, "entry stopped early");
    let progress = match expected {
        Some(expected) => format!("{added} of {expected} records entered"),
        None => "no count entered".to_string(),
    };
    report(
        console,
        &format!("⚠️ Entry stopped ({err}); {progress}. Saving what was entered."),
    );
}

// Console messages are best-effort: a broken stdout/stderr never skips the save.

fn say<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>, message: &str) {
    if let Err(err) = console.say(message) {
        tracing::warn!(error = %err, "could not write to stdout");
    }
}

fn report<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>, message: &str) {
    if let Err(err) = console.report(message) {
        tracing::warn!(error = %err, "could not write to stderr");
    }
}

// ============================================================================
// TESTS
// ============================================================================
