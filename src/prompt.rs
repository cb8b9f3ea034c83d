// ⌨️ Console Prompting - ask, validate, re-ask
//
// Every scalar field goes through the same loop:
//   awaiting input -> validating -> accepted
//                         |
//                         +-> rejected, message printed, awaiting input again
// Bad input never ends the loop. Only a closed or failing stream does.

use crate::record::Record;
use crate::schema::{self, ErrorKind, ValidationResult};
use std::io::{self, BufRead, Write};
use thiserror::Error;

// Count prompt sits on its own line; field prompts stay inline
pub const COUNT_PROMPT: &str = "Enter how many persons you want to add:\n";
pub const NAME_PROMPT: &str = "Name: ";
pub const AGE_PROMPT: &str = "Age: ";
pub const BALANCE_PROMPT: &str = "Balance: ";
pub const INTERESTS_PROMPT: &str =
    "Enter interests separated by commas (e.g., reading,gaming,sports): ";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input stream closed")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

// ============================================================================
// CONSOLE
// ============================================================================

/// Line-oriented console: prompts and rejections go to `out`, error
/// reports go to `err`.
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Console { input, out, err }
    }

    /// Prompt until `validate` accepts a line.
    pub fn ask<T, F>(&mut self, label: &str, validate: F) -> Result<T, PromptError>
    where
        F: Fn(&str) -> ValidationResult<T>,
    {
        loop {
            write!(self.out, "{label}")?;
            self.out.flush()?;

            let line = self.read_line()?;
            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    tracing::debug!(
                        field = %rejection.field,
                        kind = ?rejection.kind,
                        "input rejected"
                    );
                    let marker = match rejection.kind {
                        ErrorKind::NotANumber => "❌",
                        ErrorKind::OutOfRange | ErrorKind::Blank => "⚠️",
                    };
                    writeln!(self.out, "{marker} {rejection}")?;
                }
            }
        }
    }

    pub fn read_count(&mut self) -> Result<usize, PromptError> {
        self.ask(COUNT_PROMPT, schema::parse_count)
    }

    /// Collect one full record. `index` is 1-based and only used for the header.
    pub fn read_record(&mut self, index: usize) -> Result<Record, PromptError> {
        writeln!(self.out)?;
        writeln!(self.out, "--- Entering details for Person {index} ---")?;

        let name = self.ask(NAME_PROMPT, schema::parse_name)?;
        let age = self.ask(AGE_PROMPT, schema::parse_age)?;
        let balance = self.ask(BALANCE_PROMPT, schema::parse_balance)?;
        let interests = self.ask(INTERESTS_PROMPT, |line| Ok(schema::split_interests(line)))?;

        Ok(Record::new(name, age, balance, interests))
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")
    }

    pub fn report(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.err, "{message}")
    }

    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

// ============================================================================
// TESTS
// ============================================================================
