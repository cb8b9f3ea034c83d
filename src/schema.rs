// 📐 Shape Layer - Field Validation
// Turns one line of console input into a typed field value, or says why not

use std::fmt;

/// Inclusive age bounds accepted at the prompt
pub const AGE_MIN: i64 = 0;
pub const AGE_MAX: i64 = 150;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input did not parse as the expected number type
    NotANumber,
    /// Parsed, but outside the allowed range
    OutOfRange,
    /// Nothing left after trimming
    Blank,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, kind: ErrorKind, message: &str) -> Self {
        ValidationError {
            field: field.to_string(),
            kind,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// FIELD PARSERS
// ============================================================================

/// Number of persons to add. Zero is allowed.
pub fn parse_count(input: &str) -> ValidationResult<usize> {
    let value: i64 = input.trim().parse().map_err(|_| {
        ValidationError::new(
            "count",
            ErrorKind::NotANumber,
            "Invalid input. Please enter a whole number for the count.",
        )
    })?;

    if value < 0 {
        return Err(ValidationError::new(
            "count",
            ErrorKind::OutOfRange,
            "Number of persons cannot be negative. Please enter a positive number.",
        ));
    }

    usize::try_from(value).map_err(|_| {
        ValidationError::new(
            "count",
            ErrorKind::NotANumber,
            "Invalid input. Please enter a whole number for the count.",
        )
    })
}

/// Name must have at least one non-whitespace character.
///
/// The line is kept as typed; only the blank check looks at the trimmed form.
pub fn parse_name(input: &str) -> ValidationResult<String> {
    if input.trim().is_empty() {
        return Err(ValidationError::new(
            "name",
            ErrorKind::Blank,
            "Name cannot be empty. Please enter a name.",
        ));
    }
    Ok(input.to_string())
}

pub fn parse_age(input: &str) -> ValidationResult<i32> {
    let value: i64 = input.trim().parse().map_err(|_| {
        ValidationError::new(
            "age",
            ErrorKind::NotANumber,
            "Invalid input. Please enter a whole number for age.",
        )
    })?;

    if !(AGE_MIN..=AGE_MAX).contains(&value) {
        return Err(ValidationError::new(
            "age",
            ErrorKind::OutOfRange,
            "Age must be between 0 and 150. Please enter a valid age.",
        ));
    }

    // Bounded by AGE_MAX above
    Ok(value as i32)
}

/// Non-negative, finite decimal. `inf` and `NaN` are rejected as non-numbers.
pub fn parse_balance(input: &str) -> ValidationResult<f64> {
    let value = input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            ValidationError::new(
                "balance",
                ErrorKind::NotANumber,
                "Invalid input. Please enter a valid number for balance (e.g., 400.00).",
            )
        })?;

    if value < 0.0 {
        return Err(ValidationError::new(
            "balance",
            ErrorKind::OutOfRange,
            "Balance cannot be negative. Please enter a non-negative value.",
        ));
    }

    Ok(value)
}

/// Split on commas, dropping whitespace around each token.
///
/// Interior empties stay (`"a,,b"` gives three tokens), trailing empties are
/// dropped (`"a,"` gives one). A blank line gives a single empty token.
pub fn split_interests(input: &str) -> Vec<String> {
    let line = input.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return vec![String::new()];
    }

    let mut tokens: Vec<String> = line
        .split(',')
        .map(|token| token.trim().to_string())
        .collect();
    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    tokens
}

// ============================================================================
// TESTS
// ============================================================================
