//! # Input Sanitization & Validation
//!
//! Composable validation filters (`Sanitize`) applied to raw lines typed at
//! the catalogue prompt. Filters run in order and short-circuit on the first
//! failure, returning the diagnostic the user sees before being asked again.
//!
//! ## Features
//! - Inclusive integer range validation with [`Sanitize::IsBetween`]
//! - Rejection of blank answers with [`Sanitize::NotEmpty`]
//!
//! ## Examples
//!
//! ### Menu choice
//! ```rust,no_run
//! use monster_catalogue::utils::{Sanitize, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let choice = terminal
//!     .ask("Enter your choice (1-6): ", &[Sanitize::IsBetween(1, 6)])
//!     .unwrap();
//! println!("Picked: {}", choice);
//! ```
//!
//! ### Monster name
//! ```rust,no_run
//! use monster_catalogue::utils::{Sanitize, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let name = terminal
//!     .ask(
//!         "Enter monster name: ",
//!         &[Sanitize::NotEmpty("Monster name".to_string())],
//!     )
//!     .unwrap();
//! println!("Name: {}", name);
//! ```
use thiserror::Error;

/// Represents a validation filter that can be applied to user input.
///
/// - `IsBetween`: ensures that a numeric input is within an inclusive range `[min, max]`.
/// - `NotEmpty`: ensures that the trimmed input is not blank; carries the field label.
pub enum Sanitize {
    IsBetween(isize, isize),
    NotEmpty(String),
}

trait Validate {
    fn validate(&self, input: &str) -> Result<(), FilterErrorNot>;
}

/// Represents an error that occurs when input validation fails.
///
/// The `Display` output is the exact diagnostic printed before re-prompting.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterErrorNot {
    #[error("Please enter a valid number.")]
    Number,
    #[error("Value must be between {0} and {1}.")]
    Between(isize, isize),
    #[error("{0} cannot be empty.")]
    Empty(String),
}

/// True for an optionally signed run of ASCII digits, whatever its magnitude.
///
/// Lets callers tell "too big for the integer type" (a range problem) apart
/// from "not a number at all".
pub(crate) fn is_integer_literal(input: &str) -> bool {
    let digits = input
        .strip_prefix('-')
        .or_else(|| input.strip_prefix('+'))
        .unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl Sanitize {
    /// Executes all provided filters against the given answer.
    ///
    /// - Trims whitespace before validation.
    /// - Stops and returns the first error encountered.
    /// - Returns the cleaned string if all filters pass.
    pub fn execute(answer: &str, filters: &[Sanitize]) -> Result<String, FilterErrorNot> {
        let clean_answer = answer.trim();

        for filter in filters {
            filter.validate(clean_answer)?;
        }
        Ok(clean_answer.to_string())
    }
}

impl Validate for Sanitize {
    fn validate(&self, input: &str) -> Result<(), FilterErrorNot> {
        match self {
            Sanitize::IsBetween(n1, n2) => match input.parse::<isize>() {
                Ok(value) if value >= *n1 && value <= *n2 => Ok(()),
                Ok(_) => Err(FilterErrorNot::Between(*n1, *n2)),
                Err(_) if is_integer_literal(input) => Err(FilterErrorNot::Between(*n1, *n2)),
                Err(_) => Err(FilterErrorNot::Number),
            },
            Sanitize::NotEmpty(label) => {
                if input.is_empty() {
                    Err(FilterErrorNot::Empty(label.clone()))
                } else {
                    Ok(())
                }
            }
        }
    }
}
