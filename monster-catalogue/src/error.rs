//! Error types shared across the catalogue, the stat parser and the terminal.
//!
//! None of these are fatal to a [`crate::session::Session`]: parse and range
//! errors turn into a re-prompt, lookup misses into a message. Only
//! [`TerminalError`] ends a session, because there is nobody left to ask.

use thiserror::Error;

/// Failures of the [`crate::catalogue::Catalogue`] store.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("Monster '{0}' already exists in the catalogue.")]
    Duplicate(String),

    #[error("Monster '{0}' not found in the catalogue.")]
    NotFound(String),
}

/// Why a raw string could not become a [`crate::catalogue::StatValue`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatError {
    #[error("Please enter a valid number.")]
    NotNumber(String),

    #[error("Value must be between {min} and {max}.")]
    OutOfRange { value: i64, min: u8, max: u8 },
}

/// The terminal streams stopped producing input.
#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("Input stream closed")]
    Closed,

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
