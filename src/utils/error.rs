//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading a power trace
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Expected 'window' in the first cell, found '{found}'")]
    MissingWindowHeader { found: String },

    #[error("Invalid sampling window '{value}'")]
    InvalidWindow { value: String },

    #[error("Trace has no module names row")]
    MissingModules,

    #[error("Line {line}: expected {expected} values, found {found}")]
    RowWidth {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}, column '{module}': cannot parse '{value}' as a number")]
    InvalidNumber {
        line: u64,
        module: String,
        value: String,
    },
}

/// Errors that can occur during plot rendering
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Empty power series for '{0}'")]
    EmptySeries(String),

    #[error("Sampling window must be positive")]
    ZeroWindow,

    #[error("Drawing failed: {0}")]
    Drawing(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
