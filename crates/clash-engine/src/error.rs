//! Error types for clash-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClashError {
    #[error(
        "Invalid time string format: it must be HH:MM or HH:MM AM or HH:MMpm (case insensitive), got '{0}'"
    )]
    InvalidTimeFormat(String),

    /// A data row that is not a `start,end` pair.
    /// `line` is the 1-based line number in the input.
    #[error("Malformed row at line {line}: expected 'start,end', got '{content}'")]
    MalformedRow { line: usize, content: String },
}

pub type Result<T> = std::result::Result<T, ClashError>;
