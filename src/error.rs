//! Error types for the translator.

use thiserror::Error;

/// Loop structure problems found by the opt-in balance check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("line {line}: `endfor` without an open `for` loop")]
    UnexpectedEndFor { line: usize },

    #[error("line {line}: `for` loop is never closed ({open} loop(s) left open)")]
    UnclosedFor { line: usize, open: usize },
}

/// Failure of a strict translation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("unbalanced loop structure: {0}")]
    Unbalanced(#[from] BlockError),
}

/// Result type alias for translator operations
pub type TranslateResult<T> = Result<T, TranslateError>;
