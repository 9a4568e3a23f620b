//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors reported by scheduling runs and request parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The process list or quantum failed validation. Nothing was scheduled.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// An algorithm name did not match any known scheduler.
    #[error("unknown scheduling algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl ScheduleError {
    /// Validation errors carried by an `InvalidInput`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::UnknownAlgorithm(_) => &[],
        }
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;
