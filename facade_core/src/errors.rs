use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("Invalid condition on '{column}': {reason}")]
    InvalidCondition { column: String, reason: String },

    #[error("Malformed filter: {0}")]
    MalformedFilter(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] ValidationError),

    #[error("Empty statement: {0}")]
    EmptyStatement(String),
}

impl QueryError {
    pub(crate) fn invalid_condition(column: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCondition {
            column: column.to_string(),
            reason: reason.into(),
        }
    }
}
