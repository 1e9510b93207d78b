//! Error types for the sqlfacade crate
//!
//! This module contains all error types that can be returned by sqlfacade operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlFacadeError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Query error: {0}")]
    Query(#[from] facade_core::QueryError),
}
