//! Facade Core - statement building layer for sqlfacade
//!
//! This crate provides the filter trees, orderings, joins and column lists
//! that facades assemble into parameterized SQL, plus the facade traits
//! themselves.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod facade;
pub mod prelude;
pub mod query_builder;
pub mod traits;
pub mod validation;
pub mod value;

pub use errors::QueryError;
pub use facade::{CompositeFacade, EntityFacade, FilterCombination, QuerySettings};
pub use query_builder::{
    Filter, JoinAnalysis, LogicalOperator, Ordering, Query, SortOrder, TableRef,
};
pub use traits::*;
pub use validation::{ValidatedFieldName, ValidatedTableName, ValidationError};
pub use value::SqlValue;
