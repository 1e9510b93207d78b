//! Convenience re-exports for common facade usage

// Facades and their capabilities
pub use crate::facade::{CompositeFacade, EntityFacade, FilterCombination, QuerySettings};
pub use crate::traits::{
    AttributeProvider, Entity, Filterable, Joinable, Orderable, TableDefinition, ValueColumn,
};

// Error types
pub use crate::errors::QueryError;

// Query building
pub use crate::query_builder::{
    Block, ComparisonOperator, Condition, Filter, Join, JoinAnalysis, JoinCardinality, JoinType,
    LogicalOperator, Ordering, Query, SortOrder, SqlAttributes, TableRef,
};

// Validation
pub use crate::validation::{ValidatedFieldName, ValidatedTableName, ValidationError};

// Values
pub use crate::value::SqlValue;

// Common external dependencies that are frequently used
pub use chrono::{DateTime, Utc};
pub use config::PlaceholderStyle;
