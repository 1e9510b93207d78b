//! Query builder
//!
//! Filter trees, orderings, joins and column lists, assembled into
//! statements and baked into SQL text with positional parameters.

pub mod attributes;
pub mod bake;
pub mod block;
pub mod condition;
pub mod filter;
pub mod join;
pub mod ordering;
pub mod sql_generation;
pub mod statement;



pub use attributes::{SqlAttribute, SqlAttributes, ValueAttribute, ValueAttributes, DEFAULT_COLUMNS};
pub use bake::Query;
pub use block::{Block, BlockPart, LogicalOperator};
pub use condition::{Arity, ComparisonOperator, Condition, ConditionValue};
pub use filter::Filter;
pub use join::{analyze, Join, JoinAnalysis, JoinCardinality, JoinType};
pub use ordering::{Ordering, SortOrder};
pub use sql_generation::{SqlFragment, SqlWriter, UnbakedQuery};
pub use statement::{DeleteStatement, InsertStatement, SelectStatement, TableRef, UpdateStatement};
