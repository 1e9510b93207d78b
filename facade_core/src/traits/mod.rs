//! Traits for facades
//!
//! Capabilities a facade can offer, and the description of a table that
//! callers implement once per entity.

pub mod capabilities;
pub mod table_definition;

// Re-export all public items for convenience
pub use capabilities::{AttributeProvider, Filterable, Joinable, Orderable};
pub use table_definition::{Entity, TableDefinition, ValueColumn};
