//! Table definitions
//!
//! Implemented once per entity to tell its facade which table it lives in,
//! which columns a select returns and which values an insert or update writes.
//!
//! ```
//! use facade_core::traits::{Entity, TableDefinition, ValueColumn};
//! use chrono::{DateTime, Utc};
//!
//! #[derive(Default)]
//! pub struct Ingredient {
//!     pub name: Option<String>,
//!     pub created_at: Option<DateTime<Utc>>,
//!     pub modified_at: Option<DateTime<Utc>>,
//! }
//!
//! impl Entity for Ingredient {
//!     fn set_created_at(&mut self, at: DateTime<Utc>) {
//!         self.created_at = Some(at);
//!     }
//!
//!     fn set_modified_at(&mut self, at: DateTime<Utc>) {
//!         self.modified_at = Some(at);
//!     }
//! }
//!
//! impl TableDefinition for Ingredient {
//!     const TABLE_NAME: &'static str = "ingredients";
//!     const DEFAULT_ALIAS: &'static str = "ig";
//!
//!     fn columns() -> &'static [&'static str] {
//!         &["name"]
//!     }
//!
//!     fn value_columns() -> Vec<ValueColumn<Self>> {
//!         vec![ValueColumn::new("name", |i: &Ingredient| i.name.clone().map(Into::into))]
//!     }
//! }
//! ```

use crate::value::SqlValue;
use chrono::{DateTime, Utc};
use std::fmt;

/// Timestamps the facade writes back after building an insert or update
pub trait Entity {
    fn set_created_at(&mut self, at: DateTime<Utc>);

    fn set_modified_at(&mut self, at: DateTime<Utc>);
}

/// A writable column and how to read its value from an entity.
///
/// An accessor returning `None` means the attribute is not set; the column
/// is then left out of inserts and updates.
pub struct ValueColumn<E> {
    pub name: &'static str,
    pub get: fn(&E) -> Option<SqlValue>,
}

impl<E> ValueColumn<E> {
    pub const fn new(name: &'static str, get: fn(&E) -> Option<SqlValue>) -> Self {
        Self { name, get }
    }

    pub fn value(&self, entity: &E) -> Option<SqlValue> {
        (self.get)(entity)
    }
}

impl<E> Clone for ValueColumn<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ValueColumn<E> {}

impl<E> fmt::Debug for ValueColumn<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueColumn").field("name", &self.name).finish()
    }
}

/// Metadata about the table an entity is stored in
pub trait TableDefinition: Entity + Sized {
    const TABLE_NAME: &'static str;

    /// Alias used when the facade is created without one
    const DEFAULT_ALIAS: &'static str;

    /// Selected columns besides `id`, `created_at` and `modified_at`
    fn columns() -> &'static [&'static str];

    /// Default columns the table does not have, e.g. `id` on a link table
    fn excluded_default_columns() -> &'static [&'static str] {
        &[]
    }

    /// Writable columns in statement order
    fn value_columns() -> Vec<ValueColumn<Self>>;
}
