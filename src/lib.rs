//! # sqlfacade
//!
//! Facades that turn per-table filters, orderings and joins into
//! parameterized SQL text plus the ordered values to bind. Nothing is
//! executed here; the finished [`Query`] goes to whatever driver the caller uses.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlfacade::prelude::*;
//!
//! #[derive(Default)]
//! pub struct User {
//!     pub email: Option<String>,
//!     pub created_at: Option<DateTime<Utc>>,
//!     pub modified_at: Option<DateTime<Utc>>,
//! }
//!
//! impl Entity for User {
//!     fn set_created_at(&mut self, at: DateTime<Utc>) {
//!         self.created_at = Some(at);
//!     }
//!
//!     fn set_modified_at(&mut self, at: DateTime<Utc>) {
//!         self.modified_at = Some(at);
//!     }
//! }
//!
//! impl TableDefinition for User {
//!     const TABLE_NAME: &'static str = "users";
//!     const DEFAULT_ALIAS: &'static str = "u";
//!
//!     fn columns() -> &'static [&'static str] {
//!         &["email"]
//!     }
//!
//!     fn value_columns() -> Vec<ValueColumn<Self>> {
//!         vec![ValueColumn::new("email", |u: &User| u.email.clone().map(Into::into))]
//!     }
//! }
//!
//! fn main() -> Result<(), SqlFacadeError> {
//!     let sqlfacade = SqlFacade::default();
//!     let mut users = sqlfacade.entity_facade::<User>()?;
//!     users.filter_mut().equal("email", "x@y.com")?;
//!
//!     let query = users.get(&[])?;
//!     assert_eq!(
//!         query.query,
//!         "SELECT u.id AS idu, u.created_at AS created_atu, u.modified_at AS modified_atu, u.email AS emailu FROM users AS u WHERE (( u.email = ? ))"
//!     );
//!     assert_eq!(query.params, vec![SqlValue::from("x@y.com")]);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::SqlFacade;
pub use errors::SqlFacadeError;

// Re-export centralized config
pub use config::{AppConfig, DiagnosticsConfig, PlaceholderStyle, QueryConfig};

// Re-export the facade layer
pub use facade_core::{
    CompositeFacade, EntityFacade, Filter, FilterCombination, Ordering, Query, QueryError,
    QuerySettings, SortOrder, SqlValue,
};
