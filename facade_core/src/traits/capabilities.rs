//! Facade capabilities
//!
//! Each trait covers one concern; a facade implements the ones it supports.

use crate::errors::QueryError;
use crate::query_builder::{Filter, Join, Ordering, SortOrder, SqlAttributes};

/// A facade that owns a filter
pub trait Filterable {
    fn filter(&self) -> &Filter;

    fn filter_mut(&mut self) -> &mut Filter;

    fn clear_filter(&mut self) {
        self.filter_mut().clear();
    }
}

/// A facade that owns an ordering
pub trait Orderable {
    fn ordering(&self) -> &Ordering;

    fn ordering_mut(&mut self) -> &mut Ordering;

    /// Shortcut for `ordering_mut().add_order_by(..)`
    fn add_order_by(&mut self, column: &str, order: SortOrder) -> Result<&mut Self, QueryError> {
        self.ordering_mut().add_order_by(column, order)?;
        Ok(self)
    }
}

/// A facade that contributes joins to its selects
pub trait Joinable {
    fn joins(&self) -> &[Join];
}

/// A facade that knows which columns a select returns
pub trait AttributeProvider {
    /// Columns of the select, minus the `excluded` names
    fn sql_attributes(&self, excluded: &[&str]) -> Result<SqlAttributes, QueryError>;
}
