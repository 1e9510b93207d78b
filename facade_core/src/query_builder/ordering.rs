//! Ordering
//!
//! ORDER BY entries for one table alias, kept in insertion order.

use crate::errors::QueryError;
use crate::query_builder::sql_generation::SqlWriter;
use crate::validation::{ValidatedFieldName, ValidatedTableName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ordering {
    alias: ValidatedTableName,
    entries: Vec<(ValidatedFieldName, SortOrder)>,
}

impl Ordering {
    pub fn new(alias: &str) -> Result<Self, QueryError> {
        Ok(Self {
            alias: ValidatedTableName::new(alias)?,
            entries: Vec::new(),
        })
    }

    pub fn alias(&self) -> &str {
        self.alias.as_str()
    }

    /// Add an order-by entry; `SortOrder::default()` sorts descending.
    pub fn add_order_by(&mut self, column: &str, order: SortOrder) -> Result<&mut Self, QueryError> {
        let column = ValidatedFieldName::new(column)?;
        self.entries.push((column, order));
        Ok(self)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, SortOrder)> {
        self.entries
            .iter()
            .map(|(column, order)| (column.as_str(), *order))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Write `alias.c1 ASC, alias.c2 DESC` (no ORDER BY keyword).
    pub(crate) fn write_sql(&self, writer: &mut SqlWriter) {
        writer.push_separated(&self.entries, ", ", |w, (column, order)| {
            w.push_str(self.alias.as_str());
            w.push_str(".");
            w.push_str(column.as_str());
            w.push_str(" ");
            w.push_str(order.to_sql());
        });
    }
}
