//! Column lists
//!
//! [`SqlAttributes`] is the projection of a select, [`ValueAttributes`] the
//! `(column, prefix, value)` triples of an insert or update.

use crate::errors::QueryError;
use crate::query_builder::sql_generation::SqlWriter;
use crate::validation::{ValidatedFieldName, ValidatedTableName};
use crate::value::SqlValue;

/// Columns every table carries
pub const DEFAULT_COLUMNS: [&str; 3] = ["id", "created_at", "modified_at"];

/// One projected column, rendered `prefix.column AS columnprefix`
#[derive(Debug, Clone, PartialEq)]
pub struct SqlAttribute {
    prefix: ValidatedTableName,
    column: ValidatedFieldName,
}

impl SqlAttribute {
    pub fn new(prefix: &str, column: &str) -> Result<Self, QueryError> {
        Ok(Self {
            prefix: ValidatedTableName::new(prefix)?,
            column: ValidatedFieldName::new(column)?,
        })
    }

    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    pub fn column(&self) -> &str {
        self.column.as_str()
    }

    /// Name of the column in the result set (`column` + `prefix`)
    pub fn result_name(&self) -> String {
        format!("{}{}", self.column, self.prefix)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SqlAttributes {
    attributes: Vec<SqlAttribute>,
}

impl SqlAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the projection of one table.
    ///
    /// `defaults` and `columns` are unioned in that order (first occurrence
    /// wins), then every name in `excluded` is removed, whichever list it
    /// came from.
    pub fn resolve(
        prefix: &str,
        defaults: &[&str],
        columns: &[&str],
        excluded: &[&str],
    ) -> Result<Self, QueryError> {
        let mut names: Vec<&str> = Vec::with_capacity(defaults.len() + columns.len());
        for name in defaults.iter().chain(columns) {
            if !names.contains(name) {
                names.push(*name);
            }
        }

        let attributes = names
            .into_iter()
            .filter(|name| !excluded.contains(name))
            .map(|name| SqlAttribute::new(prefix, name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { attributes })
    }

    pub fn add_attribute(&mut self, attribute: SqlAttribute) -> &mut Self {
        self.attributes.push(attribute);
        self
    }

    /// Append another table's projection (composite selects)
    pub fn extend(&mut self, other: SqlAttributes) -> &mut Self {
        self.attributes.extend(other.attributes);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &SqlAttribute> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub(crate) fn write_sql(&self, writer: &mut SqlWriter) {
        writer.push_separated(&self.attributes, ", ", |w, attribute| {
            w.push_str(attribute.prefix());
            w.push_str(".");
            w.push_str(attribute.column());
            w.push_str(" AS ");
            w.push_str(&attribute.result_name());
        });
    }
}

/// A column with the value to write into it
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAttribute {
    column: ValidatedFieldName,
    prefix: ValidatedTableName,
    value: SqlValue,
}

impl ValueAttribute {
    pub fn new(column: &str, prefix: &str, value: impl Into<SqlValue>) -> Result<Self, QueryError> {
        Ok(Self {
            column: ValidatedFieldName::new(column)?,
            prefix: ValidatedTableName::new(prefix)?,
            value: value.into(),
        })
    }

    pub fn column(&self) -> &str {
        self.column.as_str()
    }

    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    pub fn value(&self) -> &SqlValue {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueAttributes {
    attributes: Vec<ValueAttribute>,
}

impl ValueAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_attribute(&mut self, attribute: ValueAttribute) -> &mut Self {
        self.attributes.push(attribute);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValueAttribute> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
