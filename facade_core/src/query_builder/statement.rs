//! Statement assemblers
//!
//! Each statement renders its clauses in a fixed order into an
//! [`UnbakedQuery`]; values stay attached to their position until baking.

use crate::errors::QueryError;
use crate::query_builder::attributes::{SqlAttributes, ValueAttributes};
use crate::query_builder::block::Block;
use crate::query_builder::join::Join;
use crate::query_builder::ordering::Ordering;
use crate::query_builder::sql_generation::{SqlWriter, UnbakedQuery};
use crate::validation::ValidatedTableName;

/// A table name with the alias it is referenced by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    name: ValidatedTableName,
    alias: ValidatedTableName,
}

impl TableRef {
    pub fn new(name: &str, alias: &str) -> Result<Self, QueryError> {
        Ok(Self {
            name: ValidatedTableName::new(name)?,
            alias: ValidatedTableName::new(alias)?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn alias(&self) -> &str {
        self.alias.as_str()
    }
}

fn write_where(writer: &mut SqlWriter, filter: Option<&Block>, unqualified: Option<&str>) {
    if let Some(block) = filter.filter(|block| !block.is_empty()) {
        writer.push_str(" WHERE ");
        block.write_grouped(writer, unqualified);
    }
}

/// `SELECT … FROM … [JOIN …] [WHERE …] [ORDER BY …]`
#[derive(Debug, Clone)]
pub struct SelectStatement<'a> {
    table: &'a TableRef,
    attributes: &'a SqlAttributes,
    joins: &'a [Join],
    filter: Option<&'a Block>,
    orderings: Vec<&'a Ordering>,
}

impl<'a> SelectStatement<'a> {
    pub fn new(table: &'a TableRef, attributes: &'a SqlAttributes) -> Self {
        Self {
            table,
            attributes,
            joins: &[],
            filter: None,
            orderings: Vec::new(),
        }
    }

    pub fn joins(mut self, joins: &'a [Join]) -> Self {
        self.joins = joins;
        self
    }

    /// Filter for the WHERE clause; an empty block omits the clause
    pub fn filter(mut self, block: &'a Block) -> Self {
        self.filter = Some(block);
        self
    }

    pub fn order_by(mut self, ordering: &'a Ordering) -> Self {
        self.orderings.push(ordering);
        self
    }

    pub fn assemble(&self) -> Result<UnbakedQuery, QueryError> {
        if self.attributes.is_empty() {
            return Err(QueryError::EmptyStatement(format!(
                "select on {} has no columns",
                self.table.name()
            )));
        }

        let mut writer = SqlWriter::new();
        writer.push_str("SELECT ");
        self.attributes.write_sql(&mut writer);
        writer.push_str(" FROM ");
        writer.push_str(self.table.name());
        writer.push_str(" AS ");
        writer.push_str(self.table.alias());

        for join in self.joins {
            writer.push_str(" ");
            join.write_sql(&mut writer);
        }

        write_where(&mut writer, self.filter, None);

        let orderings: Vec<&Ordering> = self
            .orderings
            .iter()
            .copied()
            .filter(|ordering| !ordering.is_empty())
            .collect();
        if !orderings.is_empty() {
            writer.push_str(" ORDER BY ");
            writer.push_separated(orderings, ", ", |w, ordering| ordering.write_sql(w));
        }

        Ok(writer.finish())
    }
}

/// `INSERT INTO table( prefix.col, … ) VALUES( ?, … )`
#[derive(Debug, Clone)]
pub struct InsertStatement<'a> {
    table: &'a TableRef,
    attributes: &'a ValueAttributes,
}

impl<'a> InsertStatement<'a> {
    pub fn new(table: &'a TableRef, attributes: &'a ValueAttributes) -> Self {
        Self { table, attributes }
    }

    pub fn assemble(&self) -> Result<UnbakedQuery, QueryError> {
        if self.attributes.is_empty() {
            return Err(QueryError::EmptyStatement(format!(
                "insert into {} has no values",
                self.table.name()
            )));
        }

        let mut writer = SqlWriter::new();
        writer.push_str("INSERT INTO ");
        writer.push_str(self.table.name());
        writer.push_str("( ");
        writer.push_separated(self.attributes.iter(), ", ", |w, attribute| {
            w.push_str(attribute.prefix());
            w.push_str(".");
            w.push_str(attribute.column());
        });
        writer.push_str(" ) VALUES( ");
        writer.push_separated(self.attributes.iter(), ", ", |w, attribute| {
            w.push_param(attribute.value().clone())
        });
        writer.push_str(" )");

        Ok(writer.finish())
    }
}

/// ``UPDATE table alias SET prefix.`col` = ?, … [WHERE …]``
///
/// Without a (non-empty) filter the statement has no WHERE clause and
/// updates every row of the table. That is accepted, not an error.
#[derive(Debug, Clone)]
pub struct UpdateStatement<'a> {
    table: &'a TableRef,
    attributes: &'a ValueAttributes,
    filter: Option<&'a Block>,
}

impl<'a> UpdateStatement<'a> {
    pub fn new(table: &'a TableRef, attributes: &'a ValueAttributes) -> Self {
        Self {
            table,
            attributes,
            filter: None,
        }
    }

    pub fn filter(mut self, block: &'a Block) -> Self {
        self.filter = Some(block);
        self
    }

    pub fn assemble(&self) -> Result<UnbakedQuery, QueryError> {
        if self.attributes.is_empty() {
            return Err(QueryError::EmptyStatement(format!(
                "update of {} has no assignments",
                self.table.name()
            )));
        }

        let mut writer = SqlWriter::new();
        writer.push_str("UPDATE ");
        writer.push_str(self.table.name());
        writer.push_str(" ");
        writer.push_str(self.table.alias());
        writer.push_str(" SET ");
        writer.push_separated(self.attributes.iter(), ", ", |w, attribute| {
            w.push_str(attribute.prefix());
            w.push_str(".`");
            w.push_str(attribute.column());
            w.push_str("` = ");
            w.push_param(attribute.value().clone());
        });

        write_where(&mut writer, self.filter, None);

        Ok(writer.finish())
    }
}

/// `DELETE FROM table [WHERE …]`
///
/// The target dialect does not accept aliased column references in a
/// delete, so every `alias.` qualifier is removed from the WHERE clause.
/// Without a filter every row is deleted; that is accepted, not an error.
#[derive(Debug, Clone)]
pub struct DeleteStatement<'a> {
    table: &'a TableRef,
    filter: Option<&'a Block>,
}

impl<'a> DeleteStatement<'a> {
    pub fn new(table: &'a TableRef) -> Self {
        Self { table, filter: None }
    }

    pub fn filter(mut self, block: &'a Block) -> Self {
        self.filter = Some(block);
        self
    }

    pub fn assemble(&self) -> Result<UnbakedQuery, QueryError> {
        let mut writer = SqlWriter::new();
        writer.push_str("DELETE FROM ");
        writer.push_str(self.table.name());

        write_where(&mut writer, self.filter, Some(self.table.alias()));

        Ok(writer.finish())
    }
}
