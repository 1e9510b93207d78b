use crate::errors::QueryError;
use crate::facade::{build_select, QuerySettings};
use crate::query_builder::{
    DeleteStatement, Filter, InsertStatement, Join, JoinAnalysis, Ordering, Query, SqlAttributes,
    TableRef, UpdateStatement, ValueAttribute, ValueAttributes, DEFAULT_COLUMNS,
};
use crate::traits::{AttributeProvider, Filterable, Joinable, Orderable, TableDefinition};
use crate::value::SqlValue;
use chrono::Utc;
use std::marker::PhantomData;

/// Builds select, insert, update and delete statements for one table.
///
/// The filter and ordering persist between calls until they are cleared.
#[derive(Debug, Clone)]
pub struct EntityFacade<T: TableDefinition> {
    table: TableRef,
    settings: QuerySettings,
    filter: Filter,
    ordering: Ordering,
    joins: Vec<Join>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: TableDefinition> EntityFacade<T> {
    /// Create a facade using the table's default alias
    pub fn new(settings: QuerySettings) -> Result<Self, QueryError> {
        Self::with_alias(T::DEFAULT_ALIAS, settings)
    }

    pub fn with_alias(alias: &str, settings: QuerySettings) -> Result<Self, QueryError> {
        let table = TableRef::new(T::TABLE_NAME, alias)?;
        Ok(Self {
            filter: Filter::new(table.alias())?,
            ordering: Ordering::new(table.alias())?,
            table,
            settings,
            joins: Vec::new(),
            _entity: PhantomData,
        })
    }

    /// Add a join every select of this facade carries
    pub fn add_join(&mut self, join: Join) -> &mut Self {
        self.joins.push(join);
        self
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    pub fn settings(&self) -> &QuerySettings {
        &self.settings
    }

    /// Result-set name of `column` (`column` + alias), e.g. `passwordu`
    pub fn name(&self, column: &str) -> String {
        format!("{}{}", column, self.table.alias())
    }

    /// Select every row matching the facade filter
    pub fn get(&self, excluded: &[&str]) -> Result<Query, QueryError> {
        let attributes = self.sql_attributes(excluded)?;
        build_select(
            &self.table,
            &attributes,
            &self.joins,
            self.filter.block(),
            &[&self.ordering],
            &self.settings,
        )
    }

    /// Select one row by id. The facade filter is ignored and left as it is;
    /// the facade ordering still applies.
    pub fn get_by_id(&self, id: impl Into<SqlValue>, excluded: &[&str]) -> Result<Query, QueryError> {
        let attributes = self.sql_attributes(excluded)?;
        let mut id_filter = Filter::new(self.table.alias())?;
        id_filter.equal("id", id)?;

        build_select(
            &self.table,
            &attributes,
            &self.joins,
            id_filter.block(),
            &[&self.ordering],
            &self.settings,
        )
    }

    /// Insert the set attributes of `entity` and stamp its `created_at`.
    pub fn insert(&self, entity: &mut T) -> Result<Query, QueryError> {
        let now = Utc::now();
        let mut values = Self::value_attributes(entity, T::TABLE_NAME)?;
        values.add_attribute(ValueAttribute::new("created_at", T::TABLE_NAME, now)?);

        let query = InsertStatement::new(&self.table, &values)
            .assemble()?
            .bake(self.settings.placeholder_style);

        entity.set_created_at(now);
        crate::debug_log!("insert into {}: {} values", T::TABLE_NAME, query.params.len());
        Ok(query)
    }

    /// Update the rows matching the facade filter and stamp `modified_at`.
    ///
    /// An empty filter updates the whole table.
    pub fn update(&self, entity: &mut T) -> Result<Query, QueryError> {
        let now = Utc::now();
        let alias = self.table.alias();
        let mut values = Self::value_attributes(entity, alias)?;
        values.add_attribute(ValueAttribute::new("modified_at", alias, now)?);

        let query = UpdateStatement::new(&self.table, &values)
            .filter(self.filter.block())
            .assemble()?
            .bake(self.settings.placeholder_style);

        entity.set_modified_at(now);
        crate::debug_log!("update of {}: {} values", T::TABLE_NAME, query.params.len());
        Ok(query)
    }

    /// Delete the rows matching the facade filter. An empty filter deletes
    /// every row.
    pub fn delete(&self) -> Result<Query, QueryError> {
        let query = DeleteStatement::new(&self.table)
            .filter(self.filter.block())
            .assemble()?
            .bake(self.settings.placeholder_style);
        Ok(query)
    }

    pub fn join_analysis(&self) -> JoinAnalysis {
        crate::query_builder::analyze(&self.joins)
    }

    fn value_attributes(entity: &T, prefix: &str) -> Result<ValueAttributes, QueryError> {
        let mut values = ValueAttributes::new();
        for column in T::value_columns() {
            if let Some(value) = column.value(entity) {
                values.add_attribute(ValueAttribute::new(column.name, prefix, value)?);
            }
        }
        Ok(values)
    }
}

impl<T: TableDefinition> Filterable for EntityFacade<T> {
    fn filter(&self) -> &Filter {
        &self.filter
    }

    fn filter_mut(&mut self) -> &mut Filter {
        &mut self.filter
    }
}

impl<T: TableDefinition> Orderable for EntityFacade<T> {
    fn ordering(&self) -> &Ordering {
        &self.ordering
    }

    fn ordering_mut(&mut self) -> &mut Ordering {
        &mut self.ordering
    }
}

impl<T: TableDefinition> Joinable for EntityFacade<T> {
    fn joins(&self) -> &[Join] {
        &self.joins
    }
}

impl<T: TableDefinition> AttributeProvider for EntityFacade<T> {
    fn sql_attributes(&self, excluded: &[&str]) -> Result<SqlAttributes, QueryError> {
        let mut all_excluded: Vec<&str> = T::excluded_default_columns().to_vec();
        all_excluded.extend_from_slice(excluded);
        SqlAttributes::resolve(self.table.alias(), &DEFAULT_COLUMNS, T::columns(), &all_excluded)
    }
}
