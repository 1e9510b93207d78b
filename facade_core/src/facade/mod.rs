//! Facades
//!
//! A facade owns the filter, ordering and joins of one table (or of a
//! composite of tables) and turns them into finished [`Query`] values.

pub mod composite;
pub mod entity;
pub mod settings;

pub use composite::{CompositeFacade, FilterCombination};
pub use entity::EntityFacade;
pub use settings::QuerySettings;

use crate::errors::QueryError;
use crate::query_builder::{
    analyze, Block, Join, Ordering, Query, SelectStatement, SqlAttributes, TableRef,
};

/// Assemble and bake a select, reporting its joins first.
pub(crate) fn build_select(
    table: &TableRef,
    attributes: &SqlAttributes,
    joins: &[Join],
    filter: &Block,
    orderings: &[&Ordering],
    settings: &QuerySettings,
) -> Result<Query, QueryError> {
    let analysis = analyze(joins);
    if settings.log_join_summary {
        analysis.report(settings.one_to_many_join_warning);
    }

    let statement = orderings
        .iter()
        .copied()
        .fold(
            SelectStatement::new(table, attributes).joins(joins).filter(filter),
            |statement, ordering| statement.order_by(ordering),
        );

    Ok(statement.assemble()?.bake(settings.placeholder_style))
}
