use crate::errors::QueryError;
use crate::facade::{build_select, QuerySettings};
use crate::query_builder::{analyze, Filter, JoinAnalysis, LogicalOperator, Ordering, Query, TableRef};
use crate::traits::{AttributeProvider, Filterable, Joinable, Orderable};
use crate::value::SqlValue;

/// How a composite merges the filters of its sub-facades with its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCombination {
    pub operator: LogicalOperator,
    /// When false only the composite's own filter is used
    pub auto_combine: bool,
}

impl Default for FilterCombination {
    fn default() -> Self {
        Self {
            operator: LogicalOperator::And,
            auto_combine: true,
        }
    }
}

/// A select over several tables joined to one driving table.
///
/// Implementors hold the sub-facades whose filters and orderings take part,
/// and provide the joins and the combined column list. Writes stay with the
/// entity facades.
pub trait CompositeFacade: Filterable + Orderable + Joinable + AttributeProvider {
    /// The driving table of the select
    fn table(&self) -> &TableRef;

    fn settings(&self) -> &QuerySettings;

    fn combination(&self) -> &FilterCombination;

    fn combination_mut(&mut self) -> &mut FilterCombination;

    /// Filters of the sub-facades, in the order they are combined
    fn sub_filters(&self) -> Vec<&Filter>;

    fn sub_filters_mut(&mut self) -> Vec<&mut Filter>;

    /// Orderings of the sub-facades, applied after the composite's own
    fn sub_orderings(&self) -> Vec<&Ordering>;

    /// The filter a select uses.
    ///
    /// Non-empty sub-facade filters come first, in supply order, then the
    /// composite's own filter. A single non-empty filter is used as it is;
    /// several are nested and joined with the combination operator.
    fn combined_filter(&self) -> Result<Filter, QueryError> {
        let combination = self.combination();
        let mut filters: Vec<&Filter> = if combination.auto_combine {
            self.sub_filters()
                .into_iter()
                .filter(|filter| !filter.is_empty())
                .collect()
        } else {
            Vec::new()
        };
        if !self.filter().is_empty() {
            filters.push(self.filter());
        }

        match filters.as_slice() {
            [] => Filter::new(self.table().alias()),
            [single] => Ok((*single).clone()),
            many => {
                let mut combined = Filter::new(self.table().alias())?;
                for (index, filter) in many.iter().enumerate() {
                    if index > 0 {
                        combined.add_operator(combination.operator)?;
                    }
                    combined.add_sub_filter(filter)?;
                }
                Ok(combined)
            }
        }
    }

    /// Select every row matching the combined filter
    fn get(&self, excluded: &[&str]) -> Result<Query, QueryError> {
        let attributes = self.sql_attributes(excluded)?;
        let filter = self.combined_filter()?;

        let mut orderings = vec![self.ordering()];
        orderings.extend(self.sub_orderings());

        build_select(
            self.table(),
            &attributes,
            self.joins(),
            filter.block(),
            &orderings,
            self.settings(),
        )
    }

    /// Select one driving row by id. No facade filter takes part; orderings do.
    fn get_by_id(&self, id: impl Into<SqlValue>, excluded: &[&str]) -> Result<Query, QueryError> {
        let attributes = self.sql_attributes(excluded)?;
        let mut id_filter = Filter::new(self.table().alias())?;
        id_filter.equal("id", id)?;

        let mut orderings = vec![self.ordering()];
        orderings.extend(self.sub_orderings());

        build_select(
            self.table(),
            &attributes,
            self.joins(),
            id_filter.block(),
            &orderings,
            self.settings(),
        )
    }

    /// Clear the composite's own filter and every sub-facade filter
    fn clear_facade_filters(&mut self) {
        self.clear_filter();
        for filter in self.sub_filters_mut() {
            filter.clear();
        }
    }

    fn join_analysis(&self) -> JoinAnalysis {
        analyze(self.joins())
    }
}
