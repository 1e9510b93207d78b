//! Filters
//!
//! A [`Filter`] is the mutable, per-alias front end of a [`Block`]. Facades
//! keep one around between calls; its contents persist until [`Filter::clear`].

use crate::errors::QueryError;
use crate::query_builder::block::{Block, LogicalOperator};
use crate::query_builder::condition::{ComparisonOperator, Condition, ConditionValue};
use crate::validation::ValidatedTableName;
use crate::value::SqlValue;

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    alias: ValidatedTableName,
    block: Block,
    /// Combinator requested through `add_operator` for the next append.
    pending: Option<LogicalOperator>,
}

impl Filter {
    /// Create an empty filter for `alias`, which must be a valid table alias
    pub fn new(alias: &str) -> Result<Self, QueryError> {
        Ok(Self {
            alias: ValidatedTableName::new(alias)?,
            block: Block::new(),
            pending: None,
        })
    }

    /// Table alias every condition of this filter is qualified with
    pub fn alias(&self) -> &str {
        self.alias.as_str()
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn is_empty(&self) -> bool {
        self.block.is_empty()
    }

    /// Remove all conditions, sub-filters and a pending operator
    pub fn clear(&mut self) {
        self.block.clear();
        self.pending = None;
    }

    /// Add a condition on `alias.column`.
    ///
    /// It is joined to the previous part with the operator set through
    /// [`Filter::add_operator`], or AND when none was set.
    pub fn add_filter_condition(
        &mut self,
        column: &str,
        operator: ComparisonOperator,
        value: impl Into<ConditionValue>,
    ) -> Result<&mut Self, QueryError> {
        let condition = Condition::new(self.alias.as_str(), column, operator, value)?;
        let combinator = self.pending.take();
        self.block.add_condition_with(combinator, condition);

        crate::debug_log!(
            "filter {}: added {} {} ({} parts)",
            self.alias,
            column,
            operator.to_sql(),
            self.block.len()
        );
        Ok(self)
    }

    /// Set the combinator used for the next condition or sub-filter.
    ///
    /// It only applies to what is appended afterwards. Setting it on an empty
    /// filter, or twice in a row, is a construction error.
    pub fn add_operator(&mut self, operator: LogicalOperator) -> Result<&mut Self, QueryError> {
        if self.block.is_empty() {
            return Err(QueryError::MalformedFilter(format!(
                "filter {} cannot start with {}",
                self.alias,
                operator.to_sql()
            )));
        }
        if let Some(pending) = self.pending {
            return Err(QueryError::MalformedFilter(format!(
                "filter {} already waits for a part after {}",
                self.alias,
                pending.to_sql()
            )));
        }
        self.pending = Some(operator);
        Ok(self)
    }

    /// Nest a copy of `other`'s tree as a parenthesized group.
    ///
    /// `other` is left untouched and can still be used on its own. An empty
    /// `other` adds nothing and keeps a pending operator for the next append.
    pub fn add_sub_filter(&mut self, other: &Filter) -> Result<&mut Self, QueryError> {
        if other.is_empty() {
            return Ok(self);
        }
        let combinator = self.pending.take();
        self.block.add_subblock(other.block.clone(), combinator);
        Ok(self)
    }

    pub fn equal(&mut self, column: &str, value: impl Into<SqlValue>) -> Result<&mut Self, QueryError> {
        self.add_filter_condition(column, ComparisonOperator::Equal, value.into())
    }

    pub fn not_equal(&mut self, column: &str, value: impl Into<SqlValue>) -> Result<&mut Self, QueryError> {
        self.add_filter_condition(column, ComparisonOperator::NotEqual, value.into())
    }

    pub fn gt(&mut self, column: &str, value: impl Into<SqlValue>) -> Result<&mut Self, QueryError> {
        self.add_filter_condition(column, ComparisonOperator::GreaterThan, value.into())
    }

    pub fn gte(&mut self, column: &str, value: impl Into<SqlValue>) -> Result<&mut Self, QueryError> {
        self.add_filter_condition(column, ComparisonOperator::GreaterThanOrEqual, value.into())
    }

    pub fn lt(&mut self, column: &str, value: impl Into<SqlValue>) -> Result<&mut Self, QueryError> {
        self.add_filter_condition(column, ComparisonOperator::LessThan, value.into())
    }

    pub fn lte(&mut self, column: &str, value: impl Into<SqlValue>) -> Result<&mut Self, QueryError> {
        self.add_filter_condition(column, ComparisonOperator::LessThanOrEqual, value.into())
    }

    pub fn like(&mut self, column: &str, pattern: &str) -> Result<&mut Self, QueryError> {
        self.add_filter_condition(column, ComparisonOperator::Like, pattern)
    }

    pub fn in_values<T: Into<SqlValue>>(
        &mut self,
        column: &str,
        values: Vec<T>,
    ) -> Result<&mut Self, QueryError> {
        self.add_filter_condition(column, ComparisonOperator::In, values)
    }

    pub fn not_in_values<T: Into<SqlValue>>(
        &mut self,
        column: &str,
        values: Vec<T>,
    ) -> Result<&mut Self, QueryError> {
        self.add_filter_condition(column, ComparisonOperator::NotIn, values)
    }

    pub fn is_null(&mut self, column: &str) -> Result<&mut Self, QueryError> {
        self.add_filter_condition(column, ComparisonOperator::IsNull, ConditionValue::None)
    }

    pub fn is_not_null(&mut self, column: &str) -> Result<&mut Self, QueryError> {
        self.add_filter_condition(column, ComparisonOperator::IsNotNull, ConditionValue::None)
    }
}
