//! Conditions
//!
//! A single comparison between a qualified column and zero, one or many
//! values. Conditions are the leaves of the filter tree.

use crate::errors::QueryError;
use crate::query_builder::sql_generation::SqlWriter;
use crate::validation::{ValidatedFieldName, ValidatedTableName};
use crate::value::SqlValue;
use chrono::{DateTime, Utc};

/// How many values an operator takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    Single,
    List,
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Like,
    NotLike,
    In,
    NotIn,
    IsNull,
    IsNotNull,
}

impl ComparisonOperator {
    /// Symbol and arity of every operator, kept in one table.
    fn entry(&self) -> (&'static str, Arity) {
        match self {
            ComparisonOperator::Equal => ("=", Arity::Single),
            ComparisonOperator::NotEqual => ("!=", Arity::Single),
            ComparisonOperator::GreaterThan => (">", Arity::Single),
            ComparisonOperator::GreaterThanOrEqual => (">=", Arity::Single),
            ComparisonOperator::LessThan => ("<", Arity::Single),
            ComparisonOperator::LessThanOrEqual => ("<=", Arity::Single),
            ComparisonOperator::Like => ("LIKE", Arity::Single),
            ComparisonOperator::NotLike => ("NOT LIKE", Arity::Single),
            ComparisonOperator::In => ("IN", Arity::List),
            ComparisonOperator::NotIn => ("NOT IN", Arity::List),
            ComparisonOperator::IsNull => ("IS NULL", Arity::None),
            ComparisonOperator::IsNotNull => ("IS NOT NULL", Arity::None),
        }
    }

    pub fn to_sql(&self) -> &'static str {
        self.entry().0
    }

    pub fn arity(&self) -> Arity {
        self.entry().1
    }
}

/// The value side of a condition
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionValue {
    None,
    Single(SqlValue),
    List(Vec<SqlValue>),
}

impl ConditionValue {
    fn arity(&self) -> Arity {
        match self {
            ConditionValue::None => Arity::None,
            ConditionValue::Single(_) => Arity::Single,
            ConditionValue::List(_) => Arity::List,
        }
    }
}

impl From<SqlValue> for ConditionValue {
    fn from(value: SqlValue) -> Self {
        ConditionValue::Single(value)
    }
}

impl<T: Into<SqlValue>> From<Vec<T>> for ConditionValue {
    fn from(values: Vec<T>) -> Self {
        ConditionValue::List(values.into_iter().map(Into::into).collect())
    }
}

macro_rules! single_condition_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConditionValue {
                fn from(value: $ty) -> Self {
                    ConditionValue::Single(value.into())
                }
            }
        )*
    };
}

single_condition_value!(i32, u32, i64, f64, bool, &str, String, &String, DateTime<Utc>);

/// Single comparison in a filter tree
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    prefix: Option<ValidatedTableName>,
    column: ValidatedFieldName,
    operator: ComparisonOperator,
    value: ConditionValue,
}

impl Condition {
    /// Create a condition, checking the column name and the operator/value arity.
    ///
    /// `prefix` is the table alias (or table name) the column is qualified
    /// with and is validated like one; an empty prefix renders the bare column.
    pub fn new(
        prefix: &str,
        column: &str,
        operator: ComparisonOperator,
        value: impl Into<ConditionValue>,
    ) -> Result<Self, QueryError> {
        let column = ValidatedFieldName::new(column)?;
        let prefix = match prefix {
            "" => None,
            prefix => Some(ValidatedTableName::new(prefix)?),
        };
        let value = value.into();

        if operator.arity() != value.arity() {
            return Err(QueryError::invalid_condition(
                column.as_str(),
                format!(
                    "operator {} expects {:?} value(s), got {:?}",
                    operator.to_sql(),
                    operator.arity(),
                    value.arity()
                ),
            ));
        }

        if let ConditionValue::List(values) = &value {
            if values.is_empty() {
                return Err(QueryError::invalid_condition(
                    column.as_str(),
                    format!("operator {} needs at least one value", operator.to_sql()),
                ));
            }
        }

        Ok(Self {
            prefix,
            column,
            operator,
            value,
        })
    }

    pub fn prefix(&self) -> &str {
        self.prefix.as_ref().map_or("", ValidatedTableName::as_str)
    }

    pub fn column(&self) -> &str {
        self.column.as_str()
    }

    pub fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    pub fn value(&self) -> &ConditionValue {
        &self.value
    }

    /// Render `( prefix.column OP ? )`. A prefix equal to `unqualified` is dropped.
    pub(crate) fn write_sql(&self, writer: &mut SqlWriter, unqualified: Option<&str>) {
        writer.push_str("( ");
        if let Some(prefix) = &self.prefix {
            if unqualified != Some(prefix.as_str()) {
                writer.push_str(prefix.as_str());
                writer.push_str(".");
            }
        }
        writer.push_str(self.column.as_str());
        writer.push_str(" ");
        writer.push_str(self.operator.to_sql());

        match &self.value {
            ConditionValue::None => {}
            ConditionValue::Single(value) => {
                writer.push_str(" ");
                writer.push_param(value.clone());
            }
            ConditionValue::List(values) => {
                writer.push_str(" (");
                writer.push_separated(values, ", ", |w, value| w.push_param(value.clone()));
                writer.push_str(")");
            }
        }

        writer.push_str(" )");
    }
}
