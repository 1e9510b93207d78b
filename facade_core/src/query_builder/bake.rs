//! Baking
//!
//! Turns an [`UnbakedQuery`] into SQL text plus the ordered bind values. The
//! fragments are walked exactly once, left to right, so the Nth placeholder in
//! the text always belongs to the Nth value.

use crate::query_builder::sql_generation::{SqlFragment, UnbakedQuery};
use crate::value::SqlValue;
use config::PlaceholderStyle;
use serde::Serialize;

/// A finished statement, ready to be handed to a driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    pub query: String,
    pub params: Vec<SqlValue>,
}

impl Query {
    /// Number of values bound to this statement
    pub fn placeholder_count(&self) -> usize {
        self.params.len()
    }

    /// Bind every value, in order, onto a sqlx MySQL query.
    #[cfg(feature = "mysql")]
    pub fn bind_mysql(&self) -> sqlx::query::Query<'_, sqlx::MySql, sqlx::mysql::MySqlArguments> {
        self.params
            .iter()
            .fold(sqlx::query(&self.query), |query, param| match param {
                SqlValue::Null => query.bind(None::<String>),
                SqlValue::Bool(v) => query.bind(*v),
                SqlValue::Integer(v) => query.bind(*v),
                SqlValue::Float(v) => query.bind(*v),
                SqlValue::String(v) => query.bind(v.as_str()),
                SqlValue::DateTime(v) => query.bind(*v),
            })
    }
}

impl UnbakedQuery {
    pub fn bake(&self, style: PlaceholderStyle) -> Query {
        let mut query = String::new();
        let mut params = Vec::with_capacity(self.param_count());

        for fragment in &self.fragments {
            match fragment {
                SqlFragment::Text(text) => query.push_str(text),
                SqlFragment::Param(value) => {
                    params.push(value.clone());
                    match style {
                        PlaceholderStyle::Question => query.push('?'),
                        PlaceholderStyle::Dollar => {
                            query.push_str(&format!("${}", params.len()));
                        }
                    }
                }
            }
        }

        crate::trace_log!("baked query: {} ({} params)", query, params.len());

        Query { query, params }
    }
}
