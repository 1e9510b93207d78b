//! Unbaked SQL
//!
//! Renderers write into a [`SqlWriter`]: plain text and bind values are kept as
//! separate fragments, in textual order, until the query is baked.

use crate::value::SqlValue;

#[derive(Debug, Clone, PartialEq)]
pub enum SqlFragment {
    Text(String),
    Param(SqlValue),
}

/// Collects fragments while statements, joins and blocks render themselves.
#[derive(Debug, Default)]
pub struct SqlWriter {
    fragments: Vec<SqlFragment>,
}

impl SqlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal SQL. Adjacent text fragments are merged.
    pub fn push_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.fragments.last_mut() {
            Some(SqlFragment::Text(last)) => last.push_str(text),
            _ => self.fragments.push(SqlFragment::Text(text.to_string())),
        }
    }

    /// Append a value that will become a positional placeholder.
    pub fn push_param(&mut self, value: SqlValue) {
        self.fragments.push(SqlFragment::Param(value));
    }

    /// Append `items` separated by `separator`, each rendered by `write`.
    pub fn push_separated<T>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        separator: &str,
        mut write: impl FnMut(&mut Self, T),
    ) {
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                self.push_str(separator);
            }
            write(self, item);
        }
    }

    pub fn finish(self) -> UnbakedQuery {
        UnbakedQuery {
            fragments: self.fragments,
        }
    }
}

/// An assembled statement whose values have not been replaced by placeholders yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnbakedQuery {
    pub(crate) fragments: Vec<SqlFragment>,
}

impl UnbakedQuery {
    pub fn fragments(&self) -> &[SqlFragment] {
        &self.fragments
    }

    /// Number of values that will be bound
    pub fn param_count(&self) -> usize {
        self.fragments
            .iter()
            .filter(|fragment| matches!(fragment, SqlFragment::Param(_)))
            .count()
    }
}
