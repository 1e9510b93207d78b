//! Filter tree
//!
//! A [`Block`] is an ordered list of conditions, nested blocks and raw SQL
//! text joined by AND/OR. Each part after the first carries the combinator
//! that links it to the previous part, so the part/combinator counts can
//! never drift apart.

use crate::errors::QueryError;
use crate::query_builder::condition::Condition;
use crate::query_builder::sql_generation::SqlWriter;

/// Logical operators for combining conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

impl LogicalOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }
}

/// One element of a block
#[derive(Debug, Clone, PartialEq)]
pub enum BlockPart {
    Condition(Condition),
    Block(Block),
    /// Raw SQL without values, e.g. a join expression `ig.id = recing.ingredient_id`.
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    combinator: Option<LogicalOperator>,
    part: BlockPart,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    entries: Vec<Entry>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a block from `(combinator, part)` pairs.
    ///
    /// The first pair must not carry a combinator, every following pair must.
    pub fn from_parts(
        parts: impl IntoIterator<Item = (Option<LogicalOperator>, BlockPart)>,
    ) -> Result<Self, QueryError> {
        let mut block = Self::new();
        for (combinator, part) in parts {
            block.push(combinator, part)?;
        }
        Ok(block)
    }

    /// Append a part, checking that the combinator fits the current position.
    pub fn push(
        &mut self,
        combinator: Option<LogicalOperator>,
        part: BlockPart,
    ) -> Result<&mut Self, QueryError> {
        match (self.entries.is_empty(), combinator) {
            (true, Some(operator)) => {
                return Err(QueryError::MalformedFilter(format!(
                    "block cannot start with {}",
                    operator.to_sql()
                )));
            }
            (false, None) => {
                return Err(QueryError::MalformedFilter(
                    "missing combinator between block parts".to_string(),
                ));
            }
            _ => {}
        }

        if let BlockPart::Block(block) = &part {
            if block.is_empty() {
                return Ok(self);
            }
        }

        self.entries.push(Entry { combinator, part });
        Ok(self)
    }

    /// Combinator for the next part: none for the first, `requested` or AND after that.
    fn next_combinator(&self, requested: Option<LogicalOperator>) -> Option<LogicalOperator> {
        if self.entries.is_empty() {
            None
        } else {
            Some(requested.unwrap_or_default())
        }
    }

    /// Append a condition, joined with AND unless it is the first part.
    pub fn add_condition(&mut self, condition: Condition) -> &mut Self {
        self.add_condition_with(None, condition)
    }

    /// Append a condition with an explicit combinator. The combinator is
    /// ignored for the first part of the block.
    pub fn add_condition_with(
        &mut self,
        combinator: Option<LogicalOperator>,
        condition: Condition,
    ) -> &mut Self {
        let combinator = self.next_combinator(combinator);
        self.entries.push(Entry {
            combinator,
            part: BlockPart::Condition(condition),
        });
        self
    }

    /// Nest `block` as a parenthesized group. Empty blocks are skipped.
    pub fn add_subblock(&mut self, block: Block, combinator: Option<LogicalOperator>) -> &mut Self {
        if block.is_empty() {
            return self;
        }
        let combinator = self.next_combinator(combinator);
        self.entries.push(Entry {
            combinator,
            part: BlockPart::Block(block),
        });
        self
    }

    /// Append raw SQL text joined with AND unless it is the first part.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        let combinator = self.next_combinator(None);
        self.entries.push(Entry {
            combinator,
            part: BlockPart::Text(text.into()),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn parts(&self) -> impl Iterator<Item = &BlockPart> {
        self.entries.iter().map(|entry| &entry.part)
    }

    /// Combinators between consecutive parts, `len() - 1` of them.
    pub fn combinators(&self) -> impl Iterator<Item = LogicalOperator> + '_ {
        self.entries.iter().filter_map(|entry| entry.combinator)
    }

    /// Render the parts without the surrounding parentheses.
    ///
    /// With `unqualified` set, conditions on that alias are written without
    /// the `alias.` qualifier and the qualifier is stripped from text parts.
    pub(crate) fn write_sql(&self, writer: &mut SqlWriter, unqualified: Option<&str>) {
        for entry in &self.entries {
            if let Some(combinator) = entry.combinator {
                writer.push_str(" ");
                writer.push_str(combinator.to_sql());
                writer.push_str(" ");
            }

            match &entry.part {
                BlockPart::Condition(condition) => condition.write_sql(writer, unqualified),
                BlockPart::Block(block) => block.write_grouped(writer, unqualified),
                BlockPart::Text(text) => match unqualified {
                    Some(alias) => writer.push_str(&strip_qualifier(text, alias)),
                    None => writer.push_str(text),
                },
            }
        }
    }

    /// Render the parts wrapped once in parentheses. Empty blocks write nothing.
    pub(crate) fn write_grouped(&self, writer: &mut SqlWriter, unqualified: Option<&str>) {
        if self.is_empty() {
            return;
        }
        writer.push_str("(");
        self.write_sql(writer, unqualified);
        writer.push_str(")");
    }
}

/// Remove every `alias.` qualifier that starts at an identifier boundary.
pub(crate) fn strip_qualifier(text: &str, alias: &str) -> String {
    let needle = format!("{}.", alias);
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(position) = rest.find(&needle) {
        let at_boundary = rest[..position]
            .chars()
            .next_back()
            .or_else(|| result.chars().next_back())
            .map_or(true, |c| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'));

        result.push_str(&rest[..position]);
        if !at_boundary {
            result.push_str(&needle);
        }
        rest = &rest[position + needle.len()..];
    }

    result.push_str(rest);
    result
}
