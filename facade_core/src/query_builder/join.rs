use crate::errors::QueryError;
use crate::query_builder::block::Block;
use crate::query_builder::sql_generation::SqlWriter;
use crate::validation::ValidatedTableName;

/// Represents the type of SQL JOIN operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// JOIN - returns records that have matching values in both tables
    Inner,
    /// LEFT JOIN - returns all records from the left table and matched records from the right table
    Left,
}

impl JoinType {
    /// Convert JoinType to SQL string
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "JOIN",
            JoinType::Left => "LEFT JOIN",
        }
    }
}

/// How many joined rows one driving row can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinCardinality {
    OneToOne,
    OneToMany,
}

/// A join a facade contributes when its table drives a select.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    table: ValidatedTableName,
    alias: ValidatedTableName,
    on: Block,
    join_type: JoinType,
    cardinality: JoinCardinality,
}

impl Join {
    pub fn new(
        table: &str,
        alias: &str,
        on: Block,
        join_type: JoinType,
        cardinality: JoinCardinality,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            table: ValidatedTableName::new(table)?,
            alias: ValidatedTableName::new(alias)?,
            on,
            join_type,
            cardinality,
        })
    }

    /// Join on a raw SQL expression such as `ig.id = recing.ingredient_id`
    pub fn on_text(
        table: &str,
        alias: &str,
        on: &str,
        join_type: JoinType,
        cardinality: JoinCardinality,
    ) -> Result<Self, QueryError> {
        let mut block = Block::new();
        block.add_text(on);
        Self::new(table, alias, block, join_type, cardinality)
    }

    pub fn table(&self) -> &str {
        self.table.as_str()
    }

    pub fn alias(&self) -> &str {
        self.alias.as_str()
    }

    pub fn on(&self) -> &Block {
        &self.on
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }

    pub fn cardinality(&self) -> JoinCardinality {
        self.cardinality
    }

    /// Write `{JOIN|LEFT JOIN} table alias ON ( on )`
    pub(crate) fn write_sql(&self, writer: &mut SqlWriter) {
        writer.push_str(self.join_type.to_sql());
        writer.push_str(" ");
        writer.push_str(self.table.as_str());
        writer.push_str(" ");
        writer.push_str(self.alias.as_str());
        writer.push_str(" ON ( ");
        self.on.write_sql(writer, None);
        writer.push_str(" )");
    }
}

/// Join counts of a statement, per type and per cardinality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoinAnalysis {
    pub inner_count: usize,
    pub left_count: usize,
    pub one_to_one_count: usize,
    pub one_to_many_count: usize,
}

impl JoinAnalysis {
    pub fn total(&self) -> usize {
        self.inner_count + self.left_count
    }

    /// Log the join summary, and a warning once the one-to-many joins reach
    /// `one_to_many_warning`. Statements without joins log nothing.
    pub fn report(&self, one_to_many_warning: usize) {
        if self.total() == 0 {
            return;
        }

        tracing::info!(
            target: "sqlfacade::joins",
            "Statement contains {} joins ({} left-joins, {} inner-joins, {} one-to-many, {} one-to-one)",
            self.total(),
            self.left_count,
            self.inner_count,
            self.one_to_many_count,
            self.one_to_one_count
        );

        if self.one_to_many_count >= one_to_many_warning {
            tracing::warn!(
                target: "sqlfacade::joins",
                "Safe amount of one-to-many joins ({}) exceeded",
                self.one_to_many_count
            );
        }
    }
}

/// Count the joins of a statement. Never changes the joins.
pub fn analyze(joins: &[Join]) -> JoinAnalysis {
    joins
        .iter()
        .fold(JoinAnalysis::default(), |mut analysis, join| {
            match join.join_type {
                JoinType::Inner => analysis.inner_count += 1,
                JoinType::Left => analysis.left_count += 1,
            }
            match join.cardinality {
                JoinCardinality::OneToOne => analysis.one_to_one_count += 1,
                JoinCardinality::OneToMany => analysis.one_to_many_count += 1,
            }
            analysis
        })
}
