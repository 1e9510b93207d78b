//! Fixture tables shared by the integration tests
//!
//! users, recipes, recipes_ingredients and ingredients, plus a composite
//! facade that selects recipes together with their ingredients.

#![allow(dead_code)]

use sqlfacade::prelude::*;

/// Timestamps every fixture entity carries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timestamps {
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
}

macro_rules! impl_entity {
    ($($entity:ty),*) => {
        $(
            impl Entity for $entity {
                fn set_created_at(&mut self, at: DateTime<Utc>) {
                    self.timestamps.created_at = Some(at);
                }

                fn set_modified_at(&mut self, at: DateTime<Utc>) {
                    self.timestamps.modified_at = Some(at);
                }
            }
        )*
    };
}

fn text(value: &Option<String>) -> Option<SqlValue> {
    value.as_deref().map(SqlValue::from)
}

fn integer(value: &Option<i64>) -> Option<SqlValue> {
    value.map(SqlValue::from)
}

fn datetime(value: &Option<DateTime<Utc>>) -> Option<SqlValue> {
    value.map(SqlValue::from)
}

// ========================================
// users
// ========================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub forename: Option<String>,
    pub lastname: Option<String>,
    pub gender: Option<i64>,
    pub last_login: Option<DateTime<Utc>>,
    pub failed_login_attempts: Option<i64>,
    pub login_cooldown: Option<DateTime<Utc>>,
    pub status: Option<i64>,
    pub resetcode: Option<i64>,
    pub resetcode_validuntil: Option<DateTime<Utc>>,
    pub timestamps: Timestamps,
}

impl TableDefinition for User {
    const TABLE_NAME: &'static str = "users";
    const DEFAULT_ALIAS: &'static str = "u";

    fn columns() -> &'static [&'static str] {
        &[
            "email",
            "password",
            "forename",
            "lastname",
            "gender",
            "last_login",
            "failed_login_attempts",
            "login_cooldown",
            "status",
            "resetcode",
            "resetcode_validuntil",
        ]
    }

    fn value_columns() -> Vec<ValueColumn<Self>> {
        vec![
            ValueColumn::new("email", |u: &User| text(&u.email)),
            ValueColumn::new("password", |u: &User| text(&u.password)),
            ValueColumn::new("forename", |u: &User| text(&u.forename)),
            ValueColumn::new("lastname", |u: &User| text(&u.lastname)),
            ValueColumn::new("gender", |u: &User| integer(&u.gender)),
            ValueColumn::new("last_login", |u: &User| datetime(&u.last_login)),
            ValueColumn::new("failed_login_attempts", |u: &User| {
                integer(&u.failed_login_attempts)
            }),
            ValueColumn::new("login_cooldown", |u: &User| datetime(&u.login_cooldown)),
            ValueColumn::new("status", |u: &User| integer(&u.status)),
            ValueColumn::new("resetcode", |u: &User| integer(&u.resetcode)),
            ValueColumn::new("resetcode_validuntil", |u: &User| {
                datetime(&u.resetcode_validuntil)
            }),
        ]
    }
}

// ========================================
// recipes
// ========================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recipe {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub difficulty_id: Option<i64>,
    pub timestamps: Timestamps,
}

impl TableDefinition for Recipe {
    const TABLE_NAME: &'static str = "recipes";
    const DEFAULT_ALIAS: &'static str = "rec";

    fn columns() -> &'static [&'static str] {
        &["name", "description", "difficulty_id", "mealtime"]
    }

    fn value_columns() -> Vec<ValueColumn<Self>> {
        vec![
            ValueColumn::new("name", |r: &Recipe| text(&r.name)),
            ValueColumn::new("description", |r: &Recipe| text(&r.description)),
            ValueColumn::new("difficulty_id", |r: &Recipe| integer(&r.difficulty_id)),
        ]
    }
}

// ========================================
// recipes_ingredients
// ========================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeIngredient {
    pub recipe_id: Option<i64>,
    pub ingredient_id: Option<i64>,
    pub timestamps: Timestamps,
}

impl TableDefinition for RecipeIngredient {
    const TABLE_NAME: &'static str = "recipes_ingredients";
    const DEFAULT_ALIAS: &'static str = "recing";

    fn columns() -> &'static [&'static str] {
        &["recipe_id", "ingredient_id"]
    }

    fn excluded_default_columns() -> &'static [&'static str] {
        &["id"]
    }

    fn value_columns() -> Vec<ValueColumn<Self>> {
        vec![
            ValueColumn::new("recipe_id", |r: &RecipeIngredient| integer(&r.recipe_id)),
            ValueColumn::new("ingredient_id", |r: &RecipeIngredient| {
                integer(&r.ingredient_id)
            }),
        ]
    }
}

// ========================================
// ingredients
// ========================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ingredient {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub image_id: Option<i64>,
    pub food_category_id: Option<i64>,
    pub timestamps: Timestamps,
}

impl TableDefinition for Ingredient {
    const TABLE_NAME: &'static str = "ingredients";
    const DEFAULT_ALIAS: &'static str = "ig";

    fn columns() -> &'static [&'static str] {
        &["name", "image_id", "food_category_id"]
    }

    fn value_columns() -> Vec<ValueColumn<Self>> {
        vec![
            ValueColumn::new("name", |i: &Ingredient| text(&i.name)),
            ValueColumn::new("image_id", |i: &Ingredient| integer(&i.image_id)),
            ValueColumn::new("food_category_id", |i: &Ingredient| {
                integer(&i.food_category_id)
            }),
        ]
    }
}

impl_entity!(User, Recipe, RecipeIngredient, Ingredient);

// ========================================
// recipes with ingredients
// ========================================

/// Recipes joined with their ingredients through recipes_ingredients
pub struct RecipeCompositeFacade {
    table: TableRef,
    settings: QuerySettings,
    filter: Filter,
    ordering: Ordering,
    combination: FilterCombination,
    recipes: EntityFacade<Recipe>,
    recipes_ingredients: EntityFacade<RecipeIngredient>,
    ingredients: EntityFacade<Ingredient>,
    with_ingredients_join: bool,
    joins: Vec<Join>,
}

impl RecipeCompositeFacade {
    pub fn new(settings: QuerySettings) -> Result<Self, QueryError> {
        Self::with_alias(Recipe::DEFAULT_ALIAS, settings)
    }

    pub fn with_alias(alias: &str, settings: QuerySettings) -> Result<Self, QueryError> {
        let table = TableRef::new(Recipe::TABLE_NAME, alias)?;
        let mut facade = Self {
            filter: Filter::new(alias)?,
            ordering: Ordering::new(alias)?,
            combination: FilterCombination::default(),
            recipes: EntityFacade::with_alias(alias, settings)?,
            recipes_ingredients: EntityFacade::new(settings)?,
            ingredients: EntityFacade::new(settings)?,
            with_ingredients_join: true,
            joins: Vec::new(),
            table,
            settings,
        };
        facade.rebuild_joins()?;
        Ok(facade)
    }

    pub fn ingredient_filter(&mut self) -> &mut Filter {
        self.ingredients.filter_mut()
    }

    pub fn ingredient_ordering(&mut self) -> &mut Ordering {
        self.ingredients.ordering_mut()
    }

    pub fn with_ingredients_join(&self) -> bool {
        self.with_ingredients_join
    }

    pub fn set_with_ingredients_join(&mut self, value: bool) -> Result<(), QueryError> {
        self.with_ingredients_join = value;
        self.rebuild_joins()
    }

    fn rebuild_joins(&mut self) -> Result<(), QueryError> {
        let mut joins = self.recipes.joins().to_vec();

        if self.with_ingredients_join {
            let recing = self.recipes_ingredients.table();
            let ig = self.ingredients.table();

            joins.push(Join::on_text(
                recing.name(),
                recing.alias(),
                &format!("{}.recipe_id = {}.id", recing.alias(), self.table.alias()),
                JoinType::Inner,
                JoinCardinality::OneToMany,
            )?);
            joins.push(Join::on_text(
                ig.name(),
                ig.alias(),
                &format!("{}.id = {}.ingredient_id", ig.alias(), recing.alias()),
                JoinType::Left,
                JoinCardinality::OneToOne,
            )?);
            joins.extend(self.ingredients.joins().iter().cloned());
        }

        self.joins = joins;
        Ok(())
    }
}

impl Filterable for RecipeCompositeFacade {
    fn filter(&self) -> &Filter {
        &self.filter
    }

    fn filter_mut(&mut self) -> &mut Filter {
        &mut self.filter
    }
}

impl Orderable for RecipeCompositeFacade {
    fn ordering(&self) -> &Ordering {
        &self.ordering
    }

    fn ordering_mut(&mut self) -> &mut Ordering {
        &mut self.ordering
    }
}

impl Joinable for RecipeCompositeFacade {
    fn joins(&self) -> &[Join] {
        &self.joins
    }
}

impl AttributeProvider for RecipeCompositeFacade {
    fn sql_attributes(&self, excluded: &[&str]) -> Result<SqlAttributes, QueryError> {
        let mut attributes = self.recipes.sql_attributes(excluded)?;
        if self.with_ingredients_join {
            attributes.extend(self.recipes_ingredients.sql_attributes(excluded)?);
            attributes.extend(self.ingredients.sql_attributes(excluded)?);
        }
        Ok(attributes)
    }
}

impl CompositeFacade for RecipeCompositeFacade {
    fn table(&self) -> &TableRef {
        &self.table
    }

    fn settings(&self) -> &QuerySettings {
        &self.settings
    }

    fn combination(&self) -> &FilterCombination {
        &self.combination
    }

    fn combination_mut(&mut self) -> &mut FilterCombination {
        &mut self.combination
    }

    fn sub_filters(&self) -> Vec<&Filter> {
        vec![self.ingredients.filter()]
    }

    fn sub_filters_mut(&mut self) -> Vec<&mut Filter> {
        vec![self.ingredients.filter_mut()]
    }

    fn sub_orderings(&self) -> Vec<&Ordering> {
        vec![self.ingredients.ordering()]
    }
}
