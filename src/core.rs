//! Core sqlfacade functionality
//!
//! This module contains the main SqlFacade struct, which turns the loaded
//! configuration into query settings and hands out facades that use them.

use config::AppConfig;
use facade_core::facade::{EntityFacade, QuerySettings};
use facade_core::traits::TableDefinition;

use crate::errors::SqlFacadeError;

/// Entry point that creates facades sharing one configuration
#[derive(Debug, Clone)]
pub struct SqlFacade {
    config: AppConfig,
    settings: QuerySettings,
}

impl SqlFacade {
    /// Create SqlFacade from an already loaded configuration
    pub fn new(config: AppConfig) -> Result<Self, SqlFacadeError> {
        config.validate()?;
        let settings = QuerySettings::from(&config);

        tracing::debug!(
            placeholder_style = ?settings.placeholder_style,
            one_to_many_join_warning = settings.one_to_many_join_warning,
            "sqlfacade configured"
        );

        Ok(Self { config, settings })
    }

    /// Load configuration from the environment, `./sqlfacade.toml` or defaults
    pub fn load() -> Result<Self, SqlFacadeError> {
        Self::new(AppConfig::load()?)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn settings(&self) -> &QuerySettings {
        &self.settings
    }

    /// Create a facade for `T` with the table's default alias
    pub fn entity_facade<T: TableDefinition>(&self) -> Result<EntityFacade<T>, SqlFacadeError> {
        Ok(EntityFacade::new(self.settings)?)
    }

    /// Create a facade for `T` referenced by `alias`
    pub fn entity_facade_with_alias<T: TableDefinition>(
        &self,
        alias: &str,
    ) -> Result<EntityFacade<T>, SqlFacadeError> {
        Ok(EntityFacade::with_alias(alias, self.settings)?)
    }
}

impl Default for SqlFacade {
    fn default() -> Self {
        let config = AppConfig::default();
        Self {
            settings: QuerySettings::from(&config),
            config,
        }
    }
}
