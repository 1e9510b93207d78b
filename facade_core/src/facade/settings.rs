use config::{AppConfig, PlaceholderStyle};

/// The part of the configuration facades need while building statements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySettings {
    pub placeholder_style: PlaceholderStyle,
    pub one_to_many_join_warning: usize,
    pub log_join_summary: bool,
}

impl From<&AppConfig> for QuerySettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            placeholder_style: config.query.placeholder_style,
            one_to_many_join_warning: config.diagnostics.one_to_many_join_warning,
            log_join_summary: config.diagnostics.log_join_summary,
        }
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}
