use crate::config::ModuleConfig;
use crate::engine::EngineKind;
use crate::ranking::{self, BoostStatus, RankingExpression};

/// Customises the ORDER BY of the homeserver's user directory search.
///
/// On SQLite the ordering is the homeserver's default one and
/// `weighted_display_name_like` has no effect. The returned
/// [`RankingExpression::display_name_boost`] reports when that happens.
#[derive(Debug, Clone)]
pub struct UserDirectorySearchModule {
    config: ModuleConfig,
}

impl UserDirectorySearchModule {
    pub fn new(config: ModuleConfig) -> Self {
        Self { config }
    }

    /// Parses the table provided by the homeserver's config
    pub fn parse_config(raw: &toml::Table) -> ModuleConfig {
        ModuleConfig::parse(raw)
    }

    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    /// Returns the contents of the ORDER BY section of the user directory search
    /// query, and the arguments for its placeholders.
    pub fn get_search_query_ordering(&self, engine: EngineKind) -> RankingExpression {
        let expr = ranking::build(engine, &self.config);
        if expr.display_name_boost == BoostStatus::Unsupported {
            log::debug!(
                "weighted_display_name_like is set but has no effect on {}",
                engine
            );
        }
        expr
    }
}
