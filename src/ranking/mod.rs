pub mod fragment;
pub mod postgres;
pub mod sqlite;

use serde::Serialize;

use crate::config::ModuleConfig;
use crate::engine::EngineKind;
use crate::error::RankError;

pub use fragment::{Fragment, Param, PlaceholderStyle};

/// What happened to the configured display name boost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoostStatus {
    /// No pattern configured
    Disabled,
    /// Pattern configured and part of the clause
    Applied,
    /// Pattern configured, but the engine has no way to weight it
    Unsupported,
}

/// The body of an ORDER BY clause plus the values for its placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingExpression {
    pub sql: String,
    /// In the order their placeholders appear in `sql`
    pub params: Vec<Param>,
    pub display_name_boost: BoostStatus,
}

impl RankingExpression {
    /// Values the ranking supplies itself, leaving the search query slots to the host
    pub fn extra_args(&self) -> Vec<&str> {
        self.params
            .iter()
            .filter_map(|param| match param {
                Param::Text(value) => Some(value.as_str()),
                Param::SearchQuery => None,
            })
            .collect()
    }

    /// Every positional value, with `search_query` filling each query slot
    pub fn bind(&self, search_query: &str) -> Vec<String> {
        self.params
            .iter()
            .map(|param| match param {
                Param::Text(value) => value.clone(),
                Param::SearchQuery => search_query.to_string(),
            })
            .collect()
    }
}

/// Tie-breaks applied after the score: rows with a display name, then rows
/// with an avatar (`false` sorts before `true`).
pub fn tie_breakers() -> [Fragment; 2] {
    [
        Fragment::sql("display_name IS NULL"),
        Fragment::sql("avatar_url IS NULL"),
    ]
}

/// Builds ranking clauses for one configuration
#[derive(Debug, Clone, Copy)]
pub struct RankingBuilder<'a> {
    config: &'a ModuleConfig,
    style: PlaceholderStyle,
}

impl<'a> RankingBuilder<'a> {
    pub fn new(config: &'a ModuleConfig) -> Self {
        Self {
            config,
            style: PlaceholderStyle::default(),
        }
    }

    pub fn placeholders(mut self, style: PlaceholderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn build(&self, engine: EngineKind) -> RankingExpression {
        let pattern = self.config.weighted_display_name_like.as_deref();

        let (fragment, display_name_boost) = match engine {
            EngineKind::Postgres => {
                let status = if pattern.is_some() {
                    BoostStatus::Applied
                } else {
                    BoostStatus::Disabled
                };
                (postgres::ordering(pattern), status)
            }
            EngineKind::Sqlite => {
                let status = if pattern.is_some() {
                    BoostStatus::Unsupported
                } else {
                    BoostStatus::Disabled
                };
                (sqlite::ordering(), status)
            }
        };

        let (sql, params) = fragment.render(self.style);
        RankingExpression {
            sql,
            params,
            display_name_boost,
        }
    }

    /// Like [`RankingBuilder::build`], for an engine known only by name
    pub fn build_named(&self, engine: &str) -> Result<RankingExpression, RankError> {
        Ok(self.build(engine.parse()?))
    }
}

/// Builds the ORDER BY body for `engine` with `?` placeholders
pub fn build(engine: EngineKind, config: &ModuleConfig) -> RankingExpression {
    RankingBuilder::new(config).build(engine)
}

pub fn build_named(engine: &str, config: &ModuleConfig) -> Result<RankingExpression, RankError> {
    RankingBuilder::new(config).build_named(engine)
}
