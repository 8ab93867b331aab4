use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RankError;

/// The database engine backing the user directory search.
///
/// The set is closed: every ranking path matches on it exhaustively, so a new
/// engine has to be handled explicitly wherever a clause is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Full-text engine with per-weight-class ranking (`ts_rank_cd`)
    Postgres,
    /// FTS engine that only exposes an opaque rank over `matchinfo()`
    Sqlite,
}

impl EngineKind {
    pub const ALL: [EngineKind; 2] = [EngineKind::Postgres, EngineKind::Sqlite];

    /// Whether the engine ranks with configurable per-field weights
    pub fn rank_capable(self) -> bool {
        match self {
            EngineKind::Postgres => true,
            EngineKind::Sqlite => false,
        }
    }

    /// Whether `weighted_display_name_like` has any effect on this engine.
    /// On SQLite the setting is accepted but ignored.
    pub fn supports_display_name_boost(self) -> bool {
        match self {
            EngineKind::Postgres => true,
            EngineKind::Sqlite => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EngineKind::Postgres => "postgres",
            EngineKind::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "psycopg2" => Ok(EngineKind::Postgres),
            "sqlite" | "sqlite3" => Ok(EngineKind::Sqlite),
            _ => Err(RankError::UnsupportedEngine(s.to_string())),
        }
    }
}
