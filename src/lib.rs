//! Weighted ORDER BY clauses for Matrix user directory search.
//!
//! On Postgres the ordering multiplies a profile weight, an optional display
//! name boost (`weighted_display_name_like`) and an avatar weight into a
//! `ts_rank_cd` score. On SQLite only the host's default `rank(matchinfo())`
//! ordering is available and the display name boost is ignored.
//!
//! ```
//! use userdir_rank::{build, EngineKind, ModuleConfig};
//!
//! let config = ModuleConfig {
//!     weighted_display_name_like: Some("[Agency]".to_string()),
//! };
//! let expr = build(EngineKind::Postgres, &config);
//! assert_eq!(expr.extra_args(), vec!["%[Agency]%"]);
//! assert_eq!(expr.bind("alice:*"), vec!["%[Agency]%", "alice:*", "alice:*"]);
//! ```

pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod module;
pub mod ranking;

pub use config::ModuleConfig;
pub use engine::EngineKind;
pub use error::RankError;
pub use module::UserDirectorySearchModule;
pub use ranking::{build, build_named, BoostStatus, Param, RankingBuilder, RankingExpression};
