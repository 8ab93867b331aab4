use thiserror::Error;

/// Errors produced while building a ranking clause
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// The caller named a database engine there is no ranking strategy for.
    /// This is an integration bug on the caller's side, never a degraded result.
    #[error("Received an unrecognized database engine: {0:?}")]
    UnsupportedEngine(String),
}
