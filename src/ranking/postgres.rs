//! Ranking for Postgres, hand tweaked for "best" results.
//!
//! Broadly the idea is that a higher weight is given to exact matches, then
//! to users with a profile, a matching display name and an avatar.

use super::fragment::{desc, order_by, product, Fragment, Param};
use super::tie_breakers;

/// Weights for the tsvector classes, in order (domain, unused, display name, localpart)
pub const RANK_WEIGHTS: &str = "'{0.1, 0.1, 0.9, 1.0}'";

/// `ts_rank_cd` normalization bitmask: divide the rank by the number of unique words in the document
pub const RANK_NORMALIZATION: u32 = 8;

pub const TSQUERY_CONFIG: &str = "simple";

/// 4.0 for users that have a row in the user directory
pub fn profile_factor() -> Fragment {
    Fragment::sql("(CASE WHEN d.user_id IS NOT NULL THEN 4.0 ELSE 1.0 END)")
}

/// 2.0 for display names containing `pattern` (case-sensitive `LIKE`)
pub fn display_name_boost_factor(pattern: &str) -> Fragment {
    Fragment::sql("(CASE WHEN display_name LIKE ")
        .bind(Param::Text(format!("%{}%", pattern)))
        .push_sql(" THEN 2.0 ELSE 1.0 END)")
}

/// 1.2 for users with an avatar
pub fn avatar_factor() -> Fragment {
    Fragment::sql("(CASE WHEN avatar_url IS NOT NULL THEN 1.2 ELSE 1.0 END)")
}

fn ts_rank() -> Fragment {
    Fragment::sql(format!(
        "ts_rank_cd({}, vector, to_tsquery('{}', ",
        RANK_WEIGHTS, TSQUERY_CONFIG
    ))
    .bind(Param::SearchQuery)
    .push_sql(format!("), {})", RANK_NORMALIZATION))
}

/// Full-text relevance: the same query ranked twice, the first occurrence weighted 3x.
/// Each occurrence binds its own copy of the query.
pub fn rank_terms() -> Fragment {
    Fragment::sql("(3 * ")
        .append(ts_rank())
        .push_sql(" + ")
        .append(ts_rank())
        .push_sql(")")
}

pub fn ordering(weighted_display_name_like: Option<&str>) -> Fragment {
    let mut factors = vec![profile_factor()];
    if let Some(pattern) = weighted_display_name_like {
        factors.push(display_name_boost_factor(pattern));
    }
    factors.push(avatar_factor());
    factors.push(rank_terms());

    let mut keys = vec![desc(product(factors))];
    keys.extend(tie_breakers());
    order_by(keys)
}
