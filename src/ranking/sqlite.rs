use super::fragment::{desc, order_by, Fragment};
use super::tie_breakers;

/// FTS table the user directory is indexed in
pub const SEARCH_TABLE: &str = "user_directory_search";

/// `rank()` over the FTS `matchinfo()` of the search table.
/// `rank` is not built into SQLite; see [`crate::db::register_rank_function`].
pub fn match_info_rank() -> Fragment {
    Fragment::sql(format!("rank(matchinfo({}))", SEARCH_TABLE))
}

/// Same ordering the host uses by default: there are no weights to tune here,
/// so the display name boost cannot be expressed.
pub fn ordering() -> Fragment {
    let mut keys = vec![desc(match_info_rank())];
    keys.extend(tie_breakers());
    order_by(keys)
}
