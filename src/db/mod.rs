pub mod rank;

use rusqlite::functions::FunctionFlags;
use rusqlite::types::Value;
use rusqlite::Connection;

use crate::ranking::RankingExpression;

/// Registers the `rank(matchinfo)` function the SQLite ordering calls
pub fn register_rank_function(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "rank",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let blob: Vec<u8> = ctx.get(0)?;
            Ok(rank::rank_match_info(&rank::parse_match_info(&blob)))
        },
    )?;
    log::debug!("Registered rank() on SQLite connection");
    Ok(())
}

/// Values for the clause's placeholders, ready for `rusqlite::params_from_iter`
pub fn bind_values(expr: &RankingExpression, search_query: &str) -> Vec<Value> {
    expr.bind(search_query).into_iter().map(Value::Text).collect()
}
