use rusqlite::{params_from_iter, Connection};
use userdir_rank::db::{bind_values, register_rank_function};
use userdir_rank::ranking::fragment::{desc, order_by, product};
use userdir_rank::ranking::{postgres, Fragment, PlaceholderStyle};
use userdir_rank::{build, EngineKind, ModuleConfig};

/// Helper to set up a user directory the way the homeserver lays it out on SQLite
fn setup_test_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    register_rank_function(&conn).unwrap();

    conn.execute_batch(
        "
        CREATE TABLE user_directory (
            user_id TEXT PRIMARY KEY,
            display_name TEXT,
            avatar_url TEXT
        );
        CREATE VIRTUAL TABLE user_directory_search USING fts4(user_id, value);
        ",
    )
    .unwrap();

    let users: [(&str, Option<&str>, Option<&str>, &str); 5] = [
        ("@dave:example.org", None, None, "team"),
        ("@bob:example.org", None, Some("mxc://example.org/b"), "team"),
        ("@alice:example.org", Some("Alice"), None, "alice team"),
        ("@carol:example.org", Some("Carol"), Some("mxc://example.org/c"), "carol team"),
        ("@erin:example.org", Some("Erin"), None, "erin team team"),
    ];

    for (user_id, display_name, avatar_url, value) in users {
        conn.execute(
            "INSERT INTO user_directory (user_id, display_name, avatar_url) VALUES (?1, ?2, ?3)",
            (user_id, display_name, avatar_url),
        )
        .unwrap();
        conn.execute(
            "INSERT INTO user_directory_search (user_id, value) VALUES (?1, ?2)",
            (user_id, value),
        )
        .unwrap();
    }

    conn
}

fn search(conn: &Connection, term: &str, config: &ModuleConfig) -> Vec<String> {
    let expr = build(EngineKind::Sqlite, config);
    let sql = format!(
        "SELECT d.user_id
         FROM user_directory_search
         INNER JOIN user_directory AS d USING (user_id)
         WHERE user_directory_search MATCH ?
         ORDER BY {}",
        expr.sql
    );

    let mut values = vec![rusqlite::types::Value::Text(term.to_string())];
    values.extend(bind_values(&expr, term));

    let mut stmt = conn.prepare(&sql).unwrap();
    let rows = stmt
        .query_map(params_from_iter(values), |row| row.get(0))
        .unwrap();
    rows.map(|r| r.unwrap()).collect()
}

#[test]
fn test_sqlite_ordering_rank_then_tie_breaks() {
    let conn = setup_test_db();

    let ids = search(&conn, "team", &ModuleConfig::default());
    assert_eq!(
        ids,
        vec![
            // two hits, best rank
            "@erin:example.org",
            // equal rank: display name and avatar, display name only, avatar only, neither
            "@carol:example.org",
            "@alice:example.org",
            "@bob:example.org",
            "@dave:example.org",
        ]
    );
}

#[test]
fn test_sqlite_ordering_ignores_boost() {
    let conn = setup_test_db();
    let boosted = ModuleConfig {
        weighted_display_name_like: Some("Alice".to_string()),
    };

    assert_eq!(
        search(&conn, "team", &boosted),
        search(&conn, "team", &ModuleConfig::default())
    );
}

#[test]
fn test_sqlite_ordering_narrow_match() {
    let conn = setup_test_db();
    assert_eq!(
        search(&conn, "carol", &ModuleConfig::default()),
        vec!["@carol:example.org"]
    );
}

#[test]
fn test_boost_and_avatar_factors_execute() {
    let conn = setup_test_db();
    conn.execute_batch("PRAGMA case_sensitive_like = ON;").unwrap();
    conn.execute(
        "INSERT INTO user_directory (user_id, display_name, avatar_url) VALUES
            ('@jean:agency.fr', 'Jean [Agency]', NULL),
            ('@zoe:agency.fr', 'Zoe [agency]', NULL)",
        [],
    )
    .unwrap();

    let clause = order_by(vec![
        desc(product(vec![
            postgres::display_name_boost_factor("[Agency]"),
            postgres::avatar_factor(),
        ])),
        Fragment::sql("user_id"),
    ]);
    let (order, params) = clause.render(PlaceholderStyle::Numbered { start: 2 });
    assert_eq!(params.len(), 1);

    let sql = format!(
        "SELECT user_id FROM user_directory WHERE user_id LIKE ?1 ORDER BY {}",
        order
    );
    let mut stmt = conn.prepare(&sql).unwrap();
    let ids: Vec<String> = stmt
        .query_map(("%agency.fr", "%[Agency]%"), |row| row.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();

    // case-sensitive: only Jean gets the 2.0 boost
    assert_eq!(ids, vec!["@jean:agency.fr", "@zoe:agency.fr"]);
}
