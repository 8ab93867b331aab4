use userdir_rank::{
    build, build_named, BoostStatus, EngineKind, ModuleConfig, Param, RankError,
    UserDirectorySearchModule,
};

fn config_from(src: &str) -> ModuleConfig {
    let raw: toml::Table = src.parse().unwrap();
    UserDirectorySearchModule::parse_config(&raw)
}

#[test]
fn test_boost_pattern_is_first_param() {
    for pattern in ["testabc [SoMeThInG]", "[Modernisation]", "", "50%_off"] {
        let config = ModuleConfig {
            weighted_display_name_like: Some(pattern.to_string()),
        };
        let expr = build(EngineKind::Postgres, &config);

        assert!(expr.sql.contains("CASE WHEN display_name LIKE ? THEN 2.0 ELSE 1.0 END"));
        assert_eq!(expr.params[0], Param::Text(format!("%{}%", pattern)));
        assert_eq!(expr.params.len(), 3);
        assert_eq!(expr.sql.matches('?').count(), expr.params.len());
    }
}

#[test]
fn test_scenario_pattern_from_config() {
    let config = config_from(r#"weighted_display_name_like = "testabc [SoMeThInG]""#);

    let expr = build(EngineKind::Postgres, &config);
    assert_eq!(expr.extra_args(), vec!["%testabc [SoMeThInG]%"]);
    assert!(expr.sql.to_lowercase().contains("display_name like ?"));

    let expr = build(EngineKind::Sqlite, &config);
    assert!(expr.extra_args().is_empty());
    assert!(!expr.sql.is_empty());
}

#[test]
fn test_scenario_empty_config_omits_boost() {
    let config = config_from("");
    assert!(config.weighted_display_name_like.is_none());

    let expr = build(EngineKind::Postgres, &config);
    assert!(!expr.sql.to_lowercase().contains("display_name like"));
    assert!(!expr.sql.contains("2.0"));
    assert_eq!(expr.params, vec![Param::SearchQuery, Param::SearchQuery]);
    assert_eq!(expr.display_name_boost, BoostStatus::Disabled);
}

#[test]
fn test_factor_and_tie_break_layout() {
    let expr = build(EngineKind::Postgres, &ModuleConfig::default());

    assert!(expr.sql.contains("THEN 4.0 ELSE 1.0"));
    assert!(expr.sql.contains("THEN 1.2 ELSE 1.0"));
    assert!(expr.sql.contains("(3 * ts_rank_cd("));
    assert_eq!(expr.sql.matches("'{0.1, 0.1, 0.9, 1.0}'").count(), 2);

    let desc = expr.sql.find(" DESC").unwrap();
    let display = expr.sql.find("display_name IS NULL").unwrap();
    let avatar = expr.sql.find("avatar_url IS NULL").unwrap();
    assert!(desc < display && display < avatar);
    assert!(expr.sql.ends_with("avatar_url IS NULL"));
}

#[test]
fn test_sqlite_never_has_params() {
    for config in [config_from(""), config_from(r#"weighted_display_name_like = "x""#)] {
        let expr = build(EngineKind::Sqlite, &config);
        assert!(expr.params.is_empty());
        assert!(expr.sql.starts_with("rank(matchinfo(user_directory_search)) DESC"));
    }
}

#[test]
fn test_unknown_engine_fails() {
    for name in ["mysql", "oracle", "", "postgres2"] {
        let err = build_named(name, &ModuleConfig::default()).unwrap_err();
        assert_eq!(err, RankError::UnsupportedEngine(name.to_string()));
    }
}

#[test]
fn test_concurrent_builds_agree() {
    let config = config_from(r#"weighted_display_name_like = "[Agency]""#);
    let expected = build(EngineKind::Postgres, &config);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| build(EngineKind::Postgres, &config)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
