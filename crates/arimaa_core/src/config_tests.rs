use super::*;

#[test]
fn test_empty_config_is_default() {
    let config = ArimaaConfig::from_toml("").unwrap();
    assert_eq!(config, ArimaaConfig::default());
    assert_eq!(config.search.depth, DEFAULT_DEPTH);
    assert_eq!(config.eval, EvalWeights::default());
}

#[test]
fn test_partial_sections() {
    let config = ArimaaConfig::from_toml(
        r#"
        [search]
        depth = 4
        move_time_ms = 500

        [eval]
        trap_penalty = 25.0

        [matches]
        games = 2
        "#,
    )
    .unwrap();

    assert_eq!(config.search.depth, 4);
    assert_eq!(config.search.move_time_ms, Some(500));
    assert!(!config.search.order_moves);
    assert_eq!(config.eval.trap_penalty, 25.0);
    assert_eq!(config.eval.mobility, EvalWeights::default().mobility);
    assert_eq!(config.matches.games, 2);
    assert_eq!(config.matches.max_turns, 200);
}

#[test]
fn test_to_limits() {
    let settings = SearchSettings {
        depth: 2,
        move_time_ms: Some(50),
        order_moves: true,
    };
    let limits = settings.to_limits();
    assert_eq!(limits.depth, 2);
    assert_eq!(limits.move_time, Some(Duration::from_millis(50)));
    assert!(limits.order_moves);

    let limits = SearchSettings::default().to_limits();
    assert!(limits.move_time.is_none());
}

#[test]
fn test_rejects_bad_input() {
    assert!(matches!(
        ArimaaConfig::from_toml("[search]\ndepth = \"deep\""),
        Err(ConfigError::Toml(_))
    ));
    assert!(matches!(
        ArimaaConfig::from_toml("[search]\ndepth = 0"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        ArimaaConfig::load("/nonexistent/arimaa.toml"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("arimaa_config_{}.toml", std::process::id()));
    let config = ArimaaConfig {
        search: SearchSettings {
            depth: 5,
            ..Default::default()
        },
        ..Default::default()
    };
    std::fs::write(&path, toml::to_string(&config).unwrap()).unwrap();

    let loaded = ArimaaConfig::load_or_default(Some(&path)).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, config);

    let fallback = ArimaaConfig::load_or_default(None::<&str>).unwrap();
    assert_eq!(fallback, ArimaaConfig::default());
}
