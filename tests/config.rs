use routelog::{Config, DateLog, Error, Level, LevelLog, Mode, Route};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.mode, Mode::Date);
    assert_eq!(config.name, "routelog");
    assert_eq!(config.level, "info");
    assert_eq!(config.date_format, "%Y-%m-%d");
    assert!(config.date.is_none());
    assert!(config.tag.is_none());
}

#[test]
fn level_mode_config_builds_level_route() {
    let config = Config::parse(
        r#"
mode = "level"
path = "/var/log/app"
date = "2024-01-01"
name = "svc"
level = "debug"
"#,
    )
    .unwrap();

    let route = config.route().unwrap();
    assert_eq!(
        route,
        Route::Level(LevelLog::new("/var/log/app", "2024-01-01", "svc").level(Level::Debug))
    );
}

#[test]
fn date_mode_config_carries_tag() {
    let config = Config::parse(
        r#"
path = "/var/log/app"
date = "2024-01-01"
name = "svc"
tag = "api"
"#,
    )
    .unwrap();

    assert_eq!(
        config.route().unwrap(),
        Route::Date(DateLog::new("/var/log/app", "2024-01-01", "svc").tag("api"))
    );
}

#[test]
fn unknown_mode_is_rejected() {
    assert!(matches!(
        Config::parse(r#"mode = "hourly""#),
        Err(Error::ConfigParse(_))
    ));
    assert!(matches!(
        "hourly".parse::<Mode>(),
        Err(Error::InvalidMode(_))
    ));
    assert_eq!("LEVEL".parse::<Mode>().unwrap(), Mode::Level);
}

#[test]
fn unknown_level_is_rejected_when_routing() {
    let config = Config::parse(r#"level = "loud""#).unwrap();
    assert!(matches!(config.route(), Err(Error::InvalidLevel(_))));
}

#[test]
fn generated_date_follows_format() {
    let config = Config::parse(r#"date_format = "%Y""#).unwrap();
    let date = config.resolved_date().unwrap();
    assert_eq!(date.len(), 4);
    assert!(date.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn invalid_date_format_is_an_error() {
    let config = Config::parse(r#"date_format = "%Q%""#).unwrap();
    assert!(matches!(config.resolved_date(), Err(Error::Format(_))));
}

#[test]
fn tilde_in_path_is_expanded() {
    let config = Config::parse(r#"path = "~/logs""#).unwrap();
    let resolved = config.resolved_path();
    assert!(!resolved.starts_with("~"));
    assert!(resolved.ends_with("logs"));
}

#[test]
fn load_from_missing_file_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("missing.toml")).unwrap();
    assert_eq!(config.name, "routelog");
}

#[test]
fn load_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("routelog.toml");
    fs::write(&path, "mode = \"level\"\nname = \"worker\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.mode, Mode::Level);
    assert_eq!(config.name, "worker");
    assert_eq!(PathBuf::from(&config.path), config.resolved_path());
}

#[test]
fn load_from_malformed_file_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("routelog.toml");
    fs::write(&path, "mode = [").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(Error::ConfigParse(_))
    ));
}
