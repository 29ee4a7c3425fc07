//! Tests for config loading and CLI overrides.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use timeline_tictactoe_tui::cli::Cli;
use timeline_tictactoe_tui::config::AppConfig;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(!*config.start_reversed());
    assert_eq!(config.log_file(), &PathBuf::from("timeline_tictactoe.log"));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_file_values_are_read() {
    let file = write_config(
        r#"
start_reversed = true
log_file = "/tmp/ttt.log"
log_filter = "timeline_tictactoe=debug"
"#,
    );
    let config = AppConfig::from_file(file.path()).unwrap();
    assert!(*config.start_reversed());
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert_eq!(config.log_filter(), "timeline_tictactoe=debug");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("start_reversed = \"sometimes\"");
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("log_file = \"from_file.log\"");
    let path = file.path().to_str().unwrap().to_string();
    let cli = Cli::parse_from([
        "timeline_tictactoe",
        "--config",
        path.as_str(),
        "--reversed",
        "--log-file",
        "from_cli.log",
    ]);
    let config = AppConfig::resolve(&cli).unwrap();
    assert!(*config.start_reversed());
    assert_eq!(config.log_file(), &PathBuf::from("from_cli.log"));
}

#[test]
fn test_resolve_without_file() {
    let cli = Cli::parse_from(["timeline_tictactoe"]);
    assert_eq!(AppConfig::resolve(&cli).unwrap(), AppConfig::default());
}
