//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are properly parsed and
//! merged with configuration files.

use clap::Parser;
use computer_club_simulator::types::config::{AppConfig, CliArgs};
use computer_club_simulator::types::OutputFormat;
use std::io::Write;
use tempfile::Builder;

/// Test that the bare invocation leaves everything at defaults
#[test]
fn test_defaults() {
    let args = CliArgs::try_parse_from(["test", "day.txt"]).unwrap();

    assert_eq!(args.input.as_deref(), Some("day.txt"));
    assert!(args.config.is_none());
    assert!(args.format.is_none());
    assert!(args.output.is_none());
    assert!(!args.no_statistics);
    assert!(!args.verbose);
    assert!(!args.debug);
    assert!(!args.log_json);
    assert!(args.log_dir.is_none());
    assert!(!args.dry_run);
    assert!(!args.print_config);
}

/// Test short and long flag forms
#[test]
fn test_flag_forms() {
    let args = CliArgs::try_parse_from([
        "test", "day.txt", "-f", "json", "-o", "out.json", "-v", "-d", "--log-json", "--log-dir", "logs",
        "--dry-run",
    ])
    .unwrap();

    assert_eq!(args.format.as_deref(), Some("json"));
    assert_eq!(args.output.as_deref(), Some("out.json"));
    assert!(args.verbose);
    assert!(args.debug);
    assert!(args.log_json);
    assert_eq!(args.log_dir.as_deref(), Some("logs"));
    assert!(args.dry_run);
}

/// Test that --print-config works without an input file
#[test]
fn test_print_config_without_input() {
    let args = CliArgs::try_parse_from(["test", "--print-config"]).unwrap();
    assert!(args.print_config);
    assert!(args.input.is_none());

    let json = AppConfig::default().print_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["output_format"], "text");
    assert_eq!(value["include_statistics"], true);
}

/// Test unknown flags are rejected
#[test]
fn test_unknown_flag_is_rejected() {
    assert!(CliArgs::try_parse_from(["test", "day.txt", "--tables", "4"]).is_err());
}

/// Test file values are used unless the CLI overrides them
#[test]
fn test_config_file_merge() {
    let mut config_file = Builder::new().suffix(".json").tempfile().unwrap();
    config_file
        .write_all(br#"{ "output_format": "json", "output_path": "from-file.json" }"#)
        .unwrap();
    config_file.flush().unwrap();
    let path = config_file.path().to_str().unwrap();

    let args = CliArgs::try_parse_from(["test", "day.txt", "--config", path]).unwrap();
    let config = AppConfig::from_cli_args(&args).unwrap();
    assert_eq!(config.get_output_format().unwrap(), OutputFormat::Json);
    assert_eq!(config.output_path.as_deref(), Some("from-file.json"));
    assert!(config.include_statistics);

    let args = CliArgs::try_parse_from([
        "test",
        "day.txt",
        "--config",
        path,
        "--output",
        "from-cli.txt",
        "--format",
        "text",
        "--no-statistics",
    ])
    .unwrap();
    let config = AppConfig::from_cli_args(&args).unwrap();
    assert_eq!(config.get_output_format().unwrap(), OutputFormat::Text);
    assert_eq!(config.output_path.as_deref(), Some("from-cli.txt"));
    assert!(!config.include_statistics);
}

/// Test invalid formats fail validation
#[test]
fn test_invalid_format_fails_validation() {
    let args = CliArgs::try_parse_from(["test", "day.txt", "--format", "yaml"]).unwrap();
    let config = AppConfig::from_cli_args(&args).unwrap();
    assert!(config.validate().is_err());
}
