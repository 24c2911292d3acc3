//! Configuration structures for the computer club simulator
//!
//! This module contains the command line interface, the run configuration and
//! the validation errors shared with the session parameters.

use super::OutputFormat;
use chrono::NaiveTime;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "computer-club-simulator",
    version,
    about = "Computer Club Simulator - Replays a club's daily event log and bills its tables",
    long_about = "Replays a computer club's single-day event log: clients arrive, sit at tables, wait in the queue and leave. Prints the resulting event stream, including club-generated events, and the revenue and occupied time of every table.

INPUT FORMAT:
    <table count>
    <opening HH:MM> <closing HH:MM>
    <hourly rate>
    <HH:MM> <event id 1-4> <client name> [<table number>]
    ...

EXAMPLES:
    # Replay a log and print the text report
    computer-club-simulator day.txt

    # Produce a JSON report
    computer-club-simulator day.txt --format json --output report.json

    # Validate the log without simulating
    computer-club-simulator day.txt --dry-run

    # Generate configuration template
    computer-club-simulator --print-config > club-config.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Event log to replay
    #[arg(value_name = "INPUT", help = "Path to the club event log")]
    pub input: Option<String>,

    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Output format for the report
    #[arg(
        short,
        long,
        help = "Output format (text or json)",
        long_help = "Output format for the day report. Supported formats: text, json. Default: text"
    )]
    pub format: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, help = "Write the report to this file instead of stdout")]
    pub output: Option<String>,

    /// Leave day statistics out of the report
    #[arg(long, help = "Leave day statistics out of the JSON report")]
    pub no_statistics: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Emit logs as JSON
    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    /// Directory for daily rolling log files
    #[arg(long, help = "Also write logs to daily rolling files in this directory")]
    pub log_dir: Option<String>,

    /// Dry run mode - validate the log without running the simulation
    #[arg(long, help = "Validate the event log without running the simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Output format for the report
    pub output_format: Option<String>,

    /// Report destination file
    pub output_path: Option<String>,

    /// Whether day statistics are included in the JSON report
    pub include_statistics: Option<bool>,
}

/// Run configuration for the simulator binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output format for the report
    pub output_format: String,

    /// Report destination file (stdout when absent)
    pub output_path: Option<String>,

    /// Whether day statistics are included in the JSON report
    pub include_statistics: bool,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for run configuration and session parameters
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    /// Table count is invalid
    #[error("Table count must be greater than 0, got {0}")]
    InvalidTableCount(u32),

    /// Opening time is after closing time
    #[error("Opening time {opening} is after closing time {closing}")]
    InvalidOpeningHours {
        /// Opening time of the club
        opening: NaiveTime,
        /// Closing time of the club
        closing: NaiveTime,
    },

    /// Output format is not supported
    #[error("Unknown output format: {0} (supported: text, json)")]
    UnknownOutputFormat(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { output_format: "text".to_string(), output_path: None, include_statistics: true }
    }
}

impl AppConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        config.apply_cli_overrides(args);

        Ok(config)
    }

    /// Load configuration from a JSON file, merging with defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            output_path: config_file.output_path.or(defaults.output_path),
            include_statistics: config_file
                .include_statistics
                .unwrap_or(defaults.include_statistics),
        }
    }

    fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(value) = &args.format {
            self.output_format = value.clone();
        }
        if let Some(value) = &args.output {
            self.output_path = Some(value.clone());
        }
        if args.no_statistics {
            self.include_statistics = false;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.get_output_format().map(|_| ())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse()
            .map_err(|_| ConfigValidationError::UnknownOutputFormat(self.output_format.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn bare_args() -> CliArgs {
        CliArgs::try_parse_from(["test", "day.txt"]).unwrap()
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.output_format, "text");
        assert!(config.output_path.is_none());
        assert!(config.include_statistics);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs::try_parse_from([
            "test",
            "day.txt",
            "--format",
            "json",
            "--output",
            "report.json",
            "--no-statistics",
        ])
        .unwrap();

        let config = AppConfig::from_cli_args(&args).unwrap();
        assert_eq!(config.output_format, "json");
        assert_eq!(config.output_path.as_deref(), Some("report.json"));
        assert!(!config.include_statistics);
    }

    #[test]
    fn test_no_overrides_uses_defaults() {
        let config = AppConfig::from_cli_args(&bare_args()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_file_loading() {
        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        temp_file
            .write_all(br#"{ "output_format": "json", "include_statistics": false }"#)
            .unwrap();
        temp_file.flush().unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_format, "json");
        assert!(!config.include_statistics);
        assert!(config.output_path.is_none());
    }

    #[test]
    fn test_cli_takes_precedence_over_file() {
        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        temp_file.write_all(br#"{ "output_format": "json" }"#).unwrap();
        temp_file.flush().unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let args =
            CliArgs::try_parse_from(["test", "day.txt", "--config", &path, "--format", "text"])
                .unwrap();
        let config = AppConfig::from_cli_args(&args).unwrap();
        assert_eq!(config.output_format, "text");
    }

    #[test]
    fn test_config_file_errors() {
        assert!(matches!(
            AppConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::FileNotFound(_))
        ));

        let temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(matches!(
            AppConfig::from_file(temp_file.path()),
            Err(ConfigError::UnsupportedFormat(ext)) if ext == "toml"
        ));

        let mut broken = Builder::new().suffix(".json").tempfile().unwrap();
        broken.write_all(b"{ not json").unwrap();
        broken.flush().unwrap();
        assert!(matches!(AppConfig::from_file(broken.path()), Err(ConfigError::JsonError(_))));
    }

    #[test]
    fn test_output_format_validation() {
        let mut config = AppConfig::default();
        config.output_format = "JSON".to_string();
        assert_eq!(config.get_output_format().unwrap(), OutputFormat::Json);

        config.output_format = "csv".to_string();
        match config.validate() {
            Err(ConfigValidationError::UnknownOutputFormat(format)) => assert_eq!(format, "csv"),
            other => panic!("Expected UnknownOutputFormat error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_print_config() {
        let config = AppConfig { output_path: Some("out.txt".to_string()), ..AppConfig::default() };
        let json = config.print_json().unwrap();
        assert!(json.contains("\"output_format\": \"text\""));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        config.save_to_file(&path).unwrap();
        assert_eq!(AppConfig::from_file(&path).unwrap(), config);
    }
}
