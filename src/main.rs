// Computer Club Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/computer-club-simulator data/example.txt
// ```
//
// Or with a JSON report and logging:
//
// ```console
// $ ./target/release/computer-club-simulator data/example.txt --format json --verbose
// ```

use anyhow::{Context, Result};
use clap::Parser;
use computer_club_simulator::events::{EventLogParser, ParsedLog};
use computer_club_simulator::report::Reporter;
use computer_club_simulator::simulation::{ClubEngine, LoggingConfig, SimulationError};
use computer_club_simulator::types::config::CliArgs;
use computer_club_simulator::types::{format_clock, AppConfig};
use std::fs;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match AppConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Keep the guard alive so file logs are flushed on exit
    let _log_guard = match logging_config(&args).init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Computer Club Simulator");

    // Load configuration from CLI arguments and optional config file
    let config = match AppConfig::from_cli_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    let Some(input) = args.input.as_deref() else {
        eprintln!("No event log given. Usage: computer-club-simulator <INPUT>");
        process::exit(1);
    };

    // Parse and validate the event log
    let log = match EventLogParser::new().parse_file(input) {
        Ok(log) => log,
        Err(SimulationError::ParseError(e)) => {
            error!(line = e.line(), "Malformed event log {}: {}", input, e);
            eprintln!("{}", e);
            process::exit(1);
        }
        Err(e) => {
            error!("Failed to read event log {}: {}", input, e);
            process::exit(1);
        }
    };

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Event log validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_log_summary(&log);
        return;
    }

    if let Err(e) = run(&config, log) {
        error!("Simulation failed: {:#}", e);
        process::exit(1);
    }

    info!("Computer Club Simulator completed successfully");
}

/// Pick the logging setup from the CLI flags
fn logging_config(args: &CliArgs) -> LoggingConfig {
    let mut logging = if args.debug {
        LoggingConfig::new().with_level(tracing::Level::DEBUG).with_span_events()
    } else if args.verbose {
        LoggingConfig::new().with_level(tracing::Level::INFO).with_span_events()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN)
    };

    if args.log_json {
        logging = logging.with_json_format();
    }
    if let Some(dir) = &args.log_dir {
        logging = logging.with_file_logging(dir.clone());
    }
    logging
}

/// Replay the day and write the report
fn run(config: &AppConfig, log: ParsedLog) -> Result<()> {
    let format = config.get_output_format()?;

    info!(
        tables = log.session.table_count,
        events = log.events.len(),
        "Replaying club day"
    );
    let outcome = ClubEngine::run(log.session, &log.events).context("Club simulation aborted")?;

    let report = Reporter::new(format, config.include_statistics)
        .render(&outcome)
        .context("Failed to render report")?;

    match &config.output_path {
        Some(path) => {
            fs::write(path, report).with_context(|| format!("Failed to write report to {}", path))?;
            info!("Report written to {}", path);
        }
        None => print!("{}", report),
    }

    Ok(())
}

/// Print what the event log contains
fn print_log_summary(log: &ParsedLog) {
    eprintln!("Event Log:");
    eprintln!("  Tables: {}", log.session.table_count);
    eprintln!(
        "  Opening Hours: {} - {}",
        format_clock(log.session.opening),
        format_clock(log.session.closing)
    );
    eprintln!("  Hourly Rate: {}", log.session.hourly_rate);
    eprintln!("  Events: {}", log.events.len());
}
