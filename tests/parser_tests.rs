//! Tests for reading club event logs from disk

use chrono::NaiveTime;
use computer_club_simulator::events::{ClientAction, EventLogParser, LineFault, ParseError};
use computer_club_simulator::simulation::SimulationError;
use std::io::Write;
use tempfile::NamedTempFile;

fn log_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_parse_file() {
    let file = log_file("2\n10:00 22:00\n15\n10:05 1 neo\n10:06 2 neo 2\n10:30 4 neo\n");
    let log = EventLogParser::new().parse_file(file.path()).unwrap();

    assert_eq!(log.session.table_count, 2);
    assert_eq!(log.session.opening, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    assert_eq!(log.session.closing, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
    assert_eq!(log.session.hourly_rate, 15);
    assert_eq!(log.events.len(), 3);
    assert!(matches!(log.events[1].action, ClientAction::SatAtTable(t) if t.get() == 2));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = EventLogParser::new().parse_file(dir.path().join("absent.txt"));
    assert!(matches!(result, Err(SimulationError::IoError(_))));
}

#[test]
fn test_first_bad_line_is_reported() {
    let file = log_file("1\n09:00 19:00\n10\n09:00 1 ok\n9:05 1 bad\n09:10 1 Worse\n");
    let result = EventLogParser::new().parse_file(file.path());

    match result {
        Err(SimulationError::ParseError(error)) => {
            assert_eq!(error.line(), Some(5));
            assert_eq!(error.offending_line(), Some("9:05 1 bad"));
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_each_fault_is_detected() {
    let parser = EventLogParser::new();
    let cases = [
        ("0\n09:00 19:00\n10\n", LineFault::TableCount),
        ("-1\n09:00 19:00\n10\n", LineFault::TableCount),
        ("1\n09:00\n10\n", LineFault::Hours),
        ("1\n24:00 19:00\n10\n", LineFault::Hours),
        ("1\n19:00 09:00\n10\n", LineFault::HoursOrder),
        ("1\n09:00 19:00\nten\n", LineFault::HourlyRate),
        ("1\n09:00 19:00\n10\n09:00 1\n", LineFault::FieldCount),
        ("1\n09:00 19:00\n10\n09:00 5 bob\n", LineFault::EventId),
        ("1\n09:00 19:00\n10\n09:00 1 Bob\n", LineFault::ClientName),
        ("1\n09:00 19:00\n10\n09:00 2 bob 2\n", LineFault::TableNumber),
        ("1\n09:00 19:00\n10\n09:00 2 bob\n", LineFault::MissingTable),
        ("1\n09:00 19:00\n10\n09:00 4 bob 1\n", LineFault::UnexpectedTable),
        ("1\n09:00 19:00\n10\n09:10 1 bob\n09:00 1 amy\n", LineFault::OutOfOrder),
    ];

    for (text, expected) in cases {
        match parser.parse_str(text) {
            Err(ParseError::InvalidLine { fault, .. }) => assert_eq!(fault, expected, "input: {:?}", text),
            other => panic!("expected {:?} for {:?}, got {:?}", expected, text, other),
        }
    }
}

#[test]
fn test_truncated_header() {
    let result = EventLogParser::new().parse_str("3\n09:00 19:00\n");
    assert!(matches!(result, Err(ParseError::MissingHeader("hourly rate"))));
}

#[test]
fn test_names_allow_digits_dash_and_underscore() {
    let log = EventLogParser::new()
        .parse_str("1\n09:00 19:00\n10\n09:00 1 client_1-a\n")
        .unwrap();
    assert_eq!(log.events[0].client.as_str(), "client_1-a");
}
