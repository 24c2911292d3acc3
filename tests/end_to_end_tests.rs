//! End-to-end tests: event log file in, rendered report out

use computer_club_simulator::events::EventLogParser;
use computer_club_simulator::report::Reporter;
use computer_club_simulator::simulation::ClubEngine;
use computer_club_simulator::types::{OutputFormat, RejectionReason};
use std::fs;
use tempfile::TempDir;

const DAY_LOG: &str = "3
09:00 19:00
10
08:48 1 client1
09:41 1 client1
09:48 1 client2
09:52 3 client1
09:54 2 client1 1
10:25 2 client2 2
10:58 1 client3
10:59 2 client3 3
11:30 1 client4
11:35 2 client4 2
11:45 3 client4
12:33 4 client1
12:43 4 client2
15:52 4 client4
";

const DAY_REPORT: &str = "09:00
08:48 13 NotOpenYet
09:41 1 client1
09:48 1 client2
09:52 13 ICanWaitNoLonger!
09:54 2 client1 1
10:25 2 client2 2
10:58 1 client3
10:59 2 client3 3
11:30 1 client4
11:35 13 PleaseIsBusy
11:45 3 client4
12:33 4 client1
12:33 12 client4 1
12:43 4 client2
15:52 4 client4
19:00 11 client3
19:00
1 70 05:58
2 30 02:18
3 90 08:01
";

fn write_log(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("day.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_full_day_text_report() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, DAY_LOG);

    let log = EventLogParser::new().parse_file(&path).unwrap();
    let outcome = ClubEngine::run(log.session, &log.events).unwrap();
    let report = Reporter::new(OutputFormat::Text, true).render(&outcome).unwrap();

    assert_eq!(report, DAY_REPORT);
}

#[test]
fn test_full_day_statistics() {
    let log = EventLogParser::new().parse_str(DAY_LOG).unwrap();
    let outcome = ClubEngine::run(log.session, &log.events).unwrap();
    let stats = &outcome.statistics;

    assert_eq!(stats.accepted_events, 11);
    assert_eq!(stats.rejected_events, 3);
    assert_eq!(stats.rejections_for(RejectionReason::PleaseIsBusy), 1);
    assert_eq!(stats.promotions, 1);
    assert_eq!(stats.auto_checkouts, 1);
    assert_eq!(stats.peak_queue_length, 1);
    assert_eq!(stats.total_revenue, 190);
    assert_eq!(stats.total_occupied_minutes, 358 + 138 + 481);
}

#[test]
fn test_full_day_json_report() {
    let log = EventLogParser::new().parse_str(DAY_LOG).unwrap();
    let outcome = ClubEngine::run(log.session, &log.events).unwrap();
    let json = Reporter::new(OutputFormat::Json, true).render(&outcome).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["opening"], "09:00");
    assert_eq!(value["closing"], "19:00");
    assert_eq!(value["events"].as_array().unwrap().len(), 16);
    assert_eq!(value["events"][3]["kind"], "Error");
    assert_eq!(value["events"][3]["reason"], "ICanWaitNoLonger!");
    assert_eq!(value["events"][3]["client"], "client1");
    assert_eq!(value["events"][12]["kind"], "SeatedFromQueue");
    assert_eq!(value["billing"][2]["occupied"], "08:01");
    assert_eq!(value["statistics"]["total_revenue"], 190);
}

#[test]
fn test_late_events_in_file_are_cut_off() {
    let log = EventLogParser::new()
        .parse_str("1\n09:00 19:00\n10\n18:00 1 owl\n18:30 2 owl 1\n19:30 4 owl\n")
        .unwrap();
    let outcome = ClubEngine::run(log.session, &log.events).unwrap();
    let report = Reporter::new(OutputFormat::Text, false).render(&outcome).unwrap();

    assert_eq!(report, "09:00\n18:00 1 owl\n18:30 2 owl 1\n19:00 11 owl\n19:00\n1 10 00:30\n");
}
