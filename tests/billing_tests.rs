//! Tests for table billing across whole days
//!
//! Revenue must equal the hourly rate times the started hours of every
//! occupancy span a table went through.

use chrono::{Duration, NaiveTime};
use computer_club_simulator::club::{billed_hours, charge_for, format_hhmm};
use computer_club_simulator::events::ClientEvent;
use computer_club_simulator::simulation::ClubEngine;
use computer_club_simulator::types::{ClientName, ClubSession, TableNumber};

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn name(s: &str) -> ClientName {
    ClientName::new(s).unwrap()
}

#[test]
fn test_billed_hours_boundaries() {
    assert_eq!(billed_hours(Duration::zero()), 0);
    assert_eq!(billed_hours(Duration::seconds(1)), 1);
    assert_eq!(billed_hours(Duration::minutes(59)), 1);
    assert_eq!(billed_hours(Duration::minutes(60)), 1);
    assert_eq!(billed_hours(Duration::minutes(61)), 2);
    assert_eq!(billed_hours(Duration::hours(24)), 24);
}

#[test]
fn test_rate_zero_bills_nothing() {
    assert_eq!(charge_for(Duration::hours(5), 0), Some(0));

    let table = TableNumber::new(1).unwrap();
    let events = vec![
        ClientEvent::arrived(hm(10, 0), name("alice")),
        ClientEvent::sat_at_table(hm(10, 0), name("alice"), table),
    ];
    let outcome = ClubEngine::run(ClubSession::new(1, hm(10, 0), hm(12, 0), 0), &events).unwrap();
    assert_eq!(outcome.billing[0].to_string(), "1 0 02:00");
}

#[test]
fn test_revenue_sums_every_span() {
    let table = TableNumber::new(1).unwrap();
    let spans = [(hm(9, 0), hm(9, 1)), (hm(9, 1), hm(11, 0)), (hm(11, 0), hm(11, 0)), (hm(12, 0), hm(15, 30))];

    let mut events = Vec::new();
    for (i, (start, end)) in spans.iter().enumerate() {
        let client = name(&format!("client{}", i));
        events.push(ClientEvent::arrived(*start, client.clone()));
        events.push(ClientEvent::sat_at_table(*start, client.clone(), table));
        events.push(ClientEvent::left(*end, client));
    }

    let rate = 7;
    let outcome = ClubEngine::run(ClubSession::new(1, hm(8, 0), hm(22, 0), rate), &events).unwrap();

    let expected_hours: u64 = spans
        .iter()
        .map(|(start, end)| billed_hours(end.signed_duration_since(*start)))
        .sum();
    assert_eq!(expected_hours, 1 + 2 + 0 + 4);
    assert_eq!(outcome.billing[0].revenue, rate * expected_hours);
    assert_eq!(outcome.billing[0].occupied_hhmm(), "05:30");
    assert_eq!(outcome.statistics.total_revenue, rate * expected_hours);
}

#[test]
fn test_closing_settles_partial_span() {
    let table = TableNumber::new(2).unwrap();
    let events = vec![
        ClientEvent::arrived(hm(17, 59), name("late")),
        ClientEvent::sat_at_table(hm(18, 1), name("late"), table),
    ];
    let outcome = ClubEngine::run(ClubSession::new(2, hm(9, 0), hm(19, 0), 100), &events).unwrap();

    assert_eq!(outcome.billing[0].to_string(), "1 0 00:00");
    assert_eq!(outcome.billing[1].to_string(), "2 100 00:59");
}

#[test]
fn test_format_hhmm_beyond_a_day() {
    assert_eq!(format_hhmm(Duration::minutes(5)), "00:05");
    assert_eq!(format_hhmm(Duration::minutes(25 * 60 + 3)), "25:03");
}

#[test]
fn test_overflowing_charge_aborts_the_day() {
    use computer_club_simulator::simulation::SimulationError;

    let table = TableNumber::new(1).unwrap();
    let events = vec![
        ClientEvent::arrived(hm(9, 0), name("alice")),
        ClientEvent::sat_at_table(hm(9, 0), name("alice"), table),
        ClientEvent::left(hm(10, 30), name("alice")),
    ];
    let result = ClubEngine::run(ClubSession::new(1, hm(8, 0), hm(20, 0), u64::MAX), &events);
    assert!(matches!(
        result,
        Err(SimulationError::BillingOverflow { hourly_rate: u64::MAX, .. })
    ));

    // A single started hour still fits
    let short = vec![events[0].clone(), events[1].clone(), ClientEvent::left(hm(9, 30), name("alice"))];
    let outcome = ClubEngine::run(ClubSession::new(1, hm(8, 0), hm(20, 0), u64::MAX), &short).unwrap();
    assert_eq!(outcome.billing[0].revenue, u64::MAX);
}
