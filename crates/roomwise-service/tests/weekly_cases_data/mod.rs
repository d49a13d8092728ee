use chrono::{DateTime, NaiveDate, Utc, Weekday};

use crate::calendar::recurrence::OccurrenceResolver;
use crate::model::{Meeting, RecurrencePattern};
use roomwise_core::types::{CalType, ModeType};

pub struct WeeklyCase {
    pub name: &'static str,
    /// Series start, RFC 3339.
    pub start: &'static str,
    pub interval: u32,
    pub days: &'static [Weekday],
    /// Candidate dates that must match.
    pub occurs: &'static [&'static str],
    /// Candidate dates that must not match.
    pub skips: &'static [&'static str],
}

pub fn weekly_cases() -> Vec<WeeklyCase> {
    vec![
        WeeklyCase {
            name: "weekly_monday",
            start: "2025-06-02T14:00:00Z",
            interval: 1,
            days: &[Weekday::Mon],
            occurs: &["2025-06-02", "2025-06-09", "2025-06-16", "2025-12-29"],
            skips: &["2025-06-03", "2025-06-08", "2025-06-10"],
        },
        WeeklyCase {
            name: "biweekly_monday",
            start: "2025-06-02T14:00:00Z",
            interval: 2,
            days: &[Weekday::Mon],
            occurs: &["2025-06-02", "2025-06-16", "2025-06-30"],
            skips: &["2025-06-09", "2025-06-23", "2025-07-07"],
        },
        WeeklyCase {
            name: "triweekly_tue_thu",
            start: "2025-01-07T23:30:00Z",
            interval: 3,
            days: &[Weekday::Tue, Weekday::Thu],
            occurs: &["2025-01-07", "2025-01-09", "2025-01-28", "2025-01-30"],
            skips: &["2025-01-14", "2025-01-16", "2025-01-21", "2025-01-23"],
        },
        WeeklyCase {
            // 01:00 UTC on Saturday is Friday evening in New York
            name: "evening_start_crosses_utc_midnight",
            start: "2025-03-01T01:00:00Z",
            interval: 1,
            days: &[Weekday::Fri],
            occurs: &["2025-02-28", "2025-03-07", "2025-03-14"],
            skips: &["2025-03-01", "2025-03-08"],
        },
        WeeklyCase {
            name: "spans_dst_change",
            start: "2025-10-20T14:00:00Z",
            interval: 2,
            days: &[Weekday::Mon],
            occurs: &["2025-11-03", "2025-11-17"],
            skips: &["2025-10-27", "2025-11-10"],
        },
        WeeklyCase {
            name: "every_four_weeks_sunday",
            start: "2024-12-29T15:00:00Z",
            interval: 4,
            days: &[Weekday::Sun],
            occurs: &["2024-12-29", "2025-01-26", "2025-02-23"],
            skips: &["2025-01-05", "2025-01-12", "2025-01-19", "2025-02-02"],
        },
    ]
}

fn parse_date(value: &str) -> NaiveDate {
    value.parse().expect("case date should parse")
}

pub fn assert_case(case: &WeeklyCase) {
    let start: DateTime<Utc> = case.start.parse().expect("case start should parse");
    let meeting = Meeting {
        mid: case.name.to_string(),
        title: case.name.to_string(),
        description: None,
        creator: None,
        group: None,
        email: None,
        start_date_time: start,
        end_date_time: start + chrono::TimeDelta::hours(1),
        is_recurring: true,
        recurrence_pattern: Some(RecurrencePattern::weekly(case.interval, case.days)),
        room: "Serenity Room".to_string(),
        mode_type: ModeType::Hybrid,
        cal_type: CalType::Other,
        zoom_account: None,
        zoom_link: None,
    };
    let resolver = OccurrenceResolver::default();

    for value in case.occurs {
        assert!(
            resolver.occurs_on(&meeting, parse_date(value)),
            "{}: expected occurrence on {value}",
            case.name
        );
    }
    for value in case.skips {
        assert!(
            !resolver.occurs_on(&meeting, parse_date(value)),
            "{}: unexpected occurrence on {value}",
            case.name
        );
    }
}
