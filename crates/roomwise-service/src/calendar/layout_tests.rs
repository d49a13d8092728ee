//! Unit tests for day-grid layout.

use chrono::{NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use roomwise_core::types::{CalType, ModeType};

use super::entry::CalendarEntry;
use super::layout::{GridGeometry, PositionedEntry, layout_day};
use crate::filter::RoomFilter;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

fn entry(id: &str, room: &str, start: (u32, u32), end: (u32, u32)) -> CalendarEntry {
    entry_on(day(), id, room, start, end)
}

fn entry_on(
    date: NaiveDate,
    id: &str,
    room: &str,
    start: (u32, u32),
    end: (u32, u32),
) -> CalendarEntry {
    let start_time = NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap();
    let end_time = NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap();
    let start_instant = Utc.from_utc_datetime(&date.and_time(start_time));
    let end_instant = Utc.from_utc_datetime(&date.and_time(end_time));
    CalendarEntry {
        meeting_id: id.to_string(),
        title: format!("Meeting {id}"),
        room: room.to_string(),
        mode_type: ModeType::InPerson,
        cal_type: CalType::Aa,
        date,
        start_time,
        end_time,
        start: start_instant,
        end: end_instant,
    }
}

fn positions(laid_out: &[PositionedEntry]) -> Vec<(String, usize, usize)> {
    laid_out
        .iter()
        .map(|p| (p.entry.meeting_id.clone(), p.position_index, p.total_overlapping))
        .collect()
}

#[test]
fn test_three_identical_times_share_the_column() {
    let entries = vec![
        entry("a", "Unity Room", (10, 0), (11, 0)),
        entry("b", "Serenity Room", (10, 0), (11, 0)),
        entry("c", "Seeds of Hope", (10, 0), (11, 0)),
    ];

    let laid_out = layout_day(&entries, day(), &RoomFilter::new());

    assert_eq!(
        positions(&laid_out),
        vec![
            ("a".to_string(), 0, 3),
            ("b".to_string(), 1, 3),
            ("c".to_string(), 2, 3),
        ]
    );
}

#[test]
fn test_two_unity_room_meetings_with_empty_filter() {
    let entries = vec![
        entry("first", "Unity Room", (10, 0), (11, 0)),
        entry("second", "Unity Room", (10, 0), (11, 0)),
    ];

    let laid_out = layout_day(&entries, day(), &RoomFilter::new());

    assert_eq!(
        positions(&laid_out),
        vec![("first".to_string(), 0, 2), ("second".to_string(), 1, 2)]
    );
}

#[test]
fn test_single_entry_gets_full_width() {
    let entries = vec![entry("solo", "Unity Room", (9, 0), (10, 0))];

    let laid_out = layout_day(&entries, day(), &RoomFilter::new());

    assert_eq!(positions(&laid_out), vec![("solo".to_string(), 0, 1)]);
    assert!((laid_out[0].width_fraction() - 1.0).abs() < f64::EPSILON);
    assert!(laid_out[0].offset_fraction().abs() < f64::EPSILON);
}

#[test]
fn test_partial_overlap_is_not_grouped() {
    let entries = vec![
        entry("a", "Unity Room", (10, 0), (11, 0)),
        entry("b", "Unity Room", (10, 30), (11, 30)),
        entry("c", "Unity Room", (10, 0), (12, 0)),
    ];

    let laid_out = layout_day(&entries, day(), &RoomFilter::new());

    assert!(laid_out.iter().all(|p| p.total_overlapping == 1));
    assert_eq!(laid_out.len(), 3);
}

#[test]
fn test_groups_are_contiguous_in_first_appearance_order() {
    let entries = vec![
        entry("a", "Unity Room", (10, 0), (11, 0)),
        entry("b", "Unity Room", (12, 0), (13, 0)),
        entry("c", "Unity Room", (10, 0), (11, 0)),
        entry("d", "Unity Room", (8, 0), (9, 0)),
    ];

    let laid_out = layout_day(&entries, day(), &RoomFilter::new());

    assert_eq!(
        positions(&laid_out),
        vec![
            ("a".to_string(), 0, 2),
            ("c".to_string(), 1, 2),
            ("b".to_string(), 0, 1),
            ("d".to_string(), 0, 1),
        ]
    );
}

#[test]
fn test_other_dates_are_dropped() {
    let next_day = day() + TimeDelta::days(1);
    let entries = vec![
        entry("today", "Unity Room", (10, 0), (11, 0)),
        entry_on(next_day, "tomorrow", "Unity Room", (10, 0), (11, 0)),
    ];

    let laid_out = layout_day(&entries, day(), &RoomFilter::new());

    assert_eq!(positions(&laid_out), vec![("today".to_string(), 0, 1)]);
}

#[test_log::test]
fn test_disabled_room_is_dropped_before_grouping() {
    let entries = vec![
        entry("kept", "Unity Room", (10, 0), (11, 0)),
        entry("hidden", "Room for Improvement", (10, 0), (11, 0)),
    ];
    let filter = RoomFilter::new().with("RoomforImprovement", false);

    let laid_out = layout_day(&entries, day(), &filter);

    assert_eq!(positions(&laid_out), vec![("kept".to_string(), 0, 1)]);
}

#[test]
fn test_room_absent_from_filter_is_kept() {
    let entries = vec![entry("kept", "Room for Improvement", (10, 0), (11, 0))];
    let filter = RoomFilter::new().with("UnityRoom", false);

    let laid_out = layout_day(&entries, day(), &filter);

    assert_eq!(laid_out.len(), 1);
}

#[test]
fn test_layout_is_idempotent() {
    let entries = vec![
        entry("a", "Unity Room", (10, 0), (11, 0)),
        entry("b", "Unity Room", (12, 0), (13, 0)),
        entry("c", "Serenity Room", (10, 0), (11, 0)),
        entry("d", "Unity Room", (12, 0), (13, 0)),
        entry("e", "Unity Room", (10, 0), (11, 0)),
    ];
    let filter = RoomFilter::new();

    let once = layout_day(&entries, day(), &filter);
    let twice = layout_day(&once, day(), &filter);

    assert_eq!(once, twice);
}

#[test]
fn test_empty_input() {
    let entries: Vec<CalendarEntry> = Vec::new();
    assert!(layout_day(&entries, day(), &RoomFilter::new()).is_empty());
}

#[test]
fn test_fractions_split_the_column() {
    let entries = vec![
        entry("a", "Unity Room", (10, 0), (11, 0)),
        entry("b", "Unity Room", (10, 0), (11, 0)),
        entry("c", "Unity Room", (10, 0), (11, 0)),
        entry("d", "Unity Room", (10, 0), (11, 0)),
    ];

    let laid_out = layout_day(&entries, day(), &RoomFilter::new());

    assert!((laid_out[0].width_fraction() - 0.25).abs() < f64::EPSILON);
    assert!((laid_out[3].offset_fraction() - 0.75).abs() < f64::EPSILON);
}

#[test]
fn test_grid_geometry() {
    let geometry = GridGeometry::default();
    let half_past_ten = NaiveTime::from_hms_opt(10, 30, 0).unwrap();

    assert!((geometry.top_of(half_past_ten) - 1050.0).abs() < 1e-9);
    assert!((geometry.height_of(TimeDelta::minutes(90)) - 150.0).abs() < 1e-9);
    assert!((geometry.current_time_offset(half_past_ten) - 1090.0).abs() < 1e-9);
}
