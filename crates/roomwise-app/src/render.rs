//! Turns week and day views into flat records a front end can draw directly.

use chrono::{DateTime, NaiveDate, Utc};
use roomwise_service::calendar::{DayColumn, GridGeometry, PositionedEntry, WeekView};
use roomwise_service::rooms::room_color;
use roomwise_time::Tz;
use roomwise_time::format::{format_clock, format_full, hour_label};
use roomwise_time::local::{local_date, local_time};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRender {
    pub meeting_id: String,
    pub title: String,
    pub room: String,
    pub color: &'static str,
    pub mode: &'static str,
    pub calendar: &'static str,
    /// `"10:00 AM - 11:00 AM"`
    pub time_label: String,
    /// `"06/02/2025, 10:00:00 AM"`
    pub starts_at: String,
    pub left_percent: f64,
    pub width_percent: f64,
    pub top: f64,
    pub height: f64,
    pub position_index: usize,
    pub total_overlapping: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRender {
    pub date: NaiveDate,
    pub header: String,
    pub day_number: u32,
    pub entries: Vec<EntryRender>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRender {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub hour_labels: Vec<String>,
    /// Column offset of the current-time line, when today is in this week.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_time_offset: Option<f64>,
    pub days: Vec<DayRender>,
}

fn render_entry(positioned: &PositionedEntry, geometry: &GridGeometry, zone: Tz) -> EntryRender {
    let entry = &positioned.entry;
    EntryRender {
        meeting_id: entry.meeting_id.clone(),
        title: entry.title.clone(),
        room: entry.room.clone(),
        color: room_color(&entry.room),
        mode: entry.mode_type.label(),
        calendar: entry.cal_type.label(),
        time_label: format!(
            "{} - {}",
            format_clock(entry.start, zone),
            format_clock(entry.end, zone)
        ),
        starts_at: format_full(entry.start, zone),
        left_percent: positioned.offset_fraction() * 100.0,
        width_percent: positioned.width_fraction() * 100.0,
        top: geometry.top_of(entry.start_time),
        height: geometry.height_of(entry.duration()),
        position_index: positioned.position_index,
        total_overlapping: positioned.total_overlapping,
    }
}

fn render_day(day: &DayColumn, geometry: &GridGeometry, zone: Tz) -> DayRender {
    DayRender {
        date: day.date,
        header: day.header.clone(),
        day_number: day.day_number,
        entries: day
            .entries
            .iter()
            .map(|positioned| render_entry(positioned, geometry, zone))
            .collect(),
    }
}

/// A single day rendered on its own, as in the day view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayViewRender {
    pub hour_labels: Vec<String>,
    /// Column offset of the current-time line, when `day` is today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_time_offset: Option<f64>,
    pub day: DayRender,
}

fn hour_labels() -> Vec<String> {
    (0..24).map(hour_label).collect()
}

/// Renders one column, placing the current-time line when `now` falls on it.
#[must_use]
pub fn render_day_view(
    day: &DayColumn,
    geometry: &GridGeometry,
    zone: Tz,
    now: DateTime<Utc>,
) -> DayViewRender {
    let current_time_offset = (local_date(now, zone) == day.date)
        .then(|| geometry.current_time_offset(local_time(now, zone)));

    DayViewRender {
        hour_labels: hour_labels(),
        current_time_offset,
        day: render_day(day, geometry, zone),
    }
}

/// ## Summary
/// Renders `view` with `geometry`, placing the current-time line for `now`
/// when it falls inside the week.
#[must_use]
pub fn render_week(
    view: &WeekView,
    geometry: &GridGeometry,
    zone: Tz,
    now: DateTime<Utc>,
) -> WeekRender {
    let today = local_date(now, zone);
    let current_time_offset = (view.start <= today && today <= view.end)
        .then(|| geometry.current_time_offset(local_time(now, zone)));

    WeekRender {
        start: view.start,
        end: view.end,
        hour_labels: hour_labels(),
        current_time_offset,
        days: view
            .days
            .iter()
            .map(|day| render_day(day, geometry, zone))
            .collect(),
    }
}
