//! The `roomwise [--day] [YYYY-MM-DD]` pipeline, independent of process setup.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use roomwise_core::config::Settings;
use roomwise_service::calendar::{
    GridGeometry, OccurrenceResolver, build_day_column, build_week_view,
};
use roomwise_service::filter::RoomFilter;
use roomwise_service::model::Meeting;
use roomwise_service::rooms::default_filter;
use roomwise_service::source::{DateRange, JsonFileSource, MeetingSource};
use roomwise_time::Tz;
use roomwise_time::local::local_date;
use roomwise_time::resolve_zone;

use crate::error::{AppError, AppResult};
use crate::render::{DayViewRender, WeekRender, render_day_view, render_week};

/// Which grid the binary prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Week,
    Day,
}

/// Parsed command-line arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invocation {
    pub mode: ViewMode,
    pub anchor: Option<NaiveDate>,
}

/// ## Summary
/// Parses the optional anchor date argument.
///
/// ## Errors
///
/// Returns `AppError::InvalidArgument` if the argument is not `YYYY-MM-DD`.
pub fn parse_anchor(arg: Option<&str>) -> AppResult<Option<NaiveDate>> {
    arg.map(|raw| {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
            AppError::InvalidArgument(format!("expected YYYY-MM-DD, got {raw:?}: {e}"))
        })
    })
    .transpose()
}

/// ## Summary
/// Parses `[--day | --week] [YYYY-MM-DD]`, excluding the program name.
///
/// ## Errors
///
/// Returns `AppError::InvalidArgument` for unknown flags, a malformed date or
/// more than one date.
pub fn parse_args<I, S>(args: I) -> AppResult<Invocation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut invocation = Invocation::default();
    for arg in args {
        match arg.as_ref() {
            "--day" => invocation.mode = ViewMode::Day,
            "--week" => invocation.mode = ViewMode::Week,
            flag if flag.starts_with("--") => {
                return Err(AppError::InvalidArgument(format!("unknown flag {flag}")));
            }
            date if invocation.anchor.is_none() => invocation.anchor = parse_anchor(Some(date))?,
            extra => {
                return Err(AppError::InvalidArgument(format!("unexpected argument {extra}")));
            }
        }
    }
    Ok(invocation)
}

/// ## Summary
/// Reads the room filter JSON object at `path`, or the all-enabled sidebar
/// defaults when no path is configured.
///
/// ## Errors
///
/// Returns an error if the file cannot be read or is not a JSON object of
/// booleans.
pub async fn load_filter(path: Option<&Path>) -> AppResult<RoomFilter> {
    let Some(path) = path else {
        return Ok(default_filter());
    };
    let raw = tokio::fs::read_to_string(path).await?;
    let filter: RoomFilter = serde_json::from_str(&raw)?;
    tracing::debug!(path = %path.display(), toggles = filter.len(), "Loaded room filter");
    Ok(filter)
}

/// Inputs shared by the week and day renders.
struct Loaded {
    zone: Tz,
    anchor: NaiveDate,
    filter: RoomFilter,
    meetings: Vec<Meeting>,
    geometry: GridGeometry,
}

async fn load(
    settings: &Settings,
    anchor: Option<NaiveDate>,
    now: DateTime<Utc>,
    range_of: fn(NaiveDate) -> DateRange,
) -> AppResult<Loaded> {
    let zone = resolve_zone(&settings.display.timezone)?;
    let anchor = anchor.unwrap_or_else(|| local_date(now, zone));
    let range = range_of(anchor);

    let filter = load_filter(settings.source.filter_path.as_deref()).await?;
    let source = JsonFileSource::new(&settings.source.meetings_path, zone);
    let meetings = source.meetings_between(range).await?;
    tracing::info!(%range, meetings = meetings.len(), "Loaded meetings for view");

    Ok(Loaded {
        zone,
        anchor,
        filter,
        meetings,
        geometry: GridGeometry {
            hour_height: settings.display.hour_height,
            header_offset: settings.display.header_offset,
        },
    })
}

/// ## Summary
/// Builds and renders the week containing `anchor`, or the current week in
/// the display zone when no anchor is given.
///
/// ## Errors
///
/// Returns an error if the display zone is unknown, or the meetings or filter
/// file cannot be read.
pub async fn run(
    settings: &Settings,
    anchor: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> AppResult<WeekRender> {
    let loaded = load(settings, anchor, now, DateRange::week_of).await?;
    let resolver = OccurrenceResolver::new(loaded.zone);
    let view = build_week_view(&loaded.meetings, loaded.anchor, &loaded.filter, &resolver);

    Ok(render_week(&view, &loaded.geometry, loaded.zone, now))
}

/// ## Summary
/// Builds and renders the single day `anchor`, or today in the display zone.
///
/// ## Errors
///
/// Same as [`run`].
pub async fn run_day(
    settings: &Settings,
    anchor: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> AppResult<DayViewRender> {
    let loaded = load(settings, anchor, now, DateRange::day).await?;
    let resolver = OccurrenceResolver::new(loaded.zone);
    let column = build_day_column(&loaded.meetings, loaded.anchor, &loaded.filter, &resolver);

    Ok(render_day_view(&column, &loaded.geometry, loaded.zone, now))
}
