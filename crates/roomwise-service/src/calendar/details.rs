//! Text shown in the meeting details panel.

use chrono::NaiveDate;
use roomwise_time::format::{format_clock, format_date};
use serde::Serialize;

use super::recurrence::OccurrenceResolver;
use crate::model::{Meeting, RecurrencePattern};

/// Human readable recurrence summary, e.g. `"Repeats biweekly on Monday, Thursday"`.
#[must_use]
pub fn describe_recurrence(pattern: Option<&RecurrencePattern>) -> String {
    let Some(pattern) = pattern else {
        return "Repeats regularly".to_string();
    };

    let interval_text = if pattern.is_weekly() {
        match pattern.interval {
            1 => "weekly".to_string(),
            2 => "biweekly".to_string(),
            3 => "triweekly".to_string(),
            n => format!("every {n} weeks"),
        }
    } else {
        "regularly".to_string()
    };

    let days_text = if pattern.days_of_week.is_empty() {
        String::new()
    } else {
        format!(" on {}", pattern.days_of_week.join(", "))
    };

    format!("Repeats {interval_text}{days_text}")
}

/// Date and time labels for a selected meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetails {
    /// `"06/02/2025"`
    pub date_label: String,
    /// `"10:00 AM - 11:00 AM"`
    pub time_label: String,
    /// Present only for recurring meetings.
    pub recurrence_label: Option<String>,
}

/// ## Summary
/// Builds the details labels for `meeting`.
///
/// When the meeting recurs and `selected` is one of its occurrence dates, the
/// labels describe that occurrence; otherwise they describe the stored start
/// and end.
#[must_use]
pub fn meeting_details(
    meeting: &Meeting,
    selected: Option<NaiveDate>,
    resolver: &OccurrenceResolver,
) -> MeetingDetails {
    let zone = resolver.zone();
    let (start, end) = selected
        .filter(|_| meeting.is_recurring)
        .and_then(|date| resolver.occurrence_on(meeting, date))
        .map_or((meeting.start_date_time, meeting.end_date_time), |o| {
            (o.start, o.end)
        });

    MeetingDetails {
        date_label: format_date(start, zone),
        time_label: format!("{} - {}", format_clock(start, zone), format_clock(end, zone)),
        recurrence_label: meeting
            .is_recurring
            .then(|| describe_recurrence(meeting.recurrence_pattern.as_ref())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc, Weekday};
    use roomwise_core::types::{CalType, ModeType};

    fn meeting(pattern: Option<RecurrencePattern>) -> Meeting {
        Meeting {
            mid: "m-9".to_string(),
            title: "Step Study".to_string(),
            description: None,
            creator: None,
            group: None,
            email: None,
            start_date_time: Utc.with_ymd_and_hms(2025, 6, 2, 14, 45, 0).unwrap(),
            end_date_time: Utc.with_ymd_and_hms(2025, 6, 2, 15, 45, 0).unwrap(),
            is_recurring: pattern.is_some(),
            recurrence_pattern: pattern,
            room: "Seeds of Hope".to_string(),
            mode_type: ModeType::Hybrid,
            cal_type: CalType::AlAnon,
            zoom_account: Some("Zoom Account 1".to_string()),
            zoom_link: None,
        }
    }

    #[test]
    fn test_describe_intervals() {
        let cases = [
            (1, "Repeats weekly on Monday"),
            (2, "Repeats biweekly on Monday"),
            (3, "Repeats triweekly on Monday"),
            (5, "Repeats every 5 weeks on Monday"),
        ];
        for (interval, expected) in cases {
            let pattern = RecurrencePattern::weekly(interval, &[Weekday::Mon]);
            assert_eq!(describe_recurrence(Some(&pattern)), expected);
        }
    }

    #[test]
    fn test_describe_multiple_days_and_none() {
        let pattern = RecurrencePattern::weekly(1, &[Weekday::Mon, Weekday::Thu]);
        assert_eq!(
            describe_recurrence(Some(&pattern)),
            "Repeats weekly on Monday, Thursday"
        );
        assert_eq!(describe_recurrence(None), "Repeats regularly");
    }

    #[test]
    fn test_describe_unsupported_kind() {
        let pattern = RecurrencePattern {
            kind: "monthly".to_string(),
            interval: 1,
            days_of_week: Vec::new(),
        };
        assert_eq!(describe_recurrence(Some(&pattern)), "Repeats regularly");
    }

    #[test]
    fn test_details_for_single_meeting() {
        let details = meeting_details(
            &meeting(None),
            NaiveDate::from_ymd_opt(2025, 6, 9),
            &OccurrenceResolver::default(),
        );

        assert_eq!(details.date_label, "06/02/2025");
        assert_eq!(details.time_label, "10:45 AM - 11:45 AM");
        assert_eq!(details.recurrence_label, None);
    }

    #[test]
    fn test_details_for_selected_occurrence() {
        let recurring = meeting(Some(RecurrencePattern::weekly(1, &[Weekday::Mon])));
        let details = meeting_details(
            &recurring,
            NaiveDate::from_ymd_opt(2025, 6, 16),
            &OccurrenceResolver::default(),
        );

        assert_eq!(details.date_label, "06/16/2025");
        assert_eq!(details.time_label, "10:45 AM - 11:45 AM");
        assert_eq!(
            details.recurrence_label.as_deref(),
            Some("Repeats weekly on Monday")
        );
    }

    #[test]
    fn test_details_fall_back_when_date_does_not_occur() {
        let recurring = meeting(Some(RecurrencePattern::weekly(1, &[Weekday::Mon])));
        let details = meeting_details(
            &recurring,
            NaiveDate::from_ymd_opt(2025, 6, 17),
            &OccurrenceResolver::default(),
        );

        assert_eq!(details.date_label, "06/02/2025");
    }
}
