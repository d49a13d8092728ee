//! Recurrence patterns as stored with a meeting, and the rule they resolve to.

use std::num::NonZeroU32;

use chrono::Weekday;
use roomwise_time::format::weekday_name;
use serde::{Deserialize, Serialize};

/// Recurrence pattern in its stored form.
///
/// Only `"weekly"` is interpreted; other kinds are kept verbatim and resolve to
/// [`RecurrenceRule::Unsupported`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrencePattern {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default)]
    pub days_of_week: Vec<String>,
}

const fn default_interval() -> u32 {
    1
}

/// Interpreted recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceRule {
    /// Fires on `days` every `interval` weeks, counted from the series start.
    Weekly {
        interval: NonZeroU32,
        /// Distinct weekdays in the order they were stored.
        days: Vec<Weekday>,
    },
    /// A pattern kind this calendar does not expand. Treated as occurring on
    /// every date checked.
    Unsupported { kind: String },
}

impl RecurrencePattern {
    /// Builds a weekly pattern in stored form.
    #[must_use]
    pub fn weekly(interval: u32, days: &[Weekday]) -> Self {
        Self {
            kind: "weekly".to_string(),
            interval,
            days_of_week: days.iter().map(|d| weekday_name(*d).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn is_weekly(&self) -> bool {
        self.kind.trim().eq_ignore_ascii_case("weekly")
    }

    /// ## Summary
    /// Interprets the stored pattern.
    ///
    /// Returns `None` when the pattern is malformed (a weekly pattern with a
    /// zero interval); callers treat that as a single, non-recurring meeting.
    /// Weekday names that do not parse are skipped.
    #[must_use]
    pub fn rule(&self) -> Option<RecurrenceRule> {
        if !self.is_weekly() {
            return Some(RecurrenceRule::Unsupported {
                kind: self.kind.clone(),
            });
        }

        let Some(interval) = NonZeroU32::new(self.interval) else {
            tracing::trace!(kind = %self.kind, "Weekly pattern with zero interval");
            return None;
        };

        let mut days = Vec::with_capacity(self.days_of_week.len());
        for name in &self.days_of_week {
            match name.trim().parse::<Weekday>() {
                Ok(day) if !days.contains(&day) => days.push(day),
                Ok(_) => {}
                Err(_) => tracing::trace!(day = %name, "Skipping unknown weekday name"),
            }
        }

        Some(RecurrenceRule::Weekly { interval, days })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_rule_parses_names() {
        let pattern = RecurrencePattern {
            kind: "weekly".to_string(),
            interval: 2,
            days_of_week: vec![
                "Wednesday".to_string(),
                "Monday".to_string(),
                "Wednesday".to_string(),
                "Funday".to_string(),
            ],
        };

        assert_eq!(
            pattern.rule(),
            Some(RecurrenceRule::Weekly {
                interval: NonZeroU32::new(2).unwrap(),
                days: vec![Weekday::Wed, Weekday::Mon],
            })
        );
    }

    #[test]
    fn test_zero_interval_is_malformed() {
        let pattern = RecurrencePattern::weekly(0, &[Weekday::Mon]);
        assert_eq!(pattern.rule(), None);
    }

    #[test]
    fn test_other_kinds_are_unsupported() {
        let pattern = RecurrencePattern {
            kind: "monthly".to_string(),
            interval: 1,
            days_of_week: Vec::new(),
        };
        assert_eq!(
            pattern.rule(),
            Some(RecurrenceRule::Unsupported {
                kind: "monthly".to_string()
            })
        );
    }

    #[test]
    fn test_deserialize_stored_form() {
        let pattern: RecurrencePattern =
            serde_json::from_str(r#"{"type":"weekly","interval":1,"daysOfWeek":["Friday"]}"#)
                .unwrap();
        assert!(pattern.is_weekly());
        assert_eq!(pattern.days_of_week, vec!["Friday".to_string()]);

        let defaulted: RecurrencePattern = serde_json::from_str(r#"{"type":"weekly"}"#).unwrap();
        assert_eq!(defaulted.interval, 1);
        assert!(defaulted.days_of_week.is_empty());
    }

    #[test]
    fn test_weekly_builder_uses_full_names() {
        let pattern = RecurrencePattern::weekly(1, &[Weekday::Tue, Weekday::Sat]);
        assert_eq!(pattern.days_of_week, vec!["Tuesday", "Saturday"]);
    }
}
