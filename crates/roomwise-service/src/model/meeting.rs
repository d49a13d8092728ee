use chrono::{DateTime, TimeDelta, Utc};
use roomwise_core::types::{CalType, ModeType};
use serde::{Deserialize, Serialize};

use super::recurrence::{RecurrencePattern, RecurrenceRule};

/// A meeting as stored by the scheduling backend.
///
/// Instants are UTC. Field names follow the stored camelCase records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    #[serde(alias = "id")]
    pub mid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_pattern: Option<RecurrencePattern>,
    pub room: String,
    pub mode_type: ModeType,
    pub cal_type: CalType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_link: Option<String>,
}

impl Meeting {
    /// `endDateTime - startDateTime`.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end_date_time - self.start_date_time
    }

    /// ## Summary
    /// The recurrence rule that governs this meeting, if any.
    ///
    /// `None` for non-recurring meetings, recurring meetings without a
    /// pattern, and malformed patterns. All of these occur only on the
    /// original start date.
    #[must_use]
    pub fn recurrence_rule(&self) -> Option<RecurrenceRule> {
        if !self.is_recurring {
            return None;
        }
        self.recurrence_pattern.as_ref()?.rule()
    }
}
