use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::util::filter_key;

/// How attendees join a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeType {
    #[serde(alias = "In-Person", alias = "In Person")]
    InPerson,
    Hybrid,
    Remote,
}

impl ModeType {
    /// Filter key used by the sidebar toggles.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InPerson => "InPerson",
            Self::Hybrid => "Hybrid",
            Self::Remote => "Remote",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InPerson => "In Person",
            Self::Hybrid => "Hybrid",
            Self::Remote => "Remote",
        }
    }
}

impl std::fmt::Display for ModeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModeType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match filter_key(s).as_str() {
            "InPerson" => Ok(Self::InPerson),
            "Hybrid" => Ok(Self::Hybrid),
            "Remote" => Ok(Self::Remote),
            _ => Err(CoreError::ParseError(format!("unknown meeting mode: {s}"))),
        }
    }
}

/// Which fellowship calendar a meeting belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalType {
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AlAnon", alias = "Al-Anon", alias = "Al Anon")]
    AlAnon,
    Other,
}

impl CalType {
    /// Filter key used by the sidebar toggles.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::AlAnon => "AlAnon",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::AlAnon => "Al-Anon",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for CalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CalType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match filter_key(s).as_str() {
            "AA" => Ok(Self::Aa),
            "AlAnon" => Ok(Self::AlAnon),
            "Other" => Ok(Self::Other),
            _ => Err(CoreError::ParseError(format!("unknown calendar type: {s}"))),
        }
    }
}
