//! Timezone identifier resolution.
//!
//! Uses ICU4X for Windows timezone ID to IANA mapping and alias canonicalization,
//! so a display zone may be configured as `America/New_York`, `US/Eastern` or
//! `Eastern Standard Time`.

use std::collections::HashMap;
use std::str::FromStr;

use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;

use crate::error::{TimeError, TimeResult};

/// Resolver for timezone identifiers.
///
/// Maintains a cache of resolved timezones keyed by the identifier as given.
#[derive(Debug, Default)]
pub struct ZoneResolver {
    cache: HashMap<String, Tz>,
}

impl ZoneResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Resolves a timezone identifier to a `chrono_tz::Tz`.
    ///
    /// Windows names and IANA aliases are normalised to canonical IANA names
    /// before parsing.
    ///
    /// ## Errors
    ///
    /// Returns `TimeError::UnknownTimezone` if the identifier cannot be resolved.
    ///
    /// ## Side Effects
    ///
    /// Caches successful resolutions to avoid repeated parsing.
    pub fn resolve(&mut self, tzid: &str) -> TimeResult<Tz> {
        if let Some(tz) = self.cache.get(tzid) {
            return Ok(*tz);
        }

        let normalized = normalize_tzid(tzid.trim());
        let tz = Tz::from_str(&normalized)
            .map_err(|_e| TimeError::UnknownTimezone(tzid.to_string()))?;
        tracing::trace!(tzid, resolved = %tz.name(), "Resolved timezone");

        self.cache.insert(tzid.to_string(), tz);

        Ok(tz)
    }
}

/// ## Summary
/// Resolves a single timezone identifier without keeping a cache.
///
/// ## Errors
///
/// Returns `TimeError::UnknownTimezone` if the identifier cannot be resolved.
pub fn resolve_zone(tzid: &str) -> TimeResult<Tz> {
    ZoneResolver::new().resolve(tzid)
}

/// Normalizes Windows timezone names and IANA aliases to canonical IANA names.
fn normalize_tzid(tzid: &str) -> String {
    let windows_parser = WindowsParser::new();
    if let Some(tz) = windows_parser.parse(tzid, None) {
        let iana_parser = IanaParserExtended::new();
        for entry in iana_parser.iter() {
            if entry.time_zone == tz {
                return entry.canonical.to_string();
            }
        }
    }

    // Handles aliases like US/Eastern -> America/New_York
    let iana_parser = IanaParserExtended::new();
    let parsed = iana_parser.parse(tzid);
    if parsed.time_zone != icu::time::TimeZone::UNKNOWN {
        return parsed.canonical.to_string();
    }

    tzid.to_string()
}
