//! Filter-key normalisation for room and category toggles.
//!
//! ## Summary
//! The calendar sidebar stores one boolean per room or category, keyed by the
//! display name with everything but letters and digits removed. Keys are
//! case-preserving so `"Room for Improvement"` becomes `"RoomforImprovement"`.

/// Normalise a display name into a filter key.
///
/// Strips whitespace, punctuation and every other non-alphanumeric character.
///
/// Examples:
/// - "Unity Room" -> "UnityRoom"
/// - "Small but Powerful - Right" -> "SmallbutPowerfulRight"
/// - "Al-Anon" -> "AlAnon"
#[must_use]
pub fn filter_key(name: &str) -> String {
    name.chars().filter(|c| c.is_alphanumeric()).collect()
}
