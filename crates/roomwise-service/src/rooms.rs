//! Known rooms and Zoom accounts with their calendar colors.

use roomwise_core::types::{CalType, ModeType};

use crate::filter::RoomFilter;

pub const DEFAULT_ROOM_COLOR: &str = "#cecece";

/// Display name and color of every bookable location.
pub const ROOMS: &[(&str, &str)] = &[
    ("Serenity Room", "#b3ea75"),
    ("Seeds of Hope", "#f7e57b"),
    ("Unity Room", "#96dbfe"),
    ("Room for Improvement", "#ffae73"),
    ("Small but Powerful - Right", "#d2afff"),
    ("Small but Powerful - Left", "#ffa3c2"),
    ("Zoom Account 1", DEFAULT_ROOM_COLOR),
    ("Zoom Account 2", DEFAULT_ROOM_COLOR),
    ("Zoom Account 3", DEFAULT_ROOM_COLOR),
    ("Zoom Account 4", DEFAULT_ROOM_COLOR),
];

/// Calendar color for `room`, gray when the room is not known.
#[must_use]
pub fn room_color(room: &str) -> &'static str {
    ROOMS
        .iter()
        .find(|(name, _)| *name == room)
        .map_or(DEFAULT_ROOM_COLOR, |&(_, color)| color)
}

/// The sidebar's initial state: every room, calendar and mode toggled on.
#[must_use]
pub fn default_filter() -> RoomFilter {
    let rooms = ROOMS.iter().map(|(name, _)| *name);
    let calendars = [CalType::Aa, CalType::AlAnon, CalType::Other].map(CalType::as_str);
    let modes = [ModeType::InPerson, ModeType::Hybrid, ModeType::Remote].map(ModeType::as_str);

    rooms
        .chain(calendars)
        .chain(modes)
        .map(|name| (name, true))
        .collect()
}
