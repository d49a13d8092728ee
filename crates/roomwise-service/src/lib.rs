//! Meeting calendar logic: recurrence resolution, day-grid layout, room
//! filtering, week assembly and cached meeting sources.

pub mod calendar;
pub mod error;
pub mod filter;
pub mod model;
pub mod rooms;
pub mod source;
