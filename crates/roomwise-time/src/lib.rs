//! Timezone resolution, local calendar arithmetic and display formatting.
//!
//! Instants are stored in UTC; calendar dates and wall-clock times are always
//! evaluated in an explicit display zone rather than the host's local zone.

pub mod error;
pub mod format;
pub mod local;
pub mod zone;

pub use chrono_tz::Tz;
pub use error::{TimeError, TimeResult};
pub use zone::{ZoneResolver, resolve_zone};
