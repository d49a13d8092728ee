//! Sidebar toggles that hide meetings by room.

use std::collections::{HashMap, HashSet};

use roomwise_core::util::filter_key;
use serde::{Deserialize, Serialize};

/// Mapping from filter key to enabled flag.
///
/// Keys are normalised with [`filter_key`] on insertion, so both
/// `"Unity Room"` and `"UnityRoom"` address the same toggle. A key that is
/// absent is treated as enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, bool>", into = "HashMap<String, bool>")]
pub struct RoomFilter {
    toggles: HashMap<String, bool>,
}

impl RoomFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, enabled: bool) {
        self.toggles.insert(filter_key(name), enabled);
    }

    #[must_use]
    pub fn with(mut self, name: &str, enabled: bool) -> Self {
        self.set(name, enabled);
        self
    }

    /// Whether the toggle for `name` is on. Unknown names are on.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.toggles.get(&filter_key(name)) != Some(&false)
    }

    /// Whether meetings held in `room` should be shown.
    #[must_use]
    pub fn includes_room(&self, room: &str) -> bool {
        self.is_enabled(room)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }
}

/// Keys already in normalised form take precedence over aliases that
/// normalise to them. Among aliases alone, any disabled one disables the room.
/// The result does not depend on map iteration order.
impl From<HashMap<String, bool>> for RoomFilter {
    fn from(raw: HashMap<String, bool>) -> Self {
        let mut toggles = HashMap::with_capacity(raw.len());
        let mut exact = HashSet::new();

        for (name, enabled) in raw {
            let key = filter_key(&name);
            if key == name {
                exact.insert(key.clone());
                toggles.insert(key, enabled);
            } else if !exact.contains(&key) {
                toggles
                    .entry(key)
                    .and_modify(|current: &mut bool| *current &= enabled)
                    .or_insert(enabled);
            }
        }

        Self { toggles }
    }
}

impl From<RoomFilter> for HashMap<String, bool> {
    fn from(filter: RoomFilter) -> Self {
        filter.toggles
    }
}

impl<K: AsRef<str>> FromIterator<(K, bool)> for RoomFilter {
    fn from_iter<T: IntoIterator<Item = (K, bool)>>(iter: T) -> Self {
        let mut filter = Self::new();
        for (name, enabled) in iter {
            filter.set(name.as_ref(), enabled);
        }
        filter
    }
}
