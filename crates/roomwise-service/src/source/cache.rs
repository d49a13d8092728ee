//! Per-week memoisation of meeting fetches.
//!
//! Entries never expire on their own. Callers invalidate a week after
//! creating, editing or deleting a meeting in it.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use super::{DateRange, MeetingSource};
use crate::error::ServiceResult;
use crate::model::Meeting;

/// Hit and miss counters for a [`WeekCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of cached ranges
    pub size: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// hits / (hits + misses), or 0 before any lookup.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "counters stay far below 2^52")]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Meeting lists keyed by the date range they were fetched for.
#[derive(Debug, Default)]
pub struct WeekCache {
    entries: HashMap<DateRange, Arc<[Meeting]>>,
    hits: u64,
    misses: u64,
}

impl WeekCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached meetings for exactly `range`, counting the lookup.
    pub fn get(&mut self, range: &DateRange) -> Option<Arc<[Meeting]>> {
        if let Some(meetings) = self.entries.get(range) {
            self.hits += 1;
            Some(Arc::clone(meetings))
        } else {
            self.misses += 1;
            None
        }
    }

    /// Stores `meetings` for `range`, replacing any previous list.
    pub fn insert(&mut self, range: DateRange, meetings: Vec<Meeting>) -> Arc<[Meeting]> {
        let meetings: Arc<[Meeting]> = meetings.into();
        self.entries.insert(range, Arc::clone(&meetings));
        meetings
    }

    /// Drops the list for exactly `range`. Returns whether one was cached.
    pub fn invalidate(&mut self, range: &DateRange) -> bool {
        self.entries.remove(range).is_some()
    }

    /// Drops every cached range that includes `date`. Returns how many were dropped.
    pub fn invalidate_containing(&mut self, date: NaiveDate) -> usize {
        let before = self.entries.len();
        self.entries.retain(|range, _| !range.contains(date));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

/// A [`MeetingSource`] wrapped with a [`WeekCache`].
#[derive(Debug)]
pub struct CachedSource<S> {
    inner: S,
    cache: WeekCache,
}

impl<S: MeetingSource> CachedSource<S> {
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: WeekCache::new(),
        }
    }

    /// ## Summary
    /// Meetings for `range`, fetched from the inner source at most once until
    /// the range is invalidated.
    ///
    /// ## Errors
    ///
    /// Propagates the inner source's error. Failed fetches are not cached.
    pub async fn meetings_between(&mut self, range: DateRange) -> ServiceResult<Arc<[Meeting]>> {
        if let Some(meetings) = self.cache.get(&range) {
            tracing::debug!(%range, "Using cached meetings for week");
            return Ok(meetings);
        }

        tracing::debug!(%range, "Fetching meetings for week");
        let meetings = self.inner.meetings_between(range).await?;
        Ok(self.cache.insert(range, meetings))
    }

    pub fn cache_mut(&mut self) -> &mut WeekCache {
        &mut self.cache
    }

    #[must_use]
    pub const fn cache(&self) -> &WeekCache {
        &self.cache
    }

    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.inner
    }
}
