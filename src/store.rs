// src/store.rs
//
// In-memory cache for the last batch. Nothing here touches disk: results
// live for one TTL window and are refetched after that or on manual refresh.

use std::time::{Duration, Instant};

use crate::config::consts::CACHE_TTL_SECS;
use crate::model::WardResult;

pub struct BatchCache {
    ttl: Duration,
    entry: Option<(Instant, Vec<WardResult>)>,
}

impl Default for BatchCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(CACHE_TTL_SECS))
    }
}

impl BatchCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn ttl(&self) -> Duration { self.ttl }

    pub fn put(&mut self, results: Vec<WardResult>) {
        self.put_at(Instant::now(), results);
    }

    pub fn put_at(&mut self, at: Instant, results: Vec<WardResult>) {
        self.entry = Some((at, results));
    }

    /// Fresh results, or None once the TTL has run out.
    pub fn get(&self) -> Option<&[WardResult]> {
        self.get_at(Instant::now())
    }

    pub fn get_at(&self, now: Instant) -> Option<&[WardResult]> {
        match &self.entry {
            Some((at, results)) if now.saturating_duration_since(*at) < self.ttl => Some(results),
            _ => None,
        }
    }

    /// Last results regardless of age; the dashboard keeps showing them while refetching.
    pub fn last(&self) -> Option<&[WardResult]> {
        self.entry.as_ref().map(|(_, r)| r.as_slice())
    }

    pub fn age(&self) -> Option<Duration> {
        self.entry.as_ref().map(|(at, _)| at.elapsed())
    }

    pub fn is_stale(&self) -> bool {
        self.get().is_none()
    }

    /// Manual refresh.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<WardResult> {
        vec![WardResult::connection_error(1, "x")]
    }

    #[test]
    fn fresh_then_expired() {
        let mut c = BatchCache::new(Duration::from_secs(60));
        assert!(c.get().is_none());

        let t0 = Instant::now();
        c.put_at(t0, batch());
        assert_eq!(c.get_at(t0 + Duration::from_secs(59)).map(|r| r.len()), Some(1));
        assert!(c.get_at(t0 + Duration::from_secs(60)).is_none());
        // still available for display while a refetch runs
        assert!(c.last().is_some());
    }

    #[test]
    fn clear_invalidates() {
        let mut c = BatchCache::default();
        c.put(batch());
        assert!(!c.is_stale());
        c.clear();
        assert!(c.is_stale());
        assert!(c.last().is_none());
    }
}
