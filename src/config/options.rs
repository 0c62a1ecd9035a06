// src/config/options.rs
use std::ops::RangeInclusive;
use std::time::Duration;

use super::consts::*;

/// Which municipality we are scraping. Fixed for a run; the form fields are
/// sent verbatim so they stay strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JurisdictionConfig {
    pub district_id: String,
    pub ulb_id: String,
    pub year: String,
    pub election_id: String,
    pub total_wards: u32,
    pub base_url: String,
}

impl Default for JurisdictionConfig {
    fn default() -> Self {
        Self {
            district_id: s!(DISTRICT_ID),
            ulb_id: s!(ULB_ID),
            year: s!(YEAR),
            election_id: s!(ELECTION_ID),
            total_wards: TOTAL_WARDS,
            base_url: s!(BASE_URL),
        }
    }
}

impl JurisdictionConfig {
    pub fn wards(&self) -> RangeInclusive<u32> {
        1..=self.total_wards
    }

    pub fn with_ulb(mut self, ulb_id: impl Into<String>) -> Self {
        self.ulb_id = ulb_id.into();
        self
    }

    pub fn with_total_wards(mut self, total_wards: u32) -> Self {
        self.total_wards = total_wards;
        self
    }
}

/// Knobs for the retry wrapper and the worker pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchPolicy {
    pub workers: usize,
    pub max_attempts: u32,
    pub backoff_base: u32,
    /// One "second" of backoff. Tests shrink this to keep runs fast.
    pub backoff_unit: Duration,
    pub jitter_ms: u64,
    pub token_timeout: Duration,
    pub post_timeout: Duration,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            workers: WORKERS,
            max_attempts: MAX_ATTEMPTS,
            backoff_base: BACKOFF_BASE,
            backoff_unit: Duration::from_millis(BACKOFF_UNIT_MS),
            jitter_ms: JITTER_MS,
            token_timeout: Duration::from_secs(TOKEN_TIMEOUT_SECS),
            post_timeout: Duration::from_secs(POST_TIMEOUT_SECS),
        }
    }
}

impl FetchPolicy {
    /// Zero attempts would never produce a record.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay after failed attempt `attempt` (1-based): unit * base^attempt.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = self.backoff_base.saturating_pow(attempt);
        self.backoff_unit.saturating_mul(factor)
    }

    /// Pool size for a batch of `jobs` wards: 1..=MAX_WORKERS, never more than jobs.
    pub fn effective_workers(&self, jobs: usize) -> usize {
        self.workers.clamp(1, MAX_WORKERS).min(jobs).max(1)
    }

    /// Deterministic per-ward spread so workers don't hit the portal in lockstep.
    pub fn jitter_for(&self, ward: u32, attempt: u32) -> Duration {
        if self.jitter_ms == 0 {
            return Duration::ZERO;
        }
        let seed = (ward as u64).wrapping_mul(7_919) ^ (attempt as u64).wrapping_mul(104_729);
        Duration::from_millis(seed % self.jitter_ms)
    }

    /// Policy for tests and benches: no sleeping.
    pub fn immediate() -> Self {
        Self {
            backoff_unit: Duration::ZERO,
            jitter_ms: 0,
            ..Self::default()
        }
    }
}
