// src/tally.rs
//
// Aggregates the dashboard shows above the ward grid.

use std::collections::BTreeMap;

use crate::config::consts::PARTY_ALIASES;
use crate::model::{WardResult, WardStatus};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub declared: usize,
    pub pending: usize,
    pub failed: usize,
}

pub fn counts(results: &[WardResult]) -> Counts {
    let mut c = Counts::default();
    for r in results {
        match r.status() {
            WardStatus::Declared => c.declared += 1,
            WardStatus::Pending => c.pending += 1,
            WardStatus::ConnectionError => c.failed += 1,
        }
    }
    c
}

/// Full party label for the few abbreviations the portal uses.
pub fn party_label(party: &str) -> String {
    let p = party.trim();
    PARTY_ALIASES
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(p))
        .map(|(_, full)| s!(*full))
        .unwrap_or_else(|| s!(p))
}

/// Wards won per party, most wins first, ties by name.
pub fn party_wins(results: &[WardResult]) -> Vec<(String, usize)> {
    let mut by_party: BTreeMap<String, usize> = BTreeMap::new();
    for w in results.iter().filter(|r| r.is_declared()).filter_map(|r| r.winner()) {
        *by_party.entry(party_label(&w.party)).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = by_party.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}
