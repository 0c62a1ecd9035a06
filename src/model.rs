// src/model.rs
//
// Per-ward result records. Built once per fetch attempt, never mutated after.

use std::collections::BTreeMap;
use std::fmt;

/// Free-form key/value pairs from the colspan header row,
/// e.g. "Reserved for" → "UR(G)". Keys are not validated.
pub type Summary = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WardStatus {
    Pending,
    Declared,
    ConnectionError,
}

impl WardStatus {
    pub fn label(self) -> &'static str {
        match self {
            WardStatus::Pending => "Pending",
            WardStatus::Declared => "Declared",
            WardStatus::ConnectionError => "Error",
        }
    }
}

impl fmt::Display for WardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateRecord {
    pub serial: String,
    pub name: String,
    pub party: String,
    pub votes: u64,
    pub status_text: String,
}

impl CandidateRecord {
    /// "Elected", "WON", "won by 12 votes" … all count.
    pub fn is_winner(&self) -> bool {
        let s = self.status_text.to_lowercase();
        s.contains("elected") || s.contains("won")
    }
}

/// Parser output, before a ward number is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedWard {
    pub status: WardStatus,
    pub summary: Summary,
    /// Summary row text as the portal sent it, one line per colspan row.
    pub summary_text: String,
    pub candidates: Vec<CandidateRecord>,
    pub winner: Option<CandidateRecord>,
}

impl ParsedWard {
    /// No results table on the page (counting not started, or a bad selection).
    pub fn pending() -> Self {
        Self {
            status: WardStatus::Pending,
            summary: Summary::new(),
            summary_text: String::new(),
            candidates: Vec::new(),
            winner: None,
        }
    }

    /// Winner is the first candidate in row order with an elected/won marker.
    pub fn from_rows(summary: Summary, candidates: Vec<CandidateRecord>) -> Self {
        let winner = candidates.iter().find(|c| c.is_winner()).cloned();
        let status = if winner.is_some() { WardStatus::Declared } else { WardStatus::Pending };
        Self { status, summary, summary_text: String::new(), candidates, winner }
    }

    pub fn with_summary_text(mut self, text: impl Into<String>) -> Self {
        self.summary_text = text.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WardResult {
    ward_number: u32,
    status: WardStatus,
    summary: Summary,
    summary_text: String,
    candidates: Vec<CandidateRecord>,
    /// Row index into `candidates`
    winner: Option<usize>,
    error: Option<String>,
}

impl WardResult {
    /// Status and winner are derived from the candidate rows again; whatever
    /// the caller put in `parsed.status` / `parsed.winner` is not trusted.
    pub fn from_parsed(ward_number: u32, parsed: ParsedWard) -> Self {
        let winner = parsed.candidates.iter().position(CandidateRecord::is_winner);
        let status = if winner.is_some() { WardStatus::Declared } else { WardStatus::Pending };
        if status != parsed.status {
            logd!("Ward {}: parsed status {} corrected to {}", ward_number, parsed.status, status);
        }
        Self {
            ward_number,
            status,
            summary: parsed.summary,
            summary_text: parsed.summary_text,
            candidates: parsed.candidates,
            winner,
            error: None,
        }
    }

    /// Terminal record once retries are exhausted.
    pub fn connection_error(ward_number: u32, msg: impl Into<String>) -> Self {
        Self {
            ward_number,
            status: WardStatus::ConnectionError,
            summary: Summary::new(),
            summary_text: String::new(),
            candidates: Vec::new(),
            winner: None,
            error: Some(msg.into()),
        }
    }

    pub fn ward_number(&self) -> u32 { self.ward_number }
    pub fn status(&self) -> WardStatus { self.status }
    pub fn summary(&self) -> &Summary { &self.summary }
    pub fn summary_text(&self) -> &str { &self.summary_text }
    pub fn candidates(&self) -> &[CandidateRecord] { &self.candidates }
    pub fn winner(&self) -> Option<&CandidateRecord> { self.winner.and_then(|i| self.candidates.get(i)) }
    pub fn error(&self) -> Option<&str> { self.error.as_deref() }

    /// True only for the winning row itself, even when serials repeat.
    pub fn is_winner_row(&self, row: usize) -> bool {
        self.winner == Some(row)
    }

    pub fn is_declared(&self) -> bool {
        self.status == WardStatus::Declared
    }

    /// Summary lookup with a fallback for keys the portal didn't send.
    pub fn summary_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.summary.get(key).map(String::as_str).unwrap_or(fallback)
    }

    /// Sum of candidate votes (what the table shows, not the summary's total).
    pub fn total_votes(&self) -> u64 {
        self.candidates.iter().map(|c| c.votes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(serial: &str, status: &str) -> CandidateRecord {
        CandidateRecord {
            serial: s!(serial),
            name: format!("Candidate {serial}"),
            party: s!("IND"),
            votes: 10,
            status_text: s!(status),
        }
    }

    #[test]
    fn winner_marker_is_case_insensitive() {
        assert!(cand("1", "Elected").is_winner());
        assert!(cand("1", "ELECTED").is_winner());
        assert!(cand("1", "Won").is_winner());
        assert!(!cand("1", "Lost").is_winner());
        assert!(!cand("1", "").is_winner());
    }

    #[test]
    fn first_marked_candidate_wins() {
        let p = ParsedWard::from_rows(
            Summary::new(),
            vec![cand("1", "Lost"), cand("2", "Elected"), cand("3", "won")],
        );
        assert_eq!(p.status, WardStatus::Declared);
        assert_eq!(p.winner.as_ref().map(|w| w.serial.as_str()), Some("2"));
    }

    #[test]
    fn no_marker_is_pending_without_winner() {
        let p = ParsedWard::from_rows(Summary::new(), vec![cand("1", ""), cand("2", "Lost")]);
        assert_eq!(p.status, WardStatus::Pending);
        assert!(p.winner.is_none());
        assert_eq!(p.candidates.len(), 2);
    }

    #[test]
    fn connection_error_is_empty() {
        let r = WardResult::connection_error(4, "boom");
        assert_eq!(r.status(), WardStatus::ConnectionError);
        assert!(r.candidates().is_empty());
        assert!(r.summary().is_empty());
        assert!(r.winner().is_none());
        assert_eq!(r.error(), Some("boom"));
        assert_eq!(r.summary_or("NOTA Votes", "0"), "0");
    }

    #[test]
    fn inconsistent_parse_cannot_fake_a_declaration() {
        let forged = ParsedWard {
            status: WardStatus::Declared,
            summary: Summary::new(),
            summary_text: String::new(),
            candidates: vec![cand("1", "Lost"), cand("2", "")],
            winner: None,
        };
        let r = WardResult::from_parsed(3, forged);
        assert_eq!(r.status(), WardStatus::Pending);
        assert!(r.winner().is_none());

        let forged = ParsedWard {
            status: WardStatus::Pending,
            winner: None,
            ..ParsedWard::from_rows(Summary::new(), vec![cand("1", "Elected")])
        };
        let r = WardResult::from_parsed(4, forged);
        assert!(r.is_declared());
        assert_eq!(r.winner().map(|w| w.serial.as_str()), Some("1"));
    }

    #[test]
    fn winner_row_is_positional_when_serials_repeat() {
        let r = WardResult::from_parsed(
            5,
            ParsedWard::from_rows(
                Summary::new(),
                vec![cand("", "Lost"), cand("", "Elected"), cand("", "")],
            ),
        );
        let rows: Vec<bool> = (0..3).map(|i| r.is_winner_row(i)).collect();
        assert_eq!(rows, vec![false, true, false]);
        assert_eq!(r.winner().map(|w| w.status_text.as_str()), Some("Elected"));
    }
}
