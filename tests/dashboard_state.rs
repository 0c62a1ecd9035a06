// tests/dashboard_state.rs
//
// Dashboard bookkeeping without UI: view transitions, cache expiry, tallies.
//
use std::time::{Duration, Instant};

use ward_results::config::{AppState, View};
use ward_results::model::{CandidateRecord, ParsedWard, Summary, WardResult};
use ward_results::store::BatchCache;
use ward_results::tally;

fn won(ward: u32, party: &str) -> WardResult {
    let rows = vec![CandidateRecord {
        serial: "1".into(),
        name: format!("Winner {ward}"),
        party: party.into(),
        votes: 100,
        status_text: "Elected".into(),
    }];
    WardResult::from_parsed(ward, ParsedWard::from_rows(Summary::new(), rows))
}

#[test]
fn open_and_close_detail() {
    let mut st = AppState::default();
    st.open_detail(3);
    assert_eq!(st.view(), View::Detail(3));
    st.open_detail(5);
    assert_eq!(st.selected_ward(), Some(5));
    st.back_to_dashboard();
    assert_eq!(st.view(), View::Dashboard);
}

#[test]
fn cache_expires_but_keeps_last_batch_for_display() {
    let mut cache = BatchCache::new(Duration::from_secs(60));
    let t0 = Instant::now();
    cache.put_at(t0, vec![won(1, "INC"), WardResult::connection_error(2, "timeout")]);

    assert!(cache.get_at(t0 + Duration::from_secs(30)).is_some());
    assert!(cache.get_at(t0 + Duration::from_secs(61)).is_none());
    assert_eq!(cache.last().map(|r| r.len()), Some(2));
}

#[test]
fn tally_over_a_mixed_batch() {
    let batch = vec![
        won(1, "INC"),
        won(2, "IND"),
        WardResult::from_parsed(3, ParsedWard::pending()),
        WardResult::connection_error(4, "token not found on landing page"),
        won(5, "INC"),
    ];

    let c = tally::counts(&batch);
    assert_eq!((c.declared, c.pending, c.failed), (3, 1, 1));
    assert_eq!(
        tally::party_wins(&batch),
        vec![("INC".to_string(), 2), ("Independent".to_string(), 1)]
    );
}
