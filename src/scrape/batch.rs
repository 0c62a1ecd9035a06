// src/scrape/batch.rs
use std::{
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
    thread,
};

use crate::{
    config::{FetchPolicy, JurisdictionConfig},
    model::WardResult,
    progress::Progress,
};

use super::{portal::WardSource, retry::fetch_ward_with_retry};

/// Fetch every ward of the jurisdiction on a bounded pool of threads.
/// Always returns exactly one record per ward, sorted by ward number.
pub fn fetch_all<S: WardSource + ?Sized>(
    source: &S,
    jurisdiction: &JurisdictionConfig,
    policy: &FetchPolicy,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<WardResult> {
    let wards: Vec<u32> = jurisdiction.wards().collect();
    let total = wards.len();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }
    if wards.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No wards configured.");
            p.finish();
        }
        return Vec::new();
    }

    // Concurrency
    let next = AtomicUsize::new(0);
    let completed = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<WardResult>();
    let workers = policy.effective_workers(total);

    logf!(
        "Batch: Begin district={} ulb={} wards={} workers={}",
        jurisdiction.district_id, jurisdiction.ulb_id, total, workers
    );
    let started = std::time::Instant::now();

    let mut results: Vec<WardResult> = Vec::with_capacity(total);

    thread::scope(|scope| {
        // Spawn workers
        for _ in 0..workers {
            let tx = res_tx.clone();
            let (wards, next, completed) = (&wards, &next, &completed);

            scope.spawn(move || {
                loop {
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    let Some(&ward) = wards.get(i) else { break };

                    let result = fetch_ward_with_retry(source, jurisdiction, ward, policy);
                    completed.fetch_add(1, Ordering::Relaxed);
                    if tx.send(result).is_err() {
                        break;
                    }
                }
            });
        }
        drop(res_tx); // collector is sole receiver now

        // Aggregate in completion order
        for result in res_rx.iter() {
            if let Some(p) = progress.as_deref_mut() {
                let done = completed.load(Ordering::Relaxed).max(results.len() + 1);
                p.item_done(result.ward_number(), result.status(), done, total);
            }
            results.push(result);
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Completion order must never leak out
    results.sort_by_key(|r| r.ward_number());

    let failed = results.iter().filter(|r| r.error().is_some()).count();
    logf!(
        "Batch: Done {} ward(s), {} failed, in {:?}",
        results.len(), failed, started.elapsed()
    );
    results
}
