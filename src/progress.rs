// src/progress.rs
use crate::model::WardStatus;

/// Lightweight progress reporting for a batch fetch.
/// Frontends (GUI/CLI) implement this to surface status to users.
/// Advisory only; nothing in the fetch result depends on it.
pub trait Progress {
    /// Called at the start with the number of wards.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One ward finished (any status). `done` is the cumulative count.
    fn item_done(&mut self, _ward: u32, _status: WardStatus, _done: usize, _total: usize) {}

    /// Called at the end.
    fn finish(&mut self) {}
}

/// Prints `[done/total] Ward N: Status` to stderr.
pub struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("[i] Fetching {total} ward(s)…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("[i] {msg}");
    }
    fn item_done(&mut self, ward: u32, status: WardStatus, done: usize, total: usize) {
        eprintln!("[{done}/{total}] Ward {ward}: {status}");
    }
}
