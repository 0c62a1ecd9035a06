// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use eframe::egui;

use crate::{model::WardStatus, progress::Progress};

/// What the toolbar shows while a batch runs. Written by the fetch thread,
/// read by the UI thread every frame.
#[derive(Clone, Debug, Default)]
pub struct StatusLine {
    pub text: String,
    pub done: usize,
    pub total: usize,
}

impl StatusLine {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 { 0.0 } else { self.done as f32 / self.total as f32 }
    }
}

pub struct GuiProgress {
    status: Arc<Mutex<StatusLine>>,
    ctx: egui::Context,
    failed: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<StatusLine>>, ctx: egui::Context) -> Self {
        Self { status, ctx, failed: 0 }
    }

    fn update(&self, f: impl FnOnce(&mut StatusLine)) {
        if let Ok(mut s) = self.status.lock() {
            f(&mut s);
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.update(|s| {
            s.total = total;
            s.done = 0;
            s.text = format!("Fetching {total} wards…");
        });
    }
    fn log(&mut self, msg: &str) {
        self.update(|s| s.text = s!(msg));
    }
    fn item_done(&mut self, ward: u32, status: WardStatus, done: usize, total: usize) {
        if status == WardStatus::ConnectionError {
            self.failed += 1;
        }
        self.update(|s| {
            s.done = done;
            s.total = total;
            s.text = format!("Fetched ward {ward}: {status} ({done}/{total})");
        });
    }
    fn finish(&mut self) {
        let failed = self.failed;
        self.update(|s| {
            s.text = if s.total == 0 {
                s!("Fetch complete")
            } else if failed > 0 {
                format!("Fetch complete ({}/{}, {failed} failed)", s.done, s.total)
            } else {
                format!("Fetch complete ({}/{})", s.done, s.total)
            };
        });
    }
}
