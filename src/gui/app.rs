// src/gui/app.rs
use std::{
    error::Error,
    sync::{ mpsc::{ self, TryRecvError }, Arc, Mutex },
    thread,
    time::{ Duration, Instant },
};

use eframe::egui;

use crate::{
    config::state::AppState,
    model::WardResult,
    scrape::{ fetch_all, LivePortal },
    store::BatchCache,
};

use super::{
    progress::{ GuiProgress, StatusLine },
    router,
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Ward Results",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last batch, refetched after the TTL or on Refresh
    pub cache: BatchCache,

    // status/progress (fetch thread writes here)
    pub status: Arc<Mutex<StatusLine>>,
    pub running: bool,

    rx: Option<mpsc::Receiver<Vec<WardResult>>>,
    // last fetch thread that died without a batch
    failed_at: Option<Instant>,
    title: String,
}

/// Auto-refetch gate: nothing in flight, cache stale, and no dead fetch
/// within the last TTL (empty cache included).
pub fn should_auto_fetch(
    running: bool,
    stale: bool,
    failed_at: Option<Instant>,
    now: Instant,
    ttl: Duration,
) -> bool {
    if running || !stale {
        return false;
    }
    match failed_at {
        Some(t) => now.saturating_duration_since(t) >= ttl,
        None => true,
    }
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!(
            "Init: district={} ulb={} year={} wards={}",
            state.jurisdiction.district_id,
            state.jurisdiction.ulb_id,
            state.jurisdiction.year,
            state.jurisdiction.total_wards
        );
        Self {
            state,
            cache: BatchCache::default(),
            status: Arc::new(Mutex::new(StatusLine { text: s!("Idle"), ..Default::default() })),
            running: false,
            rx: None,
            failed_at: None,
            title: String::new(),
        }
    }

    /* ---------- tiny helpers ---------- */

    /// Results on screen: the last batch, even while a newer one is in flight.
    #[inline]
    pub fn results(&self) -> &[WardResult] {
        self.cache.last().unwrap_or(&[])
    }

    #[inline]
    pub fn ward(&self, ward: u32) -> Option<&WardResult> {
        self.results().iter().find(|r| r.ward_number() == ward)
    }

    pub fn status_line(&self) -> StatusLine {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            s.text = msg.into();
        }
    }

    /// Run a full batch on a background thread. No-op while one is running.
    pub fn start_fetch(&mut self, ctx: &egui::Context) {
        if self.running {
            return;
        }
        let (tx, rx) = mpsc::channel();
        let jurisdiction = self.state.jurisdiction.clone();
        let policy = self.state.policy.clone();
        let status = Arc::clone(&self.status);
        let ctx = ctx.clone();

        self.running = true;
        self.rx = Some(rx);

        thread::spawn(move || {
            let source = LivePortal::new(policy.clone());
            let mut progress = GuiProgress::new(status, ctx.clone());
            let results = fetch_all(&source, &jurisdiction, &policy, Some(&mut progress));
            if tx.send(results).is_err() {
                logd!("GUI: Receiver gone, dropping batch");
            }
            ctx.request_repaint();
        });
    }

    /// Manual refresh: drop the cache and fetch again.
    pub fn refresh(&mut self, ctx: &egui::Context) {
        if self.running {
            return;
        }
        logf!("GUI: Manual refresh");
        self.failed_at = None;
        self.cache.clear();
        self.start_fetch(ctx);
    }

    fn poll(&mut self) {
        let msg = match &self.rx {
            Some(rx) => rx.try_recv(),
            None => return,
        };
        match msg {
            Ok(results) => {
                logf!("GUI: Batch received ({} wards)", results.len());
                self.cache.put(results);
                self.failed_at = None;
                self.running = false;
                self.rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                loge!("GUI: Fetch thread ended without results");
                self.status("Fetch failed, see debug log");
                self.running = false;
                self.rx = None;
                // stale batch stays on screen; auto-refetch waits one TTL
                self.failed_at = Some(Instant::now());
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        let now = Instant::now();
        if should_auto_fetch(self.running, self.cache.is_stale(), self.failed_at, now, self.cache.ttl()) {
            self.start_fetch(ctx);
        }

        let title = router::title_for(self.state.view());
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }

        // cache age label and TTL expiry
        ctx.request_repaint_after(Duration::from_secs(1));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| router::draw(ui, self));
        });
    }
}
