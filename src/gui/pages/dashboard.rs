// src/gui/pages/dashboard.rs
use eframe::egui::{ self, Align, Layout, ProgressBar, RichText, Spinner };

use crate::{
    gui::app::App,
    model::WardResult,
    tally,
};

use super::{ badge, metric, RED };

const CARD_W: f32 = 230.0;
const CARD_H: f32 = 112.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();
    toolbar(ui, app, &ctx);
    ui.separator();

    let mut clicked: Option<u32> = None;
    {
        let results = app.results();
        let j = &app.state.jurisdiction;

        if results.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No results yet").weak());
            });
            return;
        }

        let counts = tally::counts(results);
        ui.horizontal(|ui| {
            metric(ui, "Total Wards", j.total_wards.to_string());
            metric(ui, "Results Declared", counts.declared.to_string());
            metric(
                ui,
                "Results Pending",
                (j.total_wards as usize).saturating_sub(counts.declared).to_string(),
            );
            if counts.failed > 0 {
                metric(ui, "Connection Errors", counts.failed.to_string());
            }
        });

        party_tally(ui, results);
        ui.separator();

        let per_row = app.state.gui.cards_per_row.max(1);
        egui::Grid::new("ward_grid")
            .num_columns(per_row)
            .spacing([10.0, 10.0])
            .show(ui, |ui| {
                for (i, r) in results.iter().enumerate() {
                    if card(ui, r) {
                        clicked = Some(r.ward_number());
                    }
                    if (i + 1) % per_row == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    if let Some(ward) = clicked {
        logd!("GUI: Open ward {}", ward);
        app.state.open_detail(ward);
    }
}

fn toolbar(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    let j = &app.state.jurisdiction;
    let heading = format!("Municipal Ward Results · ULB {} · {}", j.ulb_id, j.year);
    let line = app.status_line();

    ui.horizontal(|ui| {
        ui.heading(heading);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let btn = egui::Button::new(RichText::new("⟳ Refresh").strong());
            if ui.add_enabled(!app.running, btn).clicked() {
                app.refresh(ctx);
            }
        });
    });

    ui.horizontal(|ui| {
        if app.running {
            ui.add(Spinner::new().size(16.0));
            ui.add(ProgressBar::new(line.fraction()).desired_width(180.0).show_percentage());
        }
        ui.label(line.text.as_str());
        if let Some(age) = app.cache.age() {
            ui.label(RichText::new(format!("· updated {}s ago", age.as_secs())).weak());
        }
    });
}

fn party_tally(ui: &mut egui::Ui, results: &[WardResult]) {
    let wins = tally::party_wins(results);
    if wins.is_empty() {
        return;
    }
    ui.add_space(4.0);
    ui.label(RichText::new("Wards won by party").strong());
    ui.horizontal_wrapped(|ui| {
        for (party, n) in wins {
            ui.label(format!("{party}: {n}"));
            ui.add_space(8.0);
        }
    });
}

/// One ward card. Returns true when "View details" was clicked.
fn card(ui: &mut egui::Ui, r: &WardResult) -> bool {
    let mut open = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_size(egui::vec2(CARD_W, CARD_H));
        ui.set_max_width(CARD_W);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("Ward {}", r.ward_number())).strong().size(16.0));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| badge(ui, r.status()));
            });

            match (r.winner(), r.error()) {
                (Some(w), _) => {
                    ui.label(RichText::new(&w.name).strong());
                    ui.label(RichText::new(tally::party_label(&w.party)).weak());
                }
                (None, Some(err)) => {
                    ui.label(RichText::new("Could not reach the portal").color(RED));
                    ui.label(RichText::new(err).small().weak()).on_hover_text(err);
                }
                (None, None) => {
                    ui.label(RichText::new("Awaiting result").weak());
                    ui.label("");
                }
            }

            ui.add_space(4.0);
            open = ui.button("View details ➝").clicked();
        });
    });
    open
}
