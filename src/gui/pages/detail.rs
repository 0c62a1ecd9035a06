// src/gui/pages/detail.rs
use eframe::egui::{ self, ProgressBar, RichText };
use egui_extras::{ Column, TableBuilder };

use crate::{
    core::sanitize::parse_votes,
    gui::app::App,
    model::{ WardResult, WardStatus },
    tally,
};

use super::{ badge, metric, GREEN, RED };

/// Bar scale when the summary has no usable voter count.
const FALLBACK_MAX_VOTES: u64 = 1000;

// Summary keys as the portal spells them ("Vaild" included).
const KEY_RESERVED: &str = "Reserved for";
const KEY_VOTERS: &str = "Total Voters in Municipality Ward";
const KEY_VALID: &str = "Total Vaild Votes";
const KEY_REJECTED: &str = "Rejected Votes";
const KEY_NOTA: &str = "NOTA Votes";

pub fn draw(ui: &mut egui::Ui, app: &mut App, ward: u32) {
    let mut back = false;

    if ui.button("⬅ Back to dashboard").clicked() {
        back = true;
    }
    ui.separator();

    match app.ward(ward) {
        None => {
            ui.label(RichText::new(format!("No data for ward {ward}")).weak());
        }
        Some(r) => body(ui, r),
    }

    if back {
        app.state.back_to_dashboard();
    }
}

fn body(ui: &mut egui::Ui, r: &WardResult) {
    ui.horizontal(|ui| {
        ui.heading(format!("Ward {}", r.ward_number()));
        badge(ui, r.status());
    });

    if let Some(err) = r.error() {
        ui.add_space(6.0);
        ui.label(RichText::new("The portal could not be reached for this ward.").color(RED));
        ui.label(RichText::new(err).weak());
        return;
    }

    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        metric(ui, "Reserved for", r.summary_or(KEY_RESERVED, "N/A"));
        metric(ui, "Total Voters", r.summary_or(KEY_VOTERS, "0"));
        metric(ui, "Valid Votes", r.summary_or(KEY_VALID, "0"));
        metric(ui, "Rejected", r.summary_or(KEY_REJECTED, "0"));
        metric(ui, "NOTA", r.summary_or(KEY_NOTA, "0"));
    });

    if let Some(w) = r.winner() {
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("Winner: {} ({})", w.name, tally::party_label(&w.party)))
                .strong()
                .color(GREEN),
        );
    } else if r.status() == WardStatus::Pending {
        ui.add_space(4.0);
        ui.label(RichText::new("Result not declared yet.").weak());
    }

    ui.separator();

    if r.candidates().is_empty() {
        ui.label(RichText::new("No candidate rows").weak());
        return;
    }
    candidate_table(ui, r);
}

/// Votes bar denominator: the ward's registered voters, else a fixed scale.
pub fn bar_max(r: &WardResult) -> u64 {
    match parse_votes(r.summary_or(KEY_VOTERS, "")) {
        0 => FALLBACK_MAX_VOTES,
        n => n,
    }
}

fn candidate_table(ui: &mut egui::Ui, r: &WardResult) {
    let max = bar_max(r) as f32;

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .id_salt(("candidates", r.ward_number()))
        .column(Column::initial(40.0).at_least(20.0))
        .column(Column::initial(220.0).resizable(true).clip(true))
        .column(Column::initial(140.0).resizable(true).clip(true))
        .column(Column::initial(80.0).at_least(40.0))
        .column(Column::initial(180.0).resizable(true))
        .column(Column::remainder().clip(true))
        .header(24.0, |mut header| {
            for h in ["#", "Candidate", "Party", "Votes", "", "Status"] {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|mut body| {
            for (i, c) in r.candidates().iter().enumerate() {
                let is_winner = r.is_winner_row(i);
                body.row(22.0, |mut row| {
                    row.set_selected(is_winner);
                    row.col(|ui| {
                        ui.label(c.serial.as_str());
                    });
                    row.col(|ui| {
                        let name = RichText::new(&c.name);
                        ui.label(if is_winner { name.strong() } else { name });
                    });
                    row.col(|ui| {
                        ui.label(tally::party_label(&c.party));
                    });
                    row.col(|ui| {
                        ui.label(c.votes.to_string());
                    });
                    row.col(|ui| {
                        let frac = (c.votes as f32 / max).clamp(0.0, 1.0);
                        let bar = ProgressBar::new(frac).desired_width(160.0);
                        ui.add(if is_winner { bar.fill(GREEN) } else { bar });
                    });
                    row.col(|ui| {
                        ui.label(c.status_text.as_str());
                    });
                });
            }
        });
}
