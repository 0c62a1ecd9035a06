// src/gui/pages/mod.rs
//
// One module per `View`. Pages draw from the cached batch and only ever
// mutate `App` through its helpers (refresh, view transitions).

use eframe::egui::{ self, Color32, RichText };

use crate::model::WardStatus;

pub mod dashboard;
pub mod detail;

pub(crate) const GREEN: Color32 = Color32::from_rgb(46, 160, 67);
pub(crate) const AMBER: Color32 = Color32::from_rgb(210, 153, 34);
pub(crate) const RED: Color32 = Color32::from_rgb(200, 60, 60);

pub(crate) fn status_color(status: WardStatus) -> Color32 {
    match status {
        WardStatus::Declared => GREEN,
        WardStatus::Pending => AMBER,
        WardStatus::ConnectionError => RED,
    }
}

/// Small coloured pill with the status label.
pub(crate) fn badge(ui: &mut egui::Ui, status: WardStatus) {
    egui::Frame::new()
        .fill(status_color(status))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(status.label()).small().strong().color(Color32::WHITE));
        });
}

/// Label over a big value, used for the metric rows.
pub(crate) fn metric(ui: &mut egui::Ui, label: &str, value: impl Into<String>) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(label).weak());
            ui.label(RichText::new(value.into()).size(22.0).strong());
        });
    });
}
