// src/gui/router.rs
use eframe::egui;

use crate::config::View;
use super::{app::App, pages};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    match app.state.view() {
        View::Dashboard => pages::dashboard::draw(ui, app),
        View::Detail(ward) => pages::detail::draw(ui, app, ward),
    }
}

/// Window title for the current view.
pub fn title_for(view: View) -> String {
    match view {
        View::Dashboard => s!("Ward Results"),
        View::Detail(ward) => format!("Ward Results · Ward {ward}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles() {
        assert_eq!(title_for(View::Dashboard), "Ward Results");
        assert_eq!(title_for(View::Detail(7)), "Ward Results · Ward 7");
    }
}
