// src/config/state.rs
use super::options::{FetchPolicy, JurisdictionConfig};

/// Which screen the dashboard shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Detail(u32),
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub view: View,
    pub window_w: u32,
    pub window_h: u32,
    /// Ward cards per grid row
    pub cards_per_row: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            view: View::Dashboard,
            window_w: 1100,
            window_h: 760,
            cards_per_row: 4,
        }
    }
}

/// Single source of truth for the presentation layer. The fetch core only
/// ever sees `jurisdiction` and `policy`, by reference.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub jurisdiction: JurisdictionConfig,
    pub policy: FetchPolicy,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(jurisdiction: JurisdictionConfig, policy: FetchPolicy) -> Self {
        Self { jurisdiction, policy, gui: GuiState::default() }
    }

    pub fn view(&self) -> View {
        self.gui.view
    }

    /// dashboard → detail
    pub fn open_detail(&mut self, ward: u32) {
        self.gui.view = View::Detail(ward);
    }

    /// detail → dashboard
    pub fn back_to_dashboard(&mut self) {
        self.gui.view = View::Dashboard;
    }

    pub fn selected_ward(&self) -> Option<u32> {
        match self.gui.view {
            View::Detail(w) => Some(w),
            View::Dashboard => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_transitions() {
        let mut st = AppState::default();
        assert_eq!(st.view(), View::Dashboard);
        assert_eq!(st.selected_ward(), None);

        st.open_detail(12);
        assert_eq!(st.view(), View::Detail(12));
        assert_eq!(st.selected_ward(), Some(12));

        st.back_to_dashboard();
        assert_eq!(st.view(), View::Dashboard);
        assert_eq!(st.selected_ward(), None);
    }
}
