//! UI chrome state for the header: mobile menu and user dropdown.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Open/closed state of the header's overlays. Opening one closes the
/// other so they never stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub dropdown_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.dropdown_open = false;
        }
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
        if self.dropdown_open {
            self.menu_open = false;
        }
    }

    pub fn close_all(&mut self) {
        self.menu_open = false;
        self.dropdown_open = false;
    }
}
