//! Local UI chrome state (vehicle tabs).
//!
//! DESIGN
//! ======
//! Kept apart from `vehicles::VehicleForm` so tab handling can grow (trucks,
//! trailers) without touching the form controller.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Vehicle type tabs shown above the form. Only cars have a form today.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VehicleTab {
    #[default]
    Car,
}

impl VehicleTab {
    pub const ALL: [Self; 1] = [Self::Car];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Car => "Cars",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: VehicleTab,
}
