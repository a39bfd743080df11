//! Page-level state that is not part of the vehicle form itself.

pub mod ui;
