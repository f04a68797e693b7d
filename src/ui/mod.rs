//! egui rendering. Widgets read from and write to [`crate::state::AppState`];
//! they hold no state of their own.

pub mod panels;
pub mod plot;
