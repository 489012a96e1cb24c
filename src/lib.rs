// Rust Planner Library
// Calendar layout and drag-to-reschedule engine plus the egui shell

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
