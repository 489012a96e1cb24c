//! Common utility functions for calendar views.

use egui::Color32;

use crate::models::color::ColorToken;
use crate::utils::date::Moment;

/// Fill color for an event's color token.
pub fn token_color(token: ColorToken) -> Color32 {
    let (r, g, b) = token.rgb();
    Color32::from_rgb(r, g, b)
}

/// Faded fill used for the original block while it is being dragged.
pub fn faded(color: Color32) -> Color32 {
    color.gamma_multiply(0.35)
}

/// Black or white, whichever reads better on `background`.
pub fn readable_text(background: Color32) -> Color32 {
    let luminance = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luminance > 160.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

/// `HH:MM - HH:MM`
pub fn format_time_range(start: Moment, end: Moment) -> String {
    format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
}
