use egui::{Align2, FontId, Pos2, Rect, Stroke, Vec2};

use crate::models::event::Event;
use crate::services::drag::{DragController, Ghost, SurfaceMap};
use crate::services::layout::TimeScale;

pub mod month_view;
pub mod time_grid;
pub mod utils;

use utils::{faded, readable_text, token_color};

pub const DAY_HEADER_HEIGHT: f32 = 28.0;

/// What every view needs for one frame.
pub struct ViewInput<'a> {
    pub events: &'a [Event],
    pub controller: &'a mut DragController,
    /// Drop zones painted this frame.
    pub surface: &'a mut SurfaceMap,
    pub scale: TimeScale,
    /// Set once after switching view or date; consumed by the time grid.
    pub scroll_to_hour: Option<u32>,
}

/// Rounded bar with the event title, clipped to the bar.
pub fn paint_bar(ui: &egui::Ui, event: &Event, rect: Rect, dragging: bool) {
    let base = token_color(event.color);
    let fill = if dragging { faded(base) } else { base };
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 3.0, fill);
    painter.text(
        Pos2::new(rect.left() + 4.0, rect.center().y),
        Align2::LEFT_CENTER,
        &event.title,
        FontId::proportional(11.0),
        readable_text(base),
    );
}

/// Outline of the bar ghost in every registered week row it touches.
/// `top_offset` is the distance from a row's top edge to its first slot.
pub fn draw_bar_ghost(ui: &egui::Ui, input: &ViewInput<'_>, bar_height: f32, top_offset: f32) {
    let Some(Ghost::Bar(bar)) = input.controller.ghost() else {
        return;
    };
    let color = token_color(bar.color);
    for (week_start, span) in bar.segments(input.surface.week_starts()) {
        let Some(zone) = input.surface.week_row(week_start) else {
            continue;
        };
        let row = zone.rect();
        let rect = Rect::from_min_size(
            Pos2::new(
                row.left() + span.left_fraction() * row.width(),
                row.top() + top_offset,
            ),
            Vec2::new(span.width_fraction() * row.width(), bar_height),
        )
        .shrink2(Vec2::new(2.0, 0.0));

        let painter = ui.painter();
        painter.rect_filled(rect, 3.0, color.gamma_multiply(0.3));
        painter.rect_stroke(rect, 3.0, Stroke::new(2.0, color));
    }
}
