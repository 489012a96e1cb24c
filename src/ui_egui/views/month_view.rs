use chrono::{Datelike, NaiveDate};
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::{draw_bar_ghost, paint_bar, ViewInput, DAY_HEADER_HEIGHT};
use crate::models::ui::today;
use crate::services::drag::{DropZone, HandleRects};
use crate::services::layout::{layout_week, month_grid, week_range, DAYS_PER_WEEK};
use crate::ui_egui::drag::attach_drag_handle;

const DAY_NAMES: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
/// Space above the first bar for the day number.
const DAY_NUMBER_HEIGHT: f32 = 22.0;
const BAR_HEIGHT: f32 = 18.0;
const BAR_GAP: f32 = 2.0;
const MIN_ROW_HEIGHT: f32 = 90.0;

pub struct MonthView;

impl MonthView {
    pub fn show(ui: &mut egui::Ui, current_date: NaiveDate, input: &mut ViewInput<'_>) {
        let weeks = month_grid(current_date);
        let width = ui.available_width();
        let col_width = width / DAYS_PER_WEEK as f32;

        let (header, _) = ui.allocate_exact_size(Vec2::new(width, DAY_HEADER_HEIGHT), Sense::hover());
        for (index, name) in DAY_NAMES.iter().enumerate() {
            ui.painter().text(
                Pos2::new(header.left() + (index as f32 + 0.5) * col_width, header.center().y),
                Align2::CENTER_CENTER,
                *name,
                FontId::proportional(14.0),
                ui.visuals().strong_text_color(),
            );
        }

        let row_height =
            (ui.available_height() / weeks.len().max(1) as f32).max(MIN_ROW_HEIGHT);

        egui::ScrollArea::vertical()
            .id_source("month_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for week in &weeks {
                    let (row, _) = ui.allocate_exact_size(Vec2::new(width, row_height), Sense::hover());
                    Self::render_week_row(ui, week, current_date, row, input);
                }
                draw_bar_ghost(ui, input, BAR_HEIGHT, DAY_NUMBER_HEIGHT);
            });
    }

    fn render_week_row(
        ui: &mut egui::Ui,
        week: &[NaiveDate; DAYS_PER_WEEK],
        current_date: NaiveDate,
        row: Rect,
        input: &mut ViewInput<'_>,
    ) {
        let week_start = week[0];
        let col_width = row.width() / DAYS_PER_WEEK as f32;
        Self::paint_day_cells(ui, week, current_date, row, col_width);

        input.surface.add_week_row(week_start, row);
        let zone = DropZone::WeekRow { week_start, rect: row };

        let visible_slots =
            ((row.height() - DAY_NUMBER_HEIGHT) / (BAR_HEIGHT + BAR_GAP)).floor().max(0.0) as usize;
        let (start, end) = week_range(week_start);
        let placements = layout_week(input.events, start, end);

        let mut hidden = [0usize; DAYS_PER_WEEK];
        for placement in &placements {
            if placement.row_slot >= visible_slots {
                for column in placement.span.start_column..=placement.span.end_column() {
                    hidden[column] += 1;
                }
                continue;
            }

            let rect = Rect::from_min_size(
                Pos2::new(
                    row.left() + placement.span.left_fraction() * row.width(),
                    row.top() + DAY_NUMBER_HEIGHT + placement.row_slot as f32 * (BAR_HEIGHT + BAR_GAP),
                ),
                Vec2::new(placement.span.width_fraction() * row.width(), BAR_HEIGHT),
            )
            .shrink2(Vec2::new(2.0, 0.0));

            let event = placement.event;
            paint_bar(ui, event, rect, input.controller.is_dragging(&event.id));
            let response = ui
                .interact(rect, ui.id().with(("bar", &event.id, week_start)), Sense::click_and_drag())
                .on_hover_text(format!(
                    "{}\n{} - {}",
                    event.title,
                    event.start.format("%b %-d %H:%M"),
                    event.end.format("%b %-d %H:%M")
                ));
            let handles = HandleRects::for_bar(
                rect,
                placement.shows_start_handle(),
                placement.shows_end_handle(),
            );
            attach_drag_handle(ui.ctx(), &response, event, &handles, zone, input.controller);
        }

        for (column, count) in hidden.iter().enumerate().filter(|(_, count)| **count > 0) {
            ui.painter().text(
                Pos2::new(row.left() + (column as f32 + 1.0) * col_width - 4.0, row.top() + 4.0),
                Align2::RIGHT_TOP,
                format!("+{} more", count),
                FontId::proportional(10.0),
                Color32::GRAY,
            );
        }
    }

    fn paint_day_cells(
        ui: &egui::Ui,
        week: &[NaiveDate; DAYS_PER_WEEK],
        current_date: NaiveDate,
        row: Rect,
        col_width: f32,
    ) {
        let painter = ui.painter();
        let visuals = ui.visuals();
        let today = today();
        for (index, date) in week.iter().enumerate() {
            let cell = Rect::from_min_size(
                Pos2::new(row.left() + index as f32 * col_width, row.top()),
                Vec2::new(col_width, row.height()),
            );
            let in_month = date.month() == current_date.month();
            if !in_month {
                painter.rect_filled(cell, 0.0, visuals.faint_bg_color);
            }
            painter.rect_stroke(cell, 0.0, Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color));

            let number_pos = cell.left_top() + Vec2::new(6.0, 4.0);
            if *date == today {
                painter.circle_filled(number_pos + Vec2::new(6.0, 7.0), 10.0, visuals.selection.bg_fill);
            }
            painter.text(
                number_pos,
                Align2::LEFT_TOP,
                date.day().to_string(),
                FontId::proportional(13.0),
                if in_month {
                    visuals.text_color()
                } else {
                    Color32::GRAY
                },
            );
        }
    }
}
