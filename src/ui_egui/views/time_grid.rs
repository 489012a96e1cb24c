//! Time grid rendering for the week and day views.
//!
//! Paints an hour ruler plus one column per date, lays out the time-blocked
//! events of each column, and registers the columns as drop zones.

use chrono::NaiveDate;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::utils::{faded, format_time_range, readable_text, token_color};
use super::{ViewInput, DAY_HEADER_HEIGHT};
use crate::models::event::Event;
use crate::models::ui::today;
use crate::services::drag::{DropZone, Ghost, HandleRects};
use crate::services::layout::{layout_day, layout_week, week_range, TimeScale};
use crate::ui_egui::drag::attach_drag_handle;
use crate::utils::date::Moment;

pub const TIME_LABEL_WIDTH: f32 = 56.0;
const ALL_DAY_BAR_HEIGHT: f32 = 18.0;
const BLOCK_INSET: f32 = 1.0;

/// Render day headers, the all-day strip and the scrollable hour grid.
pub fn render_time_grid(ui: &mut egui::Ui, dates: &[NaiveDate], input: &mut ViewInput<'_>) {
    if dates.is_empty() {
        return;
    }
    let col_width = ((ui.available_width() - TIME_LABEL_WIDTH) / dates.len() as f32).max(1.0);

    render_day_headers(ui, dates, col_width);
    if dates.len() == 7 {
        render_all_day_strip(ui, dates[0], col_width, input);
    } else {
        render_all_day_list(ui, dates[0], input.events);
    }
    ui.separator();

    let mut scroll = egui::ScrollArea::vertical()
        .id_source("time_grid_scroll")
        .auto_shrink([false, false]);
    if let Some(hour) = input.scroll_to_hour.take() {
        scroll = scroll.vertical_scroll_offset(input.scale.minutes_to_px(i64::from(hour) * 60));
    }

    scroll.show(ui, |ui| {
        let scale = input.scale;
        let size = Vec2::new(ui.available_width(), scale.day_height());
        let (grid_rect, _) = ui.allocate_exact_size(size, Sense::hover());

        draw_hour_ruler(ui, grid_rect, &scale);

        for (index, date) in dates.iter().enumerate() {
            let left = grid_rect.left() + TIME_LABEL_WIDTH + index as f32 * col_width;
            let column = Rect::from_min_size(
                Pos2::new(left, grid_rect.top()),
                Vec2::new(col_width, grid_rect.height()),
            );
            input.surface.add_clipped_day_column(*date, column, ui.clip_rect());
            ui.painter().line_segment(
                [column.left_top(), column.left_bottom()],
                Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color),
            );
            render_column_events(ui, *date, column, input);
        }

        draw_current_time_indicator(ui, dates, grid_rect, col_width, &scale);
        draw_block_ghost(ui, input);
    });
}

fn render_day_headers(ui: &mut egui::Ui, dates: &[NaiveDate], col_width: f32) {
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), DAY_HEADER_HEIGHT),
        Sense::hover(),
    );
    let today = today();
    for (index, date) in dates.iter().enumerate() {
        let center = Pos2::new(
            rect.left() + TIME_LABEL_WIDTH + (index as f32 + 0.5) * col_width,
            rect.center().y,
        );
        let color = if *date == today {
            ui.visuals().selection.bg_fill
        } else {
            ui.visuals().text_color()
        };
        ui.painter().text(
            center,
            Align2::CENTER_CENTER,
            date.format("%a %-d").to_string(),
            FontId::proportional(14.0),
            color,
        );
    }
}

/// Multi-day events of the week as bars above the grid.
fn render_all_day_strip(
    ui: &mut egui::Ui,
    week_start: NaiveDate,
    col_width: f32,
    input: &mut ViewInput<'_>,
) {
    let (start, end) = week_range(week_start);
    let multi_day: Vec<Event> = input
        .events
        .iter()
        .filter(|event| !event.is_time_blocked())
        .cloned()
        .collect();
    let bars = layout_week(&multi_day, start, end);
    let slots = bars.iter().map(|p| p.row_slot + 1).max().unwrap_or(0).max(1);
    let height = slots as f32 * (ALL_DAY_BAR_HEIGHT + 2.0) + 4.0;

    let (strip, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
    let row = Rect::from_min_max(
        Pos2::new(strip.left() + TIME_LABEL_WIDTH, strip.top()),
        Pos2::new(strip.left() + TIME_LABEL_WIDTH + col_width * 7.0, strip.bottom()),
    );
    input.surface.add_week_row(week_start, row);
    let zone = DropZone::WeekRow { week_start, rect: row };

    for placement in &bars {
        let rect = Rect::from_min_size(
            Pos2::new(
                row.left() + placement.span.left_fraction() * row.width(),
                row.top() + 2.0 + placement.row_slot as f32 * (ALL_DAY_BAR_HEIGHT + 2.0),
            ),
            Vec2::new(placement.span.width_fraction() * row.width(), ALL_DAY_BAR_HEIGHT),
        )
        .shrink2(Vec2::new(2.0, 0.0));
        let handles = HandleRects::for_bar(
            rect,
            placement.shows_start_handle(),
            placement.shows_end_handle(),
        );
        super::paint_bar(ui, placement.event, rect, input.controller.is_dragging(&placement.event.id));
        let response = ui.interact(
            rect,
            ui.id().with(("all_day", &placement.event.id)),
            Sense::click_and_drag(),
        );
        attach_drag_handle(ui.ctx(), &response, placement.event, &handles, zone, input.controller);
    }

    super::draw_bar_ghost(ui, input, ALL_DAY_BAR_HEIGHT, 2.0);
}

/// Day view: multi-day events touching the day, listed by title.
fn render_all_day_list(ui: &mut egui::Ui, date: NaiveDate, events: &[Event]) {
    let day_start = Moment::at_midnight(date);
    let day_end = day_start.end_of(crate::utils::date::TimeUnit::Day);
    ui.horizontal_wrapped(|ui| {
        ui.add_space(TIME_LABEL_WIDTH);
        for event in events
            .iter()
            .filter(|e| !e.is_time_blocked() && !e.end.is_before(day_start) && !e.start.is_after(day_end))
        {
            let fill = token_color(event.color);
            ui.label(
                egui::RichText::new(&event.title)
                    .background_color(fill)
                    .color(readable_text(fill)),
            );
        }
    });
}

fn draw_hour_ruler(ui: &egui::Ui, grid_rect: Rect, scale: &TimeScale) {
    let painter = ui.painter();
    let line = Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color);
    let half_line = Stroke::new(0.5, line.color.gamma_multiply(0.5));
    for hour in 0..24i64 {
        let y = grid_rect.top() + scale.minutes_to_px(hour * 60);
        painter.line_segment(
            [Pos2::new(grid_rect.left() + TIME_LABEL_WIDTH, y), Pos2::new(grid_rect.right(), y)],
            line,
        );
        let half = y + scale.minutes_to_px(30);
        painter.line_segment(
            [Pos2::new(grid_rect.left() + TIME_LABEL_WIDTH, half), Pos2::new(grid_rect.right(), half)],
            half_line,
        );
        painter.text(
            Pos2::new(grid_rect.left() + TIME_LABEL_WIDTH - 6.0, y + 2.0),
            Align2::RIGHT_TOP,
            format!("{:02}:00", hour),
            FontId::proportional(12.0),
            Color32::GRAY,
        );
    }
}

fn render_column_events(ui: &mut egui::Ui, date: NaiveDate, column: Rect, input: &mut ViewInput<'_>) {
    let scale = input.scale;
    let zone = DropZone::DayColumn { date, rect: column };

    for placement in layout_day(input.events, date) {
        let event = placement.event;
        let left = column.left() + placement.left_percent() / 100.0 * column.width();
        let width = placement.width_percent() / 100.0 * column.width();
        let rect = Rect::from_min_size(
            Pos2::new(left, column.top() + placement.top_px(&scale)),
            Vec2::new(width, placement.height_px(&scale)),
        )
        .shrink(BLOCK_INSET);

        let base = token_color(event.color);
        let fill = if input.controller.is_dragging(&event.id) {
            faded(base)
        } else {
            base
        };
        let painter = ui.painter_at(column);
        painter.rect_filled(rect, 4.0, fill);
        let text = readable_text(base);
        painter.text(
            rect.left_top() + Vec2::new(4.0, 2.0),
            Align2::LEFT_TOP,
            &event.title,
            FontId::proportional(12.0),
            text,
        );
        if rect.height() > 30.0 {
            painter.text(
                rect.left_top() + Vec2::new(4.0, 16.0),
                Align2::LEFT_TOP,
                format_time_range(event.start, event.end),
                FontId::proportional(11.0),
                text.gamma_multiply(0.85),
            );
        }

        let response = ui
            .interact(rect, ui.id().with(("timed", &event.id)), Sense::click_and_drag())
            .on_hover_text(format!("{}\n{}", event.title, format_time_range(event.start, event.end)));
        let handles = HandleRects::for_timed_block(rect);
        attach_drag_handle(ui.ctx(), &response, event, &handles, zone, input.controller);
    }
}

/// Red line at the current time when today is visible.
fn draw_current_time_indicator(
    ui: &egui::Ui,
    dates: &[NaiveDate],
    grid_rect: Rect,
    col_width: f32,
    scale: &TimeScale,
) {
    let now = Moment::now();
    let Some(day_index) = dates.iter().position(|d| *d == now.date()) else {
        return;
    };
    let y = grid_rect.top() + scale.minutes_to_px(now.minutes_from_midnight());
    let x_start = grid_rect.left() + TIME_LABEL_WIDTH + day_index as f32 * col_width;
    let line_color = Color32::from_rgb(255, 100, 100);

    let painter = ui.painter();
    painter.circle_filled(Pos2::new(x_start - 4.0, y), 3.0, line_color);
    painter.line_segment(
        [Pos2::new(x_start, y), Pos2::new(x_start + col_width, y)],
        Stroke::new(2.0, line_color),
    );
}

fn draw_block_ghost(ui: &egui::Ui, input: &ViewInput<'_>) {
    let Some(Ghost::Block(block)) = input.controller.ghost() else {
        return;
    };
    let Some(zone) = input.surface.day_column(block.date) else {
        return;
    };
    let column = zone.rect();
    let rect = Rect::from_min_size(
        Pos2::new(column.left(), column.top() + block.top_px(&input.scale)),
        Vec2::new(column.width(), block.height_px(&input.scale)),
    )
    .shrink(BLOCK_INSET);

    let color = token_color(block.color);
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, color.gamma_multiply(0.25));
    painter.rect_stroke(rect, 4.0, Stroke::new(2.0, color));
    painter.text(
        rect.left_top() + Vec2::new(4.0, 2.0),
        Align2::LEFT_TOP,
        &block.label,
        FontId::proportional(12.0),
        ui.visuals().strong_text_color(),
    );
}
