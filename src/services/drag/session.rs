// Drag session
//
// Everything captured at pointer-down plus the latest tentative placement.
// Tentative times are recomputed from the original times on every move, so
// rounding never accumulates.

use chrono::NaiveDate;
use egui::Pos2;

use super::surface::{DropZone, SNAP_MINUTES};
use crate::models::color::ColorToken;
use crate::models::event::Event;
use crate::services::layout::TimeScale;
use crate::utils::date::{days_between, Moment, TimeUnit, MINUTES_PER_DAY};

/// Shortest event a time-grid resize can produce.
pub const MIN_DURATION_MINUTES: i64 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragMode {
    Move,
    ResizeStart,
    ResizeEnd,
}

/// Start and end the event would get if the pointer were released now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tentative {
    pub start: Moment,
    pub end: Moment,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub event_id: String,
    pub title: String,
    pub color: ColorToken,
    pub mode: DragMode,
    /// Zone the drag started in; decides which surface the drag tracks.
    pub reference: DropZone,
    pub grab_pos: Pos2,
    pub original_start: Moment,
    pub original_end: Moment,
    pub tentative: Option<Tentative>,
}

impl DragSession {
    pub fn new(event: &Event, mode: DragMode, reference: DropZone, grab_pos: Pos2) -> Self {
        Self {
            event_id: event.id.clone(),
            title: event.title.clone(),
            color: event.color,
            mode,
            reference,
            grab_pos,
            original_start: event.start,
            original_end: event.end,
            tentative: None,
        }
    }

    /// True when the drag runs on the time grid rather than the month grid.
    pub fn is_timed(&self) -> bool {
        self.reference.is_day_column()
    }

    /// Placement for the pointer at `pos` over `zone`. `None` when the zone
    /// belongs to the other surface.
    pub fn track(&self, zone: &DropZone, pos: Pos2, scale: &TimeScale) -> Option<Tentative> {
        if !zone.same_surface(&self.reference) {
            return None;
        }
        let date = zone.date_at(pos.x);
        match zone.snapped_minutes_at(pos.y, scale) {
            Some(minutes) => Some(self.timed_placement(date, minutes)),
            None => Some(self.day_placement(date)),
        }
    }

    /// Time grid: `date` is the hovered column, `minutes` the snapped time.
    pub fn timed_placement(&self, date: NaiveDate, minutes: i64) -> Tentative {
        let (start, end) = (self.original_start, self.original_end);
        match self.mode {
            DragMode::Move => {
                // The last grid step still starts on the hovered day.
                let new_start = Moment::at_minutes(date, minutes.min(MINUTES_PER_DAY - SNAP_MINUTES));
                let duration = end.diff(start, TimeUnit::Minute);
                Tentative {
                    start: new_start,
                    end: new_start.add(duration, TimeUnit::Minute),
                }
            }
            DragMode::ResizeEnd => {
                // Only the start day's column can stretch the end.
                if date != start.date() {
                    return Tentative { start, end };
                }
                let floor = start.minutes_from_midnight() + MIN_DURATION_MINUTES;
                Tentative {
                    start,
                    end: Moment::at_minutes(date, minutes.max(floor).min(MINUTES_PER_DAY - 1)),
                }
            }
            DragMode::ResizeStart => {
                if date != end.date() {
                    return Tentative { start, end };
                }
                let ceiling = end.minutes_from_midnight() - MIN_DURATION_MINUTES;
                Tentative {
                    start: Moment::at_minutes(date, minutes.min(ceiling).max(0)),
                    end,
                }
            }
        }
    }

    /// Month grid: `date` is the hovered day cell. Times of day are kept.
    pub fn day_placement(&self, date: NaiveDate) -> Tentative {
        let (start, end) = (self.original_start, self.original_end);
        match self.mode {
            DragMode::Move => {
                let grabbed = self.reference.date_at(self.grab_pos.x);
                let delta = days_between(Moment::at_midnight(grabbed), Moment::at_midnight(date));
                Tentative {
                    start: start.add(delta, TimeUnit::Day),
                    end: end.add(delta, TimeUnit::Day),
                }
            }
            DragMode::ResizeEnd => {
                let new_end = end.with_date(date);
                Tentative {
                    start,
                    end: if new_end.is_before(start) { start } else { new_end },
                }
            }
            DragMode::ResizeStart => {
                let new_start = start.with_date(date);
                Tentative {
                    start: if new_start.is_after(end) { end } else { new_start },
                    end,
                }
            }
        }
    }
}
