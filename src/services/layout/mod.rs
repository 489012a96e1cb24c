//! Layout engine.
//!
//! Pure functions that turn the event list into non-overlapping visual
//! placements: side-by-side columns for time-blocked events in a day
//! column ([`layout_day`]) and stacked row slots for bars in a week row
//! ([`layout_week`]). Nothing here is cached; callers re-run the layout
//! whenever the event list or the visible range changes.

mod grid;
mod multi_day;
mod timed;

pub use grid::{month_grid, time_columns, week_range, week_start_of};
pub use multi_day::{clip_to_week, layout_week, MultiDayPlacement, WeekSpan};
pub use timed::{layout_day, TimedPlacement};

pub const DAYS_PER_WEEK: usize = 7;

/// Vertical scale of the time grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    /// Pixels per hour.
    pub hour_height: f32,
    /// Floor applied to block heights so short events stay clickable.
    pub min_block_height: f32,
}

impl TimeScale {
    pub fn new(hour_height: f32, min_block_height: f32) -> Self {
        Self {
            hour_height,
            min_block_height,
        }
    }

    pub fn pixels_per_minute(&self) -> f32 {
        self.hour_height / 60.0
    }

    pub fn minutes_to_px(&self, minutes: i64) -> f32 {
        minutes as f32 * self.pixels_per_minute()
    }

    pub fn px_to_minutes(&self, px: f32) -> f32 {
        if self.hour_height <= 0.0 {
            return 0.0;
        }
        px / self.pixels_per_minute()
    }

    /// Drawn height for a block of `minutes`, never below the floor.
    pub fn block_height(&self, minutes: i64) -> f32 {
        self.minutes_to_px(minutes.max(0)).max(self.min_block_height)
    }

    /// Height of a full day column.
    pub fn day_height(&self) -> f32 {
        self.hour_height * 24.0
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new(60.0, 20.0)
    }
}
