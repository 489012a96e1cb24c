//! Row-slot layout for bars inside one week row.

use super::DAYS_PER_WEEK;
use crate::models::event::Event;
use crate::utils::date::{days_between, Moment, TimeUnit};

/// Visible part of an interval inside one week row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSpan {
    /// Column of the first visible day, 0 = first day of the row.
    pub start_column: usize,
    pub column_span: usize,
    /// The interval starts before the row; no start handle on this side.
    pub clipped_at_left: bool,
    /// The interval ends after the row; no end handle on this side.
    pub clipped_at_right: bool,
}

impl WeekSpan {
    pub fn end_column(&self) -> usize {
        self.start_column + self.column_span - 1
    }

    /// Left edge as a fraction of the row width.
    pub fn left_fraction(&self) -> f32 {
        self.start_column as f32 / DAYS_PER_WEEK as f32
    }

    pub fn width_fraction(&self) -> f32 {
        self.column_span as f32 / DAYS_PER_WEEK as f32
    }
}

/// Where one event's bar sits in a week row.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiDayPlacement<'a> {
    pub event: &'a Event,
    pub span: WeekSpan,
    /// Stacking lane, 0 = top. Unbounded.
    pub row_slot: usize,
}

impl<'a> MultiDayPlacement<'a> {
    pub fn start_column(&self) -> usize {
        self.span.start_column
    }

    pub fn column_span(&self) -> usize {
        self.span.column_span
    }

    pub fn shows_start_handle(&self) -> bool {
        !self.span.clipped_at_left
    }

    pub fn shows_end_handle(&self) -> bool {
        !self.span.clipped_at_right
    }
}

/// Clip `[start, end]` to the week row beginning at `week_start`.
///
/// `week_end` is pulled in to the last minute of the seventh day when it
/// reaches further, so the result always fits columns 0..=6. Returns `None`
/// when the interval misses the row.
pub fn clip_to_week(
    start: Moment,
    end: Moment,
    week_start: Moment,
    week_end: Moment,
) -> Option<WeekSpan> {
    let last_minute = week_start
        .start_of(TimeUnit::Day)
        .add(DAYS_PER_WEEK as i64, TimeUnit::Day)
        .add(-1, TimeUnit::Minute);
    let week_end = if week_end.is_after(last_minute) {
        last_minute
    } else {
        week_end
    };

    if end.is_before(week_start) || start.is_after(week_end) {
        return None;
    }

    let display_start = if start.is_before(week_start) {
        week_start
    } else {
        start
    };
    let display_end = if end.is_after(week_end) { week_end } else { end };

    let start_column = days_between(week_start, display_start).clamp(0, 6) as usize;
    let max_span = (DAYS_PER_WEEK - start_column) as i64;
    let column_span = (days_between(display_start, display_end) + 1).clamp(1, max_span) as usize;

    Some(WeekSpan {
        start_column,
        column_span,
        clipped_at_left: start.is_before(week_start),
        clipped_at_right: end.is_after(week_end),
    })
}

/// Lay out every event that touches the week `[week_start, week_end]`.
///
/// Bars are ordered by first visible column, longer bars first on ties, and
/// each takes the lowest row slot whose last occupied column lies strictly
/// left of the bar's first column.
pub fn layout_week<'a>(
    events: &'a [Event],
    week_start: Moment,
    week_end: Moment,
) -> Vec<MultiDayPlacement<'a>> {
    let mut placements: Vec<MultiDayPlacement<'a>> = events
        .iter()
        .filter_map(|event| {
            clip_to_week(event.start, event.end, week_start, week_end).map(|span| {
                MultiDayPlacement {
                    event,
                    span,
                    row_slot: 0,
                }
            })
        })
        .collect();

    placements.sort_by(|a, b| {
        a.span
            .start_column
            .cmp(&b.span.start_column)
            .then(b.span.column_span.cmp(&a.span.column_span))
    });

    let mut occupied_until: Vec<usize> = Vec::new();
    for placement in placements.iter_mut() {
        let start = placement.span.start_column;
        let end = placement.span.end_column();
        let slot = match occupied_until.iter().position(|&last| last < start) {
            Some(slot) => {
                occupied_until[slot] = end;
                slot
            }
            None => {
                occupied_until.push(end);
                occupied_until.len() - 1
            }
        };
        placement.row_slot = slot;
    }

    placements
}
