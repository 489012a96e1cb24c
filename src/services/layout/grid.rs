//! Date grids for the month view and the week/day time grid.

use chrono::{Datelike, Duration, NaiveDate};

use super::DAYS_PER_WEEK;
use crate::models::ui::ViewType;
use crate::utils::date::{Moment, TimeUnit};

/// Sunday on or before `date`.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

/// First and last minute of the week row beginning at `week_start`.
pub fn week_range(week_start: NaiveDate) -> (Moment, Moment) {
    let start = Moment::at_midnight(week_start);
    let end = start
        .add(DAYS_PER_WEEK as i64 - 1, TimeUnit::Day)
        .end_of(TimeUnit::Day);
    (start, end)
}

/// Complete Sunday-first weeks covering the month of `date`.
pub fn month_grid(date: NaiveDate) -> Vec<[NaiveDate; DAYS_PER_WEEK]> {
    let anchor = Moment::at_midnight(date);
    let end = anchor.end_of(TimeUnit::Month).end_of(TimeUnit::Week);
    let mut cursor = anchor.start_of(TimeUnit::Month).start_of(TimeUnit::Week);

    let mut weeks = Vec::new();
    while cursor.is_before(end) {
        let first = cursor;
        weeks.push(std::array::from_fn(|offset| {
            first.add(offset as i64, TimeUnit::Day).date()
        }));
        cursor = cursor.add(1, TimeUnit::Week);
    }
    weeks
}

/// Day columns shown by the time grid: the single day, or the whole week.
pub fn time_columns(date: NaiveDate, view: ViewType) -> Vec<NaiveDate> {
    match view {
        ViewType::Day => vec![date],
        ViewType::Week | ViewType::Month => {
            let start = week_start_of(date);
            (0..DAYS_PER_WEEK as i64)
                .map(|offset| start + Duration::days(offset))
                .collect()
        }
    }
}
