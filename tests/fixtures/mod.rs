// Test fixtures - reusable test data
// Provides consistent events and drop surfaces across the integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use egui::{Pos2, Rect, Vec2};
use rust_planner::models::event::Event;
use rust_planner::services::drag::SurfaceMap;
use rust_planner::utils::date::Moment;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Sunday, Jan 7 2024; the first day of the week under test
    pub fn week_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
    }

    pub fn day(offset: i64) -> NaiveDate {
        week_start() + chrono::Duration::days(offset)
    }

    pub fn at(text: &str) -> Moment {
        Moment::parse(text).unwrap_or_else(|| panic!("bad fixture moment {text}"))
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn event(id: &str, start: &str, end: &str) -> Event {
        Event::new(id, id.to_uppercase(), dates::at(start), dates::at(end)).unwrap()
    }

    /// A busy Monday: one three-way cluster and a lone afternoon meeting
    pub fn busy_monday() -> Vec<Event> {
        vec![
            event("standup", "2024-01-08 09:00", "2024-01-08 09:30"),
            event("review", "2024-01-08 09:15", "2024-01-08 10:00"),
            event("pairing", "2024-01-08 09:20", "2024-01-08 11:00"),
            event("sync", "2024-01-08 14:00", "2024-01-08 15:00"),
        ]
    }

    /// Monday to Wednesday offsite
    pub fn offsite() -> Event {
        event("offsite", "2024-01-08 09:00", "2024-01-10 17:00")
    }
}

/// Drop surfaces laid out the way the views paint them
pub mod surfaces {
    use super::*;

    pub const COLUMN_WIDTH: f32 = 100.0;
    pub const ROW_HEIGHT: f32 = 100.0;

    /// Seven day columns for the week under test, one pixel per minute
    pub fn week_columns() -> SurfaceMap {
        let mut map = SurfaceMap::new();
        for offset in 0..7 {
            map.add_day_column(
                dates::day(offset),
                Rect::from_min_size(
                    Pos2::new(offset as f32 * COLUMN_WIDTH, 0.0),
                    Vec2::new(COLUMN_WIDTH, 1440.0),
                ),
            );
        }
        map
    }

    /// Pointer position over `offset` days into the week at `minutes`
    pub fn column_point(offset: i64, minutes: f32) -> Pos2 {
        Pos2::new(offset as f32 * COLUMN_WIDTH + COLUMN_WIDTH / 2.0, minutes)
    }

    /// Two stacked week rows starting at the week under test
    pub fn month_rows() -> SurfaceMap {
        let mut map = SurfaceMap::new();
        for row in 0..2 {
            map.add_week_row(
                dates::day(row * 7),
                Rect::from_min_size(
                    Pos2::new(0.0, row as f32 * ROW_HEIGHT),
                    Vec2::new(COLUMN_WIDTH * 7.0, ROW_HEIGHT),
                ),
            );
        }
        map
    }

    /// Pointer position over `day` days after the first row's Sunday
    pub fn row_point(day: i64) -> Pos2 {
        let row = day / 7;
        let cell = day % 7;
        Pos2::new(
            cell as f32 * COLUMN_WIDTH + COLUMN_WIDTH / 2.0,
            row as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0,
        )
    }

    /// Week view scrolled to 08:00: an all-day strip at y 30..54 above a
    /// viewport starting at y 70, whose columns begin 480px above it
    pub fn scrolled_week() -> SurfaceMap {
        let mut map = SurfaceMap::new();
        map.add_week_row(
            dates::week_start(),
            Rect::from_min_size(Pos2::new(0.0, 30.0), Vec2::new(COLUMN_WIDTH * 7.0, 24.0)),
        );
        let viewport = Rect::from_min_max(Pos2::new(0.0, 70.0), Pos2::new(COLUMN_WIDTH * 7.0, 600.0));
        for offset in 0..7 {
            map.add_clipped_day_column(
                dates::day(offset),
                Rect::from_min_size(
                    Pos2::new(offset as f32 * COLUMN_WIDTH, -410.0),
                    Vec2::new(COLUMN_WIDTH, 1440.0),
                ),
                viewport,
            );
        }
        map
    }
}
