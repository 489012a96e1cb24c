// Pointer input and drop-target geometry.
//
// The controller never looks at widgets. Views register the rectangles they
// painted this frame in a `SurfaceMap` and the controller hit-tests against
// it on every pointer move.

use chrono::{Duration, NaiveDate};
use egui::{Pos2, Rect};

use crate::services::layout::{TimeScale, DAYS_PER_WEEK};
use crate::utils::date::MINUTES_PER_DAY;

/// Rounding step for times picked on the time grid.
pub const SNAP_MINUTES: i64 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub pos: Pos2,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn new(pos: Pos2, button: PointerButton) -> Self {
        Self { pos, button }
    }

    pub fn primary(pos: Pos2) -> Self {
        Self::new(pos, PointerButton::Primary)
    }
}

/// A region an event can be dropped on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropZone {
    /// One day of the time grid. The top edge is midnight.
    DayColumn { date: NaiveDate, rect: Rect },
    /// One week of the month grid, split into seven equal day cells.
    WeekRow { week_start: NaiveDate, rect: Rect },
}

impl DropZone {
    pub fn rect(&self) -> Rect {
        match self {
            DropZone::DayColumn { rect, .. } | DropZone::WeekRow { rect, .. } => *rect,
        }
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.rect().contains(pos)
    }

    pub fn is_day_column(&self) -> bool {
        matches!(self, DropZone::DayColumn { .. })
    }

    /// True when both zones belong to the same kind of surface.
    pub fn same_surface(&self, other: &DropZone) -> bool {
        self.is_day_column() == other.is_day_column()
    }

    /// Day cell under `x`. Day columns always answer their own date.
    pub fn date_at(&self, x: f32) -> NaiveDate {
        match *self {
            DropZone::DayColumn { date, .. } => date,
            DropZone::WeekRow { week_start, rect } => week_start + Duration::days(day_cell(rect, x)),
        }
    }

    /// Minutes past midnight under `y`, rounded to the nearest
    /// [`SNAP_MINUTES`] and clamped to the day. Week rows have no time axis.
    pub fn snapped_minutes_at(&self, y: f32, scale: &TimeScale) -> Option<i64> {
        match self {
            DropZone::DayColumn { rect, .. } => {
                let raw = scale.px_to_minutes(y - rect.top());
                let steps = (raw / SNAP_MINUTES as f32).round() as i64;
                Some((steps * SNAP_MINUTES).clamp(0, MINUTES_PER_DAY))
            }
            DropZone::WeekRow { .. } => None,
        }
    }
}

/// Index 0..=6 of the cell under `x` in a row of seven equal cells.
fn day_cell(rect: Rect, x: f32) -> i64 {
    let cell_width = rect.width() / DAYS_PER_WEEK as f32;
    if cell_width <= 0.0 {
        return 0;
    }
    let index = ((x - rect.left()) / cell_width).floor() as i64;
    index.clamp(0, DAYS_PER_WEEK as i64 - 1)
}

/// Resolves a screen position to the drop zone under it.
pub trait HitTest {
    fn zone_at(&self, pos: Pos2) -> Option<DropZone>;
}

/// A registered zone and the part of it the pointer can reach.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Registered {
    zone: DropZone,
    hit: Rect,
}

/// Drop zones painted during the current frame.
#[derive(Clone, Debug, Default)]
pub struct SurfaceMap {
    zones: Vec<Registered>,
}

impl SurfaceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn add_day_column(&mut self, date: NaiveDate, rect: Rect) {
        self.add_clipped_day_column(date, rect, rect);
    }

    /// Register a day column whose full-day `rect` is only partly on screen.
    /// Hit-testing uses `visible`; time conversion keeps using `rect`.
    pub fn add_clipped_day_column(&mut self, date: NaiveDate, rect: Rect, visible: Rect) {
        self.zones.push(Registered {
            zone: DropZone::DayColumn { date, rect },
            hit: rect.intersect(visible),
        });
    }

    pub fn add_week_row(&mut self, week_start: NaiveDate, rect: Rect) {
        self.zones.push(Registered {
            zone: DropZone::WeekRow { week_start, rect },
            hit: rect,
        });
    }

    pub fn zones(&self) -> impl Iterator<Item = DropZone> + '_ {
        self.zones.iter().map(|registered| registered.zone)
    }

    /// Week rows in paint order, for splitting bar ghosts per row.
    pub fn week_starts(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.zones().filter_map(|zone| match zone {
            DropZone::WeekRow { week_start, .. } => Some(week_start),
            DropZone::DayColumn { .. } => None,
        })
    }

    pub fn day_column(&self, date: NaiveDate) -> Option<DropZone> {
        self.zones()
            .find(|zone| matches!(zone, DropZone::DayColumn { date: d, .. } if *d == date))
    }

    pub fn week_row(&self, week_start: NaiveDate) -> Option<DropZone> {
        self.zones().find(
            |zone| matches!(zone, DropZone::WeekRow { week_start: w, .. } if *w == week_start),
        )
    }
}

impl HitTest for SurfaceMap {
    fn zone_at(&self, pos: Pos2) -> Option<DropZone> {
        // Later zones are painted on top.
        self.zones
            .iter()
            .rev()
            .find(|registered| registered.hit.contains(pos))
            .map(|registered| registered.zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Vec2;
    use test_case::test_case;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn column() -> DropZone {
        DropZone::DayColumn {
            date: date(1),
            rect: Rect::from_min_size(Pos2::new(50.0, 0.0), Vec2::new(100.0, 1440.0)),
        }
    }

    #[test_case(0.0, 0 ; "midnight")]
    #[test_case(607.0, 600 ; "rounds down")]
    #[test_case(608.0, 615 ; "rounds up")]
    #[test_case(-40.0, 0 ; "above the column")]
    #[test_case(1500.0, 1440 ; "below the column")]
    fn test_snapped_minutes(y: f32, expected: i64) {
        let scale = TimeScale::default();
        assert_eq!(column().snapped_minutes_at(y, &scale), Some(expected));
    }

    #[test_case(0.0, 7 ; "left edge")]
    #[test_case(99.0, 7 ; "inside first cell")]
    #[test_case(100.0, 8 ; "second cell")]
    #[test_case(650.0, 13 ; "last cell")]
    #[test_case(900.0, 13 ; "past right edge")]
    #[test_case(-20.0, 7 ; "before left edge")]
    fn test_week_row_cell(x: f32, day: u32) {
        let row = DropZone::WeekRow {
            week_start: date(7),
            rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(700.0, 120.0)),
        };
        assert_eq!(row.date_at(x), date(day));
        assert_eq!(row.snapped_minutes_at(10.0, &TimeScale::default()), None);
    }

    #[test]
    fn test_surface_map_hit_test() {
        let mut map = SurfaceMap::new();
        map.add_day_column(date(1), Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 1440.0)));
        map.add_day_column(date(2), Rect::from_min_size(Pos2::new(100.0, 0.0), Vec2::new(100.0, 1440.0)));
        map.add_week_row(date(7), Rect::from_min_size(Pos2::new(0.0, 2000.0), Vec2::new(700.0, 100.0)));

        assert_eq!(map.zone_at(Pos2::new(150.0, 10.0)).map(|z| z.date_at(150.0)), Some(date(2)));
        assert!(map.zone_at(Pos2::new(150.0, 1600.0)).is_none());
        assert_eq!(map.week_starts().collect::<Vec<_>>(), vec![date(7)]);
        assert!(map.day_column(date(1)).is_some());
        assert!(map.day_column(date(3)).is_none());
        assert!(map.week_row(date(7)).is_some());
        assert!(map.week_row(date(1)).is_none());

        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn test_scrolled_column_only_hits_where_visible() {
        let mut map = SurfaceMap::new();
        let strip = Rect::from_min_size(Pos2::new(0.0, 30.0), Vec2::new(700.0, 24.0));
        map.add_week_row(date(7), strip);
        // Scrolled to 08:00: midnight sits 480px above the viewport top at y 70.
        let column = Rect::from_min_size(Pos2::new(100.0, -410.0), Vec2::new(100.0, 1440.0));
        let viewport = Rect::from_min_max(Pos2::new(0.0, 70.0), Pos2::new(700.0, 600.0));
        map.add_clipped_day_column(date(8), column, viewport);

        assert!(matches!(
            map.zone_at(Pos2::new(150.0, 40.0)),
            Some(DropZone::WeekRow { .. })
        ));
        let zone = map.zone_at(Pos2::new(150.0, 80.0)).unwrap();
        assert_eq!(zone.rect(), column);
        assert_eq!(zone.snapped_minutes_at(80.0, &TimeScale::default()), Some(495));
        assert!(map.zone_at(Pos2::new(150.0, 10.0)).is_none());
    }
}
