//! Column layout for time-blocked events inside one day column.

use chrono::NaiveDate;

use super::TimeScale;
use crate::models::event::Event;

/// Where one time-blocked event sits in its day column.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedPlacement<'a> {
    pub event: &'a Event,
    /// Minutes from midnight to the event start.
    pub start_minute: i64,
    /// Minutes from midnight to the event end; never before `start_minute`.
    pub end_minute: i64,
    pub column_index: usize,
    /// Columns used by the overlap cluster this event belongs to.
    pub column_count: usize,
}

impl<'a> TimedPlacement<'a> {
    pub fn top_offset_minutes(&self) -> i64 {
        self.start_minute
    }

    pub fn height_minutes(&self) -> i64 {
        self.end_minute - self.start_minute
    }

    pub fn width_percent(&self) -> f32 {
        100.0 / self.column_count.max(1) as f32
    }

    pub fn left_percent(&self) -> f32 {
        self.column_index as f32 * self.width_percent()
    }

    pub fn top_px(&self, scale: &TimeScale) -> f32 {
        scale.minutes_to_px(self.start_minute)
    }

    pub fn height_px(&self, scale: &TimeScale) -> f32 {
        scale.block_height(self.height_minutes())
    }

    /// True when the two `[start, end)` ranges intersect.
    pub fn overlaps(&self, other: &TimedPlacement<'_>) -> bool {
        self.start_minute < other.end_minute && other.start_minute < self.end_minute
    }
}

/// Lay out the time-blocked events that start on `day`.
///
/// Events are sorted by start (longer first on ties) and split into
/// clusters of transitively overlapping events. Inside a cluster each event
/// takes the lowest column that is free at its start; every member of the
/// cluster then shares the cluster's column count. Clusters are sized
/// independently, so a narrow cluster never inherits the width of a busy
/// one earlier in the day.
pub fn layout_day<'a>(events: &'a [Event], day: NaiveDate) -> Vec<TimedPlacement<'a>> {
    let mut placements: Vec<TimedPlacement<'a>> = events
        .iter()
        .filter(|event| event.is_time_blocked() && event.start.date() == day)
        .map(|event| {
            let start_minute = event.start.minutes_from_midnight();
            TimedPlacement {
                event,
                start_minute,
                end_minute: start_minute + event.duration_minutes().max(0),
                column_index: 0,
                column_count: 1,
            }
        })
        .collect();

    if placements.is_empty() {
        return placements;
    }

    placements.sort_by(|a, b| {
        a.start_minute
            .cmp(&b.start_minute)
            .then(b.end_minute.cmp(&a.end_minute))
    });

    let mut cluster_start = 0;
    let mut cluster_end = placements[0].end_minute;
    for index in 1..placements.len() {
        let (start, end) = (placements[index].start_minute, placements[index].end_minute);
        if start < cluster_end {
            cluster_end = cluster_end.max(end);
        } else {
            assign_columns(&mut placements[cluster_start..index]);
            cluster_start = index;
            cluster_end = end;
        }
    }
    assign_columns(&mut placements[cluster_start..]);

    placements
}

/// First-fit interval coloring of one cluster. Returns the column count.
fn assign_columns(cluster: &mut [TimedPlacement<'_>]) -> usize {
    let mut free_at: Vec<i64> = Vec::new();
    for placement in cluster.iter_mut() {
        let column = match free_at
            .iter()
            .position(|&free| free <= placement.start_minute)
        {
            Some(column) => {
                free_at[column] = placement.end_minute;
                column
            }
            None => {
                free_at.push(placement.end_minute);
                free_at.len() - 1
            }
        };
        placement.column_index = column;
    }

    let column_count = free_at.len();
    for placement in cluster.iter_mut() {
        placement.column_count = column_count;
    }
    column_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::Moment;
    use pretty_assertions::assert_eq;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn event(id: &str, start: &str, end: &str) -> Event {
        Event::new(
            id,
            id.to_uppercase(),
            Moment::parse(start).unwrap(),
            Moment::parse(end).unwrap(),
        )
        .unwrap()
    }

    fn is_collision_free(placements: &[TimedPlacement<'_>]) -> bool {
        placements.iter().enumerate().all(|(i, a)| {
            placements[i + 1..]
                .iter()
                .all(|b| a.column_index != b.column_index || !a.overlaps(b))
        })
    }

    fn columns<'a>(placements: &'a [TimedPlacement<'a>]) -> Vec<(&'a str, usize, usize)> {
        placements
            .iter()
            .map(|p| (p.event.id.as_str(), p.column_index, p.column_count))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(layout_day(&[], day()).is_empty());
    }

    #[test]
    fn test_two_overlapping_events_share_cluster() {
        let events = vec![
            event("a", "2024-01-01 09:00", "2024-01-01 09:30"),
            event("b", "2024-01-01 09:15", "2024-01-01 10:00"),
        ];
        let placements = layout_day(&events, day());
        assert_eq!(columns(&placements), vec![("a", 0, 2), ("b", 1, 2)]);
        assert_eq!(placements[1].width_percent(), 50.0);
        assert_eq!(placements[1].left_percent(), 50.0);
    }

    #[test]
    fn test_touching_events_form_separate_clusters() {
        let events = vec![
            event("a", "2024-01-01 09:00", "2024-01-01 10:00"),
            event("b", "2024-01-01 10:00", "2024-01-01 11:00"),
        ];
        let placements = layout_day(&events, day());
        assert_eq!(columns(&placements), vec![("a", 0, 1), ("b", 0, 1)]);
    }

    #[test]
    fn test_longer_event_first_on_tied_start() {
        let events = vec![
            event("short", "2024-01-01 09:00", "2024-01-01 09:30"),
            event("long", "2024-01-01 09:00", "2024-01-01 11:00"),
        ];
        let placements = layout_day(&events, day());
        assert_eq!(columns(&placements), vec![("long", 0, 2), ("short", 1, 2)]);
    }

    #[test]
    fn test_first_fit_reuses_freed_column() {
        // a and c never overlap, so c drops back into column 0.
        let events = vec![
            event("a", "2024-01-01 09:00", "2024-01-01 10:00"),
            event("b", "2024-01-01 09:30", "2024-01-01 11:00"),
            event("c", "2024-01-01 10:00", "2024-01-01 10:30"),
        ];
        let placements = layout_day(&events, day());
        assert_eq!(
            columns(&placements),
            vec![("a", 0, 2), ("b", 1, 2), ("c", 0, 2)]
        );
        assert!(is_collision_free(&placements));
    }

    #[test]
    fn test_cluster_widths_are_independent() {
        let events = vec![
            event("a", "2024-01-01 08:00", "2024-01-01 09:00"),
            event("b", "2024-01-01 08:00", "2024-01-01 09:00"),
            event("c", "2024-01-01 08:30", "2024-01-01 09:00"),
            event("lonely", "2024-01-01 13:00", "2024-01-01 14:00"),
        ];
        let placements = layout_day(&events, day());
        let lonely = placements.iter().find(|p| p.event.id == "lonely").unwrap();
        assert_eq!(lonely.column_count, 1);
        assert!(placements
            .iter()
            .filter(|p| p.event.id != "lonely")
            .all(|p| p.column_count == 3));
    }

    #[test]
    fn test_filters_other_days_and_multi_day_events() {
        let events = vec![
            event("today", "2024-01-01 09:00", "2024-01-01 10:00"),
            event("tomorrow", "2024-01-02 09:00", "2024-01-02 10:00"),
            event("overnight", "2024-01-01 22:00", "2024-01-02 02:00"),
        ];
        let placements = layout_day(&events, day());
        assert_eq!(columns(&placements), vec![("today", 0, 1)]);
    }

    #[test]
    fn test_short_event_gets_minimum_height() {
        let events = vec![event("blip", "2024-01-01 12:00", "2024-01-01 12:05")];
        let placements = layout_day(&events, day());
        let scale = TimeScale::default();
        assert_eq!(placements[0].top_px(&scale), 720.0);
        assert_eq!(placements[0].height_px(&scale), 20.0);
        assert_eq!(placements[0].height_minutes(), 5);
    }

    #[test]
    fn test_malformed_event_is_clamped_not_rejected() {
        let mut backwards = event("x", "2024-01-01 10:00", "2024-01-01 11:00");
        backwards.end = Moment::parse("2024-01-01 09:00").unwrap();
        let events = vec![backwards];
        let placements = layout_day(&events, day());
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].height_minutes(), 0);
        assert_eq!(placements[0].height_px(&TimeScale::default()), 20.0);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let events = vec![
            event("a", "2024-01-01 09:00", "2024-01-01 09:30"),
            event("b", "2024-01-01 09:15", "2024-01-01 10:00"),
            event("c", "2024-01-01 09:20", "2024-01-01 09:40"),
        ];
        assert_eq!(layout_day(&events, day()), layout_day(&events, day()));
    }
}
