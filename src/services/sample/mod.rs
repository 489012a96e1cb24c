// Demo events for a first launch with an empty store

use chrono::NaiveDate;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::color::ColorToken;
use crate::models::event::Event;
use crate::services::layout::week_start_of;
use crate::utils::date::{Moment, TimeUnit};

pub const SAMPLE_TITLES: [&str; 8] = [
    "Product sync",
    "Design review",
    "Data pipeline",
    "Infra standup",
    "Research slot",
    "Customer call",
    "Doc writing",
    "1:1",
];

/// Allowed sample lengths in minutes.
pub const SAMPLE_DURATIONS: [i64; 6] = [30, 45, 60, 75, 90, 120];

/// `count` random time-blocked events in the Sunday-started week that
/// contains `week_of`, starting between 08:00 and 16:30 on the hour or
/// half hour.
pub fn generate_sample_events<R: Rng + ?Sized>(
    week_of: NaiveDate,
    count: usize,
    rng: &mut R,
) -> Vec<Event> {
    let week_start = Moment::at_midnight(week_start_of(week_of));
    let batch: String = (0..6).map(|_| char::from(rng.sample(Alphanumeric))).collect();

    (0..count)
        .filter_map(|i| {
            let day = rng.gen_range(0..7);
            let hour = rng.gen_range(8..=16);
            let minute = if rng.gen_bool(0.5) { 30 } else { 0 };
            let duration = *SAMPLE_DURATIONS.choose(rng)?;
            let title = *SAMPLE_TITLES.choose(rng)?;
            let color = *ColorToken::PALETTE.choose(rng)?;

            let start = week_start
                .add(day, TimeUnit::Day)
                .add(hour, TimeUnit::Hour)
                .add(minute, TimeUnit::Minute);
            let end = start.add(duration, TimeUnit::Minute);

            Event::builder()
                .id(format!("sample-{}-{}", i, batch))
                .title(title)
                .start(start)
                .end(end)
                .color(color)
                .build()
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::layout::week_range;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn test_events_stay_inside_week_and_hours() {
        let mut rng = StdRng::seed_from_u64(7);
        let events = generate_sample_events(wednesday(), 50, &mut rng);
        assert_eq!(events.len(), 50);

        let (week_start, week_end) = week_range(week_start_of(wednesday()));
        for event in &events {
            assert!(!event.start.is_before(week_start));
            assert!(!event.start.is_after(week_end));
            assert!((8..=16).contains(&event.start.hour()));
            assert!(matches!(event.start.minute(), 0 | 30));
            assert!(SAMPLE_DURATIONS.contains(&event.duration_minutes()));
            assert!(SAMPLE_TITLES.contains(&event.title.as_str()));
            assert!(ColorToken::PALETTE.contains(&event.color));
            assert!(event.is_time_blocked());
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut rng = StdRng::seed_from_u64(42);
        let events = generate_sample_events(wednesday(), 14, &mut rng);
        let mut ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_sample_events(wednesday(), 0, &mut rng).is_empty());
    }
}
