// Settings module
// Display scale and startup preferences, persisted as TOML

use serde::{Deserialize, Serialize};

use crate::models::ui::ViewType;
use crate::services::layout::TimeScale;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pixels per hour in the week/day time grid.
    pub hour_height: f32,
    /// Smallest drawn height of a timed block, in pixels.
    pub min_block_height: f32,
    /// Hour scrolled into view when a time grid first opens.
    pub default_scroll_hour: u32,
    pub initial_view: ViewType,
    /// Demo events generated when the event store starts empty.
    pub sample_event_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hour_height: 60.0,
            min_block_height: 20.0,
            default_scroll_hour: 8,
            initial_view: ViewType::Week,
            sample_event_count: 14,
        }
    }
}

impl Settings {
    /// Replace out-of-range values with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Settings::default();
        if !(self.hour_height.is_finite() && self.hour_height > 0.0) {
            self.hour_height = defaults.hour_height;
        }
        if !(self.min_block_height.is_finite() && self.min_block_height >= 0.0) {
            self.min_block_height = defaults.min_block_height;
        }
        if self.default_scroll_hour > 23 {
            self.default_scroll_hour = defaults.default_scroll_hour;
        }
        self
    }

    pub fn time_scale(&self) -> TimeScale {
        TimeScale::new(self.hour_height, self.min_block_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.hour_height, 60.0);
        assert_eq!(settings.min_block_height, 20.0);
        assert_eq!(settings.default_scroll_hour, 8);
        assert_eq!(settings.initial_view, ViewType::Week);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("initial_view = \"month\"\n").unwrap();
        assert_eq!(settings.initial_view, ViewType::Month);
        assert_eq!(settings.hour_height, 60.0);
    }

    #[test]
    fn test_sanitized_repairs_bad_values() {
        let settings = Settings {
            hour_height: -4.0,
            min_block_height: f32::NAN,
            default_scroll_hour: 40,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(settings, Settings::default());
    }
}
