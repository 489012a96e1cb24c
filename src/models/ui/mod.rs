// UI models module
// View selection and date navigation shared by the shell and the grids

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::date::{Moment, TimeUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Month,
    #[default]
    Week,
    Day,
}

impl ViewType {
    pub const ALL: [ViewType; 3] = [ViewType::Month, ViewType::Week, ViewType::Day];

    pub fn label(self) -> &'static str {
        match self {
            ViewType::Month => "Month",
            ViewType::Week => "Week",
            ViewType::Day => "Day",
        }
    }

    /// The step used by Previous/Next in this view.
    pub fn unit(self) -> TimeUnit {
        match self {
            ViewType::Month => TimeUnit::Month,
            ViewType::Week => TimeUnit::Week,
            ViewType::Day => TimeUnit::Day,
        }
    }

    /// Move `current` by `delta` steps of this view's unit.
    pub fn navigate(self, current: NaiveDate, delta: i64) -> NaiveDate {
        Moment::at_midnight(current).add(delta, self.unit()).date()
    }

    /// Header title for the visible range.
    pub fn title(self, current: NaiveDate) -> String {
        match self {
            ViewType::Day => current.format("%Y %-m %-d").to_string(),
            ViewType::Week | ViewType::Month => current.format("%Y %B").to_string(),
        }
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(ViewType::Day, 1, date(2024, 2, 1) ; "next day")]
    #[test_case(ViewType::Week, -1, date(2024, 1, 24) ; "previous week")]
    #[test_case(ViewType::Month, 1, date(2024, 2, 29) ; "next month clamps")]
    fn test_navigate(view: ViewType, delta: i64, expected: NaiveDate) {
        assert_eq!(view.navigate(date(2024, 1, 31), delta), expected);
    }

    #[test]
    fn test_title() {
        assert_eq!(ViewType::Day.title(date(2024, 1, 5)), "2024 1 5");
        assert_eq!(ViewType::Month.title(date(2024, 1, 5)), "2024 January");
    }

    #[test]
    fn test_default_is_week() {
        assert_eq!(ViewType::default(), ViewType::Week);
    }
}
