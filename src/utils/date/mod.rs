// Date utility functions
// Wall-clock instants with minute resolution and the unit arithmetic the
// calendar layout and drag code is written against.

use std::fmt;

use chrono::{Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Storage and display format for a [`Moment`] (`2024-01-01 09:30`).
pub const MOMENT_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Calendar units understood by [`Moment`] arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
    /// Weeks start on Sunday.
    Week,
    Month,
}

/// A local wall-clock instant truncated to whole minutes.
///
/// No timezone is attached; every operation is plain calendar arithmetic.
///
/// # Examples
/// ```
/// use rust_planner::utils::date::{Moment, TimeUnit};
///
/// let wednesday = Moment::from_ymd_hm(2024, 1, 3, 14, 20).unwrap();
/// let sunday = wednesday.start_of(TimeUnit::Week);
/// assert_eq!(sunday.to_string(), "2023-12-31 00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Moment(NaiveDateTime);

impl Moment {
    pub fn new(datetime: NaiveDateTime) -> Self {
        let truncated = datetime
            .with_second(0)
            .and_then(|dt| dt.with_nanosecond(0))
            .unwrap_or(datetime);
        Self(truncated)
    }

    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hour, minute, 0)
            .map(Self)
    }

    /// Midnight at the start of `date`.
    pub fn at_midnight(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }

    /// `date` at `minutes` past midnight. Values of 1440 or more roll into
    /// the following days.
    pub fn at_minutes(date: NaiveDate, minutes: i64) -> Self {
        Self::at_midnight(date).add(minutes, TimeUnit::Minute)
    }

    /// Parse the `YYYY-MM-DD HH:MM` form produced by `Display`.
    pub fn parse(text: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(text.trim(), MOMENT_FORMAT)
            .ok()
            .map(Self)
    }

    pub fn now() -> Self {
        Self::new(Local::now().naive_local())
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight of the same day, in `[0, 1440)`.
    pub fn minutes_from_midnight(&self) -> i64 {
        i64::from(self.0.hour()) * 60 + i64::from(self.0.minute())
    }

    /// Same time of day on another date.
    pub fn with_date(self, date: NaiveDate) -> Self {
        Self(date.and_time(self.0.time()))
    }

    pub fn start_of(self, unit: TimeUnit) -> Self {
        let date = self.0.date();
        match unit {
            TimeUnit::Minute => self,
            TimeUnit::Hour => Self::at_midnight(date).add(i64::from(self.0.hour()), TimeUnit::Hour),
            TimeUnit::Day => Self::at_midnight(date),
            TimeUnit::Week => {
                let offset = i64::from(date.weekday().num_days_from_sunday());
                Self::at_midnight(date).add(-offset, TimeUnit::Day)
            }
            TimeUnit::Month => {
                let first = date.with_day(1).unwrap_or(date);
                Self::at_midnight(first)
            }
        }
    }

    /// The last minute that still belongs to the unit containing `self`.
    pub fn end_of(self, unit: TimeUnit) -> Self {
        match unit {
            TimeUnit::Minute => self,
            _ => self
                .start_of(unit)
                .add(1, unit)
                .add(-1, TimeUnit::Minute),
        }
    }

    /// Shift by `amount` units. Month arithmetic clamps the day of month to
    /// the length of the target month (Jan 31 + 1 month = Feb 29 in 2024).
    pub fn add(self, amount: i64, unit: TimeUnit) -> Self {
        let shifted = match unit {
            TimeUnit::Minute => self.0.checked_add_signed(Duration::minutes(amount)),
            TimeUnit::Hour => self.0.checked_add_signed(Duration::hours(amount)),
            TimeUnit::Day => self.0.checked_add_signed(Duration::days(amount)),
            TimeUnit::Week => self.0.checked_add_signed(Duration::weeks(amount)),
            TimeUnit::Month => {
                let months = Months::new(amount.unsigned_abs().min(u64::from(u32::MAX)) as u32);
                if amount >= 0 {
                    self.0.checked_add_months(months)
                } else {
                    self.0.checked_sub_months(months)
                }
            }
        };
        shifted.map(Self).unwrap_or(self)
    }

    /// Whole units from `other` to `self`, truncated toward zero.
    pub fn diff(self, other: Moment, unit: TimeUnit) -> i64 {
        let delta = self.0 - other.0;
        match unit {
            TimeUnit::Minute => delta.num_minutes(),
            TimeUnit::Hour => delta.num_hours(),
            TimeUnit::Day => delta.num_days(),
            TimeUnit::Week => delta.num_weeks(),
            TimeUnit::Month => {
                let months = i64::from(self.0.year() - other.0.year()) * 12
                    + i64::from(self.0.month())
                    - i64::from(other.0.month());
                let anchor = other.add(months, TimeUnit::Month);
                if months > 0 && self < anchor {
                    months - 1
                } else if months < 0 && self > anchor {
                    months + 1
                } else {
                    months
                }
            }
        }
    }

    pub fn is_same(self, other: Moment, unit: TimeUnit) -> bool {
        self.start_of(unit) == other.start_of(unit)
    }

    pub fn is_before(self, other: Moment) -> bool {
        self < other
    }

    pub fn is_after(self, other: Moment) -> bool {
        self > other
    }

    /// Format with a chrono `strftime` pattern.
    pub fn format(&self, pattern: &str) -> String {
        self.0.format(pattern).to_string()
    }
}

impl From<NaiveDateTime> for Moment {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime)
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(MOMENT_FORMAT))
    }
}

impl Serialize for Moment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Moment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Moment::parse(&text).ok_or_else(|| {
            serde::de::Error::custom(format!("expected `YYYY-MM-DD HH:MM`, got `{}`", text))
        })
    }
}

/// Calendar days between the dates of two moments, ignoring time of day.
pub fn days_between(from: Moment, to: Moment) -> i64 {
    to.start_of(TimeUnit::Day)
        .diff(from.start_of(TimeUnit::Day), TimeUnit::Day)
}
