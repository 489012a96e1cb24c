//! Reminder model.
//!
//! Reminders are owned by the reminder list; the calendar only reads the
//! open, dated ones and mirrors them as events.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::color::ColorToken;
use crate::utils::date::{Moment, TimeUnit};

/// How long before `remind_at` the alert should fire, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotifyOffset(pub u32);

impl NotifyOffset {
    pub const AT_TIME: NotifyOffset = NotifyOffset(0);
    pub const FIFTEEN_MINUTES: NotifyOffset = NotifyOffset(15);
    pub const ONE_HOUR: NotifyOffset = NotifyOffset(60);
    pub const ONE_DAY: NotifyOffset = NotifyOffset(1_440);
    pub const ONE_WEEK: NotifyOffset = NotifyOffset(10_080);
    pub const ONE_MONTH: NotifyOffset = NotifyOffset(43_800);

    /// Lead times offered to the user, in menu order.
    pub const PRESETS: [NotifyOffset; 6] = [
        Self::AT_TIME,
        Self::FIFTEEN_MINUTES,
        Self::ONE_HOUR,
        Self::ONE_DAY,
        Self::ONE_WEEK,
        Self::ONE_MONTH,
    ];

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn label(self) -> String {
        match self.0 {
            0 => "At time of event".to_string(),
            15 => "15 Minutes".to_string(),
            60 => "1 Hour".to_string(),
            1_440 => "1 Day".to_string(),
            10_080 => "1 Week".to_string(),
            43_800 => "1 Month".to_string(),
            other => format!("{} Minutes", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: Moment,
    #[serde(default)]
    pub remind_at: Option<Moment>,
    #[serde(default)]
    pub reminder_sent: bool,
    #[serde(default)]
    pub notify_offset: NotifyOffset,
    /// Token name, class name or hex; anything `ColorToken::from_str` reads.
    #[serde(default, deserialize_with = "deserialize_color")]
    pub color: Option<ColorToken>,
    /// Styling class saved by the reminder list, e.g. `bg-rose-500`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Option<ColorToken>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| raw.parse::<ColorToken>().map_err(serde::de::Error::custom))
        .transpose()
}

impl Reminder {
    pub fn new(id: impl Into<String>, title: impl Into<String>, created_at: Moment) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
            created_at,
            remind_at: None,
            reminder_sent: false,
            notify_offset: NotifyOffset::AT_TIME,
            color: None,
            color_class: None,
            color_hex: None,
        }
    }

    pub fn with_remind_at(mut self, remind_at: Moment) -> Self {
        self.remind_at = Some(remind_at);
        self
    }

    /// Open and scheduled; only these show up on the calendar.
    pub fn is_active(&self) -> bool {
        !self.completed && self.remind_at.is_some()
    }

    /// When the early-warning alert is due.
    pub fn trigger_time(&self) -> Option<Moment> {
        self.remind_at
            .map(|at| at.add(-i64::from(self.notify_offset.minutes()), TimeUnit::Minute))
    }

    pub fn is_past_due(&self, now: Moment) -> bool {
        self.remind_at.map_or(false, |at| at.is_before(now))
    }

    /// Token to paint the reminder with: `color`, else the saved class, else
    /// the saved hex. Unrecognised class or hex values are ignored.
    pub fn color_token(&self) -> Option<ColorToken> {
        self.color
            .or_else(|| self.color_class.as_deref().and_then(ColorToken::from_class_name))
            .or_else(|| self.color_hex.as_deref().and_then(ColorToken::from_hex))
    }

    /// Changing the lead time re-arms the alert.
    pub fn set_notify_offset(&mut self, offset: NotifyOffset) {
        self.notify_offset = offset;
        self.reminder_sent = false;
    }
}
