// Event module
// Calendar event model shared by the layout engine and the drag controller

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::color::ColorToken;
use crate::utils::date::{Moment, TimeUnit};

/// Prefix given to titles of events that mirror a reminder.
pub const REMINDER_TITLE_PREFIX: &str = "🔔 ";

/// Layout family of an event, derived from its timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Start and end fall on the same calendar day.
    TimeBlocked,
    /// Spans more than one calendar day.
    MultiDay,
}

/// Where an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventOrigin {
    #[default]
    Local,
    Reminder,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("event id cannot be empty")]
    EmptyId,
    #[error("event title cannot be empty")]
    EmptyTitle,
    #[error("event end {end} is before its start {start}")]
    EndBeforeStart { start: Moment, end: Moment },
    #[error("event {0} is required")]
    MissingField(&'static str),
}

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: Moment,
    pub end: Moment,
    #[serde(default)]
    pub color: ColorToken,
    #[serde(default)]
    pub origin: EventOrigin,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use rust_planner::models::event::{Event, EventKind};
    /// use rust_planner::utils::date::Moment;
    ///
    /// let start = Moment::from_ymd_hm(2024, 1, 1, 9, 0).unwrap();
    /// let end = Moment::from_ymd_hm(2024, 1, 1, 9, 30).unwrap();
    /// let event = Event::new("a", "Standup", start, end).unwrap();
    /// assert_eq!(event.kind(), EventKind::TimeBlocked);
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: Moment,
        end: Moment,
    ) -> Result<Self, EventError> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            color: ColorToken::default(),
            origin: EventOrigin::Local,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    pub fn validate(&self) -> Result<(), EventError> {
        if self.id.trim().is_empty() {
            return Err(EventError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }
        if self.end.is_before(self.start) {
            return Err(EventError::EndBeforeStart {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn kind(&self) -> EventKind {
        if self.start.is_same(self.end, TimeUnit::Day) {
            EventKind::TimeBlocked
        } else {
            EventKind::MultiDay
        }
    }

    pub fn is_time_blocked(&self) -> bool {
        self.kind() == EventKind::TimeBlocked
    }

    /// Length in minutes; negative when the event is malformed.
    pub fn duration_minutes(&self) -> i64 {
        self.end.diff(self.start, TimeUnit::Minute)
    }

    /// Display color for the event's token.
    pub fn color_value(&self) -> &'static str {
        self.color.hex()
    }

    pub fn is_from_reminder(&self) -> bool {
        self.origin == EventOrigin::Reminder
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    start: Option<Moment>,
    end: Option<Moment>,
    color: ColorToken,
    origin: EventOrigin,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: Moment) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: Moment) -> Self {
        self.end = Some(end);
        self
    }

    pub fn color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }

    pub fn origin(mut self, origin: EventOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn build(self) -> Result<Event, EventError> {
        let event = Event {
            id: self.id.ok_or(EventError::MissingField("id"))?,
            title: self.title.ok_or(EventError::MissingField("title"))?,
            start: self.start.ok_or(EventError::MissingField("start"))?,
            end: self.end.ok_or(EventError::MissingField("end"))?,
            color: self.color,
            origin: self.origin,
        };
        event.validate()?;
        Ok(event)
    }
}
