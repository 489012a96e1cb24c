// Reminder sync
// Mirrors open, scheduled reminders into the calendar as one-hour events.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::color::ColorToken;
use crate::models::event::{Event, EventOrigin, REMINDER_TITLE_PREFIX};
use crate::models::reminder::Reminder;
use crate::services::event_store::InMemoryEventStore;
use crate::utils::date::TimeUnit;

/// Color of reminder events when the reminder has none.
pub const DEFAULT_REMINDER_COLOR: ColorToken = ColorToken::Rose;

/// Calendar event for `reminder`, or `None` when it is completed or has no
/// due time.
pub fn reminder_event(reminder: &Reminder) -> Option<Event> {
    if !reminder.is_active() {
        return None;
    }
    let start = reminder.remind_at?;
    let event = Event::builder()
        .id(reminder.id.clone())
        .title(format!("{}{}", REMINDER_TITLE_PREFIX, reminder.title))
        .start(start)
        .end(start.add(1, TimeUnit::Hour))
        .color(reminder.color_token().unwrap_or(DEFAULT_REMINDER_COLOR))
        .origin(EventOrigin::Reminder)
        .build();

    match event {
        Ok(event) => Some(event),
        Err(err) => {
            log::warn!("Skipping reminder {}: {}", reminder.id, err);
            None
        }
    }
}

/// Replace every reminder-derived event in `store` with fresh ones built
/// from `reminders`. Returns how many were added.
pub fn sync_reminders(store: &mut InMemoryEventStore, reminders: &[Reminder]) -> usize {
    store.retain(|event| event.origin != EventOrigin::Reminder);

    let mut added = 0;
    for event in reminders.iter().filter_map(reminder_event) {
        if store.get(&event.id).is_some() {
            log::warn!("Reminder {} collides with an existing event id, skipping", event.id);
            continue;
        }
        store.upsert(event);
        added += 1;
    }
    log::debug!("Synced {} reminder events", added);
    added
}

/// Read the reminders list. A missing file is an empty list.
pub fn load_reminders(path: &Path) -> Result<Vec<Reminder>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read reminders from {}", path.display()))?;
    let reminders = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse reminders in {}", path.display()))?;
    Ok(reminders)
}

pub fn save_reminders(path: &Path, reminders: &[Reminder]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }
    let data = serde_json::to_string_pretty(reminders)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write reminders to {}", path.display()))?;
    Ok(())
}
