//! Authoritative event list.
//!
//! The layout engine only reads events; the drag controller writes exactly
//! one event's start/end on commit through [`EventStore::update_event`].

mod persistence;

pub use persistence::{load_snapshot, save_snapshot, EventSnapshot};

use thiserror::Error;

use crate::models::event::Event;
use crate::utils::date::Moment;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no event with id `{0}`")]
    NotFound(String),
    #[error("event `{id}` would end at {end}, before its start at {start}")]
    InvalidRange { id: String, start: Moment, end: Moment },
}

/// Contract between the calendar core and whatever owns the events.
pub trait EventStore {
    fn events(&self) -> &[Event];

    fn update_event(&mut self, id: &str, start: Moment, end: Moment) -> Result<(), StoreError>;
}

/// Vec-backed store used by the desktop shell and the tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryEventStore {
    events: Vec<Event>,
}

impl InMemoryEventStore {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Insert or replace by id.
    pub fn upsert(&mut self, event: Event) {
        match self.events.iter_mut().find(|existing| existing.id == event.id) {
            Some(existing) => *existing = event,
            None => self.events.push(event),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Event> {
        let index = self.events.iter().position(|event| event.id == id)?;
        Some(self.events.remove(index))
    }

    pub fn retain(&mut self, keep: impl FnMut(&Event) -> bool) {
        self.events.retain(keep);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.upsert(event);
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventStore for InMemoryEventStore {
    fn events(&self) -> &[Event] {
        &self.events
    }

    fn update_event(&mut self, id: &str, start: Moment, end: Moment) -> Result<(), StoreError> {
        if end.is_before(start) {
            return Err(StoreError::InvalidRange {
                id: id.to_string(),
                start,
                end,
            });
        }
        let event = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        event.start = start;
        event.end = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> Moment {
        Moment::from_ymd_hm(2024, 1, 1, h, m).unwrap()
    }

    fn store() -> InMemoryEventStore {
        InMemoryEventStore::new(vec![
            Event::new("a", "Alpha", at(9, 0), at(10, 0)).unwrap(),
            Event::new("b", "Beta", at(11, 0), at(12, 0)).unwrap(),
        ])
    }

    #[test]
    fn test_update_event_rewrites_only_times() {
        let mut store = store();
        store.update_event("b", at(13, 0), at(14, 30)).unwrap();

        let beta = store.get("b").unwrap();
        assert_eq!((beta.start, beta.end), (at(13, 0), at(14, 30)));
        assert_eq!(beta.title, "Beta");
        assert_eq!(store.get("a").unwrap().start, at(9, 0));
    }

    #[test]
    fn test_update_unknown_event() {
        let mut store = store();
        assert_eq!(
            store.update_event("zzz", at(9, 0), at(10, 0)),
            Err(StoreError::NotFound("zzz".to_string()))
        );
    }

    #[test]
    fn test_update_rejects_backwards_range() {
        let mut store = store();
        let result = store.update_event("a", at(10, 0), at(9, 0));
        assert!(matches!(result, Err(StoreError::InvalidRange { .. })));
        assert_eq!(store.get("a").unwrap().end, at(10, 0));
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let mut store = store();
        store.upsert(Event::new("a", "Alpha v2", at(8, 0), at(9, 0)).unwrap());
        store.upsert(Event::new("c", "Gamma", at(15, 0), at(16, 0)).unwrap());
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("a").unwrap().title, "Alpha v2");
    }

    #[test]
    fn test_remove_and_retain() {
        let mut store = store();
        assert_eq!(store.remove("a").map(|e| e.title), Some("Alpha".to_string()));
        assert!(store.remove("a").is_none());
        store.retain(|event| event.id != "b");
        assert!(store.is_empty());
    }
}
