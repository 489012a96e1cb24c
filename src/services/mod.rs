// Service module exports

pub mod drag;
pub mod event_store;
pub mod layout;
pub mod reminder;
pub mod sample;
pub mod settings;
