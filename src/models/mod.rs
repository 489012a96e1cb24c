pub mod color;
pub mod event;
pub mod reminder;
pub mod settings;
pub mod ui;
