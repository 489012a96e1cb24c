// Settings and storage locations

mod service;

pub use service::SettingsService;

use std::path::PathBuf;

use directories::ProjectDirs;

/// Where the planner keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub settings: PathBuf,
    pub events: PathBuf,
    pub reminders: PathBuf,
}

impl AppPaths {
    /// Platform config/data dirs, or the working directory when the home
    /// directory cannot be resolved.
    pub fn resolve() -> Self {
        match ProjectDirs::from("com", "RustPlanner", "Planner") {
            Some(dirs) => Self {
                settings: dirs.config_dir().join("settings.toml"),
                events: dirs.data_dir().join("events.json"),
                reminders: dirs.data_dir().join("reminders.json"),
            },
            None => {
                log::warn!("Unable to resolve project directory; using current dir");
                Self::in_dir(PathBuf::from("."))
            }
        }
    }

    pub fn in_dir(dir: PathBuf) -> Self {
        Self {
            settings: dir.join("settings.toml"),
            events: dir.join("events.json"),
            reminders: dir.join("reminders.json"),
        }
    }
}
