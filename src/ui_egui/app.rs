use chrono::NaiveDate;

use crate::models::settings::Settings;
use crate::models::ui::{today, ViewType};
use crate::services::drag::{DragController, SurfaceMap};
use crate::services::event_store::{load_snapshot, save_snapshot, EventStore, InMemoryEventStore};
use crate::services::layout::time_columns;
use crate::services::reminder::{load_reminders, sync_reminders};
use crate::services::sample::generate_sample_events;
use crate::services::settings::{AppPaths, SettingsService};
use crate::ui_egui::drag::pump_pointer;
use crate::ui_egui::views::month_view::MonthView;
use crate::ui_egui::views::time_grid::render_time_grid;
use crate::ui_egui::views::ViewInput;

pub struct CalendarApp {
    paths: AppPaths,
    settings: Settings,
    store: InMemoryEventStore,
    controller: DragController,
    /// Drop zones registered by the views during the current frame
    surface: SurfaceMap,
    current_view: ViewType,
    current_date: NaiveDate,
    /// Hour to scroll the time grid to on the next frame
    pending_scroll_hour: Option<u32>,
    /// Events changed since the last save
    dirty: bool,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_header(ctx);
        self.render_main_panel(ctx);

        if let Some(change) = pump_pointer(ctx, &mut self.controller, &self.surface, &mut self.store) {
            log::debug!("{} moved from {:?} to {:?}", change.event_id, change.from, change.to);
            self.dirty = true;
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.persist_events_if_needed();
    }
}

impl CalendarApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_paths(AppPaths::resolve())
    }

    /// Load settings, events and reminders from `paths`.
    pub fn with_paths(paths: AppPaths) -> Self {
        let settings = SettingsService::new(paths.settings.clone()).load_or_default();
        let store = load_event_store(&paths, &settings);
        let current_view = settings.initial_view;

        Self {
            controller: DragController::new(settings.time_scale()),
            pending_scroll_hour: Some(settings.default_scroll_hour),
            paths,
            settings,
            store,
            surface: SurfaceMap::new(),
            current_view,
            current_date: today(),
            dirty: false,
        }
    }

    pub fn store(&self) -> &InMemoryEventStore {
        &self.store
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("calendar_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for view in ViewType::ALL {
                    if ui
                        .selectable_label(self.current_view == view, view.label())
                        .clicked()
                    {
                        self.switch_view(view);
                    }
                }

                ui.separator();

                if ui.button("◀ Previous").clicked() {
                    self.navigate(-1);
                }
                if ui.button("Today").clicked() {
                    self.current_date = today();
                }
                if ui.button("Next ▶").clicked() {
                    self.navigate(1);
                }

                ui.separator();
                ui.heading(self.current_view.title(self.current_date));
            });
        });
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        self.surface.clear();
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut input = ViewInput {
                events: self.store.events(),
                controller: &mut self.controller,
                surface: &mut self.surface,
                scale: self.settings.time_scale(),
                scroll_to_hour: self.pending_scroll_hour.take(),
            };
            match self.current_view {
                ViewType::Month => MonthView::show(ui, self.current_date, &mut input),
                ViewType::Week | ViewType::Day => {
                    let dates = time_columns(self.current_date, self.current_view);
                    render_time_grid(ui, &dates, &mut input);
                }
            }
        });
    }

    fn switch_view(&mut self, view: ViewType) {
        if self.current_view != view {
            log::debug!("Switching to {} view", view.label());
            self.current_view = view;
            self.pending_scroll_hour = Some(self.settings.default_scroll_hour);
        }
    }

    /// Step the date by the view's unit. The time grid keeps its scroll
    /// offset; only a view switch scrolls back to the default hour.
    fn navigate(&mut self, delta: i64) {
        self.current_date = self.current_view.navigate(self.current_date, delta);
    }

    fn persist_events_if_needed(&mut self) {
        if !self.dirty {
            return;
        }
        if let Err(err) = save_snapshot(&self.paths.events, &self.store) {
            log::error!("Failed to persist events: {err:?}");
        } else {
            self.dirty = false;
        }
    }
}

fn load_event_store(paths: &AppPaths, settings: &Settings) -> InMemoryEventStore {
    let mut store = match load_snapshot(&paths.events) {
        Ok(store) => store,
        Err(err) => {
            log::warn!("Failed to load events: {err:?}");
            InMemoryEventStore::default()
        }
    };

    if store.is_empty() && settings.sample_event_count > 0 {
        let samples =
            generate_sample_events(today(), settings.sample_event_count, &mut rand::thread_rng());
        log::info!("Generated {} sample events", samples.len());
        store.extend(samples);
    }

    match load_reminders(&paths.reminders) {
        Ok(reminders) => {
            sync_reminders(&mut store, &reminders);
        }
        Err(err) => log::warn!("Failed to load reminders: {err:?}"),
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_first_launch_seeds_sample_events() {
        let dir = tempdir().unwrap();
        let app = CalendarApp::with_paths(AppPaths::in_dir(dir.path().to_path_buf()));
        assert_eq!(app.store().events().len(), Settings::default().sample_event_count);
        assert_eq!(app.current_view, ViewType::Week);
        assert_eq!(app.pending_scroll_hour, Some(8));
    }

    #[test]
    fn test_navigation_follows_view_unit() {
        let dir = tempdir().unwrap();
        let mut app = CalendarApp::with_paths(AppPaths::in_dir(dir.path().to_path_buf()));
        app.current_date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        app.switch_view(ViewType::Month);
        app.navigate(1);
        assert_eq!(app.current_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        app.switch_view(ViewType::Day);
        app.navigate(-1);
        assert_eq!(app.current_date, NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
    }

    #[test]
    fn test_navigation_keeps_scroll_position() {
        let dir = tempdir().unwrap();
        let mut app = CalendarApp::with_paths(AppPaths::in_dir(dir.path().to_path_buf()));
        app.pending_scroll_hour = None;

        app.navigate(1);
        app.navigate(-2);
        assert_eq!(app.pending_scroll_hour, None);

        app.switch_view(ViewType::Day);
        assert_eq!(app.pending_scroll_hour, Some(8));
    }
}
