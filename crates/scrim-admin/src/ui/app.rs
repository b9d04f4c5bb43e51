//! Main application state and iced implementation

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Point, Subscription, Task, Theme};
use scrim_core::{MountHost, Overlay, OverlayEnv, OverlayError, ROOT_HOST_ID};
use scrim_widgets::{cursor_tracking, dismissal_keys, modal_view, Portal};

use super::delete_modal::{self, DeleteState};
use super::edit_modal::{self, EditState};
use super::message::{Message, ModalKind};
use super::table;
use crate::config::{DashboardConfig, ThemeMode};
use crate::data::{DataSource, RecordStore};

/// Frame interval while a modal transition is running (~60 fps)
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Dashboard state
pub struct AdminApp {
    /// Loaded configuration
    pub config: DashboardConfig,
    /// Where theme changes are persisted
    pub config_path: PathBuf,
    /// Overlay hosts, listeners and scroll lock
    pub env: OverlayEnv,
    /// Host both dialogs are mounted on
    pub root: Arc<MountHost>,
    /// Record backend
    pub source: Arc<dyn DataSource>,
    /// Fetched records
    pub records: RecordStore,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Status line under the table
    pub status: String,
    /// Edit dialog form state
    pub edit: EditState,
    /// Delete dialog state
    pub delete: DeleteState,
    /// Edit dialog controller
    pub edit_overlay: Overlay,
    /// Delete dialog controller
    pub delete_overlay: Overlay,
    /// Last known cursor position
    pub cursor: Option<Point>,
    /// Frame time, refreshed on every update
    pub now: Instant,
}

impl AdminApp {
    /// Create the dashboard
    ///
    /// Fails if `env` has no root overlay host.
    pub fn new(
        env: OverlayEnv,
        source: Arc<dyn DataSource>,
        config: DashboardConfig,
        config_path: PathBuf,
    ) -> Result<Self, OverlayError> {
        let root = env.hosts.resolve(ROOT_HOST_ID)?;
        let edit_overlay = Overlay::new(&env)?;
        let delete_overlay = Overlay::new(&env)?;

        let mut app = Self {
            config,
            config_path,
            env,
            root,
            source,
            records: RecordStore::default(),
            loading: false,
            status: String::new(),
            edit: EditState::default(),
            delete: DeleteState::default(),
            edit_overlay,
            delete_overlay,
            cursor: None,
            now: Instant::now(),
        };
        app.sync_overlays();
        Ok(app)
    }

    /// Fetch records on a blocking worker
    pub fn load_records(&mut self) -> Task<Message> {
        self.loading = true;
        self.status = String::from("Loading records...");
        let source = Arc::clone(&self.source);

        Task::perform(
            async move {
                match tokio::task::spawn_blocking(move || source.fetch()).await {
                    Ok(result) => result.map_err(|e| format!("{:#}", e)),
                    Err(e) => Err(format!("Fetch task failed: {}", e)),
                }
            },
            Message::RecordsLoaded,
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();

        match message {
            // Records
            Message::Refresh => return self.handle_refresh(),
            Message::RecordsLoaded(result) => self.handle_records_loaded(result),

            // Edit dialog
            Message::EditRecord(id) => self.handle_edit_record(id),
            Message::EditNameChanged(name) => self.edit.draft_name = name,
            Message::SaveEdit => self.handle_save_edit(),
            Message::CancelEdit => self.handle_cancel_edit(),

            // Delete dialog
            Message::DeleteRecord(id) => self.handle_delete_record(id),
            Message::ConfirmDelete => self.handle_confirm_delete(),
            Message::CancelDelete => self.handle_cancel_delete(),

            // Overlays
            Message::Modal(kind, event) => self.handle_modal_event(kind, event),
            Message::Input(input) => self.handle_input(input),
            Message::Tick => self.handle_tick(),

            // Appearance
            Message::ToggleTheme => self.handle_toggle_theme(),
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let locked = self.edit_overlay.is_active() || self.delete_overlay.is_active();

        let status: Element<Message> = if self.status.is_empty() {
            Space::new().height(0).into()
        } else {
            text(&self.status)
                .size(12)
                .color(iced::Color::from_rgb(0.5, 0.5, 0.5))
                .into()
        };

        let main = column![
            self.view_header(locked),
            table::view(self.records.records(), locked),
            status
        ]
        .spacing(10);

        let base = container(main)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20);

        let mut portal = Portal::new(Arc::clone(&self.root));

        let edit_body = edit_modal::view(&self.edit, self.edit_overlay.visual(self.now).interactive);
        portal.mount(
            &self.edit_overlay,
            modal_view(&self.edit_overlay, self.now, edit_body, |event| {
                Message::Modal(ModalKind::Edit, event)
            }),
        );

        let delete_body =
            delete_modal::view(&self.delete, self.delete_overlay.visual(self.now).interactive);
        portal.mount(
            &self.delete_overlay,
            modal_view(&self.delete_overlay, self.now, delete_body, |event| {
                Message::Modal(ModalKind::Delete, event)
            }),
        );

        portal.compose(base)
    }

    pub fn theme(&self) -> Theme {
        match self.config.theme {
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
        }
    }

    /// Window input, plus frame ticks while a modal animates
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::time;

        let mut subscriptions = vec![
            cursor_tracking().map(Message::Input),
            dismissal_keys(&self.env.listeners).map(Message::Input),
        ];

        if self.edit_overlay.is_animating() || self.delete_overlay.is_animating() {
            subscriptions.push(time::every(TICK_INTERVAL).map(|_| Message::Tick));
        }

        Subscription::batch(subscriptions)
    }

    /// View header with title, refresh and theme toggle
    fn view_header(&self, locked: bool) -> Element<'_, Message> {
        let title = text(format!("Records ({})", self.records.len())).size(24);

        let refresh_btn = button(text(if self.loading { "Loading..." } else { "Refresh" }))
            .on_press_maybe((!locked && !self.loading).then_some(Message::Refresh))
            .style(button::secondary);

        let theme_label = match self.config.theme {
            ThemeMode::Dark => "Light mode",
            ThemeMode::Light => "Dark mode",
        };
        let theme_btn = button(text(theme_label))
            .on_press_maybe((!locked).then_some(Message::ToggleTheme))
            .style(button::secondary);

        row![title, Space::new().width(Length::Fill), refresh_btn, theme_btn]
            .spacing(10)
            .align_y(Alignment::Center)
            .width(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModalConfig;
    use crate::data::StaticSource;
    use scrim_core::{Phase, ReleaseTarget};
    use scrim_widgets::{ModalEvent, OverlayInput};

    fn app(animate: bool) -> AdminApp {
        let env = OverlayEnv::isolated();
        env.hosts.install(ROOT_HOST_ID);
        let config = DashboardConfig {
            modal: ModalConfig {
                animate,
                ..ModalConfig::default()
            },
            ..DashboardConfig::default()
        };
        let mut app = AdminApp::new(
            env,
            Arc::new(StaticSource::sample()),
            config,
            PathBuf::from("unused.yaml"),
        )
        .unwrap();
        let records = app.source.fetch().unwrap();
        let _ = app.update(Message::RecordsLoaded(Ok(records)));
        app
    }

    fn click(app: &mut AdminApp, kind: ModalKind, from: Point, to: Point, target: ReleaseTarget) {
        let _ = app.update(Message::Input(OverlayInput::CursorMoved(from)));
        let _ = app.update(Message::Modal(kind, ModalEvent::Pressed));
        let _ = app.update(Message::Input(OverlayInput::CursorMoved(to)));
        let _ = app.update(Message::Modal(kind, ModalEvent::Released(target)));
    }

    #[test]
    fn test_missing_root_host_is_an_error() {
        let result = AdminApp::new(
            OverlayEnv::isolated(),
            Arc::new(StaticSource::sample()),
            DashboardConfig::default(),
            PathBuf::from("unused.yaml"),
        );
        assert!(matches!(result, Err(OverlayError::MountHostMissing(_))));
    }

    #[test]
    fn test_edit_opens_and_escape_closes() {
        let mut app = app(false);
        let _ = app.update(Message::EditRecord(1));
        assert!(app.edit.is_open);
        assert_eq!(app.edit_overlay.phase(), Phase::Open);
        assert!(app.env.listeners.is_listening());

        let _ = app.update(Message::Input(OverlayInput::EscapePressed));
        assert!(!app.edit.is_open);
        assert_eq!(app.edit_overlay.phase(), Phase::Closed);
        assert!(!app.env.listeners.is_listening());
    }

    #[test]
    fn test_backdrop_click_closes_edit_but_drag_does_not() {
        let mut app = app(false);
        let _ = app.update(Message::EditRecord(2));

        let start = Point::new(100.0, 100.0);
        click(&mut app, ModalKind::Edit, start, Point::new(160.0, 100.0), ReleaseTarget::Backdrop);
        assert!(app.edit.is_open);

        click(&mut app, ModalKind::Edit, start, Point::new(104.0, 102.0), ReleaseTarget::Backdrop);
        assert!(!app.edit.is_open);
    }

    fn touch(app: &mut AdminApp, contact: iced::touch::Event) {
        let input = scrim_widgets::pointer_input(&iced::Event::Touch(contact)).unwrap();
        let _ = app.update(Message::Input(input));
    }

    #[test]
    fn test_touch_drag_on_backdrop_keeps_edit_open() {
        use iced::touch::{Event as Touch, Finger};

        let mut app = app(false);
        let _ = app.update(Message::Input(OverlayInput::CursorMoved(Point::new(10.0, 10.0))));
        let _ = app.update(Message::EditRecord(1));

        let id = Finger(0);
        touch(&mut app, Touch::FingerPressed { id, position: Point::new(300.0, 40.0) });
        let _ = app.update(Message::Modal(ModalKind::Edit, ModalEvent::Pressed));
        touch(&mut app, Touch::FingerMoved { id, position: Point::new(0.0, 40.0) });
        touch(&mut app, Touch::FingerLifted { id, position: Point::new(0.0, 40.0) });
        let _ = app.update(Message::Modal(ModalKind::Edit, ModalEvent::Released(ReleaseTarget::Backdrop)));
        assert!(app.edit.is_open);

        // A tap still dismisses
        touch(&mut app, Touch::FingerPressed { id, position: Point::new(50.0, 50.0) });
        let _ = app.update(Message::Modal(ModalKind::Edit, ModalEvent::Pressed));
        touch(&mut app, Touch::FingerLifted { id, position: Point::new(52.0, 51.0) });
        let _ = app.update(Message::Modal(ModalKind::Edit, ModalEvent::Released(ReleaseTarget::Backdrop)));
        assert!(!app.edit.is_open);
    }

    #[test]
    fn test_close_button_closes_edit() {
        let mut app = app(false);
        let _ = app.update(Message::EditRecord(2));
        let _ = app.update(Message::Modal(ModalKind::Edit, ModalEvent::CloseRequested));
        assert!(!app.edit.is_open);
        assert!(!app.edit_overlay.is_active());
    }

    #[test]
    fn test_save_renames_record() {
        let mut app = app(false);
        let _ = app.update(Message::EditRecord(3));
        let _ = app.update(Message::EditNameChanged(String::from("A. M. Turing")));
        let _ = app.update(Message::SaveEdit);
        assert!(!app.edit.is_open);
        assert_eq!(app.records.get(3).unwrap().name, "A. M. Turing");
    }

    #[test]
    fn test_delete_modal_ignores_escape_and_backdrop() {
        let mut app = app(false);
        let _ = app.update(Message::DeleteRecord(4));
        assert!(app.delete_overlay.is_active());

        let _ = app.update(Message::Input(OverlayInput::EscapePressed));
        let point = Point::new(10.0, 10.0);
        click(&mut app, ModalKind::Delete, point, point, ReleaseTarget::Backdrop);
        let _ = app.update(Message::Modal(ModalKind::Delete, ModalEvent::CloseRequested));
        assert!(app.delete.is_open);
        assert!(app.delete_overlay.is_active());

        let _ = app.update(Message::ConfirmDelete);
        assert!(!app.delete.is_open);
        assert!(app.records.get(4).is_none());
        assert_eq!(app.records.len(), 4);
    }

    #[test]
    fn test_animated_close_keeps_ticking_until_done() {
        let mut app = app(true);
        let _ = app.update(Message::EditRecord(1));
        assert!(app.edit_overlay.is_animating());
        app.now += Duration::from_secs(1);
        app.handle_tick();
        assert_eq!(app.edit_overlay.phase(), Phase::Open);

        let _ = app.update(Message::CancelEdit);
        assert_eq!(app.edit_overlay.phase(), Phase::Closing);
        // Closing overlays still paint their content
        assert!(app.edit.target.is_some());

        app.now += Duration::from_secs(1);
        app.handle_tick();
        assert_eq!(app.edit_overlay.phase(), Phase::Closed);
        assert!(!app.edit_overlay.is_animating());
    }

    #[test]
    fn test_theme_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(false);
        app.config_path = dir.path().join("config.yaml");

        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.theme(), Theme::Light);
        let saved = crate::config::load_config(&app.config_path);
        assert_eq!(saved.theme, ThemeMode::Light);
    }

    #[test]
    fn test_failed_load_sets_status() {
        let mut app = app(false);
        let _ = app.update(Message::RecordsLoaded(Err(String::from("timeout"))));
        assert!(app.status.contains("timeout"));
        assert_eq!(app.records.len(), 5);
    }
}
