//! scrim-admin - CRUD dashboard

use std::cell::RefCell;
use std::sync::Arc;

use iced::{Size, Task};
use scrim_admin::config;
use scrim_admin::data::StaticSource;
use scrim_admin::ui::{AdminApp, Message};
use scrim_core::OverlayEnv;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config_path = config::default_config_path();
    let config = config::load_config(&config_path);

    // Overlays mount on the root host; without it no dialog can open
    let app = AdminApp::new(
        OverlayEnv::standard(),
        Arc::new(StaticSource::sample()),
        config,
        config_path,
    )
    .expect("Overlay root host missing - this is required for scrim-admin");

    // Wrap the app in a cell so the boot closure can be Fn (required by iced)
    let app_cell = RefCell::new(Some(app));

    iced::application(
        move || {
            let mut app = app_cell.borrow_mut().take().expect("app already taken");
            let startup_task: Task<Message> = app.load_records();
            (app, startup_task)
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("scrim admin")
    .window_size(Size::new(1000.0, 700.0))
    .run()
}

/// Update function for iced
fn update(app: &mut AdminApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &AdminApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &AdminApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &AdminApp) -> iced::Theme {
    app.theme()
}
