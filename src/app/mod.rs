// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the landing screen and
//! the workspace.
//!
//! The `App` struct wires together the components (drop zone, composer,
//! toasts) with localization and the system capabilities they act through,
//! and translates messages into state changes or background tasks.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{Router, Screen};

use crate::compose::{Clipboard, MailLauncher, SystemClipboard, SystemMailLauncher};
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::{composer, dropzone};
use config::defaults::{DEFAULT_FIELD_NAME, DEFAULT_FIELD_REQUIRED};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    router: Router,
    dropzone: dropzone::State,
    composer: composer::State,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    clipboard: Arc<dyn Clipboard>,
    launcher: Arc<dyn MailLauncher>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.router.screen())
            .field("staged_files", &self.dropzone.selection().len())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; the flags are only consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_capabilities(
            Arc::new(SystemClipboard::new()),
            Arc::new(SystemMailLauncher),
        )
    }
}

impl App {
    /// Builds a default application that copies and mails through the given
    /// capabilities.
    pub fn with_capabilities(
        clipboard: Arc<dyn Clipboard>,
        launcher: Arc<dyn MailLauncher>,
    ) -> Self {
        Self {
            i18n: I18n::default(),
            router: Router::new(),
            dropzone: dropzone::State::new(DEFAULT_FIELD_NAME, DEFAULT_FIELD_REQUIRED),
            composer: composer::State::new(),
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
            clipboard,
            launcher,
        }
    }

    /// Initializes application state from the config file and `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let field_name = flags
            .field_name
            .or_else(|| config.dropzone.field_name.clone())
            .unwrap_or_else(|| DEFAULT_FIELD_NAME.to_string());
        let required =
            flags.required || config.dropzone.required.unwrap_or(DEFAULT_FIELD_REQUIRED);

        let mut app = App {
            i18n,
            dropzone: dropzone::State::new(field_name, required),
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            field = app.dropzone.field().name(),
            required,
            "application started"
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.router.screen()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            router: &mut self.router,
            dropzone: &mut self.dropzone,
            composer: &mut self.composer,
            notifications: &mut self.notifications,
            clipboard: &self.clipboard,
            launcher: &self.launcher,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Landing(message) => {
                let mut ctx = self.update_context();
                update::handle_landing_message(&mut ctx, &message)
            }
            Message::Dropzone(message) => {
                // Drops that arrive before the workspace is shown are ignored.
                if !self.router.is_application_view() {
                    return Task::none();
                }
                let mut ctx = self.update_context();
                update::handle_dropzone_message(&mut ctx, message)
            }
            Message::Composer(message) => {
                let mut ctx = self.update_context();
                update::handle_composer_message(&mut ctx, message)
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
            Message::CopyFinished(result) => {
                let mut ctx = self.update_context();
                update::handle_copy_finished(&mut ctx, &result)
            }
            Message::MailLaunched(result) => {
                let mut ctx = self.update_context();
                update::handle_mail_launched(&mut ctx, &result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.router.screen(),
            dropzone: &self.dropzone,
            composer: &self.composer,
            notifications: &self.notifications,
        })
    }
}
