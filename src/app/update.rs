// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are forwarded to their owners and the resulting events
//! are turned into state changes or background tasks here.

use super::screen::Router;
use super::Message;
use crate::compose::{self, Clipboard, MailLauncher};
use crate::error::{ClipboardError, LaunchError};
use crate::ui::composer::{self, Event as ComposerEvent};
use crate::ui::dropzone::{self, Event as DropzoneEvent};
use crate::ui::landing::{self, Event as LandingEvent};
use crate::ui::notifications;
use iced::Task;
use std::sync::Arc;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub router: &'a mut Router,
    pub dropzone: &'a mut dropzone::State,
    pub composer: &'a mut composer::State,
    pub notifications: &'a mut notifications::Manager,
    pub clipboard: &'a Arc<dyn Clipboard>,
    pub launcher: &'a Arc<dyn MailLauncher>,
}

/// Handles landing screen messages.
pub fn handle_landing_message(
    ctx: &mut UpdateContext<'_>,
    message: &landing::Message,
) -> Task<Message> {
    match landing::update(message) {
        LandingEvent::None => Task::none(),
        LandingEvent::EnterApplication => {
            if ctx.router.enter_application() {
                tracing::debug!("entered workspace");
            }
            Task::none()
        }
    }
}

/// Handles drop zone messages.
pub fn handle_dropzone_message(
    ctx: &mut UpdateContext<'_>,
    message: dropzone::Message,
) -> Task<Message> {
    match ctx.dropzone.update(message) {
        DropzoneEvent::None => Task::none(),
        DropzoneEvent::OpenFileDialog => handle_open_file_dialog(),
    }
}

/// Opens the native multi-file picker.
pub fn handle_open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title("Select files")
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|h| h.path().to_path_buf())
                        .collect::<Vec<_>>()
                })
        },
        |paths| Message::Dropzone(dropzone::Message::BrowseCompleted(paths)),
    )
}

/// Handles composer messages.
pub fn handle_composer_message(
    ctx: &mut UpdateContext<'_>,
    message: composer::Message,
) -> Task<Message> {
    match ctx.composer.update(message) {
        ComposerEvent::None => Task::none(),
        ComposerEvent::CopyRequested => {
            let copy = ctx
                .composer
                .composer()
                .copy_to_clipboard(Arc::clone(ctx.clipboard));
            Task::perform(copy, Message::CopyFinished)
        }
        ComposerEvent::EmailRequested => {
            match ctx.composer.composer().compose_email(ctx.notifications) {
                Some(link) => {
                    tracing::debug!("opening mail link");
                    Task::perform(
                        compose::open_mail_link(Arc::clone(ctx.launcher), link),
                        Message::MailLaunched,
                    )
                }
                None => Task::none(),
            }
        }
    }
}

/// Reports the outcome of a clipboard write.
pub fn handle_copy_finished(
    ctx: &mut UpdateContext<'_>,
    result: &Result<(), ClipboardError>,
) -> Task<Message> {
    compose::report_copy(result, ctx.notifications);
    Task::none()
}

/// Reports a failed mail client launch.
pub fn handle_mail_launched(
    ctx: &mut UpdateContext<'_>,
    result: &Result<(), LaunchError>,
) -> Task<Message> {
    compose::report_launch(result, ctx.notifications);
    Task::none()
}
