// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window drag-and-drop events are only routed while the workspace is shown,
//! so files dragged over the landing screen are ignored.

use super::{Message, Screen};
use crate::app::config::defaults::NOTIFICATION_TICK_MS;
use crate::ui::dropzone;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Creates the event subscription for the current screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Landing => Subscription::none(),
        Screen::Workspace => event::listen_with(route_file_event),
    }
}

/// Maps window drag-and-drop events to drop zone messages.
fn route_file_event(
    event: event::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    let message = match event {
        event::Event::Window(window::Event::FileHovered(path)) => {
            dropzone::Message::FileHovered(path)
        }
        event::Event::Window(window::Event::FileDropped(path)) => {
            dropzone::Message::FileDropped(path)
        }
        event::Event::Window(window::Event::FilesHoveredLeft) => dropzone::Message::HoverLeft,
        _ => return None,
    };
    Some(Message::Dropzone(message))
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
