// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of an action
//! (copy succeeded, recipient missing, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct, severity levels and the `Notify` sink
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification, Notify};
//!
//! let mut manager = Manager::new();
//! manager.notify(Notification::success("notification-copy-success"));
//!
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Every toast auto-dismisses: ~3s for success/info, ~5s for warnings and
//! errors. At most three are visible at once, in the bottom-right corner.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Notify, Severity};
pub use toast::Toast;
