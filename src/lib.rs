// SPDX-License-Identifier: MPL-2.0
//! `dropdesk` is a small desktop workspace built with the Iced GUI framework.
//!
//! A landing screen leads into a workspace with a drop zone that stages files
//! as a form field and a composer that copies text to the clipboard or opens
//! it in the mail client. Nothing is uploaded or persisted besides settings.

pub mod app;
pub mod compose;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod staging;
pub mod ui;
