// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::{ClipboardError, LaunchError};
use crate::ui::{composer, dropzone, landing, notifications};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Landing(landing::Message),
    Dropzone(dropzone::Message),
    Composer(composer::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Drives toast auto-dismiss
    /// Result of writing the composer body to the clipboard.
    CopyFinished(Result<(), ClipboardError>),
    /// Result of handing the mail link to the system.
    MailLaunched(Result<(), LaunchError>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DROPDESK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Form field name for the drop zone, overriding the config file.
    pub field_name: Option<String>,
    /// Marks the drop zone field as required, overriding the config file.
    pub required: bool,
}
