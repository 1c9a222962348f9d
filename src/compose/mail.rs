// SPDX-License-Identifier: MPL-2.0
//! `mailto:` links and handing them to the system mail handler.

use crate::error::LaunchError;
use std::fmt;

/// A `mailto:` URI with a percent-encoded body parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink(String);

impl MailtoLink {
    /// Builds `mailto:<recipient>?body=<encoded body>`.
    ///
    /// The recipient is used verbatim; only the body is encoded.
    pub fn new(recipient: &str, body: &str) -> Self {
        Self(format!(
            "mailto:{}?body={}",
            recipient,
            urlencoding::encode(body)
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opens a mail link with whatever application handles it.
pub trait MailLauncher: Send + Sync {
    fn launch(&self, link: &MailtoLink) -> Result<(), LaunchError>;
}

/// Delegates to the platform's URI opener without waiting for it to exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemMailLauncher;

impl MailLauncher for SystemMailLauncher {
    fn launch(&self, link: &MailtoLink) -> Result<(), LaunchError> {
        open::that_detached(link.as_str()).map_err(LaunchError::from)
    }
}
