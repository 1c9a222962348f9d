// SPDX-License-Identifier: MPL-2.0
//! Text composition: copying a body to the clipboard or handing it to the
//! mail client.
//!
//! Both actions terminate at the UI boundary. Failures become toasts through
//! [`Notify`] and are never returned to the caller.

pub mod clipboard;
pub mod mail;

pub use clipboard::{Clipboard, SystemClipboard};
pub use mail::{MailLauncher, MailtoLink, SystemMailLauncher};

use crate::error::{ClipboardError, LaunchError};
use crate::ui::notifications::{Notification, Notify};
use std::future::Future;
use std::sync::Arc;

/// The two text fields of the composer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub body: String,
    pub recipient: String,
}

impl ComposerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the current body to `clipboard`.
    ///
    /// The returned future owns a snapshot of the body, so edits made while
    /// it is pending do not change what gets copied.
    pub fn copy_to_clipboard(
        &self,
        clipboard: Arc<dyn Clipboard>,
    ) -> impl Future<Output = Result<(), ClipboardError>> + Send + 'static {
        let text = self.body.clone();
        async move { clipboard.write_text(&text) }
    }

    /// Builds the mail link, or reports a missing recipient.
    ///
    /// Any non-empty recipient is accepted as-is.
    pub fn compose_email(&self, notifier: &mut impl Notify) -> Option<MailtoLink> {
        if self.recipient.is_empty() {
            notifier.notify(Notification::error("notification-recipient-missing"));
            return None;
        }
        Some(MailtoLink::new(&self.recipient, &self.body))
    }
}

/// Hands `link` to `launcher`.
pub async fn open_mail_link(
    launcher: Arc<dyn MailLauncher>,
    link: MailtoLink,
) -> Result<(), LaunchError> {
    launcher.launch(&link)
}

/// Turns the outcome of a clipboard write into exactly one toast.
pub fn report_copy(result: &Result<(), ClipboardError>, notifier: &mut impl Notify) {
    match result {
        Ok(()) => notifier.notify(
            Notification::success("notification-copy-success")
                .with_description("notification-copy-success-description"),
        ),
        Err(err) => notifier.notify(Notification::error(err.notification_key())),
    }
}

/// Raises a toast if the mail client could not be opened.
pub fn report_launch(result: &Result<(), LaunchError>, notifier: &mut impl Notify) {
    if let Err(err) = result {
        tracing::warn!(error = %err, "mail handler did not start");
        notifier.notify(Notification::error(err.notification_key()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClipboard {
        contents: Mutex<Option<String>>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    struct RejectingClipboard;

    impl Clipboard for RejectingClipboard {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Denied("permission denied".into()))
        }
    }

    #[derive(Default)]
    struct RecordingLauncher {
        launched: Mutex<Vec<String>>,
    }

    impl MailLauncher for RecordingLauncher {
        fn launch(&self, link: &MailtoLink) -> Result<(), LaunchError> {
            self.launched.lock().unwrap().push(link.to_string());
            Ok(())
        }
    }

    struct FailingLauncher;

    impl MailLauncher for FailingLauncher {
        fn launch(&self, _link: &MailtoLink) -> Result<(), LaunchError> {
            Err(LaunchError::Spawn("no opener".into()))
        }
    }

    fn composer(body: &str, recipient: &str) -> ComposerState {
        ComposerState {
            body: body.to_string(),
            recipient: recipient.to_string(),
        }
    }

    #[tokio::test]
    async fn copy_places_exact_body_and_reports_success() {
        let clipboard = Arc::new(RecordingClipboard::default());
        let state = composer("sample text", "");
        let mut toasts: Vec<Notification> = Vec::new();

        let result = state.copy_to_clipboard(clipboard.clone()).await;
        report_copy(&result, &mut toasts);

        assert_eq!(
            clipboard.contents.lock().unwrap().as_deref(),
            Some("sample text")
        );
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity(), Severity::Success);
        assert_eq!(toasts[0].message_key(), "notification-copy-success");
    }

    #[tokio::test]
    async fn rejected_copy_reports_one_error_and_keeps_body() {
        let state = composer("sample text", "a@b.com");
        let before = state.clone();
        let mut toasts: Vec<Notification> = Vec::new();

        let result = state.copy_to_clipboard(Arc::new(RejectingClipboard)).await;
        report_copy(&result, &mut toasts);

        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity(), Severity::Error);
        assert_eq!(toasts[0].message_key(), "notification-copy-error");
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn copy_uses_body_snapshot() {
        let clipboard = Arc::new(RecordingClipboard::default());
        let mut state = composer("first", "");

        let pending = state.copy_to_clipboard(clipboard.clone());
        state.body = "second".to_string();
        let _ = pending.await;

        assert_eq!(clipboard.contents.lock().unwrap().as_deref(), Some("first"));
    }

    #[test]
    fn empty_recipient_never_builds_a_link() {
        let state = composer("hi there", "");
        let mut toasts: Vec<Notification> = Vec::new();

        assert!(state.compose_email(&mut toasts).is_none());
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message_key(), "notification-recipient-missing");
        assert_eq!(toasts[0].severity(), Severity::Error);
    }

    #[tokio::test]
    async fn recipient_and_body_produce_expected_target() {
        let launcher = Arc::new(RecordingLauncher::default());
        let state = composer("hi there", "a@b.com");
        let mut toasts: Vec<Notification> = Vec::new();

        let link = state.compose_email(&mut toasts).expect("link should be built");
        let result = open_mail_link(launcher.clone(), link).await;
        report_launch(&result, &mut toasts);

        assert!(toasts.is_empty());
        assert_eq!(
            *launcher.launched.lock().unwrap(),
            ["mailto:a@b.com?body=hi%20there"]
        );
    }

    #[test]
    fn whitespace_recipient_is_accepted() {
        let state = composer("x", " ");
        let mut toasts: Vec<Notification> = Vec::new();
        assert!(state.compose_email(&mut toasts).is_some());
        assert!(toasts.is_empty());
    }

    #[tokio::test]
    async fn launch_failure_is_reported() {
        let mut toasts: Vec<Notification> = Vec::new();
        let result = open_mail_link(Arc::new(FailingLauncher), MailtoLink::new("a@b.com", "")).await;
        report_launch(&result, &mut toasts);

        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message_key(), "notification-mail-launch-error");
    }
}
