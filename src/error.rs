// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Reasons a clipboard write can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard is reachable (headless session, missing display server).
    Unavailable(String),
    /// The clipboard exists but rejected the write.
    Denied(String),
}

impl ClipboardError {
    /// Returns the i18n message key shown to the user for this error.
    pub fn notification_key(&self) -> &'static str {
        "notification-copy-error"
    }
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "clipboard unavailable: {}", msg),
            ClipboardError::Denied(msg) => write!(f, "clipboard write denied: {}", msg),
        }
    }
}

/// Reasons handing a URI to the system opener can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// No opener program could be spawned for the URI.
    Spawn(String),
}

impl LaunchError {
    /// Returns the i18n message key shown to the user for this error.
    pub fn notification_key(&self) -> &'static str {
        "notification-mail-launch-error"
    }
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::Spawn(msg) => write!(f, "failed to start opener: {}", msg),
        }
    }
}

impl From<std::io::Error> for LaunchError {
    fn from(err: std::io::Error) -> Self {
        LaunchError::Spawn(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_converts_and_displays() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing file").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("missing file"));
    }

    #[test]
    fn toml_error_becomes_config_error() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn clipboard_errors_share_one_notification_key() {
        assert_eq!(
            ClipboardError::Denied("x".into()).notification_key(),
            ClipboardError::Unavailable("y".into()).notification_key()
        );
    }

    #[test]
    fn io_failure_becomes_launch_spawn_error() {
        let err: LaunchError = io::Error::new(io::ErrorKind::NotFound, "no handler").into();
        assert_eq!(err, LaunchError::Spawn("no handler".into()));
        assert!(err.to_string().contains("no handler"));
        assert_eq!(err.notification_key(), "notification-mail-launch-error");
    }
}
