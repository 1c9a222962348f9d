// SPDX-License-Identifier: MPL-2.0
//! Screen selection for the two top-level views.

/// Screens the application can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Landing,
    Workspace,
}

/// Owns the current screen.
///
/// The landing screen is shown first. Entering the workspace is the only
/// transition and there is no way back to the landing screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Router {
    screen: Screen,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to the workspace. Returns `false` if it was already shown.
    pub fn enter_application(&mut self) -> bool {
        let changed = self.screen != Screen::Workspace;
        self.screen = Screen::Workspace;
        changed
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn is_application_view(&self) -> bool {
        self.screen == Screen::Workspace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_landing() {
        let router = Router::new();
        assert_eq!(router.screen(), Screen::Landing);
        assert!(!router.is_application_view());
    }

    #[test]
    fn entering_application_is_sticky() {
        let mut router = Router::new();
        assert!(router.enter_application());
        assert!(router.is_application_view());

        assert!(!router.enter_application());
        assert_eq!(router.screen(), Screen::Workspace);
    }
}
