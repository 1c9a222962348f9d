// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Drop Zone Defaults
// ==========================================================================

/// Form field name used when staging files, mirroring a native file input's `name`.
pub const DEFAULT_FIELD_NAME: &str = "files";

/// Whether the staged file field must hold at least one file by default.
pub const DEFAULT_FIELD_REQUIRED: bool = false;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts visible at once; extra toasts are queued.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

/// Interval between notification auto-dismiss checks (milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 100;

const _: () = {
    assert!(MAX_VISIBLE_NOTIFICATIONS > 0);
    assert!(NOTIFICATION_TICK_MS > 0);
};
