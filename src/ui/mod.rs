// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes a `Message`, an `Event` for its parent and a `view`.
//!
//! # Screens
//!
//! - [`landing`] - Marketing content with calls to action
//! - [`dropzone`] - File drop target mirrored into a form field
//! - [`composer`] - Body and recipient fields with copy and mail actions
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod composer;
pub mod design_tokens;
pub mod dropzone;
pub mod landing;
pub mod notifications;
pub mod theming;
