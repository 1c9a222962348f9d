// SPDX-License-Identifier: MPL-2.0
//! Form-compatible mirror of the staged selection.
//!
//! Plays the role of a native file input living next to the drop zone: it
//! carries a field `name`, a `required` flag and the file list a form
//! submission would see.

use super::DroppedFile;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    name: String,
    required: bool,
    files: Vec<PathBuf>,
}

impl FormField {
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
            files: Vec::new(),
        }
    }

    /// Rebuilds the field's file list from the staged entries.
    pub fn set_files(&mut self, files: &[DroppedFile]) {
        self.files = files.iter().map(|f| f.path().to_path_buf()).collect();
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Whether a form containing this field could be submitted.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        !self.required || !self.files.is_empty()
    }

    /// `(name, path)` pairs in the order a multipart form would encode them.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.files
            .iter()
            .map(move |path| (self.name.as_str(), path.as_path()))
    }
}
