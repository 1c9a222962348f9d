// SPDX-License-Identifier: MPL-2.0
//! In-memory staging of files the user drops or picks.
//!
//! Nothing here reads file contents: entries only carry the metadata needed
//! to list them and to hand them to a form as a file field.

mod form_field;
pub mod scanner;
mod selection;

pub use form_field::FormField;
pub use selection::FileSelection;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A file staged by a drop or a dialog pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    name: String,
    size_bytes: u64,
    /// Path shown to the user: the file name, or `<dir>/<file>` for files
    /// found inside a dropped directory.
    relative_path: String,
    path: PathBuf,
}

impl DroppedFile {
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        relative_path: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            relative_path: relative_path.into(),
            path: path.into(),
        }
    }

    /// Builds an entry for a top-level file by reading its metadata.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        let name = file_name_lossy(path);
        Ok(Self::new(name.clone(), metadata.len(), name, path))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[must_use]
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size in kilobytes with two decimals, as listed in the drop zone.
    #[must_use]
    pub fn size_kb_display(&self) -> String {
        format_size_kb(self.size_bytes)
    }
}

/// Formats `bytes / 1024` rounded to two decimal places, halves rounding up.
#[must_use]
pub fn format_size_kb(bytes: u64) -> String {
    let hundredths = (u128::from(bytes) * 100 + 512) / 1024;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

pub(crate) fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
