// SPDX-License-Identifier: MPL-2.0
//! Ordered list of staged files.

use super::DroppedFile;

/// Files staged by the most recent drop or pick, in drop order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    files: Vec<DroppedFile>,
}

impl FileSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection with `files`.
    ///
    /// An empty batch leaves the current selection untouched and returns `false`.
    pub fn replace(&mut self, files: Vec<DroppedFile>) -> bool {
        if files.is_empty() {
            return false;
        }
        self.files = files;
        true
    }

    /// Appends `files` after the current entries, keeping their order.
    pub fn extend(&mut self, files: impl IntoIterator<Item = DroppedFile>) {
        self.files.extend(files);
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    #[must_use]
    pub fn files(&self) -> &[DroppedFile] {
        &self.files
    }

    pub fn iter(&self) -> impl Iterator<Item = &DroppedFile> {
        self.files.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> DroppedFile {
        DroppedFile::new(name, size, name, format!("/tmp/{name}"))
    }

    #[test]
    fn replace_keeps_batch_order() {
        let mut selection = FileSelection::new();
        assert!(selection.replace(vec![file("b", 1), file("a", 2), file("c", 3)]));

        let names: Vec<&str> = selection.iter().map(DroppedFile::name).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn empty_replace_is_ignored() {
        let mut selection = FileSelection::new();
        selection.replace(vec![file("kept", 1)]);

        assert!(!selection.replace(Vec::new()));
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.files()[0].name(), "kept");
    }

    #[test]
    fn duplicates_by_name_are_allowed() {
        let mut selection = FileSelection::new();
        selection.replace(vec![file("same", 1)]);
        selection.extend([file("same", 2)]);

        let sizes: Vec<u64> = selection.iter().map(DroppedFile::size_bytes).collect();
        assert_eq!(sizes, [1, 2]);
    }

    #[test]
    fn clear_empties_selection() {
        let mut selection = FileSelection::new();
        selection.replace(vec![file("a", 1)]);
        selection.clear();
        assert!(selection.is_empty());
    }
}
