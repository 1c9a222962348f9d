// SPDX-License-Identifier: MPL-2.0
//! Resolves dropped or picked paths into staged entries.
//!
//! Plain files become a single entry. Directories are walked recursively and
//! each file inside is staged with a `<dir>/<sub>/<file>` relative path.
//! Entries whose metadata cannot be read are skipped.

use super::{file_name_lossy, DroppedFile};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves every path in order, expanding directories.
pub fn collect(paths: &[PathBuf]) -> Vec<DroppedFile> {
    let mut files = Vec::new();
    for path in paths {
        collect_path(path, &mut files);
    }
    files
}

fn collect_path(path: &Path, files: &mut Vec<DroppedFile>) {
    if path.is_dir() {
        let root = file_name_lossy(path);
        walk_directory(path, &root, files);
        return;
    }

    match DroppedFile::from_path(path) {
        Ok(file) => files.push(file),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "skipping unreadable entry");
        }
    }
}

fn walk_directory(dir: &Path, prefix: &str, files: &mut Vec<DroppedFile>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(path = %dir.display(), error = %err, "skipping unreadable directory");
            return;
        }
    };

    let mut children: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(err) => {
                tracing::warn!(path = %dir.display(), error = %err, "skipping directory entry");
                None
            }
        })
        .collect();
    children.sort();

    for child in children {
        let relative = format!("{}/{}", prefix, file_name_lossy(&child));

        // Symlinked directories are not followed so cycles cannot recurse forever.
        let is_symlink = fs::symlink_metadata(&child)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);

        match fs::metadata(&child) {
            Ok(metadata) if metadata.is_dir() => {
                if !is_symlink {
                    walk_directory(&child, &relative, files);
                }
            }
            Ok(metadata) => {
                let name = file_name_lossy(&child);
                files.push(DroppedFile::new(name, metadata.len(), relative, child));
            }
            Err(err) => {
                tracing::warn!(path = %child.display(), error = %err, "skipping unreadable entry");
            }
        }
    }
}
