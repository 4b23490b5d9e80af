// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem access used by test selection.
//!
//! Selection only needs existence checks and plain-text reads. Relative
//! paths are resolved against the project root; absolute paths are used
//! as given.

use std::io;
use std::path::PathBuf;

/// Read-only view of the project tree.
pub trait FileSystem {
    /// True if `path` names an existing file or directory.
    fn exists(&self, path: &str) -> bool;

    /// True if `path` names an existing regular file.
    fn is_file(&self, path: &str) -> bool;

    /// Read a text file as a list of lines (line endings stripped).
    fn read_lines(&self, path: &str) -> io::Result<Vec<String>> {
        Ok(self
            .read_to_string(path)?
            .lines()
            .map(String::from)
            .collect())
    }

    /// Read a text file into a string.
    fn read_to_string(&self, path: &str) -> io::Result<String>;
}

/// [`FileSystem`] backed by the real disk, rooted at the project directory.
#[derive(Debug, Clone)]
pub struct ProjectFs {
    root: PathBuf,
}

impl ProjectFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        // Joining an absolute path replaces the root.
        self.root.join(path)
    }
}

impl FileSystem for ProjectFs {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn is_file(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    fn read_to_string(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(self.resolve(path))
    }
}

#[cfg(test)]
#[path = "fs_tests.rs"]
mod tests;
