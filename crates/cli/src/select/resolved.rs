// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered, duplicate-free set of selected test modules.

use std::collections::HashSet;

use serde::Serialize;

/// Why a test module was selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    /// Passed in directly as a test module.
    Given,
    /// Derived from a source path by directory convention.
    Convention { source: String },
    /// Declared for a source path by a filename map rule.
    FilenameMap { pattern: String, source: String },
}

/// A selected test module path and its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selected {
    pub path: String,
    pub origin: Origin,
}

/// Test module paths in first-discovery order.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSet {
    entries: Vec<Selected>,
    seen: HashSet<String>,
}

impl ResolvedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `path` unless already present. Returns true if it was added.
    pub fn insert(&mut self, path: impl Into<String>, origin: Origin) -> bool {
        let path = path.into();
        if self.seen.contains(&path) {
            return false;
        }
        self.seen.insert(path.clone());
        self.entries.push(Selected { path, origin });
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selected> {
        self.entries.iter()
    }

    /// Selected paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.path.as_str())
    }
}

#[cfg(test)]
#[path = "resolved_tests.rs"]
mod tests;
