// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input normalization.
//!
//! Turns the raw selector value into the test modules given directly and
//! the source paths that still need resolving.

use std::collections::HashSet;
use std::path::Path;

use super::resolved::{Origin, ResolvedSet};
use crate::config::LayoutConfig;
use crate::fs::FileSystem;

/// Normalizer output: two disjoint, ordered lists.
#[derive(Debug, Default)]
pub struct Normalized {
    /// Test modules passed in directly.
    pub tests: ResolvedSet,
    /// Existing non-test paths, in input order.
    pub sources: Vec<String>,
}

/// Split a raw selector into entries.
///
/// A single absolute path to an existing file is read as a list file: its
/// lines stand in for the comma-separated value, which keeps long change
/// lists out of the shell's argument limits.
pub fn expand_selector<F: FileSystem + ?Sized>(raw: &str, fs: &F) -> Vec<String> {
    let trimmed = raw.trim();
    let effective = if is_list_file(trimmed, fs) {
        match fs.read_lines(trimmed) {
            Ok(lines) => {
                tracing::debug!("reading selector from list file {}", trimmed);
                lines.join(",")
            }
            Err(e) => {
                tracing::warn!("cannot read list file {}: {}", trimmed, e);
                return Vec::new();
            }
        }
    } else {
        trimmed.to_string()
    };

    effective
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

fn is_list_file<F: FileSystem + ?Sized>(value: &str, fs: &F) -> bool {
    !value.contains(',') && Path::new(value).is_absolute() && fs.is_file(value)
}

/// Drop missing and repeated entries, then split test modules from sources.
pub fn normalize<F, I, S>(entries: I, fs: &F, layout: &LayoutConfig) -> Normalized
where
    F: FileSystem + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized = Normalized::default();
    let mut seen = HashSet::new();

    for entry in entries {
        let path = clean_path(entry.as_ref());
        if path.is_empty() {
            continue;
        }
        if !fs.exists(&path) {
            tracing::debug!("skipping {}: not found", path);
            continue;
        }
        if !seen.insert(path.clone()) {
            continue;
        }

        if layout.is_test_module(&path) {
            tracing::trace!("{} is a test module", path);
            normalized.tests.insert(path, Origin::Given);
        } else {
            normalized.sources.push(path);
        }
    }

    normalized
}

/// Normalize separators and strip a leading `./`.
fn clean_path(path: &str) -> String {
    let mut cleaned = path.trim().replace('\\', "/");
    while let Some(rest) = cleaned.strip_prefix("./") {
        cleaned = rest.to_string();
    }
    cleaned
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
