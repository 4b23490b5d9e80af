// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test selection from changed files.
//!
//! Pipeline, run once per invocation:
//! 1. [`input`]: split the selector, drop missing and repeated paths, and
//!    separate test modules from source paths.
//! 2. [`convention`]: map source paths to test modules by directory layout.
//! 3. [`filename_map`]: add test modules declared in the filename map, if
//!    the project has one.
//! 4. [`inject`]: merge the selection into the runner's arguments.

pub mod convention;
pub mod filename_map;
pub mod inject;
pub mod input;
pub mod resolved;

pub use convention::{ConventionMatcher, MatchRoot, PathMatch};
pub use filename_map::{FilenameMap, MapRule, MapStatus, MapTable};
pub use inject::{additions, inject};
pub use input::{Normalized, expand_selector, normalize};
pub use resolved::{Origin, ResolvedSet, Selected};

use crate::config::{Config, LayoutConfig};
use crate::error::Result;
use crate::fs::FileSystem;

/// Resolves changed paths to the test modules that exercise them.
#[derive(Debug, Clone)]
pub struct Selector {
    layout: LayoutConfig,
    matcher: ConventionMatcher,
    map_path: String,
}

/// Result of one selection run.
#[derive(Debug)]
pub struct Selection {
    /// Selected test modules, in discovery order.
    pub tests: ResolvedSet,
    /// Existing source paths that were resolved.
    pub sources: Vec<String>,
    /// What happened with the filename map.
    pub filename_map: MapStatus,
}

impl Selection {
    /// Append the selected modules to a runner argument list.
    pub fn inject_into(&self, args: &mut Vec<String>) -> usize {
        inject(&self.tests, args)
    }
}

impl Selector {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            layout: config.layout.clone(),
            matcher: ConventionMatcher::new(&config.layout)?,
            map_path: config.filename_map.path.clone(),
        })
    }

    /// Resolve a raw selector value (comma list or absolute list file).
    pub fn resolve_raw<F: FileSystem + ?Sized>(&self, fs: &F, raw: &str) -> Selection {
        self.resolve(fs, expand_selector(raw, fs))
    }

    /// Resolve already split entries.
    pub fn resolve<F, I, S>(&self, fs: &F, entries: I) -> Selection
    where
        F: FileSystem + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Normalized { tests, sources } = normalize(entries, fs, &self.layout);
        let mut resolved = tests;

        for source in &sources {
            self.matcher.resolve(source, fs, &mut resolved);
        }

        // The map adds to convention results for every source, not just unmatched ones.
        let table = MapTable::load(fs, &self.map_path);
        match &table {
            MapTable::Missing => {
                tracing::debug!("no filename map at {}", self.map_path);
            }
            MapTable::Unavailable(e) => {
                tracing::warn!("filename map unavailable, using convention matches only: {}", e);
            }
            MapTable::Loaded(map) => {
                map.resolve(&sources, fs, &self.layout, &mut resolved);
            }
        }

        tracing::debug!(
            "selected {} test modules from {} source paths",
            resolved.len(),
            sources.len()
        );

        Selection {
            tests: resolved,
            sources,
            filename_map: table.status(),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
