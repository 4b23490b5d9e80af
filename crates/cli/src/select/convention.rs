// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Convention-based source-to-test matching.
//!
//! A source file `<source-root>/a/b/c.py` is tested by
//! `<test-root>/<category>/a/b/test_c.py` for each test category. A package
//! `<source-root>/a/b/__init__.py` is tested by the `<category>/a/test_b`
//! test package. Files under a primary component directory (e.g.
//! `modules/`) are also tested by the sibling tree (e.g. `states/`).

use regex::Regex;

use super::resolved::{Origin, ResolvedSet};
use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use crate::fs::FileSystem;

/// Which tree a matched path lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRoot {
    /// Under the production source root.
    Source,
    /// Under `<test-root>/<category>/`.
    Test { category: String },
}

/// A path split into its root and the components below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch {
    pub root: MatchRoot,
    /// Directory components followed by the filename.
    pub components: Vec<String>,
}

/// Derives test module candidates from directory conventions.
#[derive(Debug, Clone)]
pub struct ConventionMatcher {
    pattern: Regex,
    layout: LayoutConfig,
}

impl ConventionMatcher {
    pub fn new(layout: &LayoutConfig) -> Result<Self> {
        let categories = layout
            .categories
            .iter()
            .map(|c| regex::escape(c))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(
            r"^(?:{source}/|{test}/(?P<category>{categories})/)(?P<rel>.+\.{ext})$",
            source = regex::escape(&layout.source_root),
            test = regex::escape(&layout.test_root),
            ext = regex::escape(&layout.extension),
        );
        let pattern = Regex::new(&pattern).map_err(|e| Error::Config {
            message: format!("cannot build layout pattern: {}", e),
            path: None,
        })?;

        Ok(Self {
            pattern,
            layout: layout.clone(),
        })
    }

    /// Split `path` into root and components if it has a recognized shape.
    pub fn match_path(&self, path: &str) -> Option<PathMatch> {
        let caps = self.pattern.captures(path)?;
        let root = match caps.name("category") {
            Some(category) => MatchRoot::Test {
                category: category.as_str().to_string(),
            },
            None => MatchRoot::Source,
        };
        let components = caps
            .name("rel")?
            .as_str()
            .split('/')
            .map(String::from)
            .collect();
        Some(PathMatch { root, components })
    }

    /// Candidate test module paths for a matched path, not yet checked on disk.
    ///
    /// Paths already under the test tree yield nothing.
    pub fn candidates(&self, matched: &PathMatch) -> Vec<String> {
        if matched.root != MatchRoot::Source {
            return Vec::new();
        }
        let Some(module) = self.test_components(&matched.components) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        self.push_category_paths(&module, &mut out);

        // modules/test_x also implies states/test_x
        // Single-component sources still get the direct candidates above.
        if module.len() >= 2 {
            let parent = module.len() - 2;
            for rule in &self.layout.cross_category {
                if module[parent] == rule.primary {
                    let mut sibling = module.clone();
                    sibling[parent] = rule.sibling.clone();
                    self.push_category_paths(&sibling, &mut out);
                }
            }
        }
        out
    }

    /// Add existing convention candidates for `source` to `resolved`.
    pub fn resolve<F: FileSystem + ?Sized>(
        &self,
        source: &str,
        fs: &F,
        resolved: &mut ResolvedSet,
    ) {
        let Some(matched) = self.match_path(source) else {
            tracing::debug!("{}: no naming convention applies", source);
            return;
        };
        if let MatchRoot::Test { category } = &matched.root {
            tracing::debug!("{}: already under {} tests", source, category);
            return;
        }

        for candidate in self.candidates(&matched) {
            if !fs.exists(&candidate) {
                tracing::trace!("{}: no {}", source, candidate);
                continue;
            }
            if resolved.insert(
                candidate.clone(),
                Origin::Convention {
                    source: source.to_string(),
                },
            ) {
                tracing::debug!("{} -> {}", source, candidate);
            }
        }
    }

    /// Prefix the leaf with the test marker.
    ///
    /// A package-init file stands for its directory, which becomes the leaf,
    /// so `pkg/__init__.py` points at the `test_pkg` test package.
    fn test_components(&self, components: &[String]) -> Option<Vec<String>> {
        let mut module = components.to_vec();
        if module.last() == Some(&self.layout.package_init) {
            module.pop();
        }

        let leaf = module.pop()?;
        module.push(format!("{}{}", self.layout.test_prefix, leaf));
        Some(module)
    }

    fn push_category_paths(&self, module: &[String], out: &mut Vec<String>) {
        let relative = module.join("/");
        for category in &self.layout.categories {
            let path = format!("{}/{}/{}", self.layout.test_root, category, relative);
            if !out.contains(&path) {
                out.push(path);
            }
        }
    }
}

#[cfg(test)]
#[path = "convention_tests.rs"]
mod tests;
