// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative filename map.
//!
//! Some source files are tested by modules whose names cannot be derived
//! from the path. The filename map is a YAML mapping from a shell-style
//! glob to the dotted names of the test modules covering matching files:
//!
//! ```yaml
//! src/special/*.py:
//!   - unit.special.test_thing
//!   - integration.test_special
//! ```

use std::path::PathBuf;

use globset::{GlobBuilder, GlobMatcher};
use serde::Serialize;
use serde_yaml::Value;

use super::resolved::{Origin, ResolvedSet};
use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use crate::fs::FileSystem;

/// A glob pattern and the test modules it implies.
#[derive(Debug, Clone)]
pub struct MapRule {
    pub pattern: String,
    pub targets: Vec<String>,
    matcher: GlobMatcher,
}

impl MapRule {
    /// Compile a rule with fnmatch semantics: `*` matches across `/`,
    /// braces are literal and an unclosed `[` matches itself.
    pub fn new(pattern: &str, targets: Vec<String>) -> Result<Self> {
        let escaped = literal_braces(pattern);
        let glob = GlobBuilder::new(&escaped)
            .literal_separator(false)
            .backslash_escape(true)
            .allow_unclosed_class(true)
            .build()
            .map_err(|e| Error::Argument(format!("invalid glob pattern '{}': {}", pattern, e)))?;
        Ok(Self {
            pattern: pattern.to_string(),
            targets,
            matcher: glob.compile_matcher(),
        })
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }
}

/// Escape `{` and `}` outside character classes.
fn literal_braces(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(c) = rest.chars().next() {
        let len = match c {
            '[' => class_len(rest).unwrap_or(1),
            _ => c.len_utf8(),
        };
        if c == '{' || c == '}' {
            out.push('\\');
        }
        out.push_str(&rest[..len]);
        rest = &rest[len..];
    }
    out
}

/// Byte length of the closed character class at the start of `s`.
fn class_len(s: &str) -> Option<usize> {
    let body = &s[1..];
    let negation = usize::from(body.starts_with(['!', '^']));
    let members = &body[negation..];
    // A leading `]` is a member, not the end.
    let first = usize::from(members.starts_with(']'));
    let close = members[first..].find(']')?;
    Some(1 + negation + first + close + 1)
}

/// Decoded filename map, rules in document order.
#[derive(Debug, Clone, Default)]
pub struct FilenameMap {
    rules: Vec<MapRule>,
}

impl FilenameMap {
    /// Decode a YAML filename map.
    ///
    /// Entries that are not `pattern: [module, ...]` are skipped with a warning.
    pub fn parse(content: &str, path: &str) -> Result<Self> {
        let map_error = |message: String| Error::FilenameMap {
            path: PathBuf::from(path),
            message,
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_yaml::from_str(content).map_err(|e| map_error(e.to_string()))?;
        let mapping = match value {
            Value::Mapping(mapping) => mapping,
            Value::Null => return Ok(Self::default()),
            _ => {
                return Err(map_error(
                    "expected a mapping of glob patterns to test modules".to_string(),
                ));
            }
        };

        let mut rules = Vec::with_capacity(mapping.len());
        for (key, value) in &mapping {
            let Some(pattern) = key.as_str() else {
                tracing::warn!("{}: skipping non-string pattern {:?}", path, key);
                continue;
            };
            let Some(targets) = value.as_sequence() else {
                tracing::warn!("{}: '{}' must map to a list of test modules", path, pattern);
                continue;
            };
            let targets = targets
                .iter()
                .filter_map(|target| match target.as_str() {
                    Some(module) => Some(module.to_string()),
                    None => {
                        tracing::warn!("{}: '{}': skipping {:?}", path, pattern, target);
                        None
                    }
                })
                .collect();

            match MapRule::new(pattern, targets) {
                Ok(rule) => rules.push(rule),
                Err(e) => tracing::warn!("{}: {}", path, e),
            }
        }

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[MapRule] {
        &self.rules
    }

    /// Add existing test modules declared for any of `sources`.
    pub fn resolve<F: FileSystem + ?Sized>(
        &self,
        sources: &[String],
        fs: &F,
        layout: &LayoutConfig,
        resolved: &mut ResolvedSet,
    ) {
        for rule in &self.rules {
            for source in sources {
                if !rule.is_match(source) {
                    continue;
                }
                for module in &rule.targets {
                    let test_path = module_path(module, layout);
                    if !fs.exists(&test_path) {
                        tracing::trace!("{}: {} has no file {}", rule.pattern, module, test_path);
                        continue;
                    }
                    let origin = Origin::FilenameMap {
                        pattern: rule.pattern.clone(),
                        source: source.clone(),
                    };
                    if resolved.insert(test_path.clone(), origin) {
                        tracing::debug!("{} -> {} (via '{}')", source, test_path, rule.pattern);
                    }
                }
            }
        }
    }
}

/// File path for a dotted test module name, e.g. `unit.test_x` -> `tests/unit/test_x.py`.
pub fn module_path(module: &str, layout: &LayoutConfig) -> String {
    format!(
        "{}/{}.{}",
        layout.test_root,
        module.replace('.', "/"),
        layout.extension
    )
}

/// Outcome of looking for the filename map.
#[derive(Debug)]
pub enum MapTable {
    /// No map file in the project.
    Missing,
    /// A map file exists but could not be read or decoded.
    Unavailable(Error),
    Loaded(FilenameMap),
}

impl MapTable {
    pub fn load<F: FileSystem + ?Sized>(fs: &F, path: &str) -> Self {
        if !fs.exists(path) {
            return MapTable::Missing;
        }
        let content = match fs.read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                return MapTable::Unavailable(Error::Io {
                    path: PathBuf::from(path),
                    source,
                });
            }
        };
        match FilenameMap::parse(&content, path) {
            Ok(map) => MapTable::Loaded(map),
            Err(e) => MapTable::Unavailable(e),
        }
    }

    pub fn status(&self) -> MapStatus {
        match self {
            MapTable::Missing => MapStatus::Missing,
            MapTable::Unavailable(_) => MapStatus::Unavailable,
            MapTable::Loaded(map) => MapStatus::Loaded {
                rules: map.rules().len(),
            },
        }
    }
}

/// Serializable summary of [`MapTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MapStatus {
    Missing,
    Unavailable,
    Loaded { rules: usize },
}

#[cfg(test)]
#[path = "filename_map_tests.rs"]
mod tests;
