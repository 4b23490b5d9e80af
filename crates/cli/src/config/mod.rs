// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles testmap.toml parsing with version validation and unknown key warnings.

mod parse;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use parse::{parse_section, warn_unknown_key};

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    layout: Option<toml::Value>,

    #[serde(default)]
    filename_map: Option<toml::Value>,

    #[serde(default)]
    runner: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Source and test tree layout.
    pub layout: LayoutConfig,

    /// Declarative filename map location.
    pub filename_map: FilenameMapConfig,

    /// Host runner integration.
    pub runner: RunnerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            layout: LayoutConfig::default(),
            filename_map: FilenameMapConfig::default(),
            runner: RunnerConfig::default(),
        }
    }
}

/// Directory and naming conventions shared by source and test trees.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Production source tree, relative to the project root.
    pub source_root: String,

    /// Test tree, relative to the project root.
    pub test_root: String,

    /// Test categories under the test root, in lookup order.
    pub categories: Vec<String>,

    /// Filename prefix marking a test module.
    pub test_prefix: String,

    /// File extension of source and test modules (without the dot).
    pub extension: String,

    /// Filename standing for its containing directory.
    pub package_init: String,

    /// Sibling directories whose tests share leaf names.
    pub cross_category: Vec<CrossCategory>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            source_root: "src".to_string(),
            test_root: "tests".to_string(),
            categories: vec!["unit".to_string(), "integration".to_string()],
            test_prefix: "test_".to_string(),
            extension: "py".to_string(),
            package_init: "__init__.py".to_string(),
            cross_category: vec![CrossCategory {
                primary: "modules".to_string(),
                sibling: "states".to_string(),
            }],
        }
    }
}

impl LayoutConfig {
    /// True if the path's filename carries the test prefix.
    pub fn is_test_module(&self, path: &str) -> bool {
        let name = path.rsplit('/').next().unwrap_or(path);
        name.starts_with(&self.test_prefix)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let required = [
            ("layout.source_root", &self.source_root),
            ("layout.test_root", &self.test_root),
            ("layout.test_prefix", &self.test_prefix),
            ("layout.extension", &self.extension),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Config {
                    message: format!("{} must not be empty", key),
                    path: Some(path.to_path_buf()),
                });
            }
        }
        if self.categories.is_empty() {
            return Err(Error::Config {
                message: "layout.categories must list at least one category".to_string(),
                path: Some(path.to_path_buf()),
            });
        }
        Ok(())
    }
}

/// A pair of component directories tested by parallel test trees.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CrossCategory {
    /// Directory name that triggers the rule (e.g. "modules").
    pub primary: String,
    /// Directory name substituted for it (e.g. "states").
    pub sibling: String,
}

/// Filename map settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilenameMapConfig {
    /// YAML mapping file, relative to the project root.
    pub path: String,
}

impl Default for FilenameMapConfig {
    fn default() -> Self {
        Self {
            path: "tests/filename_map.yml".to_string(),
        }
    }
}

/// Host runner settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Option carrying the selector in the runner's argument list.
    pub option: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            option: "--from-filenames".to_string(),
        }
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "layout", "filename_map", "runner"];

const KNOWN_LAYOUT_KEYS: &[&str] = &[
    "source_root",
    "test_root",
    "categories",
    "test_prefix",
    "extension",
    "package_init",
    "cross_category",
];

const KNOWN_FILENAME_MAP_KEYS: &[&str] = &["path"];

const KNOWN_RUNNER_KEYS: &[&str] = &["option"];

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;
    let version = flexible.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;
    check_version(version, path)?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let config = Config {
        version,
        layout: parse_section(flexible.layout, "layout", KNOWN_LAYOUT_KEYS, path)?,
        filename_map: parse_section(
            flexible.filename_map,
            "filename_map",
            KNOWN_FILENAME_MAP_KEYS,
            path,
        )?,
        runner: parse_section(flexible.runner, "runner", KNOWN_RUNNER_KEYS, path)?,
    };
    config.layout.validate(path)?;
    Ok(config)
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
