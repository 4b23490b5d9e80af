// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Deserialize an optional config table, warning about (and dropping) unknown keys.
pub(super) fn parse_section<T>(
    value: Option<toml::Value>,
    section: &str,
    known: &[&str],
    path: &Path,
) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(value) = value else {
        return Ok(T::default());
    };

    let toml::Value::Table(mut table) = value else {
        return Err(Error::Config {
            message: format!("[{}] must be a table", section),
            path: Some(path.to_path_buf()),
        });
    };

    let unknown: Vec<String> = table
        .keys()
        .filter(|k| !known.contains(&k.as_str()))
        .cloned()
        .collect();
    for key in unknown {
        warn_unknown_key(path, &format!("{}.{}", section, key));
        table.remove(&key);
    }

    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| Error::Config {
            message: format!("[{}]: {}", section, e),
            path: Some(path.to_path_buf()),
        })
}

/// Warn about an unrecognized config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "testmap: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}
