// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Selection output formatters.

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::select::{MapStatus, Origin};

/// Short human description of why a module was selected.
pub fn describe_origin(origin: &Origin) -> String {
    match origin {
        Origin::Given => "given".to_string(),
        Origin::Convention { source } => format!("convention: {}", source),
        Origin::FilenameMap { pattern, source } => {
            format!("filename map '{}': {}", pattern, source)
        }
    }
}

/// Short human description of the filename map status.
pub fn describe_map_status(status: MapStatus) -> String {
    match status {
        MapStatus::Missing => "no filename map".to_string(),
        MapStatus::Unavailable => "filename map unavailable".to_string(),
        MapStatus::Loaded { rules: 1 } => "filename map: 1 rule".to_string(),
        MapStatus::Loaded { rules } => format!("filename map: {} rules", rules),
    }
}
