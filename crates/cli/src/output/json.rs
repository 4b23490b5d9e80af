// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::select::{MapStatus, Selected, Selection};

/// Serialized form of a [`Selection`].
#[derive(Debug, Serialize)]
struct SelectionOutput<'a> {
    timestamp: String,
    tests: Vec<&'a Selected>,
    sources: &'a [String],
    filename_map: MapStatus,
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, selection: &Selection) -> std::io::Result<()> {
        let output = SelectionOutput {
            timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            tests: selection.tests.iter().collect(),
            sources: &selection.sources,
            filename_map: selection.filename_map,
        };
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
