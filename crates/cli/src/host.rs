// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test runner argument rewriting.
//!
//! The selector travels in the runner's own argument list as
//! `--from-filenames=<value>` or `--from-filenames <value>`. The option is
//! removed and replaced by the selected test module paths.

use crate::fs::FileSystem;
use crate::select::{Selection, Selector};

/// Remove the first occurrence of `name` from `args` and return its value.
///
/// A trailing `name` with no value is removed and yields `None`.
pub fn take_option(args: &mut Vec<String>, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    let idx = args
        .iter()
        .position(|arg| arg == name || arg.starts_with(&prefix))?;

    let arg = args.remove(idx);
    if let Some(value) = arg.strip_prefix(&prefix) {
        return Some(value.to_string());
    }
    if idx < args.len() {
        Some(args.remove(idx))
    } else {
        tracing::warn!("{} given without a value", name);
        None
    }
}

/// Replace the selector option in `args` with the selected test modules.
///
/// Returns `None` (leaving `args` untouched) when the option is absent.
pub fn apply<F: FileSystem + ?Sized>(
    args: &mut Vec<String>,
    option: &str,
    selector: &Selector,
    fs: &F,
) -> Option<Selection> {
    let raw = take_option(args, option)?;
    let selection = selector.resolve_raw(fs, &raw);
    let added = selection.inject_into(args);
    tracing::debug!(
        "added {} of {} selected test modules to runner arguments",
        added,
        selection.tests.len()
    );
    Some(selection)
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
