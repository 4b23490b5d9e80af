// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Merging selected test modules into a runner argument list.

use std::collections::HashSet;

use super::resolved::ResolvedSet;

/// Selected paths missing from `args`, in selection order.
pub fn additions(resolved: &ResolvedSet, args: &[String]) -> Vec<String> {
    let present: HashSet<&str> = args.iter().map(String::as_str).collect();
    resolved
        .paths()
        .filter(|path| !present.contains(path))
        .map(String::from)
        .collect()
}

/// Append missing selected paths to `args`. Returns how many were added.
pub fn inject(resolved: &ResolvedSet, args: &mut Vec<String>) -> usize {
    let added = additions(resolved, args);
    let count = added.len();
    args.extend(added);
    count
}

#[cfg(test)]
#[path = "inject_tests.rs"]
mod tests;
