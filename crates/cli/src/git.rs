// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git utilities for change detection.
//!
//! Uses git2 (libgit2) for all git operations to avoid subprocess overhead.
//!
//! ## File Detection
//!
//! When detecting changed files:
//! - Added files: path from `new_file()`
//! - Modified files: path from `new_file()` (same as old)
//! - Renamed files: path from `new_file()` (the new location)
//! - Deleted files: path from `old_file()` (since `new_file()` is empty)
//!
//! Deleted files are still reported; selection drops paths that no longer
//! exist.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use git2::{Diff, Repository};

/// Extract file path from a diff delta.
///
/// For deleted files, `new_file().path()` is `None`, so fall back to `old_file()`.
fn extract_path<'a>(delta: &'a git2::DiffDelta<'a>) -> Option<&'a Path> {
    delta.new_file().path().or_else(|| delta.old_file().path())
}

/// Check if a path is in a git repository.
pub fn is_git_repo(root: &Path) -> bool {
    Repository::discover(root).is_ok()
}

/// Changed files compared to a git base ref, relative to `root`.
///
/// Combines committed, staged, and unstaged changes. Sorted, without duplicates.
pub fn changed_files(root: &Path, base: &str) -> anyhow::Result<Vec<String>> {
    let repo = Repository::discover(root).context("Failed to open repository")?;

    let base_tree = repo
        .revparse_single(base)
        .with_context(|| format!("Failed to resolve base ref: {}", base))?
        .peel_to_tree()
        .context("Failed to get tree for base ref")?;
    let head_tree = repo
        .head()
        .context("Failed to get HEAD")?
        .peel_to_tree()
        .context("Failed to get HEAD tree")?;
    let index = repo.index().context("Failed to get repository index")?;

    let mut files = ChangedFiles::new(&repo, root)?;

    // Committed changes on the branch
    files.add(&repo.diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)?);
    // Staged changes
    files.add(&repo.diff_tree_to_index(Some(&base_tree), Some(&index), None)?);
    // Unstaged changes
    files.add(&repo.diff_index_to_workdir(Some(&index), None)?);

    Ok(files.into_vec())
}

/// Staged files (index against HEAD), relative to `root`.
pub fn staged_files(root: &Path) -> anyhow::Result<Vec<String>> {
    let repo = Repository::discover(root).context("Failed to open repository")?;

    // Handle case of empty repo with no commits
    let head_tree = match repo.head() {
        Ok(head) => Some(head.peel_to_tree().context("Failed to get HEAD tree")?),
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => None,
        Err(e) => return Err(e).context("Failed to get HEAD"),
    };
    let index = repo.index().context("Failed to get repository index")?;

    let diff = repo
        .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)
        .context("Failed to compute diff")?;

    let mut files = ChangedFiles::new(&repo, root)?;
    files.add(&diff);
    Ok(files.into_vec())
}

/// Collects diff paths, re-rooted from the work tree to the project root.
struct ChangedFiles {
    workdir: PathBuf,
    root: PathBuf,
    paths: BTreeSet<String>,
}

impl ChangedFiles {
    fn new(repo: &Repository, root: &Path) -> anyhow::Result<Self> {
        let workdir = repo
            .workdir()
            .ok_or_else(|| anyhow::anyhow!("bare repositories have no work tree"))?;
        Ok(Self {
            workdir: canonical(workdir),
            root: canonical(root),
            paths: BTreeSet::new(),
        })
    }

    fn add(&mut self, diff: &Diff<'_>) {
        for delta in diff.deltas() {
            let Some(path) = extract_path(&delta) else {
                continue;
            };
            let full = self.workdir.join(path);
            match full.strip_prefix(&self.root) {
                Ok(relative) => {
                    self.paths
                        .insert(relative.to_string_lossy().replace('\\', "/"));
                }
                Err(_) => tracing::trace!("{} is outside the project root", full.display()),
            }
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.paths.into_iter().collect()
    }
}

fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
