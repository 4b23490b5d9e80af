// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Select the test modules that exercise a set of changed source files
#[derive(Parser)]
#[command(name = "testmap")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TESTMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project root (default: config file directory, else current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the test modules covering the given files
    Resolve(ResolveArgs),
    /// Rewrite a test runner argument list, replacing the selector option
    Args(RunnerArgs),
}

#[derive(clap::Args)]
pub struct ResolveArgs {
    /// Comma-separated paths, or an absolute path to a file listing one path per line
    #[arg(value_name = "PATHS")]
    pub selector: Option<String>,

    /// Also select tests for files changed since a git base ref (e.g., main, HEAD~1)
    #[arg(long, value_name = "REF")]
    pub base: Option<String>,

    /// Also select tests for staged files
    #[arg(long)]
    pub staged: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Show why each test module was selected
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

impl ResolveArgs {
    /// True if any input source was given.
    pub fn has_input(&self) -> bool {
        self.selector.is_some() || self.base.is_some() || self.staged
    }
}

#[derive(clap::Args)]
pub struct RunnerArgs {
    /// Option carrying the selector (default: from config, `--from-filenames`)
    #[arg(long = "option", value_name = "FLAG", allow_hyphen_values = true)]
    pub option_name: Option<String>,

    /// Test runner arguments, after `--`
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
