// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `testmap args` command implementation.
//!
//! Prints the rewritten runner arguments, one per line.

use std::io::Write;

use testmap::cli::{Cli, RunnerArgs};
use testmap::error::ExitCode;
use testmap::fs::ProjectFs;
use testmap::host;
use testmap::select::Selector;

pub fn run(cli: &Cli, args: &RunnerArgs) -> anyhow::Result<ExitCode> {
    let (config, root) = crate::load_project(cli)?;
    let fs = ProjectFs::new(&root);
    let selector = Selector::new(&config)?;
    let option = args
        .option_name
        .as_deref()
        .unwrap_or(config.runner.option.as_str());

    let mut runner_args = args.args.clone();
    if host::apply(&mut runner_args, option, &selector, &fs).is_none() {
        tracing::debug!("{} not given, runner arguments unchanged", option);
    }

    let mut stdout = std::io::stdout().lock();
    for arg in &runner_args {
        writeln!(stdout, "{}", arg)?;
    }
    Ok(ExitCode::Success)
}
