// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Testmap CLI entry point.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use testmap::cli::{Cli, Command};
use testmap::config::{self, Config};
use testmap::discovery;
use testmap::error::ExitCode;

mod cmd_args;
mod cmd_resolve;

fn init_logging() {
    let filter = EnvFilter::try_from_env("TESTMAP_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("testmap: {}", e);
            match e.downcast_ref::<testmap::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Resolve(args)) => cmd_resolve::run(&cli, args),
        Some(Command::Args(args)) => cmd_args::run(&cli, args),
    }
}

/// Load the config and locate the project root.
fn load_project(cli: &Cli) -> anyhow::Result<(Config, PathBuf)> {
    let cwd = std::env::current_dir()?;
    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;

    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no {} found, using defaults", discovery::CONFIG_FILE);
            Config::default()
        }
    };

    let root = discovery::resolve_root(cli.root.as_deref(), config_path.as_deref(), &cwd);
    tracing::debug!("project root: {}", root.display());
    Ok((config, root))
}
