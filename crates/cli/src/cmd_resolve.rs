// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `testmap resolve` command implementation.

use termcolor::StandardStream;

use testmap::cli::{Cli, OutputFormat, ResolveArgs};
use testmap::color::resolve_color;
use testmap::error::{Error, ExitCode};
use testmap::fs::ProjectFs;
use testmap::git;
use testmap::output::{JsonFormatter, TextFormatter};
use testmap::select::{Selector, expand_selector};

pub fn run(cli: &Cli, args: &ResolveArgs) -> anyhow::Result<ExitCode> {
    if !args.has_input() {
        return Err(Error::Argument(
            "nothing to resolve: pass PATHS, --base <REF>, or --staged".to_string(),
        )
        .into());
    }

    let (config, root) = crate::load_project(cli)?;
    let fs = ProjectFs::new(&root);
    let selector = Selector::new(&config)?;

    if (args.base.is_some() || args.staged) && !git::is_git_repo(&root) {
        return Err(Error::Git(format!("not a git repository: {}", root.display())).into());
    }

    let mut entries = match &args.selector {
        Some(raw) => expand_selector(raw, &fs),
        None => Vec::new(),
    };
    if let Some(base) = &args.base {
        let changed = git::changed_files(&root, base).map_err(|e| Error::Git(format!("{:#}", e)))?;
        tracing::debug!("{} files changed since {}", changed.len(), base);
        entries.extend(changed);
    }
    if args.staged {
        let staged = git::staged_files(&root).map_err(|e| Error::Git(format!("{:#}", e)))?;
        tracing::debug!("{} staged files", staged.len());
        entries.extend(staged);
    }

    let selection = selector.resolve(&fs, &entries);

    match args.output {
        OutputFormat::Text => {
            let stdout = StandardStream::stdout(resolve_color(args.color, args.no_color));
            TextFormatter::new(stdout.lock(), args.verbose).write(&selection)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write(&selection)?;
        }
    }

    Ok(ExitCode::Success)
}
