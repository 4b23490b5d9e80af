// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One selected test module per line, ready for `xargs`. Verbose mode adds
//! the origin of each module and a summary line:
//! ```text
//! tests/unit/modules/test_git.py  (convention: src/modules/git.py)
//! 1 test module from 1 source path (no filename map)
//! ```

use termcolor::WriteColor;

use super::{describe_map_status, describe_origin};
use crate::color::scheme;
use crate::select::Selection;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    writer: W,
    verbose: bool,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(writer: W, verbose: bool) -> Self {
        Self { writer, verbose }
    }

    pub fn write(&mut self, selection: &Selection) -> std::io::Result<()> {
        for selected in selection.tests.iter() {
            self.writer.set_color(&scheme::path())?;
            write!(self.writer, "{}", selected.path)?;
            self.writer.reset()?;

            if self.verbose {
                write!(self.writer, "  ")?;
                self.writer.set_color(&scheme::origin())?;
                write!(self.writer, "({})", describe_origin(&selected.origin))?;
                self.writer.reset()?;
            }
            writeln!(self.writer)?;
        }

        if self.verbose {
            self.write_summary(selection)?;
        }
        Ok(())
    }

    fn write_summary(&mut self, selection: &Selection) -> std::io::Result<()> {
        let tests = selection.tests.len();
        let sources = selection.sources.len();
        if tests == 0 {
            self.writer.set_color(&scheme::warn())?;
            write!(self.writer, "no test modules selected")?;
            self.writer.reset()?;
        } else {
            write!(
                self.writer,
                "{} test {} from {} source {}",
                tests,
                plural(tests, "module", "modules"),
                sources,
                plural(sources, "path", "paths"),
            )?;
        }
        writeln!(
            self.writer,
            " ({})",
            describe_map_status(selection.filename_map)
        )
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
