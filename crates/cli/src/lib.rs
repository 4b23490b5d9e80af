pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod fs;
pub mod git;
pub mod host;
pub mod output;
pub mod select;

pub use cli::{Cli, Command, OutputFormat, ResolveArgs, RunnerArgs};
pub use config::{Config, LayoutConfig};
pub use error::{Error, ExitCode, Result};
pub use fs::{FileSystem, ProjectFs};
pub use select::{Origin, ResolvedSet, Selected, Selection, Selector};
