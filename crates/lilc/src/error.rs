//! Errors surfaced by the `lilc` command line.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Anything that can stop `lilc unparse` before the source is written.
#[derive(Debug)]
pub enum CliError {
    /// The input tree or the `--check` target could not be read.
    Read { path: PathBuf, source: io::Error },
    /// The input was not a valid JSON-encoded tree.
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Writing the rendered source failed. `path` is `None` for stdout.
    Write {
        path: Option<PathBuf>,
        source: io::Error,
    },
    /// `--check` found that the file differs from the rendering.
    CheckFailed { path: PathBuf },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read '{}': {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "'{}' is not a valid syntax tree: {source}", path.display())
            }
            Self::Write { path: Some(path), source } => {
                write!(f, "failed to write '{}': {source}", path.display())
            }
            Self::Write { path: None, source } => {
                write!(f, "failed to write to stdout: {source}")
            }
            Self::CheckFailed { path } => {
                write!(f, "'{}' does not match the unparsed tree", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::CheckFailed { .. } => None,
        }
    }
}
