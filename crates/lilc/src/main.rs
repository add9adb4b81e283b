//! The LIL' C unparser CLI.
//!
//! Provides the `lilc` command with the following subcommand:
//!
//! - `lilc unparse <tree.json>` - Render a JSON-encoded syntax tree as source
//!
//! Options:
//! - `--output` - Write the source to a file instead of stdout
//! - `--indent-size` - Spaces per indentation level
//! - `--check` - Compare against `--output` instead of writing it
//! - `--verbose` - Log each phase to stderr

mod error;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use lil_ast::{Program, UnparseConfig};
use tracing::{debug, info, Level};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "lilc", version, about = "The LIL' C unparser")]
struct Cli {
    /// Log each phase to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON-encoded syntax tree back to LIL' C source
    Unparse {
        /// Path to the JSON tree
        tree: PathBuf,

        /// Output path for the source (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of spaces per indentation level
        #[arg(long = "indent-size", default_value_t = UnparseConfig::default().indent_size)]
        indent_size: usize,

        /// Do not write; exit 1 if the output file differs from the rendering
        #[arg(long, requires = "output")]
        check: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Unparse {
            tree,
            output,
            indent_size,
            check,
        } => {
            let config = UnparseConfig { indent_size };
            if let Err(e) = unparse(&tree, output.as_deref(), check, &config) {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Read the tree, then write, print or check its rendering.
fn unparse(
    tree: &Path,
    output: Option<&Path>,
    check: bool,
    config: &UnparseConfig,
) -> Result<(), CliError> {
    let program = load_tree(tree)?;

    match output {
        Some(path) if check => {
            let existing = fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            if existing != program.to_source(config) {
                return Err(CliError::CheckFailed {
                    path: path.to_path_buf(),
                });
            }
            info!(path = %path.display(), "already matches the tree");
        }
        Some(path) => {
            let write_err = |source| CliError::Write {
                path: Some(path.to_path_buf()),
                source,
            };
            // Render before touching the file. A failed write removes it.
            let source = program.to_source(config);
            let mut file = File::create(path).map_err(write_err)?;
            let written = file.write_all(source.as_bytes()).and_then(|()| file.sync_all());
            drop(file);
            if let Err(e) = written {
                let _ = fs::remove_file(path);
                return Err(write_err(e));
            }
            debug!(path = %path.display(), bytes = source.len(), "wrote source");
        }
        None => {
            let write_err = |source| CliError::Write { path: None, source };
            let stdout = io::stdout();
            let mut out = stdout.lock();
            program.unparse_with(&mut out, 0, config).map_err(write_err)?;
            out.flush().map_err(write_err)?;
        }
    }

    Ok(())
}

fn load_tree(path: &Path) -> Result<Program, CliError> {
    let json = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = json.len(), "read tree");

    let program: Program = serde_json::from_str(&json).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(decls = program.decls().len(), "decoded tree");
    Ok(program)
}
