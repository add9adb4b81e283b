//! Output side of the unparser.
//!
//! Holds the [`UnparseConfig`], the [`Printer`] that wraps the caller's sink,
//! and the [`Unparse`] trait implemented by every node of the tree.

use std::fmt;
use std::io::{self, Write};

/// Configuration for the unparser output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnparseConfig {
    /// Number of spaces per indentation level. Default: 4.
    pub indent_size: usize,
}

impl Default for UnparseConfig {
    fn default() -> Self {
        Self { indent_size: 4 }
    }
}

/// A borrowed output sink plus the configuration it is written with.
///
/// The printer never opens, flushes or closes the sink; that stays with the
/// caller. Write errors are returned unchanged.
pub struct Printer<'a, W: Write> {
    out: &'a mut W,
    config: &'a UnparseConfig,
}

impl<'a, W: Write> Printer<'a, W> {
    pub fn new(out: &'a mut W, config: &'a UnparseConfig) -> Self {
        Self { out, config }
    }

    /// Emit `level` indentation units.
    pub fn indent(&mut self, level: usize) -> io::Result<()> {
        let width = level * self.config.indent_size;
        if width == 0 {
            return Ok(());
        }
        self.out.write_all(" ".repeat(width).as_bytes())
    }

    pub fn text(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }

    pub fn display(&mut self, value: impl fmt::Display) -> io::Result<()> {
        write!(self.out, "{value}")
    }

    pub fn newline(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")
    }

    /// Render `items` on the current line separated by `", "`.
    pub fn comma_separated<T: Unparse>(&mut self, items: &[T], indent: usize) -> io::Result<()> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.text(", ")?;
            }
            item.unparse(self, indent)?;
        }
        Ok(())
    }
}

/// A node that can write itself back out as LIL' C source.
///
/// `indent` is the nesting depth of the node. Nodes that start a line write
/// the indentation themselves; inline nodes (types, expressions, formals)
/// ignore it.
pub trait Unparse {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()>;
}
