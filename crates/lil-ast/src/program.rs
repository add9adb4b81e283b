use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decl::DeclList;
use crate::printer::{Printer, Unparse, UnparseConfig};

/// Root of a LIL' C tree: the top-level declaration list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    decls: DeclList,
}

impl Program {
    pub fn new(decls: DeclList) -> Self {
        Self { decls }
    }

    pub fn decls(&self) -> &DeclList {
        &self.decls
    }

    /// Write the program as source text into `out`, starting at `indent`
    /// (normally 0), with the default configuration.
    ///
    /// Errors from `out` are returned as-is. On error, whatever was already
    /// written is an incomplete program and should be discarded.
    pub fn unparse<W: Write>(&self, out: &mut W, indent: usize) -> io::Result<()> {
        self.unparse_with(out, indent, &UnparseConfig::default())
    }

    /// Like [`Program::unparse`], with an explicit configuration.
    pub fn unparse_with<W: Write>(
        &self,
        out: &mut W,
        indent: usize,
        config: &UnparseConfig,
    ) -> io::Result<()> {
        debug!(
            decls = self.decls.len(),
            indent,
            indent_size = config.indent_size,
            "unparsing program"
        );
        let mut printer = Printer::new(out, config);
        self.decls.unparse(&mut printer, indent)?;
        debug!(decls = self.decls.len(), "finished unparsing program");
        Ok(())
    }

    /// Render the whole program into a `String`.
    pub fn to_source(&self, config: &UnparseConfig) -> String {
        let mut buf = Vec::new();
        self.unparse_with(&mut buf, 0, config)
            .expect("writing to a Vec<u8> cannot fail");
        // Only `str` fragments and formatted integers are ever written.
        String::from_utf8(buf).expect("unparser output is valid UTF-8")
    }
}
