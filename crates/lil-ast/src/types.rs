use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::expr::Id;
use crate::printer::{Printer, Unparse};

/// A type annotation on a declaration.
///
/// `Struct` names the struct; it is not resolved to its definition here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    Int,
    Bool,
    Void,
    Struct(Id),
}

impl Unparse for Type {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        match self {
            Self::Int => p.text("int"),
            Self::Bool => p.text("bool"),
            Self::Void => p.text("void"),
            Self::Struct(name) => {
                p.text("struct ")?;
                name.unparse(p, indent)
            }
        }
    }
}
