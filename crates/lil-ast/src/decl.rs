//! Declaration nodes: variables, functions, formals and structs.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::expr::Id;
use crate::printer::{Printer, Unparse};
use crate::stmt::StmtList;
use crate::types::Type;

fn not_struct() -> i32 {
    VarDecl::NOT_STRUCT
}

/// `int x;`, `struct Point p;` or `int counts[10];`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    ty: Type,
    name: Id,
    #[serde(default = "not_struct")]
    size: i32,
}

impl VarDecl {
    /// Size value for a declaration that carries no size suffix.
    pub const NOT_STRUCT: i32 = -1;

    pub fn new(ty: Type, name: Id, size: i32) -> Self {
        Self { ty, name, size }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn name(&self) -> &Id {
        &self.name
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn has_size(&self) -> bool {
        self.size != Self::NOT_STRUCT
    }
}

impl Unparse for VarDecl {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        p.indent(indent)?;
        self.ty.unparse(p, indent)?;
        p.text(" ")?;
        self.name.unparse(p, indent)?;
        if self.has_size() {
            p.text("[")?;
            p.display(self.size)?;
            p.text("]")?;
        }
        p.text(";")?;
        p.newline()
    }
}

/// A single formal parameter, rendered inline as `type name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormalDecl {
    ty: Type,
    name: Id,
}

impl FormalDecl {
    pub fn new(ty: Type, name: Id) -> Self {
        Self { ty, name }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn name(&self) -> &Id {
        &self.name
    }
}

impl Unparse for FormalDecl {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        self.ty.unparse(p, indent)?;
        p.text(" ")?;
        self.name.unparse(p, indent)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormalsList(Box<[FormalDecl]>);

impl FormalsList {
    pub fn new(formals: impl IntoIterator<Item = FormalDecl>) -> Self {
        Self(formals.into_iter().collect())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FormalDecl> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Unparse for FormalsList {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        p.comma_separated(&self.0, indent)
    }
}

/// Local declarations followed by the statements of a function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FnBody {
    decls: DeclList,
    stmts: StmtList,
}

impl FnBody {
    pub fn new(decls: DeclList, stmts: StmtList) -> Self {
        Self { decls, stmts }
    }

    pub fn decls(&self) -> &DeclList {
        &self.decls
    }

    pub fn stmts(&self) -> &StmtList {
        &self.stmts
    }
}

impl Unparse for FnBody {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        self.decls.unparse(p, indent)?;
        self.stmts.unparse(p, indent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FnDecl {
    ret: Type,
    name: Id,
    formals: FormalsList,
    body: FnBody,
}

impl FnDecl {
    pub fn new(ret: Type, name: Id, formals: FormalsList, body: FnBody) -> Self {
        Self {
            ret,
            name,
            formals,
            body,
        }
    }

    pub fn ret(&self) -> &Type {
        &self.ret
    }

    pub fn name(&self) -> &Id {
        &self.name
    }

    pub fn formals(&self) -> &FormalsList {
        &self.formals
    }

    pub fn body(&self) -> &FnBody {
        &self.body
    }
}

impl Unparse for FnDecl {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        p.indent(indent)?;
        self.ret.unparse(p, indent)?;
        p.text(" ")?;
        self.name.unparse(p, indent)?;
        p.text("(")?;
        self.formals.unparse(p, indent)?;
        p.text(") {")?;
        p.newline()?;
        self.body.unparse(p, indent + 1)?;
        p.indent(indent)?;
        p.text("}")?;
        p.newline()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDecl {
    name: Id,
    members: DeclList,
}

impl StructDecl {
    pub fn new(name: Id, members: DeclList) -> Self {
        Self { name, members }
    }

    pub fn name(&self) -> &Id {
        &self.name
    }

    pub fn members(&self) -> &DeclList {
        &self.members
    }
}

impl Unparse for StructDecl {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        p.indent(indent)?;
        p.text("struct ")?;
        self.name.unparse(p, indent)?;
        p.text(" {")?;
        p.newline()?;
        self.members.unparse(p, indent + 1)?;
        p.indent(indent)?;
        p.text("};")?;
        p.newline()
    }
}

/// A declaration that can appear in a declaration list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decl {
    Var(VarDecl),
    Fn(FnDecl),
    Struct(StructDecl),
}

impl Decl {
    fn is_var(&self) -> bool {
        matches!(self, Self::Var(_))
    }
}

impl Unparse for Decl {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        match self {
            Self::Var(decl) => decl.unparse(p, indent),
            Self::Fn(decl) => decl.unparse(p, indent),
            Self::Struct(decl) => decl.unparse(p, indent),
        }
    }
}

/// An ordered, possibly empty list of declarations.
///
/// Adjacent declarations are separated by a blank line unless both are
/// variable declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclList(Box<[Decl]>);

impl DeclList {
    pub fn new(decls: impl IntoIterator<Item = Decl>) -> Self {
        Self(decls.into_iter().collect())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decl> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Unparse for DeclList {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        let mut prev: Option<&Decl> = None;
        for decl in self.0.iter() {
            if let Some(prev) = prev {
                if !(prev.is_var() && decl.is_var()) {
                    p.newline()?;
                }
            }
            decl.unparse(p, indent)?;
            prev = Some(decl);
        }
        Ok(())
    }
}
