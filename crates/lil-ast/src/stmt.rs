//! Statement nodes.
//!
//! Every statement starts its own line at `indent` and ends with a newline.
//! Compound statements put their local declarations and statements one level
//! deeper and close the block with `}` back at `indent`.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::decl::DeclList;
use crate::expr::{AssignExp, CallExp, Exp};
use crate::printer::{Printer, Unparse};

/// Render `{` + newline, the block contents at `indent + 1`, then the closing
/// brace line at `indent`.
fn unparse_block<W: Write>(
    p: &mut Printer<'_, W>,
    decls: &DeclList,
    stmts: &StmtList,
    indent: usize,
) -> io::Result<()> {
    p.text("{")?;
    p.newline()?;
    decls.unparse(p, indent + 1)?;
    stmts.unparse(p, indent + 1)?;
    p.indent(indent)?;
    p.text("}")?;
    p.newline()
}

/// `if (cond) { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    cond: Exp,
    decls: DeclList,
    stmts: StmtList,
}

impl IfStmt {
    pub fn new(cond: Exp, decls: DeclList, stmts: StmtList) -> Self {
        Self { cond, decls, stmts }
    }

    pub fn cond(&self) -> &Exp {
        &self.cond
    }

    pub fn decls(&self) -> &DeclList {
        &self.decls
    }

    pub fn stmts(&self) -> &StmtList {
        &self.stmts
    }
}

/// `if (cond) { ... } else { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfElseStmt {
    cond: Exp,
    then_decls: DeclList,
    then_stmts: StmtList,
    else_decls: DeclList,
    else_stmts: StmtList,
}

impl IfElseStmt {
    pub fn new(
        cond: Exp,
        then_decls: DeclList,
        then_stmts: StmtList,
        else_decls: DeclList,
        else_stmts: StmtList,
    ) -> Self {
        Self {
            cond,
            then_decls,
            then_stmts,
            else_decls,
            else_stmts,
        }
    }

    pub fn cond(&self) -> &Exp {
        &self.cond
    }

    pub fn then_branch(&self) -> (&DeclList, &StmtList) {
        (&self.then_decls, &self.then_stmts)
    }

    pub fn else_branch(&self) -> (&DeclList, &StmtList) {
        (&self.else_decls, &self.else_stmts)
    }
}

/// `while (cond) { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStmt {
    cond: Exp,
    decls: DeclList,
    stmts: StmtList,
}

impl WhileStmt {
    pub fn new(cond: Exp, decls: DeclList, stmts: StmtList) -> Self {
        Self { cond, decls, stmts }
    }

    pub fn cond(&self) -> &Exp {
        &self.cond
    }

    pub fn decls(&self) -> &DeclList {
        &self.decls
    }

    pub fn stmts(&self) -> &StmtList {
        &self.stmts
    }
}

/// Every kind of statement in LIL' C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Assign(AssignExp),
    PostInc(Exp),
    PostDec(Exp),
    /// `cin >> loc;`
    Read(Exp),
    /// `cout << exp;`
    Write(Exp),
    If(IfStmt),
    IfElse(IfElseStmt),
    While(WhileStmt),
    Call(CallExp),
    /// `return exp;` or a bare `return;`.
    Return(Option<Exp>),
}

impl Unparse for Stmt {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        p.indent(indent)?;
        match self {
            Self::Assign(assign) => {
                assign.unparse(p, indent)?;
                p.text(";")?;
            }
            Self::PostInc(loc) => {
                loc.unparse(p, indent)?;
                p.text("++;")?;
            }
            Self::PostDec(loc) => {
                loc.unparse(p, indent)?;
                p.text("--;")?;
            }
            Self::Read(loc) => {
                p.text("cin >> ")?;
                loc.unparse(p, indent)?;
                p.text(";")?;
            }
            Self::Write(exp) => {
                p.text("cout << ")?;
                exp.unparse(p, indent)?;
                p.text(";")?;
            }
            Self::If(stmt) => {
                p.text("if (")?;
                stmt.cond.unparse(p, indent)?;
                p.text(") ")?;
                return unparse_block(p, &stmt.decls, &stmt.stmts, indent);
            }
            Self::IfElse(stmt) => {
                p.text("if (")?;
                stmt.cond.unparse(p, indent)?;
                p.text(") ")?;
                unparse_block(p, &stmt.then_decls, &stmt.then_stmts, indent)?;
                p.indent(indent)?;
                p.text("else ")?;
                return unparse_block(p, &stmt.else_decls, &stmt.else_stmts, indent);
            }
            Self::While(stmt) => {
                p.text("while (")?;
                stmt.cond.unparse(p, indent)?;
                p.text(") ")?;
                return unparse_block(p, &stmt.decls, &stmt.stmts, indent);
            }
            Self::Call(call) => {
                call.unparse(p, indent)?;
                p.text(";")?;
            }
            Self::Return(None) => p.text("return;")?,
            Self::Return(Some(exp)) => {
                p.text("return ")?;
                exp.unparse(p, indent)?;
                p.text(";")?;
            }
        }
        p.newline()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StmtList(Box<[Stmt]>);

impl StmtList {
    pub fn new(stmts: impl IntoIterator<Item = Stmt>) -> Self {
        Self(stmts.into_iter().collect())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Unparse for StmtList {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        for stmt in self.0.iter() {
            stmt.unparse(p, indent)?;
        }
        Ok(())
    }
}
