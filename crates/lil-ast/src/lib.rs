//! Abstract syntax tree for LIL' C, and its unparser.
//!
//! The tree is built bottom-up by the parser: leaves from lexer tokens, then
//! composite nodes that take ownership of already-built children. Once built
//! it is immutable. Every node implements [`Unparse`], and
//! [`Program::unparse`] writes the whole program back out as canonical
//! source text.
//!
//! # Output format
//!
//! - One indentation unit per nesting level (`UnparseConfig::indent_size`
//!   spaces, default 4).
//! - Blocks open with `{` at the end of the header line and close with `}`
//!   on a line of their own; struct declarations close with `};`.
//! - Unary and binary operators are fully parenthesised, as is an assignment
//!   nested inside another expression.
//!
//! # Example
//!
//! ```
//! use lil_ast::{DeclList, Exp, FnBody, FnDecl, FormalsList, Id, Decl, Program, Stmt, StmtList, Type, UnparseConfig};
//!
//! let body = FnBody::new(
//!     DeclList::default(),
//!     StmtList::new([Stmt::Write(Exp::str_lit("\"hello\""))]),
//! );
//! let main = FnDecl::new(Type::Void, Id::from("main"), FormalsList::default(), body);
//! let program = Program::new(DeclList::new([Decl::Fn(main)]));
//!
//! let source = program.to_source(&UnparseConfig::default());
//! assert_eq!(source, "void main() {\n    cout << \"hello\";\n}\n");
//! ```

pub mod decl;
pub mod expr;
pub mod printer;
pub mod program;
pub mod stmt;
pub mod types;

pub use decl::{Decl, DeclList, FnBody, FnDecl, FormalDecl, FormalsList, StructDecl, VarDecl};
pub use expr::{
    AssignExp, BinaryExp, BinaryOp, CallExp, DotAccess, Exp, ExpList, Id, IntLit, StrLit, UnaryExp,
    UnaryOp,
};
pub use printer::{Printer, Unparse, UnparseConfig};
pub use program::Program;
pub use stmt::{IfElseStmt, IfStmt, Stmt, StmtList, WhileStmt};
pub use types::Type;
