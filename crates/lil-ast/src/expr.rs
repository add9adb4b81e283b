//! Expression nodes.
//!
//! Expressions never start a line, so every `unparse` here ignores `indent`.
//! Operators are fully parenthesised: `(a + b)`, `(-x)`, `(!done)`. Re-reading
//! the output therefore rebuilds the same tree without any precedence table.
//! An assignment nested inside another expression is parenthesised as well;
//! only the statement form `a = b;` renders it bare.

use std::io::{self, Write};

use lil_common::{IdToken, IntLitToken, StrLitToken};
use serde::{Deserialize, Serialize};

use crate::printer::{Printer, Unparse};

// ── Leaves ─────────────────────────────────────────────────────────────

/// An identifier. The text is copied out of the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Id(String);

impl Id {
    pub fn new(token: &IdToken) -> Self {
        Self(token.value.clone())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl Unparse for Id {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, _indent: usize) -> io::Result<()> {
        p.text(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntLit(u64);

impl IntLit {
    pub fn new(token: &IntLitToken) -> Self {
        Self(token.value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Unparse for IntLit {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, _indent: usize) -> io::Result<()> {
        p.display(self.0)
    }
}

/// A string literal, stored as the quoted lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrLit(String);

impl StrLit {
    pub fn new(token: &StrLitToken) -> Self {
        Self(token.value.clone())
    }

    pub fn lexeme(&self) -> &str {
        &self.0
    }
}

impl Unparse for StrLit {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, _indent: usize) -> io::Result<()> {
        p.text(&self.0)
    }
}

// ── Operators ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    /// `-`
    Minus,
    /// `!`
    Not,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minus => "-",
            Self::Not => "!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Plus,
    Minus,
    Times,
    Divide,
    And,
    Or,
    Equals,
    NotEquals,
    Less,
    Greater,
    LessEq,
    GreaterEq,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Times => "*",
            Self::Divide => "/",
            Self::And => "&&",
            Self::Or => "||",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEq => "<=",
            Self::GreaterEq => ">=",
        }
    }
}

// ── Composite expressions ──────────────────────────────────────────────

/// Field access: `base.field`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotAccess {
    base: Box<Exp>,
    field: Id,
}

impl DotAccess {
    pub fn new(base: Exp, field: Id) -> Self {
        Self {
            base: Box::new(base),
            field,
        }
    }

    pub fn base(&self) -> &Exp {
        &self.base
    }

    pub fn field(&self) -> &Id {
        &self.field
    }
}

impl Unparse for DotAccess {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        self.base.unparse(p, indent)?;
        p.text(".")?;
        self.field.unparse(p, indent)
    }
}

/// Assignment. Shared by the assignment statement and by assignment used as
/// an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignExp {
    lhs: Box<Exp>,
    rhs: Box<Exp>,
}

impl AssignExp {
    pub fn new(lhs: Exp, rhs: Exp) -> Self {
        Self {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn lhs(&self) -> &Exp {
        &self.lhs
    }

    pub fn rhs(&self) -> &Exp {
        &self.rhs
    }
}

/// Renders the bare `lhs = rhs` form.
impl Unparse for AssignExp {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        self.lhs.unparse(p, indent)?;
        p.text(" = ")?;
        self.rhs.unparse(p, indent)
    }
}

/// A call: `callee(args)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExp {
    callee: Id,
    args: ExpList,
}

impl CallExp {
    pub fn new(callee: Id, args: ExpList) -> Self {
        Self { callee, args }
    }

    pub fn callee(&self) -> &Id {
        &self.callee
    }

    pub fn args(&self) -> &ExpList {
        &self.args
    }
}

impl Unparse for CallExp {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        self.callee.unparse(p, indent)?;
        p.text("(")?;
        self.args.unparse(p, indent)?;
        p.text(")")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExp {
    op: UnaryOp,
    operand: Box<Exp>,
}

impl UnaryExp {
    pub fn new(op: UnaryOp, operand: Exp) -> Self {
        Self {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn op(&self) -> UnaryOp {
        self.op
    }

    pub fn operand(&self) -> &Exp {
        &self.operand
    }
}

impl Unparse for UnaryExp {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        p.text("(")?;
        p.text(self.op.as_str())?;
        self.operand.unparse(p, indent)?;
        p.text(")")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExp {
    op: BinaryOp,
    lhs: Box<Exp>,
    rhs: Box<Exp>,
}

impl BinaryExp {
    pub fn new(op: BinaryOp, lhs: Exp, rhs: Exp) -> Self {
        Self {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn op(&self) -> BinaryOp {
        self.op
    }

    pub fn lhs(&self) -> &Exp {
        &self.lhs
    }

    pub fn rhs(&self) -> &Exp {
        &self.rhs
    }
}

impl Unparse for BinaryExp {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        p.text("(")?;
        self.lhs.unparse(p, indent)?;
        p.text(" ")?;
        p.text(self.op.as_str())?;
        p.text(" ")?;
        self.rhs.unparse(p, indent)?;
        p.text(")")
    }
}

// ── Exp ────────────────────────────────────────────────────────────────

/// Every kind of expression in LIL' C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Exp {
    IntLit(IntLit),
    StrLit(StrLit),
    True,
    False,
    Id(Id),
    DotAccess(DotAccess),
    Assign(AssignExp),
    Call(CallExp),
    Unary(UnaryExp),
    Binary(BinaryExp),
}

impl Exp {
    pub fn int(value: u64) -> Self {
        Self::IntLit(IntLit(value))
    }

    /// A string literal from its quoted lexeme.
    pub fn str_lit(lexeme: impl Into<String>) -> Self {
        Self::StrLit(StrLit(lexeme.into()))
    }

    pub fn id(name: &str) -> Self {
        Self::Id(Id::from(name))
    }

    pub fn dot(base: Exp, field: &str) -> Self {
        Self::DotAccess(DotAccess::new(base, Id::from(field)))
    }

    pub fn assign(lhs: Exp, rhs: Exp) -> Self {
        Self::Assign(AssignExp::new(lhs, rhs))
    }

    pub fn call(callee: &str, args: impl IntoIterator<Item = Exp>) -> Self {
        Self::Call(CallExp::new(Id::from(callee), ExpList::new(args)))
    }

    pub fn unary(op: UnaryOp, operand: Exp) -> Self {
        Self::Unary(UnaryExp::new(op, operand))
    }

    pub fn binary(op: BinaryOp, lhs: Exp, rhs: Exp) -> Self {
        Self::Binary(BinaryExp::new(op, lhs, rhs))
    }
}

impl Unparse for Exp {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        match self {
            Self::IntLit(lit) => lit.unparse(p, indent),
            Self::StrLit(lit) => lit.unparse(p, indent),
            Self::True => p.text("true"),
            Self::False => p.text("false"),
            Self::Id(id) => id.unparse(p, indent),
            Self::DotAccess(access) => access.unparse(p, indent),
            Self::Assign(assign) => {
                p.text("(")?;
                assign.unparse(p, indent)?;
                p.text(")")
            }
            Self::Call(call) => call.unparse(p, indent),
            Self::Unary(unary) => unary.unparse(p, indent),
            Self::Binary(binary) => binary.unparse(p, indent),
        }
    }
}

/// Actual arguments of a call, rendered comma separated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpList(Box<[Exp]>);

impl ExpList {
    pub fn new(exps: impl IntoIterator<Item = Exp>) -> Self {
        Self(exps.into_iter().collect())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Exp> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Unparse for ExpList {
    fn unparse<W: Write>(&self, p: &mut Printer<'_, W>, indent: usize) -> io::Result<()> {
        p.comma_separated(&self.0, indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::UnparseConfig;
    use lil_common::Span;

    fn render(exp: &Exp) -> String {
        let config = UnparseConfig::default();
        let mut buf = Vec::new();
        exp.unparse(&mut Printer::new(&mut buf, &config), 3).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn leaves() {
        assert_eq!(render(&Exp::int(42)), "42");
        assert_eq!(render(&Exp::str_lit("\"a b\"")), "\"a b\"");
        assert_eq!(render(&Exp::True), "true");
        assert_eq!(render(&Exp::False), "false");
        assert_eq!(render(&Exp::id("count")), "count");
    }

    #[test]
    fn leaves_copy_token_values() {
        let mut tok = IdToken::new("width", Span::new(0, 5));
        let id = Id::new(&tok);
        tok.value.push_str("_changed");
        assert_eq!(id.name(), "width");

        let lit = IntLit::new(&IntLitToken::new(7, Span::new(0, 1)));
        assert_eq!(lit.value(), 7);

        let s = StrLit::new(&StrLitToken::new("\"x\"", Span::new(0, 3)));
        assert_eq!(s.lexeme(), "\"x\"");
    }

    #[test]
    fn binary_is_fully_parenthesised() {
        // a + b * c
        let exp = Exp::binary(
            BinaryOp::Plus,
            Exp::id("a"),
            Exp::binary(BinaryOp::Times, Exp::id("b"), Exp::id("c")),
        );
        assert_eq!(render(&exp), "(a + (b * c))");

        // (a + b) * c
        let exp = Exp::binary(
            BinaryOp::Times,
            Exp::binary(BinaryOp::Plus, Exp::id("a"), Exp::id("b")),
            Exp::id("c"),
        );
        assert_eq!(render(&exp), "((a + b) * c)");
    }

    #[test]
    fn every_binary_operator_token() {
        let ops = [
            (BinaryOp::Plus, "+"),
            (BinaryOp::Minus, "-"),
            (BinaryOp::Times, "*"),
            (BinaryOp::Divide, "/"),
            (BinaryOp::And, "&&"),
            (BinaryOp::Or, "||"),
            (BinaryOp::Equals, "=="),
            (BinaryOp::NotEquals, "!="),
            (BinaryOp::Less, "<"),
            (BinaryOp::Greater, ">"),
            (BinaryOp::LessEq, "<="),
            (BinaryOp::GreaterEq, ">="),
        ];
        for (op, token) in ops {
            let exp = Exp::binary(op, Exp::id("x"), Exp::int(1));
            assert_eq!(render(&exp), format!("(x {token} 1)"));
        }
    }

    #[test]
    fn unary_operators() {
        assert_eq!(render(&Exp::unary(UnaryOp::Minus, Exp::int(5))), "(-5)");
        let double = Exp::unary(UnaryOp::Minus, Exp::unary(UnaryOp::Minus, Exp::id("x")));
        assert_eq!(render(&double), "(-(-x))");
        assert_eq!(render(&Exp::unary(UnaryOp::Not, Exp::True)), "(!true)");
    }

    #[test]
    fn negative_numbers_are_unary_minus_over_literal() {
        let neg = Exp::unary(UnaryOp::Minus, Exp::int(5));
        assert_eq!(render(&neg), "(-5)");
        let exp = Exp::binary(BinaryOp::Minus, Exp::id("x"), Exp::unary(UnaryOp::Minus, Exp::int(1)));
        assert_eq!(render(&exp), "(x - (-1))");
        assert_eq!(render(&Exp::int(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn json_rejects_negative_int_literal() {
        assert!(serde_json::from_str::<Exp>(r#"{"IntLit": -7}"#).is_err());
        let lit: Exp = serde_json::from_str(r#"{"IntLit": 7}"#).unwrap();
        assert_eq!(lit, Exp::int(7));
    }

    #[test]
    fn nested_assignment_is_parenthesised() {
        let exp = Exp::assign(Exp::id("a"), Exp::assign(Exp::id("b"), Exp::int(0)));
        assert_eq!(render(&exp), "(a = (b = 0))");
    }

    #[test]
    fn dot_access_chains() {
        let exp = Exp::dot(Exp::dot(Exp::id("line"), "start"), "x");
        assert_eq!(render(&exp), "line.start.x");
    }

    #[test]
    fn calls_render_argument_lists() {
        assert_eq!(render(&Exp::call("f", [])), "f()");
        let exp = Exp::call(
            "max",
            [
                Exp::id("a"),
                Exp::binary(BinaryOp::Plus, Exp::id("b"), Exp::int(1)),
                Exp::call("g", [Exp::str_lit("\"s\"")]),
            ],
        );
        assert_eq!(render(&exp), "max(a, (b + 1), g(\"s\"))");
    }

    #[test]
    fn exp_list_is_frozen_copy() {
        let mut working = vec![Exp::int(1), Exp::int(2)];
        let list = ExpList::new(working.clone());
        working.push(Exp::int(3));
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert!(ExpList::new([]).is_empty());
    }
}
