//! Token carriers produced by the lexer.
//!
//! Only the three tokens that carry a value are modelled here. Keywords,
//! operators and punctuation never reach the tree as tokens: the parser turns
//! them directly into node variants.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// An identifier token, e.g. `count` or `Point`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdToken {
    pub value: String,
    pub span: Span,
}

impl IdToken {
    pub fn new(value: impl Into<String>, span: Span) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }
}

/// An integer literal token. The lexer has already converted the digits.
///
/// The value is unsigned: a leading `-` is never part of the literal, it is
/// a separate unary minus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntLitToken {
    pub value: u64,
    pub span: Span,
}

impl IntLitToken {
    pub fn new(value: u64, span: Span) -> Self {
        Self { value, span }
    }
}

/// A string literal token.
///
/// `value` is the lexeme exactly as written, including the surrounding double
/// quotes and any escape sequences, so it can be emitted back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrLitToken {
    pub value: String,
    pub span: Span,
}

impl StrLitToken {
    pub fn new(value: impl Into<String>, span: Span) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }
}
