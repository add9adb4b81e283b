//! Shared types for the LIL' C front end.
//!
//! The lexer hands these token carriers to the tree builder. Leaf nodes copy
//! the value they need out of a token and keep no reference to it afterwards.

pub mod span;
pub mod token;

pub use span::Span;
pub use token::{IdToken, IntLitToken, StrLitToken};
