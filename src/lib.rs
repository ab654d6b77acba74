//! Integer arithmetic over `+ - * /` and parentheses.
//!
//! Text goes through three stages: [`Lexer`] turns it into tokens, [`Parser`]
//! builds a [`SyntaxTree`] and collects diagnostics, and [`Evaluator`] folds a
//! diagnostics-free tree into an `i32`.

pub mod error;
pub mod runtime;
pub mod syntax;

pub use error::{ErrorKind, PResult};
pub use runtime::eval::{evaluate_str, Evaluator};
pub use syntax::{Expression, Lexer, Node, Parser, SyntaxKind, SyntaxTree, Token, TokenKind};
