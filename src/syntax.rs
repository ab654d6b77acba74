mod expr;
mod expr_parser;
mod lexer;
mod parser;
mod token;
mod tree;

pub use expr::{Expression, Node, SyntaxKind};
pub use lexer::Lexer;
pub use parser::Parser;
pub use token::{Token, TokenKind};
pub use tree::SyntaxTree;

/// Recursive descent over two precedence tiers: `term` handles `+`/`-`,
/// `factor` handles `*`/`/`, `primary` is a number or a parenthesised term.
pub(crate) trait ExprParser<'src> {
    fn parse_term(&mut self) -> Box<Expression<'src>>;
    fn parse_factor(&mut self) -> Box<Expression<'src>>;
    fn parse_primary(&mut self) -> Box<Expression<'src>>;
    fn parse_grouping_expr(&mut self) -> Box<Expression<'src>>;
}
