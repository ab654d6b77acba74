use std::{fmt, mem};

use super::token::{Token, TokenKind};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expression<'src> {
    Number(Token<'src>),
    Binary {
        lhs: Box<Expression<'src>>,
        op: Token<'src>,
        rhs: Box<Expression<'src>>,
    },
    Grouping {
        open: Token<'src>,
        inner: Box<Expression<'src>>,
        close: Token<'src>,
    },
}

impl<'src> Expression<'src> {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Self::Number(_) => SyntaxKind::NumberExpression,
            Self::Binary { .. } => SyntaxKind::BinaryExpression,
            Self::Grouping { .. } => SyntaxKind::ParenthesizedExpression,
        }
    }

    pub fn children(&self) -> Vec<Node<'_, 'src>> {
        match self {
            Self::Number(token) => vec![Node::Token(token)],
            Self::Binary { lhs, op, rhs } => vec![
                Node::Expression(lhs),
                Node::Token(op),
                Node::Expression(rhs),
            ],
            Self::Grouping { open, inner, close } => vec![
                Node::Token(open),
                Node::Expression(inner),
                Node::Token(close),
            ],
        }
    }

    /// Moves non-leaf children into `pending`, leaving placeholder numbers.
    fn detach_children(&mut self, pending: &mut Vec<Box<Expression<'src>>>) {
        let children = match self {
            Self::Number(_) => return,
            Self::Binary { lhs, rhs, .. } => vec![lhs, rhs],
            Self::Grouping { inner, .. } => vec![inner],
        };

        for child in children {
            if !matches!(**child, Self::Number(_)) {
                let leaf = Expression::Number(Token::missing(TokenKind::Number, 0));
                pending.push(mem::replace(child, Box::new(leaf)));
            }
        }
    }
}

impl Drop for Expression<'_> {
    // Operator chains are as deep as the input is long.
    fn drop(&mut self) {
        let mut pending = vec![];
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Token(TokenKind),
    NumberExpression,
    BinaryExpression,
    ParenthesizedExpression,
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(kind) => write!(f, "{kind}Token"),
            Self::NumberExpression => f.write_str("NumberExpression"),
            Self::BinaryExpression => f.write_str("BinaryExpression"),
            Self::ParenthesizedExpression => f.write_str("ParenthesizedExpression"),
        }
    }
}

/// Borrowed view over anything that can appear in a syntax tree, so a
/// consumer can walk it through `kind` and `children` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a, 'src> {
    Token(&'a Token<'src>),
    Expression(&'a Expression<'src>),
}

impl<'a, 'src> Node<'a, 'src> {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Self::Token(token) => SyntaxKind::Token(token.kind),
            Self::Expression(expr) => expr.kind(),
        }
    }

    pub fn children(&self) -> Vec<Node<'a, 'src>> {
        match *self {
            Self::Token(_) => vec![],
            Self::Expression(expr) => expr.children(),
        }
    }

    pub fn value(&self) -> Option<i32> {
        match self {
            Self::Token(token) => token.value,
            Self::Expression(_) => None,
        }
    }
}
