use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Whitespace,
    Plus,
    Minus,
    Star,
    Slash,
    OpenParen,
    CloseParen,
    Bad,
    EndOfFile,
}

impl TokenKind {
    pub fn is_binary_operator(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }

    /// Tokens the parser never sees.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Bad)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A classified slice of the input.
///
/// `text` is `None` only for tokens the parser synthesised while recovering
/// from an error. `value` is set for Number tokens whose digits fit in an
/// `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub position: usize,
    pub text: Option<&'src str>,
    pub value: Option<i32>,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, position: usize, text: &'src str) -> Self {
        Self {
            kind,
            position,
            text: Some(text),
            value: None,
        }
    }

    pub fn number(position: usize, text: &'src str, value: Option<i32>) -> Self {
        Self {
            kind: TokenKind::Number,
            position,
            text: Some(text),
            value,
        }
    }

    pub fn end_of_file(position: usize) -> Self {
        Self::new(TokenKind::EndOfFile, position, "")
    }

    pub fn missing(kind: TokenKind, position: usize) -> Self {
        Self {
            kind,
            position,
            text: None,
            value: None,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.text.is_none()
    }
}
