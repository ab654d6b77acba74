use std::{iter::Peekable, str::CharIndices};

use super::token::{Token, TokenKind};

pub struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    diagnostics: Vec<String>,
    finished: bool,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Yields every token up to and including the first `EndOfFile`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EndOfFile {
            self.finished = true;
        }
        Some(token)
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            diagnostics: vec![],
            finished: false,
        }
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<String> {
        self.diagnostics
    }

    /// Scans exactly one token. Keeps returning `EndOfFile` once the input
    /// is exhausted.
    pub fn next_token(&mut self) -> Token<'src> {
        let Some(&(off, c)) = self.chars.peek() else {
            return Token::end_of_file(self.src.len());
        };

        let token = match c {
            '+' => self.single(TokenKind::Plus, off),
            '-' => self.single(TokenKind::Minus, off),
            '*' => self.single(TokenKind::Star, off),
            '/' => self.single(TokenKind::Slash, off),
            '(' => self.single(TokenKind::OpenParen, off),
            ')' => self.single(TokenKind::CloseParen, off),
            c if c.is_ascii_digit() => self.read_number(off),
            c if c.is_whitespace() => {
                let s = self.slice_until(off, |c| !c.is_whitespace());
                Token::new(TokenKind::Whitespace, off, s)
            }
            c => {
                self.diagnostics
                    .push(format!("Error: Bad character input-> {c}"));
                self.single(TokenKind::Bad, off)
            }
        };

        log::trace!("{:?} {:?} at {}", token.kind, token.text, token.position);
        token
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn single(&mut self, kind: TokenKind, off: usize) -> Token<'src> {
        self.bump();
        let end = self.chars.peek().map_or(self.src.len(), |&(next, _)| next);
        Token::new(kind, off, &self.src[off..end])
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    fn read_number(&mut self, from_off: usize) -> Token<'src> {
        let s = self.slice_until(from_off, |c| !c.is_ascii_digit());
        let value = match s.parse::<i32>() {
            Ok(v) => Some(v),
            Err(_) => {
                self.diagnostics
                    .push(format!("The number {s} is not a valid Int"));
                None
            }
        };
        Token::number(from_off, s, value)
    }
}
