use super::{
    lexer::Lexer,
    token::{Token, TokenKind},
    ExprParser, Expression, SyntaxTree,
};

/// Deepest parenthesised group the parser descends into.
pub const MAX_NESTING: usize = 256;

pub struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    position: usize,
    pub(super) depth: usize,
    diagnostics: Vec<String>,
}

impl<'src> Parser<'src> {
    /// Drains the lexer up front. Whitespace and bad tokens are dropped;
    /// their diagnostics are kept.
    pub fn new(src: &'src str) -> Self {
        let mut lexer = Lexer::new(src);
        let mut tokens = vec![];

        loop {
            let token = lexer.next_token();
            if !token.kind.is_trivia() {
                tokens.push(token);
            }
            if token.kind == TokenKind::EndOfFile {
                break;
            }
        }

        let diagnostics = lexer.into_diagnostics();
        log::debug!(
            "buffered {} tokens, {} lexer diagnostics",
            tokens.len(),
            diagnostics.len()
        );

        Self {
            tokens,
            position: 0,
            depth: 0,
            diagnostics,
        }
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn parse(mut self) -> SyntaxTree<'src> {
        let root = self.parse_term();
        let end_of_file = self.expect(TokenKind::EndOfFile);

        log::debug!("parsed with {} diagnostics", self.diagnostics.len());
        SyntaxTree::new(self.diagnostics, *root, end_of_file)
    }

    /// Past the end of the buffer this keeps answering with the trailing
    /// `EndOfFile` token.
    pub(super) fn peek(&self, offset: usize) -> Token<'src> {
        let last = self.tokens.len() - 1;
        self.tokens[(self.position + offset).min(last)]
    }

    #[inline]
    pub(super) fn current(&self) -> Token<'src> {
        self.peek(0)
    }

    pub(super) fn advance(&mut self) -> Token<'src> {
        let token = self.current();
        self.position += 1;
        token
    }

    /// Consumes the current token if it has the expected kind. Otherwise
    /// records a diagnostic and hands back a missing token of that kind
    /// without consuming anything.
    pub(super) fn expect(&mut self, expected: TokenKind) -> Token<'src> {
        let current = self.current();
        if current.kind == expected {
            return self.advance();
        }

        self.diagnostics.push(format!(
            "Error: Unexpected token <{}>, expected <{expected}>",
            current.kind
        ));
        Token::missing(expected, current.position)
    }

    /// Consumes a group opened past `MAX_NESTING` up to its matching close
    /// and stands a missing number in for it.
    pub(super) fn skip_group(&mut self) -> Box<Expression<'src>> {
        let position = self.current().position;
        self.diagnostics.push(format!(
            "Error: Parentheses nested deeper than {MAX_NESTING} at position {position}"
        ));

        let mut open = 0usize;
        loop {
            match self.advance().kind {
                TokenKind::OpenParen => open += 1,
                TokenKind::CloseParen => {
                    open = open.saturating_sub(1);
                    if open == 0 {
                        break;
                    }
                }
                TokenKind::EndOfFile => break,
                _ => {}
            }
        }

        Box::new(Expression::Number(Token::missing(TokenKind::Number, position)))
    }
}

#[cfg(test)]
mod test {
    use super::Parser;
    use crate::syntax::token::{Token, TokenKind};

    #[test]
    fn buffer_skips_trivia_and_keeps_eof() {
        let parser = Parser::new(" 1 $ +2 ");
        let kinds: Vec<_> = parser.tokens.iter().map(|t| t.kind).collect();

        assert_eq!(
            kinds,
            [
                TokenKind::Number,
                TokenKind::Plus,
                TokenKind::Number,
                TokenKind::EndOfFile
            ]
        );
        assert_eq!(parser.diagnostics(), ["Error: Bad character input-> $"]);
    }

    #[test]
    fn peek_past_end_returns_eof() {
        let mut parser = Parser::new("7");

        assert_eq!(parser.peek(5), Token::end_of_file(1));
        assert_eq!(parser.advance().kind, TokenKind::Number);
        assert_eq!(parser.advance().kind, TokenKind::EndOfFile);
        assert_eq!(parser.advance().kind, TokenKind::EndOfFile);
        assert_eq!(parser.current(), Token::end_of_file(1));
    }

    #[test]
    fn expect_synthesises_missing_token() {
        let mut parser = Parser::new("+");
        let token = parser.expect(TokenKind::Number);

        assert_eq!(token, Token::missing(TokenKind::Number, 0));
        assert!(token.is_missing());
        assert_eq!(parser.current().kind, TokenKind::Plus);
        assert_eq!(
            parser.diagnostics(),
            ["Error: Unexpected token <Plus>, expected <Number>"]
        );
    }
}
