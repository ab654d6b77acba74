use super::{
    parser::MAX_NESTING,
    token::TokenKind,
    ExprParser, Expression, Parser,
};

impl<'src> ExprParser<'src> for Parser<'src> {
    fn parse_term(&mut self) -> Box<Expression<'src>> {
        let mut lhs = self.parse_factor();

        while matches!(self.current().kind, TokenKind::Plus | TokenKind::Minus) {
            let op = self.advance();
            let rhs = self.parse_factor();
            lhs = Box::new(Expression::Binary { lhs, op, rhs });
        }

        lhs
    }

    fn parse_factor(&mut self) -> Box<Expression<'src>> {
        let mut lhs = self.parse_primary();

        while matches!(self.current().kind, TokenKind::Star | TokenKind::Slash) {
            let op = self.advance();
            let rhs = self.parse_primary();
            lhs = Box::new(Expression::Binary { lhs, op, rhs });
        }

        lhs
    }

    fn parse_primary(&mut self) -> Box<Expression<'src>> {
        if self.current().kind == TokenKind::OpenParen {
            return self.parse_grouping_expr();
        }

        let number = self.expect(TokenKind::Number);
        Box::new(Expression::Number(number))
    }

    fn parse_grouping_expr(&mut self) -> Box<Expression<'src>> {
        if self.depth == MAX_NESTING {
            return self.skip_group();
        }

        let open = self.advance();
        self.depth += 1;
        let inner = self.parse_term();
        self.depth -= 1;
        let close = self.expect(TokenKind::CloseParen);

        Box::new(Expression::Grouping { open, inner, close })
    }
}
