use crate::{
    error::{ErrorKind, PResult},
    syntax::{Expression, SyntaxTree, Token, TokenKind},
};

/// Computes the value of a parsed expression.
///
/// The tree must come from a parse without diagnostics. `evaluate_str` is
/// the gated entry point.
pub struct Evaluator<'a, 'src> {
    root: &'a Expression<'src>,
}

impl<'a, 'src> Evaluator<'a, 'src> {
    pub fn new(root: &'a Expression<'src>) -> Self {
        Self { root }
    }

    pub fn evaluate(&self) -> PResult<i32> {
        Self::eval_expr(self.root)
    }

    /// Post-order walk over an explicit stack. The parser's operator loops
    /// build left-deep chains as long as the input, so this must not recurse.
    fn eval_expr(root: &Expression) -> PResult<i32> {
        let mut work = vec![Step::Visit(root)];
        let mut values: Vec<i32> = vec![];

        while let Some(step) = work.pop() {
            match step {
                Step::Visit(Expression::Number(token)) => {
                    let value = token.value.ok_or(ErrorKind::MissingValue {
                        position: token.position,
                    })?;
                    values.push(value);
                }
                Step::Visit(Expression::Grouping { inner, .. }) => work.push(Step::Visit(inner)),
                Step::Visit(Expression::Binary { lhs, op, rhs }) => {
                    debug_assert!(op.kind.is_binary_operator(), "{:?}", op.kind);
                    work.push(Step::Apply(op));
                    work.push(Step::Visit(rhs));
                    work.push(Step::Visit(lhs));
                }
                Step::Apply(op) => {
                    let (Some(rhs), Some(lhs)) = (values.pop(), values.pop()) else {
                        unreachable!("operator without two operands");
                    };
                    values.push(Self::apply(op, lhs, rhs)?);
                }
            }
        }

        match values.pop() {
            Some(value) => Ok(value),
            None => unreachable!("expression produced no value"),
        }
    }

    fn apply(op: &Token, lhs: i32, rhs: i32) -> PResult<i32> {
        let position = op.position;
        log::trace!("{lhs} {:?} {rhs}", op.kind);

        let value = match op.kind {
            TokenKind::Plus => lhs.checked_add(rhs),
            TokenKind::Minus => lhs.checked_sub(rhs),
            TokenKind::Star => lhs.checked_mul(rhs),
            TokenKind::Slash => {
                if rhs == 0 {
                    return Err(ErrorKind::DivideByZero { position });
                }
                lhs.checked_div(rhs)
            }
            other => unreachable!("{other:?} is not a binary operator"),
        };
        value.ok_or(ErrorKind::Overflow { position })
    }
}

enum Step<'a, 'src> {
    Visit(&'a Expression<'src>),
    Apply(&'a Token<'src>),
}

/// Parses `src` and evaluates it only if parsing left no diagnostics.
pub fn evaluate_str(src: &str) -> PResult<i32> {
    let tree = SyntaxTree::parse(src);
    if tree.has_errors() {
        return Err(ErrorKind::ParseError(tree.diagnostics().to_vec()));
    }
    Evaluator::new(tree.root()).evaluate()
}
