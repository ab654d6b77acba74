use super::{expr::Node, parser::Parser, token::Token, Expression};

/// Result of one parse. Always has a root, even when `diagnostics` is not
/// empty; only evaluate it when it is.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SyntaxTree<'src> {
    diagnostics: Vec<String>,
    root: Expression<'src>,
    end_of_file: Token<'src>,
}

impl<'src> SyntaxTree<'src> {
    pub(super) fn new(
        diagnostics: Vec<String>,
        root: Expression<'src>,
        end_of_file: Token<'src>,
    ) -> Self {
        Self {
            diagnostics,
            root,
            end_of_file,
        }
    }

    pub fn parse(src: &'src str) -> Self {
        Parser::new(src).parse()
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn root(&self) -> &Expression<'src> {
        &self.root
    }

    pub fn root_node(&self) -> Node<'_, 'src> {
        Node::Expression(&self.root)
    }

    pub fn end_of_file(&self) -> &Token<'src> {
        &self.end_of_file
    }
}

#[cfg(test)]
mod test {
    use super::SyntaxTree;
    use crate::syntax::{SyntaxKind, TokenKind};

    #[test]
    fn well_formed_input_has_no_diagnostics() {
        for src in ["1", "1+2*3", "(1+2)*3", " ( ( 4 ) ) / 2 - 1 "] {
            let tree = SyntaxTree::parse(src);
            assert!(!tree.has_errors(), "{src}: {:?}", tree.diagnostics());
            assert_eq!(tree.end_of_file().kind, TokenKind::EndOfFile);
        }
    }

    #[test]
    fn malformed_input_still_produces_a_tree() {
        for src in ["", "+", "1+", "@", "(", ")", "1 2", "((1)"] {
            let tree = SyntaxTree::parse(src);
            assert!(tree.has_errors(), "{src}");
            let _ = tree.root_node().children();
        }
    }

    #[test]
    fn empty_input_reports_missing_number() {
        let tree = SyntaxTree::parse("");

        assert_eq!(
            tree.diagnostics(),
            ["Error: Unexpected token <EndOfFile>, expected <Number>"]
        );
        assert_eq!(tree.root_node().kind(), SyntaxKind::NumberExpression);
    }

    #[test]
    fn trailing_tokens_are_reported() {
        let tree = SyntaxTree::parse("1 2");

        assert_eq!(
            tree.diagnostics(),
            ["Error: Unexpected token <Number>, expected <EndOfFile>"]
        );
        assert!(tree.end_of_file().is_missing());
    }

    #[test]
    fn lexer_diagnostics_come_first() {
        let tree = SyntaxTree::parse("1+#");

        assert_eq!(
            tree.diagnostics(),
            [
                "Error: Bad character input-> #",
                "Error: Unexpected token <EndOfFile>, expected <Number>",
            ]
        );
    }
}
