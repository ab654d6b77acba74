use std::fmt::{self, Write};

use ella_calc::Node;

pub(crate) fn tree_to_string(node: Node) -> String {
    let mut buf = String::new();
    write_tree(&mut buf, node).expect("Failed to render tree. (Writing to a String never fails)");
    buf
}

/// Prints `root` depth first without recursing, so left-deep operator
/// chains of any length render.
pub(crate) fn write_tree(out: &mut impl Write, root: Node) -> fmt::Result {
    // Every pending node's indent is a prefix of `indent` when it is popped.
    let mut indent = String::new();
    let mut pending = vec![(root, 0, true)];

    while let Some((node, indent_len, is_last)) = pending.pop() {
        indent.truncate(indent_len);

        let marker = if is_last { "└──" } else { "├──" };
        write!(out, "{indent}{marker}{}", node.kind())?;
        if let Some(value) = node.value() {
            write!(out, " {value}")?;
        }
        writeln!(out)?;

        indent.push_str(if is_last { "    " } else { "│   " });
        let children = node.children();
        let last = children.len().saturating_sub(1);
        for (i, child) in children.into_iter().enumerate().rev() {
            pending.push((child, indent.len(), i == last));
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use ella_calc::SyntaxTree;

    use super::tree_to_string;

    #[test]
    fn renders_binary_tree() {
        let tree = SyntaxTree::parse("1+2");
        let expected = "\
└──BinaryExpression
    ├──NumberExpression
    │   └──NumberToken 1
    ├──PlusToken
    └──NumberExpression
        └──NumberToken 2
";
        assert_eq!(tree_to_string(tree.root_node()), expected);
    }

    #[test]
    fn renders_grouping() {
        let tree = SyntaxTree::parse("(7)");
        let expected = "\
└──ParenthesizedExpression
    ├──OpenParenToken
    ├──NumberExpression
    │   └──NumberToken 7
    └──CloseParenToken
";
        assert_eq!(tree_to_string(tree.root_node()), expected);
    }

    #[test]
    fn renders_long_chain() {
        let src = format!("1{}", "+1".repeat(2_000));
        let tree = SyntaxTree::parse(&src);
        let rendered = tree_to_string(tree.root_node());

        // Binary node and operator per fold, two lines per number.
        assert_eq!(rendered.lines().count(), 2_000 * 2 + 2_001 * 2);
        assert!(rendered.starts_with("└──BinaryExpression\n    ├──BinaryExpression\n"));
        assert!(rendered.ends_with("    └──NumberExpression\n        └──NumberToken 1\n"));
    }
}
