use crate::ast::Node;

impl Node {
    /// Renders the tree as indented multi-line text.
    ///
    /// The output is a pre-order dump: the node kind and its value or
    /// operator first, then the left subtree, then the right subtree, each
    /// level indented by two further spaces. An absent left child renders as
    /// a `(none)` placeholder. Rendering is a pure function of the tree, so
    /// rendering twice produces identical output.
    ///
    /// # Example
    /// ```
    /// use treeval::ast::{Node, OperatorKind};
    ///
    /// let tree = Node::Operator { op:    OperatorKind::Add,
    ///                             left:  Some(Box::new(Node::Operand { value: 2.0 })),
    ///                             right: Box::new(Node::Operand { value: 3.0 }), };
    ///
    /// assert_eq!(tree.render(), "Operator: +\nLeft:\n  Operand: 2\nRight:\n  Operand: 3\n");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn fmt_with_indent(&self, f: &mut std::fmt::Formatter<'_>, indent: &str) -> std::fmt::Result {
        match self {
            Self::Operand { value } => writeln!(f, "{indent}Operand: {value}"),
            Self::Operator { op, left, right } => {
                let deeper = format!("{indent}  ");

                writeln!(f, "{indent}Operator: {op}")?;
                writeln!(f, "{indent}Left:")?;
                match left {
                    Some(node) => node.fmt_with_indent(f, &deeper)?,
                    None => writeln!(f, "{deeper}(none)")?,
                }
                writeln!(f, "{indent}Right:")?;
                right.fmt_with_indent(f, &deeper)
            },
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_with_indent(f, "")
    }
}
