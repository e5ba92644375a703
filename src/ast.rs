/// Represents the operator stored in an [`Node::Operator`] node.
///
/// Covers the five binary arithmetic operators together with the two unary
/// sign operators. Unary operators occupy the same node shape as binary ones,
/// except that their left child is absent.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperatorKind {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Unary minus (`-x`)
    Negate,
    /// Unary plus (`+x`)
    Identity,
}

impl OperatorKind {
    /// Returns `true` for the unary sign operators.
    ///
    /// Unary operator nodes carry no left child; everything else must have
    /// both children present.
    ///
    /// ## Example
    /// ```
    /// use treeval::ast::OperatorKind;
    ///
    /// assert!(OperatorKind::Negate.is_unary());
    /// assert!(!OperatorKind::Add.is_unary());
    /// ```
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Negate | Self::Identity)
    }
}

/// A node of the expression tree built by the parser.
///
/// `Node` is a closed sum type with exactly two variants: a leaf holding a
/// numeric value, and an interior operator node owning its children. Each
/// child is exclusively owned by its parent, so a tree is finite, acyclic and
/// has a single root. Trees are immutable once the parser returns them;
/// printing and evaluation only borrow the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A leaf holding one literal numeric value.
    Operand {
        /// The literal value.
        value: f64,
    },
    /// An interior node holding an operator and its operand subtrees.
    Operator {
        /// The operator applied to the children.
        op:    OperatorKind,
        /// Left operand; `None` only for unary operators.
        left:  Option<Box<Node>>,
        /// Right operand, always present.
        right: Box<Node>,
    },
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Negate => "u-",
            Self::Identity => "u+",
        };
        write!(f, "{operator}")
    }
}
