use crate::{
    ast::{Node, OperatorKind},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

impl Node {
    /// Evaluates the tree rooted at `self` and returns its numeric value.
    ///
    /// Evaluation is a recursive walk with no external state and never
    /// mutates the tree. An operand node yields its stored value. An operator
    /// node evaluates its right subtree always and its left subtree when
    /// present; an absent left child (unary operators only) contributes
    /// `0.0`. Exponentiation follows IEEE-754 `powf` semantics, including NaN
    /// results for combinations such as a negative base with a non-integer
    /// exponent.
    ///
    /// # Returns
    /// The computed value wrapped in `EvalResult`.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when the right operand of a division
    /// evaluates to exactly zero.
    ///
    /// # Example
    /// ```
    /// use treeval::ast::{Node, OperatorKind};
    ///
    /// let tree = Node::Operator { op:    OperatorKind::Mul,
    ///                             left:  Some(Box::new(Node::Operand { value: 1.5 })),
    ///                             right: Box::new(Node::Operand { value: 2.0 }), };
    ///
    /// assert_eq!(tree.evaluate().unwrap(), 3.0);
    /// ```
    pub fn evaluate(&self) -> EvalResult<f64> {
        match self {
            Self::Operand { value } => Ok(*value),
            Self::Operator { op, left, right } => {
                let left_value = match left {
                    Some(node) => node.evaluate()?,
                    None => {
                        // Only unary operators may lack a left child.
                        debug_assert!(op.is_unary());
                        0.0
                    },
                };
                let right_value = right.evaluate()?;

                match op {
                    OperatorKind::Add => Ok(left_value + right_value),
                    OperatorKind::Sub => Ok(left_value - right_value),
                    OperatorKind::Mul => Ok(left_value * right_value),
                    OperatorKind::Div => {
                        if right_value == 0.0 {
                            Err(EvalError::DivisionByZero)
                        } else {
                            Ok(left_value / right_value)
                        }
                    },
                    OperatorKind::Pow => Ok(left_value.powf(right_value)),
                    OperatorKind::Negate => Ok(-right_value),
                    OperatorKind::Identity => Ok(right_value),
                }
            },
        }
    }
}
