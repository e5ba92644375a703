#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can be raised while evaluating a tree.
pub enum EvalError {
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
        }
    }
}

impl std::error::Error for EvalError {}
