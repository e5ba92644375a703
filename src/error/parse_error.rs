#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character or token that cannot start an operand.
    InvalidExpression {
        /// The offending token, as spelled in the source.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// An opening parenthesis `(` was never closed.
    MismatchedParentheses {
        /// Byte offset of the unclosed `(`.
        position: usize,
    },
    /// Reached the end of input where an operand was expected.
    UnexpectedEndOfInput,
    /// Found leftover tokens after a complete expression.
    TrailingInput {
        /// The first leftover token.
        token:    String,
        /// Byte offset of the leftover token.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression { token, position } => {
                write!(f, "Invalid expression: unexpected '{token}' at position {position}.")
            },

            Self::MismatchedParentheses { position } => write!(f,
                                                               "Mismatched parentheses: '(' at position {position} is never closed."),

            Self::UnexpectedEndOfInput => {
                write!(f, "Unexpected end of input; an operand was expected.")
            },

            Self::TrailingInput { token, position } => write!(f,
                                                              "Trailing input: unexpected '{token}' at position {position} after a complete expression."),
        }
    }
}

impl std::error::Error for ParseError {}
