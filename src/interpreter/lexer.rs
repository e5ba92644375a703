use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `3.` or `.5`.
    ///
    /// Exponent notation (`1e10`) is not part of the lexical set, and signs
    /// are never consumed by the literal itself; a leading `-` or `+` belongs
    /// to the unary grammar rule.
    #[regex(r"[0-9]+\.[0-9]*", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Whitespace between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => write!(f, " "),
        }
    }
}

/// Tokenizes a whole expression string.
///
/// Produces every token paired with its byte position in `source`, with
/// whitespace skipped. Lexing is eager: the first unrecognized character
/// aborts the whole request.
///
/// # Parameters
/// - `source`: The raw expression text.
///
/// # Returns
/// The token stream, or [`ParseError::InvalidExpression`] naming the first
/// unrecognized character.
pub fn lex(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::InvalidExpression { token:    slice.to_string(),
                                                       position: lexer.span().start, });
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid literal.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
