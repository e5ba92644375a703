use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one complete expression from a token slice.
///
/// This is the top-level entry point used by callers that hold a fully lexed
/// expression. It parses a single expression and then requires the token
/// stream to be exhausted: leftover tokens after a complete expression are an
/// error rather than being silently ignored.
///
/// # Parameters
/// - `tokens`: Tokens paired with their byte positions in the source.
///
/// # Returns
/// The root of the expression tree.
///
/// # Errors
/// Any error from expression parsing, or [`ParseError::TrailingInput`] when
/// tokens remain after the expression ends.
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Node> {
    let mut iter = tokens.iter().peekable();
    let root = parse_expression(&mut iter)?;

    if let Some((token, position)) = iter.peek() {
        return Err(ParseError::TrailingInput { token:    token.to_string(),
                                               position: *position, });
    }

    Ok(root)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
///
/// # Returns
/// The parsed expression tree.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}
