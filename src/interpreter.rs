/// The evaluator walks a finished tree and computes its numeric result.
///
/// Evaluation is a plain recursive descent over the tree with no external
/// state. It performs the arithmetic for every operator and reports runtime
/// errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer reads the raw expression text and produces a stream of tokens,
/// each corresponding to a numeric literal, an operator character or a
/// parenthesis. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte positions.
/// - Handles decimal numeric literals in all their lexical forms.
/// - Surfaces unrecognized characters so parsing can fail fast.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a tree that directly encodes operator precedence and associativity:
/// tighter operators sit deeper, and repeated same-level operators fold
/// leftward.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Node`] trees.
/// - Enforces the precedence hierarchy and parenthesis matching.
/// - Rejects trailing input after a complete expression.
pub mod parser;
/// The printer renders a tree as indented, human-readable text.
///
/// Printing is a read-only pre-order walk; it never affects evaluation and
/// rendering the same tree twice yields identical output.
pub mod printer;
