use std::cell::RefCell;

use treeval::{
    ast::Node,
    evaluate_expression,
    interpreter::{lexer::lex, parser::core::parse},
    report::{Level, MessageSink},
};

struct NullSink;

impl MessageSink for NullSink {
    fn log(&self, _level: Level, _message: &str) {}
}

struct RecordingSink {
    messages: RefCell<Vec<(Level, String)>>,
}

impl RecordingSink {
    fn new() -> Self {
        Self { messages: RefCell::new(Vec::new()) }
    }
}

impl MessageSink for RecordingSink {
    fn log(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

fn eval(src: &str) -> f64 {
    evaluate_expression(src, &NullSink).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

fn assert_failure(src: &str, fragment: &str) {
    match evaluate_expression(src, &NullSink) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(fragment),
                    "'{src}' failed with '{message}', expected it to mention '{fragment}'");
        },
    }
}

fn parse_tree(src: &str) -> Node {
    let tokens = lex(src).expect("lexing failed");
    parse(&tokens).expect("parsing failed")
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval("1+2"), 3.0);
    assert_eq!(eval("7*9"), 63.0);
    assert_eq!(eval("8-5"), 3.0);
    assert_eq!(eval("10/2"), 5.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval("2+3*4"), 14.0);
    assert_eq!(eval("2*3+4"), 10.0);
    assert_eq!(eval("10-4/2"), 8.0);
    assert_eq!(eval("2+12/4-1"), 4.0);
}

#[test]
fn equal_precedence_folds_left() {
    assert_eq!(eval("10-4-3"), 3.0);
    assert_eq!(eval("16/4/2"), 2.0);
    assert_eq!(eval("2-3+4"), 3.0);
    assert_eq!(eval("100/10*2"), 20.0);
}

#[test]
fn exponent_binds_tighter_and_folds_left() {
    assert_eq!(eval("2^3^2"), 64.0);
    assert_eq!(eval("2*3^2"), 18.0);
    assert_eq!(eval("2^3*3"), 24.0);
    assert_eq!(eval("1+2^2"), 5.0);
}

#[test]
fn unary_signs_bind_tighter_than_any_binary_operator() {
    assert_eq!(eval("-5"), -5.0);
    assert_eq!(eval("+5"), 5.0);
    assert_eq!(eval("--5"), 5.0);
    assert_eq!(eval("-+5"), -5.0);
    assert_eq!(eval("3--2"), 5.0);
    assert_eq!(eval("-2^2"), 4.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval("(2+3)*4"), 20.0);
    assert_eq!(eval("2*(3+4)"), 14.0);
    assert_eq!(eval("((1+2))"), 3.0);
    assert_eq!(eval("(2+3)^2"), 25.0);
    assert_eq!(eval("-(2+3)"), -5.0);
}

#[test]
fn numeric_literal_forms() {
    assert_eq!(eval(".5"), 0.5);
    assert_eq!(eval("3."), 3.0);
    assert_eq!(eval("3.25*4"), 13.0);
    assert_eq!(eval("0.125*8"), 1.0);
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    assert_eq!(eval("2   +   3"), 5.0);
    assert_eq!(eval(" ( 2 + 3 ) * 4 "), 20.0);
}

#[test]
fn exponentiation_follows_ieee_pow() {
    assert_eq!(eval("4^0.5"), 2.0);
    assert_eq!(eval("2^-1"), 0.5);
    assert!(eval("(0-2)^0.5").is_nan());
    assert!(eval("-2^0.5").is_nan());
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("5/0", "Division by zero");
    assert_failure("1/(2-2)", "Division by zero");
}

#[test]
fn mismatched_parentheses_is_error() {
    assert_failure("(2+3", "Mismatched parentheses");
    assert_failure("((1)", "Mismatched parentheses");
}

#[test]
fn invalid_leading_character_is_error() {
    assert_failure("@5", "Invalid expression");
    assert_failure("2+$1", "Invalid expression");
    assert_failure("*3", "Invalid expression");
    assert_failure(")", "Invalid expression");
}

#[test]
fn truncated_input_is_error() {
    assert_failure("", "end of input");
    assert_failure("2+", "end of input");
    assert_failure("2^", "end of input");
}

#[test]
fn trailing_input_is_error() {
    assert_failure("2+3)", "Trailing input");
    assert_failure("1 2", "Trailing input");
}

#[test]
fn tree_dump_has_preorder_shape() {
    let tree = parse_tree("2+3");
    assert_eq!(tree.render(),
               "Operator: +\nLeft:\n  Operand: 2\nRight:\n  Operand: 3\n");
}

#[test]
fn tree_dump_indents_nested_subtrees() {
    let tree = parse_tree("(1+2)*3");
    let expected = "Operator: *\n\
                    Left:\n  \
                    Operator: +\n  \
                    Left:\n    \
                    Operand: 1\n  \
                    Right:\n    \
                    Operand: 2\n\
                    Right:\n  \
                    Operand: 3\n";
    assert_eq!(tree.render(), expected);
}

#[test]
fn absent_left_child_renders_placeholder() {
    let tree = parse_tree("-5");
    assert_eq!(tree.render(),
               "Operator: u-\nLeft:\n  (none)\nRight:\n  Operand: 5\n");
}

#[test]
fn rendering_is_idempotent() {
    let tree = parse_tree("1+2*3^2");
    assert_eq!(tree.render(), tree.render());
}

#[test]
fn sink_receives_the_tree_dump() {
    let sink = RecordingSink::new();
    let value = evaluate_expression("2+3", &sink).expect("evaluation failed");

    assert_eq!(value, 5.0);
    let messages = sink.messages.borrow();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, Level::Debug);
    assert_eq!(messages[0].1, parse_tree("2+3").render());
}

#[test]
fn failed_parse_emits_no_tree_dump() {
    let sink = RecordingSink::new();
    assert!(evaluate_expression("(2", &sink).is_err());
    assert!(sink.messages.borrow().is_empty());
}
