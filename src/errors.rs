use crate::Symbol;

/// An error raised by the reader while turning tokens into expressions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("unexpected `)`")]
    UnexpectedCloseParen,
}

/// An error that occurred while evaluating some lisp code.
///
/// All variants propagate through the evaluator by `Result`; the `try`
/// special form is the single place where they are caught.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("undefined symbol: {0}")]
    UnboundSymbol(Symbol),
    #[error("malformed `{form}` form: {detail}")]
    MalformedSpecialForm { form: &'static str, detail: String },
    #[error("{0} is not callable")]
    NotCallable(String),
    #[error("{0}")]
    ArityMismatch(String),
}
