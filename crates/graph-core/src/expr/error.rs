// File: crates/graph-core/src/expr/error.rs
// Summary: Parse-time and evaluation-time error types for the expression language.

use thiserror::Error;

/// Rejected before any sampling: the text is not an evaluable formula.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character '{ch}' at {at}")]
    UnexpectedChar { ch: char, at: usize },
    #[error("invalid number '{text}' at {at}")]
    InvalidNumber { text: String, at: usize },
    #[error("unexpected {found} at {at}, expected {expected}")]
    Unexpected { found: String, expected: &'static str, at: usize },
    #[error("unknown name '{name}' at {at} (the only variable is 'x')")]
    UnknownName { name: String, at: usize },
    #[error("unknown function '{name}' at {at}")]
    UnknownFunction { name: String, at: usize },
    #[error("'{name}' is a function and needs arguments, at {at}")]
    MissingCall { name: String, at: usize },
    #[error("{func}() takes {expected} argument(s), got {got}")]
    Arity { func: &'static str, expected: String, got: usize },
    #[error("expression nested deeper than {limit} levels at {at}")]
    TooDeep { limit: usize, at: usize },
}

/// Raised at a single sample when the formula has no real value there.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("math domain error in {func}({arg})")]
    Domain { func: &'static str, arg: f64 },
    #[error("numerical result out of range")]
    Overflow,
    #[error("undefined result")]
    Undefined,
}
