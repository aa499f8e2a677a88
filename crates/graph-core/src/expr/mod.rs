// File: crates/graph-core/src/expr/mod.rs
// Summary: Restricted expression language: one free variable, a closed set of operators and math functions.
// Notes:
// - User text is parsed into a tree and evaluated; it is never executed as code.
// - Every name is resolved at parse time, so evaluation cannot hit an unbound name.

pub mod ast;
pub mod builtins;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod token;

use std::fmt;
use std::str::FromStr;

pub use ast::{BinOp, Expr};
pub use builtins::Function;
pub use error::{EvalError, ExprError};

use lexer::Lexer;
use parser::Parser;

/// Name of the free variable (the x-axis variable).
pub const VARIABLE: &str = "x";

/// A parsed, caller-validated formula `y = f(x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Expr,
}

impl Expression {
    pub fn parse(source: &str) -> Result<Self, ExprError> {
        let tokens = Lexer::new(source).tokenize()?;
        let root = Parser::new(tokens).parse()?;
        Ok(Self { source: source.trim().to_string(), root })
    }

    /// Evaluate `f(x)`.
    #[inline]
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.root.eval(x)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Expr {
        &self.root
    }
}

impl FromStr for Expression {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
