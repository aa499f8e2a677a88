// File: crates/graph-core/src/expr/ast.rs
// Summary: Expression tree over one free variable; names are resolved during parsing.

use crate::expr::builtins::Function;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal or resolved constant (`2.5`, `pi`).
    Number(f64),
    /// The free variable `x`.
    Var,
    /// Unary minus.
    Neg(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        func: Function,
        args: Vec<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl Expr {
    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }
}
