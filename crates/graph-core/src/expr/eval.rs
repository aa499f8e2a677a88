// File: crates/graph-core/src/expr/eval.rs
// Summary: Tree-walking evaluator over the reals with the free variable bound to one value.

use crate::expr::ast::{BinOp, Expr};
use crate::expr::builtins::{finite, power};
use crate::expr::error::EvalError;

impl Expr {
    /// Evaluate with `x` bound to `x`. Any non-real or non-finite result is an error.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Var => Ok(x),
            Expr::Neg(inner) => Ok(-inner.eval(x)?),
            Expr::Binary { op, lhs, rhs } => {
                let a = lhs.eval(x)?;
                let b = rhs.eval(x)?;
                binary(*op, a, b)
            }
            Expr::Call { func, args } => {
                let values = args.iter().map(|a| a.eval(x)).collect::<Result<Vec<_>, _>>()?;
                func.apply(&values)
            }
        }
    }
}

fn binary(op: BinOp, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        BinOp::Add => finite(a + b),
        BinOp::Sub => finite(a - b),
        BinOp::Mul => finite(a * b),
        BinOp::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            finite(a / b)
        }
        BinOp::Rem => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            finite(floored_rem(a, b))
        }
        BinOp::Pow => power(a, b),
    }
}

/// Remainder taking the sign of the divisor (`-1 % 3 == 2`).
fn floored_rem(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{EvalError, Expression};

    fn eval(src: &str, x: f64) -> Result<f64, EvalError> {
        Expression::parse(src).unwrap().eval(x)
    }

    #[test]
    fn test_polynomial() {
        assert_eq!(eval("x**2 - 3x + 2", 4.0).unwrap(), 6.0);
    }

    #[test]
    fn test_trig_and_constants() {
        assert!((eval("sin(pi/2)", 0.0).unwrap() - 1.0).abs() < 1e-12);
        assert!((eval("cos(x)", 0.0).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("1/x", 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(eval("x % 0", 1.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_log_domain() {
        assert!(matches!(eval("log(x)", 0.0), Err(EvalError::Domain { func: "log", .. })));
        assert!(matches!(eval("ln(x)", -1.0), Err(EvalError::Domain { func: "ln", .. })));
        assert!((eval("log(8, 2)", 0.0).unwrap() - 3.0).abs() < 1e-12);
        assert_eq!(eval("log(x, 1)", 2.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_sqrt_domain() {
        assert!(matches!(eval("sqrt(x)", -0.1), Err(EvalError::Domain { .. })));
        assert_eq!(eval("sqrt(x)", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_power_rules() {
        assert_eq!(eval("0^-1", 0.0), Err(EvalError::DivisionByZero));
        assert!(matches!(eval("x^0.5", -4.0), Err(EvalError::Domain { func: "pow", .. })));
        assert_eq!(eval("x^3", -2.0).unwrap(), -8.0);
        assert_eq!(eval("2^-1", 0.0).unwrap(), 0.5);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(eval("exp(x)", 1000.0), Err(EvalError::Overflow));
    }

    #[test]
    fn test_floored_modulo() {
        assert_eq!(eval("x % 3", -1.0).unwrap(), 2.0);
        assert_eq!(eval("x % -3", 1.0).unwrap(), -2.0);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(eval("round(x)", 2.5).unwrap(), 2.0);
        assert_eq!(eval("round(x)", 3.5).unwrap(), 4.0);
    }

    #[test]
    fn test_min_max_variadic() {
        assert_eq!(eval("max(x, 1, 5)", 3.0).unwrap(), 5.0);
        assert_eq!(eval("min(x, 1)", -3.0).unwrap(), -3.0);
    }
}
