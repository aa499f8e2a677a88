// File: crates/graph-core/src/expr/builtins.rs
// Summary: Closed table of math functions and constants available to expressions.

use std::f64::consts;

use crate::expr::error::EvalError;

/// Named constants resolved at parse time.
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" | "π" => Some(consts::PI),
        "e" => Some(consts::E),
        "tau" => Some(consts::TAU),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    Between(usize, usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, n: usize) -> bool {
        match self {
            Arity::Exactly(k) => n == k,
            Arity::Between(lo, hi) => (lo..=hi).contains(&n),
            Arity::AtLeast(lo) => n >= lo,
        }
    }

    pub fn describe(self) -> String {
        match self {
            Arity::Exactly(k) => k.to_string(),
            Arity::Between(lo, hi) => format!("{lo} to {hi}"),
            Arity::AtLeast(lo) => format!("at least {lo}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Atan2,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Exp,
    Ln,
    Log,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Abs,
    Floor,
    Ceil,
    Trunc,
    Round,
    Degrees,
    Radians,
    Pow,
    Hypot,
    Fmod,
    Min,
    Max,
}

const TABLE: &[(&str, Function)] = &[
    ("sin", Function::Sin),
    ("cos", Function::Cos),
    ("tan", Function::Tan),
    ("asin", Function::Asin),
    ("acos", Function::Acos),
    ("atan", Function::Atan),
    ("atan2", Function::Atan2),
    ("sinh", Function::Sinh),
    ("cosh", Function::Cosh),
    ("tanh", Function::Tanh),
    ("asinh", Function::Asinh),
    ("acosh", Function::Acosh),
    ("atanh", Function::Atanh),
    ("exp", Function::Exp),
    ("ln", Function::Ln),
    ("log", Function::Log),
    ("log10", Function::Log10),
    ("log2", Function::Log2),
    ("sqrt", Function::Sqrt),
    ("cbrt", Function::Cbrt),
    ("abs", Function::Abs),
    ("fabs", Function::Abs),
    ("floor", Function::Floor),
    ("ceil", Function::Ceil),
    ("trunc", Function::Trunc),
    ("round", Function::Round),
    ("degrees", Function::Degrees),
    ("radians", Function::Radians),
    ("pow", Function::Pow),
    ("hypot", Function::Hypot),
    ("fmod", Function::Fmod),
    ("min", Function::Min),
    ("max", Function::Max),
];

impl Function {
    pub fn lookup(name: &str) -> Option<Function> {
        TABLE.iter().find(|(n, _)| *n == name).map(|&(_, f)| f)
    }

    pub fn name(self) -> &'static str {
        TABLE.iter().find(|(_, f)| *f == self).map(|(n, _)| *n).unwrap_or("?")
    }

    pub fn arity(self) -> Arity {
        use Function::*;
        match self {
            Atan2 | Pow | Hypot | Fmod => Arity::Exactly(2),
            Log => Arity::Between(1, 2),
            Min | Max => Arity::AtLeast(2),
            _ => Arity::Exactly(1),
        }
    }

    /// Apply to already-evaluated arguments. Arity was checked at parse time.
    pub fn apply(self, args: &[f64]) -> Result<f64, EvalError> {
        use Function::*;
        let a = args[0];
        let value = match self {
            Sin => a.sin(),
            Cos => a.cos(),
            Tan => a.tan(),
            Asin => in_range(self, a, -1.0, 1.0)?.asin(),
            Acos => in_range(self, a, -1.0, 1.0)?.acos(),
            Atan => a.atan(),
            Atan2 => a.atan2(args[1]),
            Sinh => a.sinh(),
            Cosh => a.cosh(),
            Tanh => a.tanh(),
            Asinh => a.asinh(),
            Acosh => {
                if a < 1.0 {
                    return Err(domain(self, a));
                }
                a.acosh()
            }
            Atanh => {
                if a <= -1.0 || a >= 1.0 {
                    return Err(domain(self, a));
                }
                a.atanh()
            }
            Exp => a.exp(),
            Ln => positive(self, a)?.ln(),
            Log => match args.get(1) {
                None => positive(self, a)?.ln(),
                Some(&base) => {
                    let num = positive(self, a)?.ln();
                    let den = positive(self, base)?.ln();
                    if den == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    num / den
                }
            },
            Log10 => positive(self, a)?.log10(),
            Log2 => positive(self, a)?.log2(),
            Sqrt => {
                if a < 0.0 {
                    return Err(domain(self, a));
                }
                a.sqrt()
            }
            Cbrt => a.cbrt(),
            Abs => a.abs(),
            Floor => a.floor(),
            Ceil => a.ceil(),
            Trunc => a.trunc(),
            Round => a.round_ties_even(),
            Degrees => a.to_degrees(),
            Radians => a.to_radians(),
            Pow => return power(a, args[1]),
            Hypot => a.hypot(args[1]),
            Fmod => {
                if args[1] == 0.0 {
                    return Err(domain(self, a));
                }
                a % args[1]
            }
            Min => args.iter().copied().fold(f64::INFINITY, f64::min),
            Max => args.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        };
        finite(value)
    }
}

/// `base ^ exp` over the reals.
pub fn power(base: f64, exp: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exp < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    if base < 0.0 && exp.fract() != 0.0 {
        // complex result
        return Err(EvalError::Domain { func: "pow", arg: base });
    }
    finite(base.powf(exp))
}

/// Reject NaN and infinities produced from finite inputs.
#[inline]
pub fn finite(v: f64) -> Result<f64, EvalError> {
    if v.is_nan() {
        Err(EvalError::Undefined)
    } else if v.is_infinite() {
        Err(EvalError::Overflow)
    } else {
        Ok(v)
    }
}

fn domain(f: Function, arg: f64) -> EvalError {
    EvalError::Domain { func: f.name(), arg }
}

fn positive(f: Function, a: f64) -> Result<f64, EvalError> {
    if a <= 0.0 {
        Err(domain(f, a))
    } else {
        Ok(a)
    }
}

fn in_range(f: Function, a: f64, lo: f64, hi: f64) -> Result<f64, EvalError> {
    if a < lo || a > hi {
        Err(domain(f, a))
    } else {
        Ok(a)
    }
}
