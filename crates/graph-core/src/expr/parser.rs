// File: crates/graph-core/src/expr/parser.rs
// Summary: Pratt parser producing a resolved expression tree; rejects unknown names and bad arity.

use crate::expr::ast::{BinOp, Expr};
use crate::expr::builtins::{constant, Function};
use crate::expr::error::ExprError;
use crate::expr::token::{Token, TokenKind};
use crate::expr::VARIABLE;

/// Binding power of prefix `-`/`+`: tighter than `*`, looser than `^`.
const PREFIX_BP: u8 = 13;

/// Limit on both parser recursion and tree height; evaluation recurses once per level.
pub const MAX_DEPTH: usize = 256;

/// Subtree with its height, so chains like `x+x+...` are bounded without recursing.
struct Parsed {
    expr: Expr,
    height: usize,
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0, depth: 0 }
    }

    /// Parse the whole token stream as a single expression.
    pub fn parse(mut self) -> Result<Expr, ExprError> {
        if self.peek_kind() == &TokenKind::Eof {
            return Err(ExprError::Empty);
        }
        let parsed = self.parse_expr(0)?;
        if self.peek_kind() != &TokenKind::Eof {
            return Err(self.unexpected("an operator or end of input"));
        }
        Ok(parsed.expr)
    }

    fn parse_expr(&mut self, min_bp: u8) -> Result<Parsed, ExprError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(self.too_deep());
        }
        let mut lhs = self.parse_prefix()?;

        loop {
            let (op, left_bp, right_bp) = match self.peek_kind() {
                TokenKind::Plus => (BinOp::Add, 9, 10),
                TokenKind::Minus => (BinOp::Sub, 9, 10),
                TokenKind::Star => (BinOp::Mul, 11, 12),
                TokenKind::Slash => (BinOp::Div, 11, 12),
                TokenKind::Percent => (BinOp::Rem, 11, 12),
                TokenKind::Caret => (BinOp::Pow, 16, 15), // right-associative
                _ => break,
            };
            if left_bp < min_bp {
                break;
            }
            self.advance();
            let rhs = self.parse_expr(right_bp)?;
            let height = lhs.height.max(rhs.height) + 1;
            lhs = self.node(Expr::binary(op, lhs.expr, rhs.expr), height)?;
        }

        self.depth -= 1;
        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<Parsed, ExprError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Number(n) => Ok(Parsed { expr: Expr::Number(n), height: 1 }),
            TokenKind::Minus => {
                let inner = self.parse_expr(PREFIX_BP)?;
                self.node(Expr::Neg(Box::new(inner.expr)), inner.height + 1)
            }
            TokenKind::Plus => self.parse_expr(PREFIX_BP),
            TokenKind::LParen => {
                let inner = self.parse_expr(0)?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            TokenKind::Ident(name) => {
                let at = token.span.start;
                if let Some(func) = Function::lookup(&name) {
                    if self.peek_kind() != &TokenKind::LParen {
                        return Err(ExprError::MissingCall { name, at });
                    }
                    return self.parse_call(func);
                }
                if name == VARIABLE {
                    return Ok(Parsed { expr: Expr::Var, height: 1 });
                }
                if let Some(value) = constant(&name) {
                    return Ok(Parsed { expr: Expr::Number(value), height: 1 });
                }
                if self.peek_kind() == &TokenKind::LParen {
                    return Err(ExprError::UnknownFunction { name, at });
                }
                Err(ExprError::UnknownName { name, at })
            }
            other => Err(ExprError::Unexpected {
                found: other.describe(),
                expected: "a number, 'x', a function or '('",
                at: token.span.start,
            }),
        }
    }

    fn parse_call(&mut self, func: Function) -> Result<Parsed, ExprError> {
        self.expect(TokenKind::LParen, "'('")?;
        let mut args = Vec::new();
        let mut height = 0;
        if self.peek_kind() != &TokenKind::RParen {
            loop {
                let arg = self.parse_expr(0)?;
                height = height.max(arg.height);
                args.push(arg.expr);
                if self.peek_kind() == &TokenKind::Comma {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "')' or ','")?;

        let arity = func.arity();
        if !arity.accepts(args.len()) {
            return Err(ExprError::Arity { func: func.name(), expected: arity.describe(), got: args.len() });
        }
        self.node(Expr::Call { func, args }, height + 1)
    }

    fn node(&self, expr: Expr, height: usize) -> Result<Parsed, ExprError> {
        if height > MAX_DEPTH {
            return Err(self.too_deep());
        }
        Ok(Parsed { expr, height })
    }

    fn too_deep(&self) -> ExprError {
        ExprError::TooDeep { limit: MAX_DEPTH, at: self.peek().span.start }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), ExprError> {
        if self.peek_kind() == &kind {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &'static str) -> ExprError {
        let token = self.peek();
        ExprError::Unexpected { found: token.kind.describe(), expected, at: token.span.start }
    }

    fn peek(&self) -> &Token {
        // the stream always ends with Eof
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }
}
