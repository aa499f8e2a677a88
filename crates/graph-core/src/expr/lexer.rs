// File: crates/graph-core/src/expr/lexer.rs
// Summary: Tokenizer with implicit-multiplication insertion (`2x`, `3(x+1)`, `(x)(x)`).

use crate::expr::builtins::constant;
use crate::expr::error::ExprError;
use crate::expr::token::{Span, Token, TokenKind};
use crate::expr::VARIABLE;

pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self { source: source.chars().collect(), pos: 0, tokens: Vec::new() }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, ExprError> {
        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }
            let token = self.next_token()?;
            if let Some(prev) = self.tokens.last() {
                if prev.kind.can_end_implicit_mul() && token.kind.can_start_implicit_mul() {
                    // `sin(` is a call, `x(` and `pi(` are products
                    let is_call = matches!(&prev.kind, TokenKind::Ident(name) if !is_value_name(name))
                        && token.kind == TokenKind::LParen;
                    if !is_call {
                        let span = Span::new(prev.span.end, token.span.start);
                        self.tokens.push(Token::new(TokenKind::Star, span));
                    }
                }
            }
            self.tokens.push(token);
        }
        self.tokens.push(Token::new(TokenKind::Eof, Span::new(self.pos, self.pos)));
        Ok(self.tokens)
    }

    fn next_token(&mut self) -> Result<Token, ExprError> {
        let start = self.pos;
        let ch = self.advance();
        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' | '\u{2212}' => TokenKind::Minus,
            '*' | '\u{00D7}' | '\u{22C5}' => {
                if ch == '*' && self.peek() == Some('*') {
                    self.advance();
                    TokenKind::Caret
                } else {
                    TokenKind::Star
                }
            }
            '/' | '\u{00F7}' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            c if c.is_ascii_digit() || c == '.' => return self.read_number(start),
            c if is_ident_start(c) => return Ok(self.read_identifier(start)),
            _ => return Err(ExprError::UnexpectedChar { ch, at: start }),
        };
        Ok(Token::new(kind, Span::new(start, self.pos)))
    }

    fn read_number(&mut self, start: usize) -> Result<Token, ExprError> {
        self.eat_digits();
        if self.source[start] != '.' && self.peek() == Some('.') {
            self.advance();
            self.eat_digits();
        }
        // exponent only when digits follow; `2e` is 2 * e
        if matches!(self.peek(), Some('e' | 'E')) {
            let signed = matches!(self.peek_at(1), Some('+' | '-'));
            let digit_at = if signed { 2 } else { 1 };
            if self.peek_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..digit_at {
                    self.advance();
                }
                self.eat_digits();
            }
        }

        if self.peek() == Some('.') {
            self.advance();
            self.eat_digits();
            let text: String = self.source[start..self.pos].iter().collect();
            return Err(ExprError::InvalidNumber { text, at: start });
        }

        let text: String = self.source[start..self.pos].iter().collect();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                Ok(Token::new(TokenKind::Number(value), Span::new(start, self.pos)))
            }
            _ => Err(ExprError::InvalidNumber { text, at: start }),
        }
    }

    fn read_identifier(&mut self, start: usize) -> Token {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }
        let name: String = self.source[start..self.pos].iter().collect();
        Token::new(TokenKind::Ident(name), Span::new(start, self.pos))
    }

    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.pos];
        self.pos += 1;
        c
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.source.get(self.pos + offset).copied()
    }
}

fn is_value_name(name: &str) -> bool {
    name == VARIABLE || constant(name).is_some()
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_double_star_is_power() {
        assert_eq!(
            kinds("x**2"),
            vec![TokenKind::Ident("x".into()), TokenKind::Caret, TokenKind::Number(2.0), TokenKind::Eof]
        );
    }

    #[test]
    fn test_implicit_mul_number_ident() {
        assert_eq!(
            kinds("2x"),
            vec![TokenKind::Number(2.0), TokenKind::Star, TokenKind::Ident("x".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_no_implicit_mul_before_call() {
        let k = kinds("sin(x)");
        assert_eq!(k[1], TokenKind::LParen);
    }

    #[test]
    fn test_implicit_mul_variable_paren() {
        let k = kinds("x(x+1)");
        assert_eq!(k[1], TokenKind::Star);
    }

    #[test]
    fn test_exponent_and_constant_e() {
        assert_eq!(kinds("1e-3")[0], TokenKind::Number(1e-3));
        assert_eq!(
            kinds("2e"),
            vec![TokenKind::Number(2.0), TokenKind::Star, TokenKind::Ident("e".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_leading_dot() {
        assert_eq!(kinds(".5")[0], TokenKind::Number(0.5));
    }

    #[test]
    fn test_rejects_unknown_char() {
        let err = Lexer::new("x $ 2").tokenize().unwrap_err();
        assert_eq!(err, ExprError::UnexpectedChar { ch: '$', at: 2 });
    }

    #[test]
    fn test_lone_dot_is_invalid_number() {
        assert!(matches!(Lexer::new(".").tokenize(), Err(ExprError::InvalidNumber { .. })));
    }
}
