//! Recursive-descent parser for expressions in one free variable.
//!
//! Grammar, loosest-binding first:
//!
//! ```text
//! expr   := term  (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := '-' unary | power
//! power  := atom ('^' unary)?            // right-associative
//! atom   := NUMBER | 'x' | 'pi' | 'e'
//!         | FUNC '(' expr ')'
//!         | '(' expr ')'
//! ```
//!
//! `-x^2` parses as `-(x^2)` and `2^3^2` as `2^(3^2)`, the conventional
//! readings.

use super::ast::{Expr, Func};
use super::errors::ParseError;
use super::token::{tokenize, Token};

/// Parses expression text into an [`Expr`].
///
/// # Errors
/// Any [`ParseError`]: empty input, unexpected character/token, unbalanced
/// parentheses, unknown identifier or function, trailing input.
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expr()?;

    match parser.peek() {
        None => Ok(expr),
        Some(tok) => Err(ParseError::TrailingInput { found: tok.to_string() }),
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.term()?;
        loop {
            if self.eat(&Token::Plus) {
                let rhs = self.term()?;
                lhs = Expr::add(lhs, rhs);
            } else if self.eat(&Token::Minus) {
                let rhs = self.term()?;
                lhs = Expr::sub(lhs, rhs);
            } else {
                return Ok(lhs);
            }
        }
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            if self.eat(&Token::Star) {
                let rhs = self.unary()?;
                lhs = Expr::mul(lhs, rhs);
            } else if self.eat(&Token::Slash) {
                let rhs = self.unary()?;
                lhs = Expr::div(lhs, rhs);
            } else {
                return Ok(lhs);
            }
        }
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&Token::Minus) {
            Ok(Expr::neg(self.unary()?))
        } else {
            self.power()
        }
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.atom()?;
        if self.eat(&Token::Caret) {
            // right-associative; unary on the right allows 2^-3
            let exponent = self.unary()?;
            Ok(Expr::pow(base, exponent))
        } else {
            Ok(base)
        }
    }

    fn atom(&mut self) -> Result<Expr, ParseError> {
        match self.advance() {
            None => Err(ParseError::UnexpectedEnd),

            Some(Token::Number(v)) => Ok(Expr::Num(v)),

            Some(Token::LParen) => {
                let inner = self.expr()?;
                if self.eat(&Token::RParen) {
                    Ok(inner)
                } else {
                    Err(ParseError::MissingParen)
                }
            }

            Some(Token::Ident(name)) => {
                if self.eat(&Token::LParen) {
                    let func = Func::from_name(&name)
                        .ok_or(ParseError::UnknownFunction { name })?;
                    let arg = self.expr()?;
                    if self.eat(&Token::RParen) {
                        Ok(Expr::call(func, arg))
                    } else {
                        Err(ParseError::MissingParen)
                    }
                } else {
                    match name.as_str() {
                        "x"  => Ok(Expr::Var),
                        "pi" => Ok(Expr::Num(std::f64::consts::PI)),
                        "e"  => Ok(Expr::Num(std::f64::consts::E)),
                        _    => Err(ParseError::UnknownIdentifier { name }),
                    }
                }
            }

            Some(tok) => Err(ParseError::UnexpectedToken { found: tok.to_string() }),
        }
    }
}
