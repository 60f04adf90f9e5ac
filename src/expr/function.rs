//! Compiled callable handed across the solver boundary.
//!
//! [`Function`] owns a parsed [`Expr`] and exposes the evaluation contract
//! the solvers and the presentation layer consume: point evaluation, batch
//! sampling for curve rendering, and symbolic differentiation so Newton
//! never needs a hand-written derivative.

use std::str::FromStr;

use super::ast::Expr;
use super::errors::ParseError;
use super::parse::parse;

/// A compiled expression in the free variable `x`.
///
/// ```
/// use rootviz::expr::Function;
///
/// let f = Function::compile("x^2 - 2").unwrap();
/// assert_eq!(f.eval(2.0), 2.0);
///
/// let df = f.derivative();
/// assert_eq!(df.eval(3.0), 6.0); // d/dx (x^2 - 2) = 2x
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    expr: Expr,
}

impl Function {
    /// Compiles expression text.
    ///
    /// # Errors
    /// Any [`ParseError`]; parsing failures never reach the solvers.
    pub fn compile(text: &str) -> Result<Self, ParseError> {
        Ok(Self { expr: parse(text)? })
    }

    #[must_use]
    pub fn from_expr(expr: Expr) -> Self {
        Self { expr }
    }

    /// Evaluates at a single point. Total: domain violations come back as
    /// NaN/±inf, which the solvers reject as non-finite evaluations.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.expr.eval(x)
    }

    /// Batch evaluation over an ordered sequence of points, for curve
    /// sampling in the presentation layer.
    #[must_use]
    pub fn sample(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    /// Symbolic first derivative, itself a compiled [`Function`].
    #[must_use]
    pub fn derivative(&self) -> Function {
        Self { expr: self.expr.diff() }
    }

    /// Adapter into the solvers' `FnMut(f64) -> f64` contract.
    #[must_use]
    pub fn closure(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.eval(x)
    }

    #[must_use]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl FromStr for Function {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Function::compile(s)
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expr)
    }
}
