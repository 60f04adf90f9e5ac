//! Expression tree: evaluation, symbolic differentiation, display.
//!
//! [`Expr`] models an expression in the single free variable `x`. Smart
//! constructors ([`Expr::add`], [`Expr::mul`], ...) fold constants as trees
//! are built, so derivatives come out readable instead of littered with
//! `* 1` and `+ 0` noise.

/// Unary functions the parser and differentiator understand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Sqrt,
    Abs,
}

impl Func {
    /// Maps a source-text name to a function. `log` is accepted as the
    /// natural logarithm, matching the usual CAS convention.
    pub(crate) fn from_name(name: &str) -> Option<Func> {
        Some(match name {
            "sin"        => Func::Sin,
            "cos"        => Func::Cos,
            "tan"        => Func::Tan,
            "asin"       => Func::Asin,
            "acos"       => Func::Acos,
            "atan"       => Func::Atan,
            "sinh"       => Func::Sinh,
            "cosh"       => Func::Cosh,
            "tanh"       => Func::Tanh,
            "exp"        => Func::Exp,
            "ln" | "log" => Func::Ln,
            "sqrt"       => Func::Sqrt,
            "abs"        => Func::Abs,
            _            => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Func::Sin  => "sin",
            Func::Cos  => "cos",
            Func::Tan  => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Exp  => "exp",
            Func::Ln   => "ln",
            Func::Sqrt => "sqrt",
            Func::Abs  => "abs",
        }
    }

    fn apply(self, v: f64) -> f64 {
        match self {
            Func::Sin  => v.sin(),
            Func::Cos  => v.cos(),
            Func::Tan  => v.tan(),
            Func::Asin => v.asin(),
            Func::Acos => v.acos(),
            Func::Atan => v.atan(),
            Func::Sinh => v.sinh(),
            Func::Cosh => v.cosh(),
            Func::Tanh => v.tanh(),
            Func::Exp  => v.exp(),
            Func::Ln   => v.ln(),
            Func::Sqrt => v.sqrt(),
            Func::Abs  => v.abs(),
        }
    }
}

/// An expression in the free variable `x`.
///
/// Evaluation is total: domain violations (`ln` of a negative, `0/0`, ...)
/// come back as NaN/±inf and are caught by the solvers' finite checks, the
/// same division of labor the solvers already apply to plain closures.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Var,
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

// smart constructors: fold constants, drop identity operands
impl Expr {
    pub fn num(v: f64) -> Expr {
        Expr::Num(v)
    }

    pub fn add(l: Expr, r: Expr) -> Expr {
        match (l, r) {
            (Expr::Num(a), Expr::Num(b)) => Expr::Num(a + b),
            (Expr::Num(z), e) | (e, Expr::Num(z)) if z == 0.0 => e,
            (l, r) => Expr::Add(Box::new(l), Box::new(r)),
        }
    }

    pub fn sub(l: Expr, r: Expr) -> Expr {
        match (l, r) {
            (Expr::Num(a), Expr::Num(b)) => Expr::Num(a - b),
            (e, Expr::Num(z)) if z == 0.0 => e,
            (Expr::Num(z), e) if z == 0.0 => Expr::neg(e),
            (l, r) => Expr::Sub(Box::new(l), Box::new(r)),
        }
    }

    pub fn mul(l: Expr, r: Expr) -> Expr {
        match (l, r) {
            (Expr::Num(a), Expr::Num(b)) => Expr::Num(a * b),
            (Expr::Num(z), _) | (_, Expr::Num(z)) if z == 0.0 => Expr::Num(0.0),
            (Expr::Num(one), e) | (e, Expr::Num(one)) if one == 1.0 => e,
            (l, r) => Expr::Mul(Box::new(l), Box::new(r)),
        }
    }

    pub fn div(l: Expr, r: Expr) -> Expr {
        match (l, r) {
            (e, Expr::Num(one)) if one == 1.0 => e,
            (l, r) => Expr::Div(Box::new(l), Box::new(r)),
        }
    }

    pub fn pow(base: Expr, exponent: Expr) -> Expr {
        match (base, exponent) {
            (_, Expr::Num(z)) if z == 0.0 => Expr::Num(1.0),
            (b, Expr::Num(one)) if one == 1.0 => b,
            (Expr::Num(a), Expr::Num(b)) => Expr::Num(a.powf(b)),
            (b, e) => Expr::Pow(Box::new(b), Box::new(e)),
        }
    }

    pub fn neg(e: Expr) -> Expr {
        match e {
            Expr::Num(v) => Expr::Num(-v),
            Expr::Neg(inner) => *inner,
            e => Expr::Neg(Box::new(e)),
        }
    }

    pub fn call(f: Func, arg: Expr) -> Expr {
        Expr::Call(f, Box::new(arg))
    }
}

impl Expr {
    /// Evaluates the expression at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Num(v)       => *v,
            Expr::Var          => x,
            Expr::Neg(e)       => -e.eval(x),
            Expr::Add(l, r)    => l.eval(x) + r.eval(x),
            Expr::Sub(l, r)    => l.eval(x) - r.eval(x),
            Expr::Mul(l, r)    => l.eval(x) * r.eval(x),
            Expr::Div(l, r)    => l.eval(x) / r.eval(x),
            Expr::Pow(b, e)    => b.eval(x).powf(e.eval(x)),
            Expr::Call(f, arg) => f.apply(arg.eval(x)),
        }
    }

    /// `true` if the free variable occurs anywhere in the tree.
    pub fn contains_var(&self) -> bool {
        match self {
            Expr::Num(_) => false,
            Expr::Var    => true,
            Expr::Neg(e) | Expr::Call(_, e) => e.contains_var(),
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Pow(l, r) => l.contains_var() || r.contains_var(),
        }
    }

    /// Symbolic first derivative with respect to `x`.
    ///
    /// Standard rules throughout: sum, product, quotient, chain. Powers use
    /// the power rule when the exponent is constant, the exponential rule
    /// when the base is constant, and `u^v = exp(v·ln(u))` in the fully
    /// general case.
    pub fn diff(&self) -> Expr {
        match self {
            Expr::Num(_) => Expr::Num(0.0),
            Expr::Var    => Expr::Num(1.0),
            Expr::Neg(e) => Expr::neg(e.diff()),
            Expr::Add(l, r) => Expr::add(l.diff(), r.diff()),
            Expr::Sub(l, r) => Expr::sub(l.diff(), r.diff()),
            Expr::Mul(l, r) => Expr::add(
                Expr::mul(l.diff(), (**r).clone()),
                Expr::mul((**l).clone(), r.diff()),
            ),
            Expr::Div(l, r) => Expr::div(
                Expr::sub(
                    Expr::mul(l.diff(), (**r).clone()),
                    Expr::mul((**l).clone(), r.diff()),
                ),
                Expr::pow((**r).clone(), Expr::Num(2.0)),
            ),
            Expr::Pow(base, exponent) => {
                let u = (**base).clone();
                let v = (**exponent).clone();
                match (base.contains_var(), exponent.contains_var()) {
                    // constant^constant
                    (false, false) => Expr::Num(0.0),
                    // power rule: (u^c)' = c * u^(c-1) * u'
                    (true, false) => Expr::mul(
                        Expr::mul(v.clone(), Expr::pow(u, Expr::sub(v, Expr::Num(1.0)))),
                        base.diff(),
                    ),
                    // exponential rule: (c^v)' = c^v * ln(c) * v'
                    (false, true) => Expr::mul(
                        Expr::mul(self.clone(), Expr::call(Func::Ln, u)),
                        exponent.diff(),
                    ),
                    // general: (u^v)' = u^v * (v' ln(u) + v u'/u)
                    (true, true) => Expr::mul(
                        self.clone(),
                        Expr::add(
                            Expr::mul(exponent.diff(), Expr::call(Func::Ln, u.clone())),
                            Expr::div(Expr::mul(v, base.diff()), u),
                        ),
                    ),
                }
            }
            Expr::Call(f, arg) => {
                let u = (**arg).clone();
                let outer = match f {
                    Func::Sin  => Expr::call(Func::Cos, u),
                    Func::Cos  => Expr::neg(Expr::call(Func::Sin, u)),
                    Func::Tan  => Expr::div(
                        Expr::Num(1.0),
                        Expr::pow(Expr::call(Func::Cos, u), Expr::Num(2.0)),
                    ),
                    Func::Asin => Expr::div(
                        Expr::Num(1.0),
                        Expr::call(
                            Func::Sqrt,
                            Expr::sub(Expr::Num(1.0), Expr::pow(u, Expr::Num(2.0))),
                        ),
                    ),
                    Func::Acos => Expr::neg(Expr::div(
                        Expr::Num(1.0),
                        Expr::call(
                            Func::Sqrt,
                            Expr::sub(Expr::Num(1.0), Expr::pow(u, Expr::Num(2.0))),
                        ),
                    )),
                    Func::Atan => Expr::div(
                        Expr::Num(1.0),
                        Expr::add(Expr::Num(1.0), Expr::pow(u, Expr::Num(2.0))),
                    ),
                    Func::Sinh => Expr::call(Func::Cosh, u),
                    Func::Cosh => Expr::call(Func::Sinh, u),
                    Func::Tanh => Expr::div(
                        Expr::Num(1.0),
                        Expr::pow(Expr::call(Func::Cosh, u), Expr::Num(2.0)),
                    ),
                    Func::Exp  => Expr::call(Func::Exp, u),
                    Func::Ln   => Expr::div(Expr::Num(1.0), u),
                    Func::Sqrt => Expr::div(
                        Expr::Num(1.0),
                        Expr::mul(Expr::Num(2.0), Expr::call(Func::Sqrt, u)),
                    ),
                    // d|u|/du = u / |u|; undefined at 0, NaN there by eval
                    Func::Abs  => Expr::div(u.clone(), Expr::call(Func::Abs, u)),
                };
                Expr::mul(outer, arg.diff())
            }
        }
    }
}

// precedence levels for display: higher binds tighter
fn precedence(e: &Expr) -> u8 {
    match e {
        Expr::Add(..) | Expr::Sub(..) => 1,
        Expr::Mul(..) | Expr::Div(..) => 2,
        Expr::Neg(..)                 => 3,
        Expr::Pow(..)                 => 4,
        Expr::Num(_) | Expr::Var | Expr::Call(..) => 5,
    }
}

fn fmt_child(
    f: &mut std::fmt::Formatter<'_>,
    child: &Expr,
    parent_prec: u8,
) -> std::fmt::Result {
    if precedence(child) < parent_prec {
        write!(f, "({child})")
    } else {
        write!(f, "{child}")
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Num(v) => {
                if *v < 0.0 {
                    write!(f, "({v})")
                } else {
                    write!(f, "{v}")
                }
            }
            Expr::Var => write!(f, "x"),
            Expr::Neg(e) => {
                write!(f, "-")?;
                fmt_child(f, e, 4)
            }
            Expr::Add(l, r) => {
                fmt_child(f, l, 1)?;
                write!(f, " + ")?;
                fmt_child(f, r, 2)
            }
            Expr::Sub(l, r) => {
                fmt_child(f, l, 1)?;
                write!(f, " - ")?;
                fmt_child(f, r, 2)
            }
            Expr::Mul(l, r) => {
                fmt_child(f, l, 2)?;
                write!(f, "*")?;
                fmt_child(f, r, 3)
            }
            Expr::Div(l, r) => {
                fmt_child(f, l, 2)?;
                write!(f, "/")?;
                fmt_child(f, r, 3)
            }
            Expr::Pow(b, e) => {
                fmt_child(f, b, 5)?;
                write!(f, "^")?;
                fmt_child(f, e, 5)
            }
            Expr::Call(func, arg) => write!(f, "{}({arg})", func.name()),
        }
    }
}
