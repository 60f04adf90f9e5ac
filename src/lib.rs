//! Root-finding for user-supplied scalar functions, with the full sequence
//! of intermediate estimates recorded so the convergence path can be
//! inspected or plotted.
//!
//! Three classical methods share one contract (tolerance, iteration cap,
//! trace, termination status):
//! - [`root_finding::bisection`]      : bracketing, guaranteed progress
//! - [`root_finding::newton_raphson`] : tangent steps, needs a derivative
//! - [`root_finding::secant`]         : derivative-free secant steps
//!
//! [`expr`] compiles a textual expression in `x` into an evaluable
//! [`expr::Function`] and differentiates it symbolically, so Newton never
//! needs a hand-written derivative. With the `plot` feature, [`plot`]
//! renders the function curve and the iterates.
//!
//! ```
//! use rootviz::expr::Function;
//! use rootviz::root_finding::{find_root, Method, SolverCfg};
//!
//! let f  = Function::compile("x^2 - 2").unwrap();
//! let df = f.derivative();
//!
//! let report = find_root(
//!     f.closure(),
//!     Some(df.closure()),
//!     Method::NewtonRaphson { x0: 1.0 },
//!     SolverCfg::new(),
//! ).unwrap();
//!
//! assert!((report.root - 2.0_f64.sqrt()).abs() < 1e-6);
//! assert_eq!(report.trace.first(), Some(1.0));
//! ```

pub mod expr;
pub mod root_finding;

#[cfg(feature = "plot")]
pub mod plot;
