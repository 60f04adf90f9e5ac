// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod trace;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod newton;
pub mod secant;

// tagged-union dispatch over the three methods
pub mod method;

pub use algorithms::Algorithm;
pub use bisection::{bisection, BisectionError};
pub use config::SolverCfg;
pub use method::{find_root, Method, SeedParseError, SolveError};
pub use newton::{newton_raphson, NewtonError};
pub use report::{RootFindingReport, TerminationReason};
pub use secant::{secant, SecantError};
pub use trace::Trace;
