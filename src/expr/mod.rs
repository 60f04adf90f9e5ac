// expression tree and evaluation
pub mod ast;
pub mod errors;

// text -> tree
pub(crate) mod token;
pub mod parse;

// compiled callable handed to the solvers
pub mod function;

pub use ast::{Expr, Func};
pub use errors::ParseError;
pub use function::Function;
pub use parse::parse;
