//! Interpreter for a toy assignment language.
//!
//! A program is a sequence of `identifier = expression;` statements over
//! 32-bit integers. Statements run left to right; the result is either every
//! final binding or one error per failing statement.

mod error_handling;
mod evaluating;
mod parsing;
mod processing;
mod scanning;
mod variables;

pub use error_handling::{Result, ToyError};
pub use processing::{run, run_file};
pub use variables::Variables;
