//! Source-level vocabulary shared with the evaluator.

pub mod token;

pub use token::{Token, UnknownToken};
