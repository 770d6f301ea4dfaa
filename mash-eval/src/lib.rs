//! Tree-walking evaluator.

pub mod eval;

pub use eval::Evaluator;
