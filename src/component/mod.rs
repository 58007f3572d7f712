mod solution;

pub mod evaluator;
pub mod metrics;
pub mod validator;

pub use evaluator::{Evaluator, Weights};
pub use solution::Solution;
