use crate::network::Path;


/// Outcome of one engine run.
///
/// An empty path with infinite cost means no feasible route was found;
/// callers treat that as an ordinary outcome, not an error.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub path: Path,
    pub cost: f64,
    /// Best-so-far cost after initialization and after every generation or iteration
    pub history: Vec<f64>,
}

impl Solution {
    pub fn new(path: Path, cost: f64) -> Self {
        Solution { path, cost, history: vec![] }
    }
    pub fn infeasible() -> Self {
        Solution::new(vec![], f64::INFINITY)
    }
    pub fn with_history(mut self, history: Vec<f64>) -> Self {
        self.history = history;
        self
    }
    pub fn is_feasible(&self) -> bool {
        !self.path.is_empty() && self.cost.is_finite()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Solution::infeasible()
    }
}
