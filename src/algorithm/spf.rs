use std::collections::HashSet;
use std::time::Instant;
use super::Algorithm;
use super::base::{Dijkstra, Metric};
use crate::component::{Evaluator, Solution};


/// Deterministic baseline: least-delay path over links meeting the bandwidth floor
pub struct SPF {
    evaluator: Evaluator,
    dijkstra: Dijkstra,
}


impl SPF {
    pub fn new(evaluator: Evaluator) -> Self {
        let bandwidth = evaluator.bandwidth();
        let narrow: HashSet<(usize, usize)> = evaluator.network().edges()
            .filter(|edge| edge.bandwidth < bandwidth)
            .map(|edge| edge.ends)
            .collect();
        let mut dijkstra = Dijkstra::new(Metric::Delay);
        dijkstra.ignore(HashSet::new(), narrow);
        SPF { evaluator, dijkstra }
    }
}

impl Algorithm for SPF {
    fn configure(&mut self, _deadline: Option<Instant>) -> Solution {
        let (src, dst) = self.evaluator.ends();
        let path = match self.dijkstra.path(self.evaluator.network(), src, dst) {
            Some(path) => path,
            None => {
                log::error!("SPF: no path with enough bandwidth between {:?}", (src, dst));
                return Solution::infeasible();
            },
        };
        let cost = self.evaluator.evaluate_cost(&path);
        log::info!("SPF: path {:?} with cost {:.4}", path, cost);
        Solution::new(path, cost).with_history(vec![cost])
    }
    fn name(&self) -> &'static str {
        "spf"
    }
}
