use std::sync::Arc;
use crate::network::Network;
use super::metrics::{objectives, weighted_sum};
use super::validator::{has_capacity, is_simple_path};


/// (w_delay, w_reliability, w_resource)
pub type Weights = [f64; 3];


/// 綁定權重、頻寬下限與起訖點，讓 GA 與 ACO 共用同一個成本函式
#[derive(Clone, Debug)]
pub struct Evaluator {
    network: Arc<Network>,
    weights: Weights,
    bandwidth: f64,
    ends: (usize, usize),
}


impl Evaluator {
    pub fn new(network: Arc<Network>, ends: (usize, usize), weights: Weights, bandwidth: f64) -> Self {
        Evaluator { network, weights, bandwidth, ends }
    }
    pub fn network(&self) -> &Network {
        &self.network
    }
    pub fn ends(&self) -> (usize, usize) {
        self.ends
    }
    pub fn weights(&self) -> Weights {
        self.weights
    }
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
    pub fn is_anchored(&self, path: &[usize]) -> bool {
        let (src, dst) = self.ends;
        path.first() == Some(&src) && path.last() == Some(&dst)
    }
    /// Anchored at both ends, simple, and meeting the bandwidth floor
    pub fn is_feasible(&self, path: &[usize]) -> bool {
        self.is_anchored(path)
            && is_simple_path(path)
            && has_capacity(&self.network, path, self.bandwidth)
    }
    pub fn evaluate_objectives(&self, path: &[usize]) -> [f64; 3] {
        objectives(&self.network, path)
    }
    pub fn evaluate_cost(&self, path: &[usize]) -> f64 {
        self.evaluate_cost_objectives(path).0
    }
    /// Infeasible paths cost `+inf` and report no objectives
    pub fn evaluate_cost_objectives(&self, path: &[usize]) -> (f64, [f64; 3]) {
        if !self.is_feasible(path) {
            return (f64::INFINITY, [f64::INFINITY; 3]);
        }
        let objs = self.evaluate_objectives(path);
        let cost = weighted_sum(objs[0], objs[1], objs[2], &self.weights);
        log::trace!("path {:?} scores {:.4} from {:.4?}", path, cost, objs);
        (cost, objs)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::metrics::{bandwidth_cost, reliability_cost, total_delay};
    use crate::network::ladder;

    fn setup(bandwidth: f64) -> Evaluator {
        Evaluator::new(Arc::new(ladder()), (0, 5), [0.4, 0.3, 0.3], bandwidth)
    }

    #[test]
    fn it_matches_direct_recomputation() {
        let evaluator = setup(500.0);
        let network = ladder();
        let path = [0, 2, 3, 5];
        let expected = weighted_sum(
            total_delay(&network, &path),
            reliability_cost(&network, &path),
            bandwidth_cost(&network, &path),
            &[0.4, 0.3, 0.3],
        );
        assert_eq!(evaluator.evaluate_cost(&path), expected);
    }
    #[test]
    fn it_scores_infeasible_as_infinite() {
        let evaluator = setup(500.0);
        // cycle
        assert_eq!(evaluator.evaluate_cost(&[0, 1, 3, 1, 5]), f64::INFINITY);
        // under capacity
        assert_eq!(evaluator.evaluate_cost(&[0, 4, 5]), f64::INFINITY);
        // wrong anchors
        assert_eq!(evaluator.evaluate_cost(&[1, 5]), f64::INFINITY);
        assert_eq!(evaluator.evaluate_cost(&[0, 1]), f64::INFINITY);
        assert_eq!(evaluator.evaluate_cost(&[]), f64::INFINITY);
    }
    #[test]
    fn it_prefers_the_short_route() {
        let evaluator = setup(500.0);
        let (cost, objs) = evaluator.evaluate_cost_objectives(&[0, 1, 5]);
        assert_eq!(objs[0], 4.0);
        assert!((cost - 2.20603).abs() < 1e-4);
        assert!(cost < evaluator.evaluate_cost(&[0, 2, 3, 5]));
    }
}
