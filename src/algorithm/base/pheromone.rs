use hashbrown::HashMap;
use itertools::Itertools;
use crate::network::Network;

/// Default initial pheromone
pub const TAO0: f64 = 1.0;
pub const RHO: f64 = 0.1; // 蒸發率


/// Learned desirability per directed edge
#[derive(Clone, Debug)]
pub struct PheromoneModel {
    pheromone: HashMap<(usize, usize), f64>,
    tao0: f64,
    rho: f64,
}

impl PheromoneModel {
    pub fn new(network: &Network, tao0: f64, rho: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&rho));
        let pheromone = network.edges()
            .map(|edge| (edge.ends, tao0))
            .collect();
        PheromoneModel { pheromone, tao0, rho }
    }
    pub fn get(&self, u: usize, v: usize) -> f64 {
        self.pheromone.get(&(u, v))
            .cloned()
            .unwrap_or(self.tao0)
    }
    pub fn len(&self) -> usize {
        self.pheromone.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pheromone.is_empty()
    }
    pub fn evaporate(&mut self) {
        let rho = self.rho;
        for pheromone in self.pheromone.values_mut() {
            *pheromone *= 1.0 - rho;
        }
    }
    /// Reinforces both directions of every hop on `path`
    pub fn deposit(&mut self, path: &[usize], quality: f64) {
        for (&u, &v) in path.iter().tuple_windows() {
            for ends in [(u, v), (v, u)].iter() {
                if let Some(pheromone) = self.pheromone.get_mut(ends) {
                    *pheromone += quality;
                }
            }
        }
        log::trace!("deposited {:.4} along {:?}", quality, path);
    }
}
