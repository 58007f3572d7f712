use std::time::Instant;
use hashbrown::HashSet;
use rand::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use rand_chacha::ChaChaRng;
use super::Algorithm;
use super::base::{Dijkstra, Metric, PheromoneModel};
use crate::component::{Evaluator, Solution};
use crate::network::{Path, MBPS_PER_GBPS};
use crate::utils::config::AcoParameters;


/// Ant colony search; each ant walks hop by hop, biased by pheromone and
/// by a delay/bandwidth heuristic.
pub struct AntColonyOptimizer {
    evaluator: Evaluator,
    params: AcoParameters,
    pheromone: PheromoneModel,
    dijkstra: Dijkstra,
    rng: ChaChaRng,
}


impl AntColonyOptimizer {
    pub fn new(evaluator: Evaluator, params: AcoParameters, seed: u64) -> Self {
        let pheromone = PheromoneModel::new(
            evaluator.network(),
            params.initial_pheromone,
            params.evaporation,
        );
        AntColonyOptimizer {
            evaluator,
            params,
            pheromone,
            dijkstra: Dijkstra::new(Metric::Hops),
            rng: ChaChaRng::seed_from_u64(seed),
        }
    }
    pub fn pheromone(&self) -> &PheromoneModel {
        &self.pheromone
    }
    fn shortest(&mut self, src: usize, dst: usize) -> Option<Path> {
        self.dijkstra.path(self.evaluator.network(), src, dst)
    }
    /// η = 1 / (delay + 1 / bandwidth_in_gbps), or zero without a link
    pub fn heuristic(&self, u: usize, v: usize) -> f64 {
        let edge = match self.evaluator.network().edge(u, v) {
            Some(edge) if edge.bandwidth > 0.0 => edge,
            _ => return 0.0,
        };
        let denominator = edge.delay + MBPS_PER_GBPS / edge.bandwidth;
        if denominator > 0.0 { 1.0 / denominator } else { 0.0 }
    }
    /// Roulette-wheel choice over unvisited neighbors weighted by τ^α·η^β
    pub fn select_next_node(&mut self, current: usize, visited: &HashSet<usize>) -> Option<usize> {
        let (alpha, beta) = (self.params.alpha, self.params.beta);
        let candidates: Vec<(usize, f64)> = self.evaluator.network()
            .neighbors(current).iter()
            .filter(|n| !visited.contains(*n))
            .map(|&n| {
                let tau = self.pheromone.get(current, n);
                let eta = self.heuristic(current, n);
                (n, tau.powf(alpha) * eta.powf(beta))
            })
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let total: f64 = candidates.iter().map(|&(_, p)| p).sum();
        if !(total > 0.0) {
            return candidates.choose(&mut self.rng).map(|&(n, _)| n);
        }
        let r = self.rng.gen::<f64>() * total;
        let mut cumulative = 0.0;
        for &(n, p) in candidates.iter() {
            cumulative += p;
            if r <= cumulative {
                return Some(n);
            }
        }
        // rounding left r just above the cumulative sum
        candidates.last().map(|&(n, _)| n)
    }
    /// One ant's walk. Stuck ants finish along the hop-shortest path; ants
    /// ending on an infeasible route fall back to the global shortest path.
    pub fn construct_solution(&mut self) -> Option<Path> {
        let (src, dst) = self.evaluator.ends();
        let steps = self.evaluator.network().node_count();
        let mut path = vec![src];
        let mut visited = HashSet::new();
        visited.insert(src);
        let mut current = src;

        for _ in 0..steps {
            if current == dst {
                break;
            }
            match self.select_next_node(current, &visited) {
                Some(next) => {
                    visited.insert(next);
                    path.push(next);
                    current = next;
                },
                None => break,
            }
        }

        if current != dst {
            match self.shortest(current, dst) {
                Some(rest) => path.extend_from_slice(&rest[1..]),
                None => return self.shortest(src, dst),
            }
        }
        if self.evaluator.is_feasible(&path) {
            return Some(path);
        }
        self.shortest(src, dst)
    }
}

impl Algorithm for AntColonyOptimizer {
    fn configure(&mut self, deadline: Option<Instant>) -> Solution {
        log::info!("ACO: {} ants over {} iterations", self.params.ants, self.params.iterations);

        let mut best_path: Option<Path> = None;
        let mut best_cost = f64::INFINITY;
        let mut history = Vec::with_capacity(self.params.iterations);

        for iteration in 0..self.params.iterations {
            if deadline.map_or(false, |deadline| Instant::now() >= deadline) {
                log::info!("ACO: deadline reached after {} iterations", iteration);
                break;
            }
            let mut constructed = 0;
            for _ in 0..self.params.ants {
                if let Some(path) = self.construct_solution() {
                    constructed += 1;
                    let cost = self.evaluator.evaluate_cost(&path);
                    if cost < best_cost {
                        log::info!("ACO: iteration {} improves to {:.4} via {:?}", iteration, cost, path);
                        best_cost = cost;
                        best_path = Some(path);
                    }
                }
            }

            self.pheromone.evaporate();
            if constructed > 0 {
                if let Some(path) = &best_path {
                    let quality = if best_cost > 0.0 { 1.0 / best_cost } else { 1.0 };
                    self.pheromone.deposit(path, quality);
                }
            }
            history.push(best_cost);
        }

        match best_path {
            Some(path) => {
                log::info!("ACO: best path {:?} with cost {:.4}", path, best_cost);
                Solution::new(path, best_cost).with_history(history)
            },
            None => {
                log::error!("ACO: no feasible path between {:?}", self.evaluator.ends());
                Solution::infeasible()
            },
        }
    }
    fn name(&self) -> &'static str {
        "aco"
    }
}
