use std::cmp::Ordering;
use std::time::Instant;
use hashbrown::HashSet;
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand::seq::{index, SliceRandom};
use rand_chacha::ChaChaRng;
use super::Algorithm;
use super::base::{Dijkstra, Metric};
use crate::component::{Evaluator, Solution};
use crate::network::Path;
use crate::utils::config::GaParameters;

/// Cap on attempts per wanted individual, both when seeding and when breeding
const ATTEMPT_FACTOR: usize = 10;


/// Elitist genetic search over simple source-to-target paths.
///
/// Chromosomes are node sequences; fitness is the weighted cost, lower is better.
pub struct GeneticAlgorithm {
    evaluator: Evaluator,
    params: GaParameters,
    dijkstra: Dijkstra,
    rng: ChaChaRng,
}


impl GeneticAlgorithm {
    pub fn new(evaluator: Evaluator, params: GaParameters, seed: u64) -> Self {
        GeneticAlgorithm {
            evaluator,
            params,
            dijkstra: Dijkstra::new(Metric::Hops),
            rng: ChaChaRng::seed_from_u64(seed),
        }
    }
    fn shortest(&mut self, src: usize, dst: usize) -> Option<Path> {
        self.dijkstra.path(self.evaluator.network(), src, dst)
    }
    pub fn fitness(&self, path: &[usize]) -> f64 {
        self.evaluator.evaluate_cost(path)
    }
    /// Depth-first walk choosing uniformly among unvisited neighbors;
    /// dead ends stay visited, so the walk always terminates.
    pub fn random_path(&mut self) -> Option<Path> {
        let (src, dst) = self.evaluator.ends();
        let network = self.evaluator.network();
        let mut path = vec![src];
        let mut visited = HashSet::new();
        visited.insert(src);

        while let Some(&current) = path.last() {
            if current == dst {
                return Some(path);
            }
            let unvisited: Vec<usize> = network.neighbors(current).iter()
                .cloned()
                .filter(|n| !visited.contains(n))
                .collect();
            match unvisited.choose(&mut self.rng) {
                Some(&next) => {
                    visited.insert(next);
                    path.push(next);
                },
                None => { path.pop(); },
            }
        }
        None
    }
    pub fn initialize_population(&mut self, size: usize) -> Vec<Path> {
        let (src, dst) = self.evaluator.ends();
        let mut population = Vec::with_capacity(size);
        if size > 0 {
            if let Some(path) = self.shortest(src, dst) {
                if self.evaluator.is_feasible(&path) {
                    population.push(path);
                }
            }
        }
        let max_attempts = size * ATTEMPT_FACTOR;
        let mut attempts = 0;
        while population.len() < size && attempts < max_attempts {
            attempts += 1;
            if let Some(path) = self.random_path() {
                if self.evaluator.is_feasible(&path) && !population.contains(&path) {
                    population.push(path);
                }
            }
        }
        if population.len() < size {
            log::warn!("only {} distinct feasible paths found for a population of {}",
                population.len(), size);
        }
        population
    }
    /// Returns the index of the fittest among a random sample of the population
    fn tournament(&mut self, fitnesses: &[f64]) -> usize {
        let amount = self.params.tournament_size.clamp(1, fitnesses.len());
        index::sample(&mut self.rng, fitnesses.len(), amount)
            .into_iter()
            .min_by(|&a, &b| compare(fitnesses[a], fitnesses[b]))
            .unwrap_or(0)
    }
    /// Two-point crossover; children are repaired before returning
    pub fn crossover(&mut self, parent1: &[usize], parent2: &[usize]) -> (Path, Path) {
        if parent1.len() <= 2 || parent2.len() <= 2 {
            return (parent1.to_vec(), parent2.to_vec());
        }
        let start = self.rng.gen_range(1..=parent1.len() - 2);
        let end = self.rng.gen_range(start + 1..=parent1.len() - 1);

        let child1 = self.splice(&parent1[start..end], parent2);
        let hi = end.min(parent2.len());
        let child2 = self.splice(&parent2[start.min(hi)..hi], parent1);

        (self.repair(child1), self.repair(child2))
    }
    /// Anchors `segment` between the endpoints, then scatters the donor's
    /// missing interior nodes at random positions
    fn splice(&mut self, segment: &[usize], donor: &[usize]) -> Path {
        let (src, dst) = self.evaluator.ends();
        let mut child = Vec::with_capacity(segment.len() + donor.len());
        child.push(src);
        child.extend_from_slice(segment);
        child.push(dst);
        for &node in &donor[1..donor.len() - 1] {
            if !child.contains(&node) {
                let pos = self.rng.gen_range(1..child.len());
                child.insert(pos, node);
            }
        }
        child
    }
    /// Swaps one interior node for a neighbor bridging the same hop,
    /// or drops it when its neighbors are already adjacent
    pub fn mutate(&mut self, chromosome: &[usize]) -> Path {
        if chromosome.len() <= 2 {
            return chromosome.to_vec();
        }
        let mut mutated = chromosome.to_vec();
        let pos = self.rng.gen_range(1..=mutated.len() - 2);
        let (prev, old, next) = (mutated[pos - 1], mutated[pos], mutated[pos + 1]);

        let network = self.evaluator.network();
        let replacements: Vec<usize> = network.neighbors(prev).iter()
            .cloned()
            .filter(|&n| n != old && network.has_edge(n, next))
            .collect();
        if let Some(&node) = replacements.choose(&mut self.rng) {
            mutated[pos] = node;
        } else if network.has_edge(prev, next) {
            mutated.remove(pos);
        }
        self.repair(mutated)
    }
    /// Bridges missing hops with hop-shortest detours, cuts at the first
    /// revisit, then reconnects the tail to the target.
    pub fn repair(&mut self, path: Path) -> Path {
        let (src, dst) = self.evaluator.ends();
        if !self.evaluator.is_anchored(&path) {
            return self.shortest(src, dst).unwrap_or_else(|| vec![src, dst]);
        }

        let mut bridged = vec![src];
        for (u, v) in path.into_iter().tuple_windows() {
            if self.evaluator.network().has_edge(u, v) {
                bridged.push(v);
                continue;
            }
            match self.shortest(u, v) {
                Some(detour) => bridged.extend_from_slice(&detour[1..]),
                None => break,
            }
        }

        let mut seen = HashSet::new();
        let mut repaired: Path = bridged.into_iter()
            .take_while(|&node| seen.insert(node))
            .collect();

        let last = repaired.last().cloned().unwrap_or(src);
        if last != dst {
            if let Some(tail) = self.shortest(last, dst) {
                repaired.extend_from_slice(&tail[1..]);
            }
        }
        repaired
    }
    /// Next generation, elite first. Refilling stops after
    /// `population_size * 10` breeding rounds, so a generation with few
    /// feasible children can come up short.
    fn breed(&mut self, population: &[Path], fitnesses: &[f64], elite: &[usize]) -> Vec<Path> {
        let size = self.params.population_size;
        let mut offspring = Vec::with_capacity(size);
        offspring.push(elite.to_vec());

        let max_rounds = size * ATTEMPT_FACTOR;
        let mut rounds = 0;
        while offspring.len() < size && rounds < max_rounds {
            rounds += 1;
            let parent1 = &population[self.tournament(fitnesses)];
            let parent2 = &population[self.tournament(fitnesses)];
            let (mut child1, mut child2) = match self.rng.gen::<f64>() < self.params.crossover_rate {
                true  => self.crossover(parent1, parent2),
                false => (parent1.clone(), parent2.clone()),
            };
            if self.rng.gen::<f64>() < self.params.mutation_rate {
                child1 = self.mutate(&child1);
            }
            if self.rng.gen::<f64>() < self.params.mutation_rate {
                child2 = self.mutate(&child2);
            }
            for child in vec![child1, child2] {
                if offspring.len() < size && self.evaluator.is_feasible(&child) {
                    offspring.push(child);
                }
            }
        }
        if offspring.len() < size {
            log::debug!("breeding stopped at {} of {} individuals after {} rounds",
                offspring.len(), size, rounds);
        }
        offspring
    }
}

impl Algorithm for GeneticAlgorithm {
    fn configure(&mut self, deadline: Option<Instant>) -> Solution {
        log::info!("GA: population {} over {} generations",
            self.params.population_size, self.params.generations);

        let mut population = self.initialize_population(self.params.population_size);
        if population.is_empty() {
            log::error!("GA: no feasible initial population between {:?}", self.evaluator.ends());
            return Solution::infeasible();
        }
        let mut fitnesses: Vec<f64> = population.iter().map(|p| self.fitness(p)).collect();
        let (mut best_path, mut best_fitness) = fittest(&population, &fitnesses);
        let mut history = vec![best_fitness];

        for generation in 0..self.params.generations {
            if deadline.map_or(false, |deadline| Instant::now() >= deadline) {
                log::info!("GA: deadline reached after {} generations", generation);
                break;
            }
            population = self.breed(&population, &fitnesses, &best_path);
            fitnesses = population.iter().map(|p| self.fitness(p)).collect();

            let (path, fitness) = fittest(&population, &fitnesses);
            if fitness < best_fitness {
                log::info!("GA: generation {} improves to {:.4} via {:?}", generation, fitness, path);
                best_path = path;
                best_fitness = fitness;
            }
            history.push(best_fitness);
        }

        if !best_fitness.is_finite() {
            return Solution::infeasible();
        }
        log::info!("GA: best path {:?} with cost {:.4}", best_path, best_fitness);
        Solution::new(best_path, best_fitness).with_history(history)
    }
    fn name(&self) -> &'static str {
        "ga"
    }
}

fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// First individual with the lowest fitness
fn fittest(population: &[Path], fitnesses: &[f64]) -> (Path, f64) {
    (0..population.len())
        .min_by(|&a, &b| compare(fitnesses[a], fitnesses[b]))
        .map_or((vec![], f64::INFINITY), |i| (population[i].clone(), fitnesses[i]))
}
