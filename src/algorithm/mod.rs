mod base;
mod aco;
mod ga;
mod spf;
mod algorithm;

pub use algorithm::{Algorithm, AlgorithmEnum};
pub use aco::AntColonyOptimizer;
pub use base::{Dijkstra, Metric, PheromoneModel};
pub use base::pheromone::{RHO, TAO0};
pub use ga::GeneticAlgorithm;
pub use spf::SPF;
