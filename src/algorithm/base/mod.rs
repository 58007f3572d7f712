pub mod dijkstra;
pub mod pheromone;

pub use dijkstra::{Dijkstra, Metric};
pub use pheromone::PheromoneModel;
