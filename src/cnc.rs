use crate::algorithm::{Algorithm, AlgorithmEnum, AntColonyOptimizer, GeneticAlgorithm, SPF};
use crate::component::{Evaluator, Solution};
use crate::network::Network;
use crate::utils::config::Config;
use crate::utils::error::Error;
use std::fmt::Write;
use std::sync::Arc;
use std::time::Instant;


/// Central controller binding one routing request to the configured engine
pub struct CNC {
    pub algorithm: AlgorithmEnum,
    pub evaluator: Evaluator,
    pub network: Arc<Network>,
    pub config: Config,
}


impl CNC {
    pub fn new(network: Network, config: Config, source: usize, target: usize) -> Result<Self, Error> {
        for &node in [source, target].iter() {
            if !network.contains(node) {
                return Err(Error::UnknownNode(node));
            }
        }
        if source == target {
            return Err(Error::SameEndpoints(source));
        }
        if !network.has_path(source, target) {
            return Err(Error::Unreachable(source, target));
        }
        let network = Arc::new(network);
        let evaluator = Evaluator::new(
            Arc::clone(&network),
            (source, target),
            config.weights,
            config.bandwidth,
        );
        let algorithm: AlgorithmEnum = match config.algorithm.as_str() {
            "ga"  => GeneticAlgorithm::new(evaluator.clone(), config.parameters.ga.clone(), config.seed).into(),
            "aco" => AntColonyOptimizer::new(evaluator.clone(), config.parameters.aco.clone(), config.seed).into(),
            "spf" => SPF::new(evaluator.clone()).into(),
            other => return Err(Error::UnknownAlgorithm(other.to_owned())),
        };
        Ok(CNC { algorithm, evaluator, network, config })
    }
    /// Runs the engine under the configured timeout; returns the solution
    /// with the elapsed time in μs
    pub fn configure(&mut self) -> (Solution, u128) {
        let start = Instant::now();
        let deadline = self.config.deadline(start);
        let solution = self.algorithm.configure(deadline);
        let elapsed = start.elapsed().as_micros();
        log::info!("{} finished in {} μs", self.algorithm.name(), elapsed);
        (solution, elapsed)
    }
    pub fn report(&self, solution: &Solution) -> String {
        let (src, dst) = self.evaluator.ends();
        let mut msg = String::new();
        if !solution.is_feasible() {
            let _ = writeln!(msg, "no feasible route from #{:02} to #{:02} with {} Mbps",
                src, dst, self.config.bandwidth);
            return msg;
        }
        let (cost, objs) = self.evaluator.evaluate_cost_objectives(&solution.path);
        let _ = writeln!(msg, "route from #{:02} to #{:02} via {:?}", src, dst, solution.path);
        let _ = writeln!(msg, "- delay {:.2} ms", objs[0]);
        let _ = writeln!(msg, "- reliability {:.4}", (-objs[1]).exp());
        let _ = writeln!(msg, "- resource cost {:.4}", objs[2]);
        let _ = writeln!(msg, "the solution has cost {:.4} and each objective {:.4?} under weights {:?}",
            cost, objs, self.evaluator.weights());
        msg
    }
}
