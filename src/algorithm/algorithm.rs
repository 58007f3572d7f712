use std::time::Instant;
use enum_dispatch::enum_dispatch;
use super::aco::AntColonyOptimizer;
use super::ga::GeneticAlgorithm;
use super::spf::SPF;
use crate::component::Solution;


#[enum_dispatch]
pub enum AlgorithmEnum {
    GeneticAlgorithm,
    AntColonyOptimizer,
    SPF,
}

#[enum_dispatch(AlgorithmEnum)]
pub trait Algorithm {
    /// Searches until done or until `deadline`, whichever comes first
    fn configure(&mut self, deadline: Option<Instant>) -> Solution;
    fn run(&mut self) -> Solution {
        self.configure(None)
    }
    fn name(&self) -> &'static str;
}
