use std::time::{Duration, Instant};
use serde::Deserialize;
use argh::FromArgs;
use crate::algorithm::{RHO, TAO0};
use crate::component::Weights;
use super::error::Error;

/// Multi-objective QoS routing by genetic and ant colony search
#[derive(FromArgs)]
pub struct Arguments {
    /// path to network topology yaml
    #[argh(positional)]
    pub network: String,
    /// source node
    #[argh(positional)]
    pub source: usize,
    /// target node
    #[argh(positional)]
    pub target: usize,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// override algorithm used to search the route (ga, aco or spf)
    #[argh(option, short='a')]
    pub algorithm: Option<String>,
    /// override required bandwidth in Mbps
    #[argh(option, short='b')]
    pub bandwidth: Option<f64>,
    /// override random seed for GA or ACO algorithms
    #[argh(option, short='s')]
    pub seed: Option<u64>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub name: String,
    pub algorithm: String,
    pub weights: Weights,
    /// Mbps every hop must offer
    pub bandwidth: f64,
    /// μs; zero runs every generation or iteration regardless of time
    pub timeout: u64,
    pub seed: u64,
    #[serde(default)]
    pub parameters: Parameters,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Parameters {
    #[serde(default)]
    pub ga: GaParameters,
    #[serde(default)]
    pub aco: AcoParameters,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct GaParameters {
    pub population_size: usize,
    pub generations: usize,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub tournament_size: usize,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AcoParameters {
    pub iterations: usize,
    pub ants: usize,
    /// pheromone exponent
    pub alpha: f64,
    /// heuristic exponent
    pub beta: f64,
    pub evaporation: f64,
    pub initial_pheromone: f64,
}

impl Default for GaParameters {
    fn default() -> Self {
        GaParameters {
            population_size: 50,
            generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.05,
            tournament_size: 3,
        }
    }
}

impl Default for AcoParameters {
    fn default() -> Self {
        AcoParameters {
            iterations: 50,
            ants: 20,
            alpha: 1.0,
            beta: 2.0,
            evaporation: RHO,
            initial_pheromone: TAO0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: String::from("default"),
            algorithm: String::from("ga"),
            weights: [0.4, 0.3, 0.3],
            bandwidth: 500.0,
            timeout: 0,
            seed: 42,
            parameters: Parameters::default(),
        }
    }
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(algorithm) = &args.algorithm {
            self.algorithm = algorithm.clone();
        }
        if let Some(bandwidth) = args.bandwidth {
            self.bandwidth = num::clamp(bandwidth, 0.0, f64::MAX);
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
    }
    pub fn deadline(&self, start: Instant) -> Option<Instant> {
        match self.timeout {
            0 => None,
            timeout => start.checked_add(Duration::from_micros(timeout)),
        }
    }
    pub fn validate(&self) -> Result<(), Error> {
        for &weight in self.weights.iter() {
            if !weight.is_finite() {
                return Err(Error::InvalidParameter("weights", weight));
            }
        }
        if self.weights.iter().any(|&w| w < 0.0) {
            log::warn!("config `{}` has negative weights {:?}", self.name, self.weights);
        }
        if !self.bandwidth.is_finite() || self.bandwidth < 0.0 {
            return Err(Error::InvalidParameter("bandwidth", self.bandwidth));
        }
        let ga = &self.parameters.ga;
        let aco = &self.parameters.aco;
        check_rate("crossover_rate", ga.crossover_rate)?;
        check_rate("mutation_rate", ga.mutation_rate)?;
        check_rate("evaporation", aco.evaporation)?;
        check_positive("population_size", ga.population_size)?;
        check_positive("tournament_size", ga.tournament_size)?;
        check_positive("ants", aco.ants)?;
        if !aco.initial_pheromone.is_finite() || aco.initial_pheromone < 0.0 {
            return Err(Error::InvalidParameter("initial_pheromone", aco.initial_pheromone));
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, rate: f64) -> Result<(), Error> {
    match (0.0..=1.0).contains(&rate) {
        true  => Ok(()),
        false => Err(Error::InvalidParameter(name, rate)),
    }
}

fn check_positive(name: &'static str, count: usize) -> Result<(), Error> {
    match count {
        0 => Err(Error::InvalidParameter(name, 0.0)),
        _ => Ok(()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn arguments(algorithm: Option<&str>, bandwidth: Option<f64>, seed: Option<u64>) -> Arguments {
        Arguments {
            network: String::from("data/network/mesh.yaml"),
            source: 0,
            target: 1,
            config: String::from("data/config/default.yaml"),
            algorithm: algorithm.map(String::from),
            bandwidth,
            seed,
        }
    }

    #[test]
    fn it_overrides_from_args() {
        let mut config = Config::default();
        config.override_from_args(&arguments(Some("aco"), Some(-3.0), Some(7)));
        assert_eq!(config.algorithm, "aco");
        assert_eq!(config.bandwidth, 0.0);
        assert_eq!(config.seed, 7);

        config.override_from_args(&arguments(None, None, None));
        assert_eq!(config.algorithm, "aco");
        assert_eq!(config.seed, 7);
    }
    #[test]
    fn it_validates_parameters() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.parameters.ga.mutation_rate = 1.5;
        assert!(matches!(config.validate(), Err(Error::InvalidParameter("mutation_rate", _))));

        let mut config = Config::default();
        config.weights = [0.5, f64::NAN, 0.5];
        assert!(matches!(config.validate(), Err(Error::InvalidParameter("weights", _))));

        let mut config = Config::default();
        config.parameters.aco.ants = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidParameter("ants", _))));
    }
    #[test]
    fn it_defaults_to_pheromone_constants() {
        let aco = AcoParameters::default();
        assert_eq!(aco.initial_pheromone, TAO0);
        assert_eq!(aco.evaporation, RHO);
        let config: Config = serde_yaml::from_str(
            "{name: x, algorithm: aco, weights: [1, 0, 0], bandwidth: 0, timeout: 0, seed: 1, parameters: {aco: {ants: 5}}}"
        ).unwrap();
        assert_eq!(config.parameters.aco.ants, 5);
        assert_eq!(config.parameters.aco.evaporation, RHO);
    }
    #[test]
    fn it_computes_deadline() {
        let start = Instant::now();
        let mut config = Config::default();
        assert_eq!(config.deadline(start), None);
        config.timeout = 1500;
        assert_eq!(config.deadline(start), Some(start + Duration::from_micros(1500)));
    }
}
