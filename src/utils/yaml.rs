use std::fs;

use serde::Deserialize;

use super::config::Config;
use super::error::Error;
use crate::network::{Link, Network, Node};

#[derive(Deserialize)]
struct NetworkYaml {
    scale: NetworkScaleYaml,
    #[serde(default)]
    nodes: Vec<NetworkNodeYaml>,
    edges: Vec<NetworkEdgeYaml>,
}

#[derive(Deserialize)]
struct NetworkScaleYaml {
    nodes: usize,
}

#[derive(Deserialize)]
struct NetworkNodeYaml {
    processing_delay: f64,
    reliability: f64,
}

#[derive(Deserialize)]
struct NetworkEdgeYaml {
    ends: [usize; 2],
    bandwidth: f64,
    delay: f64,
    reliability: f64,
}

pub fn load_network(path: &str) -> Result<Network, Error> {
    let text = fs::read_to_string(path)?;
    let network = parse_network(&text)?;
    log::info!("loaded network {} with {} nodes and {} edges",
        path, network.node_count(), network.edge_count());
    Ok(network)
}

pub fn parse_network(text: &str) -> Result<Network, Error> {
    let yaml: NetworkYaml = serde_yaml::from_str(text)?;
    let mut network = Network::new();
    match yaml.nodes.len() {
        0 => network.add_nodes(yaml.scale.nodes),
        n if n == yaml.scale.nodes => {
            for node in yaml.nodes.iter() {
                network.add_node(Node::new(node.processing_delay, node.reliability));
            }
        },
        n => return Err(Error::NodeCountMismatch(yaml.scale.nodes, n)),
    }
    network.add_edges(flatten(yaml.edges))?;
    Ok(network)
}

pub fn load_config(path: &str) -> Result<Config, Error> {
    let text = fs::read_to_string(path)?;
    let config: Config = serde_yaml::from_str(&text)?;
    log::debug!("loaded config `{}` from {}", config.name, path);
    Ok(config)
}

fn flatten(edges: Vec<NetworkEdgeYaml>) -> Vec<(usize, usize, Link)> {
    edges.into_iter()
        .map(|e| (e.ends[0], e.ends[1], Link::new(e.bandwidth, e.delay, e.reliability)))
        .collect()
}
