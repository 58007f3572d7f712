mod network;

pub use network::{Edge, Link, Network, Node};

#[cfg(test)]
pub(crate) use network::tests::ladder;

pub type Path = Vec<usize>;

/// Mbps per Gbps
pub const MBPS_PER_GBPS: f64 = 1000.0;
