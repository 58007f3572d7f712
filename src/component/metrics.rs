use itertools::Itertools;
use crate::network::{Network, MBPS_PER_GBPS};


/// Sum of link delays along the path.
///
/// A missing link is skipped and contributes nothing, so the result alone
/// cannot tell a broken path from a zero-delay one.
pub fn total_delay(network: &Network, path: &[usize]) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(&u, &v)| match network.edge(u, v) {
            Some(edge) => edge.delay,
            None => {
                log::warn!("edge ({}, {}) not found while summing delay", u, v);
                0.0
            }
        })
        .sum()
}

/// `-ln(R)` where `R` is the product of link reliabilities
pub fn reliability_cost(network: &Network, path: &[usize]) -> f64 {
    let mut reliability = 1.0;
    for (&u, &v) in path.iter().tuple_windows() {
        match network.edge(u, v) {
            Some(edge) => reliability *= edge.reliability,
            None => {
                log::warn!("edge ({}, {}) not found while multiplying reliability", u, v);
                reliability = 0.0;
                break;
            }
        }
    }
    if reliability >= 1.0 {
        0.0
    } else if reliability <= 0.0 {
        f64::INFINITY
    } else {
        -reliability.ln()
    }
}

/// Sum of `1 / bandwidth` in Gbps. Unlike [`total_delay`], a missing link
/// makes the whole path infinitely expensive.
pub fn bandwidth_cost(network: &Network, path: &[usize]) -> f64 {
    let mut cost = 0.0;
    for (&u, &v) in path.iter().tuple_windows() {
        let edge = match network.edge(u, v) {
            Some(edge) => edge,
            None => {
                log::warn!("edge ({}, {}) not found while summing resource cost", u, v);
                return f64::INFINITY;
            }
        };
        let gbps = edge.bandwidth / MBPS_PER_GBPS;
        cost += if gbps > 0.0 { 1.0 / gbps } else { f64::INFINITY };
    }
    cost
}

/// `w_d * delay + w_r * reliability + w_c * resource`
///
/// Weights are not normalized here. Anything other than three non-NaN
/// weights scores as `+inf` so that a long search survives one bad input.
pub fn weighted_sum(delay: f64, reliability: f64, resource: f64, weights: &[f64]) -> f64 {
    if weights.len() != 3 || weights.iter().any(|w| w.is_nan()) {
        log::warn!("malformed weights {:?}, scoring as infinite", weights);
        return f64::INFINITY;
    }
    if weights.iter().any(|&w| w < 0.0) {
        log::warn!("negative weight in {:?}", weights);
    }
    weights[0] * delay + weights[1] * reliability + weights[2] * resource
}

/// The three objectives in weight order: delay, reliability cost, resource cost
pub fn objectives(network: &Network, path: &[usize]) -> [f64; 3] {
    [
        total_delay(network, path),
        reliability_cost(network, path),
        bandwidth_cost(network, path),
    ]
}
