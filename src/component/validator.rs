use hashbrown::HashSet;
use itertools::Itertools;
use crate::network::Network;


/// No node appears twice. Empty and single-node paths are trivially simple.
pub fn is_simple_path(path: &[usize]) -> bool {
    let mut visited = HashSet::with_capacity(path.len());
    for &node in path {
        if !visited.insert(node) {
            log::trace!("path revisits node {}", node);
            return false;
        }
    }
    true
}

/// Every hop exists and offers at least `required_bandwidth` Mbps.
///
/// A missing edge fails the check, as opposed to the lenient delay metric.
pub fn has_capacity(network: &Network, path: &[usize], required_bandwidth: f64) -> bool {
    for (&u, &v) in path.iter().tuple_windows() {
        let edge = match network.edge(u, v) {
            Some(edge) => edge,
            None => {
                log::warn!("edge ({}, {}) does not exist in network", u, v);
                return false;
            }
        };
        if edge.bandwidth < required_bandwidth {
            log::trace!("edge ({}, {}) offers {:.1} < {:.1} Mbps",
                        u, v, edge.bandwidth, required_bandwidth);
            return false;
        }
    }
    true
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::ladder;
    use proptest::prelude::*;

    #[test]
    fn it_detects_cycles() {
        assert!(is_simple_path(&[]));
        assert!(is_simple_path(&[3]));
        assert!(is_simple_path(&[0, 1, 3, 5]));
        assert!(!is_simple_path(&[0, 1, 0, 2]));
        assert!(!is_simple_path(&[0, 2, 3, 2, 5]));
    }
    #[test]
    fn it_checks_bandwidth_floor() {
        let network = ladder();
        assert!(has_capacity(&network, &[0, 1, 5], 1000.0));
        assert!(!has_capacity(&network, &[0, 1, 5], 1000.1));
        assert!(has_capacity(&network, &[0, 2, 4], 500.0));
        assert!(!has_capacity(&network, &[0, 4, 5], 500.0));
        assert!(has_capacity(&network, &[0, 4, 5], 200.0));
    }
    #[test]
    fn it_fails_capacity_on_missing_edge() {
        let network = ladder();
        assert!(!has_capacity(&network, &[0, 5], 0.0));
        assert!(has_capacity(&network, &[0], 1e9));
        assert!(has_capacity(&network, &[], 1e9));
    }

    proptest! {
        #[test]
        fn capacity_is_monotonic(lo in 0.0..1200.0f64, hi in 0.0..1200.0f64) {
            let network = ladder();
            let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
            for path in [vec![0, 1, 5], vec![0, 2, 3, 5], vec![0, 4, 5], vec![0, 1, 3, 2, 4]].iter() {
                if has_capacity(&network, path, hi) {
                    prop_assert!(has_capacity(&network, path, lo));
                }
            }
        }
    }
}
