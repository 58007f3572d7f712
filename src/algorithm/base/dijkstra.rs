use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::f64::INFINITY as INF;

use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use crate::network::{Network, Path};


/// Reversed so the queue pops the nearest node first
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct Distance(Reverse<OrderedFloat<f64>>);

impl From<f64> for Distance {
    fn from(dist: f64) -> Self {
        Distance(Reverse(OrderedFloat(dist)))
    }
}

impl From<Distance> for f64 {
    fn from(dist: Distance) -> Self {
        (dist.0).0.into_inner()
    }
}


/// What a hop costs while searching
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Metric {
    /// Every hop costs 1, i.e. the unweighted shortest path
    Hops,
    /// Link delay in ms
    Delay,
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Hops
    }
}

/// Single-source shortest paths, cached per root.
#[derive(Default)]
pub struct Dijkstra {
    metric: Metric,
    dist: HashMap<(usize, usize), f64>,
    pred: HashMap<(usize, usize), usize>,
    ignore_nodes: HashSet<usize>,
    ignore_edges: HashSet<(usize, usize)>,
}


impl Dijkstra {
    pub fn new(metric: Metric) -> Self {
        Dijkstra { metric, ..Default::default() }
    }
    pub fn compute_once(&mut self, graph: &Network, r: usize) {
        if self.dist.contains_key(&(r, r)) || !graph.contains(r) { return }
        let mut heap: PriorityQueue<usize, Distance> = PriorityQueue::new();
        let mut seen = HashMap::new();

        seen.insert(r, 0.0);
        heap.push(r, 0.0.into());

        // 從優先權佇列中移除，並塞進最終 dist map
        while let Some((v, rv_dist)) = heap.pop() {
            let rv_dist: f64 = rv_dist.into();
            match self.dist.contains_key(&(r, v)) {
                true  => { continue; },
                false => { self.dist.insert((r, v), rv_dist); },
            }
            for &u in graph.neighbors(v) {
                if self.ignore_nodes.contains(&u)
                    || self.ignore_edges.contains(&(v, u)) { continue; }

                let cost = match self.metric {
                    Metric::Hops  => 1.0,
                    Metric::Delay => graph.edge(v, u).map_or(INF, |edge| edge.delay),
                };
                let ru_dist = rv_dist + cost;

                if self.dist.contains_key(&(r, u))
                    || ru_dist >= *seen.get(&u).unwrap_or(&INF) { continue; }

                self.pred.insert((r, u), v);
                seen.insert(u, ru_dist);
                match heap.get(&u) {
                    Some(_) => { heap.change_priority(&u, ru_dist.into()); },
                    None    => { heap.push(u, ru_dist.into()); },
                }
            }
        }
    }
    /// Requires [`Dijkstra::compute_once`] on `src` beforehand
    pub fn shortest_path(&self, src: usize, dst: usize) -> Option<Path> {
        if !self.dist.contains_key(&(src, dst)) {
            return None;
        }
        let mut path = vec![dst];
        let mut node = dst;
        while node != src {
            node = *self.pred.get(&(src, node))?;
            path.push(node);
        }
        path.reverse();
        Some(path)
    }
    /// Computes the root lazily, then backtraces
    pub fn path(&mut self, graph: &Network, src: usize, dst: usize) -> Option<Path> {
        self.compute_once(graph, src);
        self.shortest_path(src, dst)
    }
    pub fn distance(&self, src: usize, dst: usize) -> Option<f64> {
        self.dist.get(&(src, dst)).cloned()
    }
    /// Drops cached roots, since they were computed under the old ignore sets
    pub fn ignore(&mut self, nodes: HashSet<usize>, edges: HashSet<(usize, usize)>) {
        self.ignore_nodes = nodes;
        self.ignore_edges = edges;
        self.dist.clear();
        self.pred.clear();
    }
}



#[cfg(test)]
mod test {
    use std::collections::HashSet;
    use priority_queue::PriorityQueue;
    use super::{Dijkstra, Distance, Metric};
    use crate::network::{ladder, Link, Network};

    #[test]
    fn test_distance_order() {
        let mut heap: PriorityQueue<usize, Distance> = PriorityQueue::new();
        heap.push(7, 3.5.into());
        heap.push(8, 0.5.into());
        heap.push(9, 2.0.into());
        heap.change_priority(&7, 0.1.into());
        let order: Vec<(usize, f64)> = std::iter::from_fn(|| heap.pop())
            .map(|(node, dist)| (node, dist.into()))
            .collect();
        assert_eq!(order, vec![(7, 0.1), (8, 0.5), (9, 2.0)]);
    }
    #[test]
    fn test_dijkstra_hops() {
        let graph = ladder();
        let mut dijkstra = Dijkstra::new(Metric::Hops);
        let path = dijkstra.path(&graph, 0, 5).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(dijkstra.distance(0, 5), Some(2.0));
        assert_eq!(dijkstra.path(&graph, 3, 3), Some(vec![3]));
        assert_eq!(dijkstra.path(&graph, 2, 1).map(|p| p.len()), Some(3));
    }
    #[test]
    fn test_dijkstra_delay() {
        let graph = ladder();
        let mut dijkstra = Dijkstra::new(Metric::Delay);
        // 0-4-5 has delay 2 but 0-1-5 has delay 4
        assert_eq!(dijkstra.path(&graph, 0, 5), Some(vec![0, 4, 5]));
        assert_eq!(dijkstra.distance(0, 5), Some(2.0));
        assert_eq!(dijkstra.path(&graph, 3, 0).map(|p| p.len()), Some(4));
        assert_eq!(dijkstra.distance(3, 0), Some(6.0));
    }
    #[test]
    fn test_dijkstra_ignore() {
        let graph = ladder();
        let mut dijkstra = Dijkstra::new(Metric::Delay);
        dijkstra.compute_once(&graph, 0);
        let edges: HashSet<_> = vec![(0, 4), (4, 0), (4, 5), (5, 4), (2, 4), (4, 2)]
            .into_iter()
            .collect();
        dijkstra.ignore(HashSet::new(), edges);
        assert_eq!(dijkstra.path(&graph, 0, 5), Some(vec![0, 1, 5]));
        assert_eq!(dijkstra.path(&graph, 0, 4), None);

        dijkstra.ignore(vec![1].into_iter().collect(), HashSet::new());
        assert_eq!(dijkstra.path(&graph, 0, 5), Some(vec![0, 4, 5]));
    }
    #[test]
    fn test_dijkstra_disconnected() {
        let mut graph = Network::new();
        graph.add_nodes(4);
        graph.add_edges(vec![(0, 1, Link::new(100.0, 1.0, 0.9))]).unwrap();
        let mut dijkstra = Dijkstra::default();
        assert_eq!(dijkstra.path(&graph, 0, 1), Some(vec![0, 1]));
        assert_eq!(dijkstra.path(&graph, 0, 3), None);
        assert_eq!(dijkstra.path(&graph, 9, 9), None);
    }
}
