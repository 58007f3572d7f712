use std::collections::VecDeque;
use std::iter;
use hashbrown::{HashMap, HashSet};
use serde::Deserialize;
use crate::utils::error::Error;


#[derive(Clone, Debug)]
pub struct Node {
    pub processing_delay: f64,
    pub reliability: f64,
    neighbors: Vec<usize>,
}

/// Attributes of a link as given by the graph provider
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Link {
    /// Mbps
    pub bandwidth: f64,
    /// ms
    pub delay: f64,
    pub reliability: f64,
}

#[derive(Clone, Debug)]
pub struct Edge {
    pub ends: (usize, usize),
    pub bandwidth: f64,
    pub delay: f64,
    pub reliability: f64,
}


impl Node {
    pub fn new(processing_delay: f64, reliability: f64) -> Self {
        Node { processing_delay, reliability, neighbors: vec![] }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::new(0.0, 1.0)
    }
}

impl Link {
    pub fn new(bandwidth: f64, delay: f64, reliability: f64) -> Self {
        Link { bandwidth, delay, reliability }
    }
}

impl Edge {
    pub fn new(ends: (usize, usize), link: &Link) -> Self {
        Edge {
            ends,
            bandwidth: link.bandwidth,
            delay: link.delay,
            reliability: link.reliability,
        }
    }
}

/// 無向簡單圖；每條邊以兩個方向各存一份
#[derive(Clone, Debug, Default)]
pub struct Network {
    nodes: Vec<Node>,
    edges: HashMap<(usize, usize), Edge>,
}

impl Network {
    pub fn new() -> Self {
        Self { ..Default::default() }
    }
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }
    pub fn contains(&self, node: usize) -> bool {
        node < self.nodes.len()
    }
    pub fn node(&self, id: usize) -> Option<&Node> {
        self.nodes.get(id)
    }
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.nodes.get(node)
            .map(|node| node.neighbors.as_slice())
            .unwrap_or(&[])
    }
    pub fn edge(&self, u: usize, v: usize) -> Option<&Edge> {
        self.edges.get(&(u, v))
    }
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.edges.contains_key(&(u, v))
    }
    /// Directed view of every edge, in no particular order
    pub fn edges(&self) -> impl Iterator<Item=&Edge> + '_ {
        self.edges.values()
    }
    pub fn add_nodes(&mut self, count: usize) {
        let nodes = iter::repeat_with(Node::default)
            .take(count);
        self.nodes.extend(nodes);
    }
    pub fn add_node(&mut self, node: Node) -> usize {
        let mut node = node;
        node.neighbors.clear();
        self.nodes.push(node);
        self.nodes.len() - 1
    }
    pub fn add_edges(&mut self, edges: Vec<(usize, usize, Link)>) -> Result<(), Error> {
        for (end0, end1, link) in edges {
            self.add_edge(end0, end1, &link)?;
        }
        Ok(())
    }
    pub fn add_edge(&mut self, end0: usize, end1: usize, link: &Link) -> Result<(), Error> {
        for &end in [end0, end1].iter() {
            if !self.contains(end) {
                return Err(Error::UnknownNode(end));
            }
        }
        if end0 == end1 {
            return Err(Error::SelfLoop(end0));
        }
        if self.has_edge(end0, end1) {
            return Err(Error::DuplicateEdge(end0, end1));
        }
        self.nodes[end0].neighbors.push(end1);
        self.nodes[end1].neighbors.push(end0);
        let ends = (end0, end1);
        self.edges.insert(ends, Edge::new(ends, link));
        let ends = (end1, end0);
        self.edges.insert(ends, Edge::new(ends, link));
        Ok(())
    }
    pub fn has_path(&self, src: usize, dst: usize) -> bool {
        if !self.contains(src) || !self.contains(dst) {
            return false;
        }
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(src);
        queue.push_back(src);
        while let Some(node) = queue.pop_front() {
            if node == dst {
                return true;
            }
            for &next in self.neighbors(node) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        false
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// 0 ─ 1 ─ 5 is the cheapest route; 4 only carries 200 Mbps toward 0 and 5
    pub fn ladder() -> Network {
        let mut network = Network::new();
        network.add_nodes(6);
        network.add_edges(vec![
            (0, 1, Link::new(1000.0, 2.0, 0.99)),
            (1, 5, Link::new(1000.0, 2.0, 0.99)),
            (0, 2, Link::new(800.0, 5.0, 0.98)),
            (2, 3, Link::new(900.0, 3.0, 0.99)),
            (3, 5, Link::new(700.0, 4.0, 0.97)),
            (0, 4, Link::new(200.0, 1.0, 0.999)),
            (4, 5, Link::new(200.0, 1.0, 0.999)),
            (1, 3, Link::new(600.0, 6.0, 0.95)),
            (2, 4, Link::new(500.0, 2.0, 0.98)),
        ]).unwrap();
        network
    }

    #[test]
    fn it_stores_both_directions() {
        let network = ladder();
        assert_eq!(network.node_count(), 6);
        assert_eq!(network.edge_count(), 9);
        assert_eq!(network.edge(0, 1).unwrap().ends, (0, 1));
        assert_eq!(network.edge(1, 0).unwrap().ends, (1, 0));
        assert_eq!(network.edge(3, 2).unwrap().bandwidth, 900.0);
        assert!(network.edge(0, 5).is_none());
    }
    #[test]
    fn it_keeps_neighbor_order() {
        let network = ladder();
        assert_eq!(network.neighbors(0), &[1, 2, 4]);
        assert_eq!(network.neighbors(5), &[1, 3, 4]);
        assert!(network.neighbors(42).is_empty());
    }
    #[test]
    fn it_rejects_non_simple_edges() {
        let mut network = ladder();
        let link = Link::new(100.0, 1.0, 0.9);
        assert!(matches!(network.add_edge(2, 2, &link), Err(Error::SelfLoop(2))));
        assert!(matches!(network.add_edge(1, 0, &link), Err(Error::DuplicateEdge(1, 0))));
        assert!(matches!(network.add_edge(0, 6, &link), Err(Error::UnknownNode(6))));
        assert_eq!(network.edge_count(), 9);
    }
    #[test]
    fn it_checks_reachability() {
        let mut network = ladder();
        network.add_node(Node::new(1.0, 0.99));
        assert!(network.has_path(0, 5));
        assert!(network.has_path(4, 3));
        assert!(!network.has_path(0, 6));
        assert!(!network.has_path(0, 7));
    }
}
