#![allow(dead_code)]

use graph_algorithms::graph::{Digraph, FlowNetwork, Graph};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::TRACE).try_init();
}

pub fn digraph(num_vertices: usize, edges: &[(usize, usize, i64)]) -> Digraph<i64> {
    let mut graph = Digraph::new(num_vertices);
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

pub fn graph(num_vertices: usize, edges: &[(usize, usize, i64)]) -> Graph<i64> {
    let mut graph = Graph::new(num_vertices);
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

pub fn flow_network(num_vertices: usize, edges: &[(usize, usize, i64)]) -> FlowNetwork<i64> {
    let mut network = FlowNetwork::new(num_vertices);
    for &(from, to, capacity) in edges {
        network.add_edge(from, to, capacity).unwrap();
    }
    network
}

/// Deterministic pseudo-random stream for interleaving tests.
pub struct Lcg(pub u64);

impl Lcg {
    pub fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}
