use crate::error::Result;
use crate::graph::edge::Edge;
use crate::graph::reader::read_edge_list;
use crate::graph::validate_vertex;
use num_traits::NumAssign;
use std::io::Read;
use std::str::FromStr;
use tracing::debug;

/// Undirected weighted graph.
///
/// Every edge is stored in the adjacency lists of both endpoints; a self-loop is
/// stored once and counts twice toward the degree.
#[derive(Debug, Clone)]
pub struct Graph<W> {
    num_edges: usize,
    adj: Vec<Vec<Edge<W>>>,
    degrees: Vec<usize>,
}

impl<W> Graph<W>
where
    W: NumAssign + Ord + Copy,
{
    pub fn new(num_vertices: usize) -> Self {
        Self { num_edges: 0, adj: vec![Vec::new(); num_vertices], degrees: vec![0; num_vertices] }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self>
    where
        W: FromStr,
    {
        let list = read_edge_list(reader)?;
        let mut graph = Self::new(list.num_vertices);
        for (from, to, weight) in list.edges {
            graph.add_edge(from, to, weight)?;
        }
        debug!(vertices = graph.num_vertices(), edges = graph.num_edges(), "graph read from stream");
        Ok(graph)
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        validate_vertex(from, self.num_vertices())?;
        validate_vertex(to, self.num_vertices())?;

        let edge = Edge::new(from, to, weight);
        self.adj[from].push(edge);
        if from != to {
            self.adj[to].push(edge);
        }
        self.degrees[from] += 1;
        self.degrees[to] += 1;
        self.num_edges += 1;
        Ok(())
    }

    pub fn degree(&self, v: usize) -> Result<usize> {
        validate_vertex(v, self.num_vertices())?;
        Ok(self.degrees[v])
    }

    /// Edges touching `v`, in insertion order.
    pub fn adjacent(&self, v: usize) -> Result<std::slice::Iter<'_, Edge<W>>> {
        validate_vertex(v, self.num_vertices())?;
        Ok(self.adj[v].iter())
    }

    /// Every edge exactly once, reported from its larger endpoint.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adj.iter().enumerate().flat_map(|(v, edges)| edges.iter().filter(move |e| e.from.max(e.to) == v))
    }

    #[inline]
    pub(crate) fn neighbors(&self, v: usize) -> std::slice::Iter<'_, Edge<W>> {
        self.adj[v].iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_reports_each_edge_once() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(2, 1, 2).unwrap();
        graph.add_edge(3, 3, 3).unwrap();

        let mut weights: Vec<_> = graph.edges().map(|e| e.weight).collect();
        weights.sort();
        assert_eq!(weights, vec![1, 2, 3]);
        assert_eq!(graph.degree(3).unwrap(), 2);
        assert_eq!(graph.adjacent(3).unwrap().count(), 1);
    }
}
