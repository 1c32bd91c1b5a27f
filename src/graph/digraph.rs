use crate::error::Result;
use crate::graph::edge::Edge;
use crate::graph::reader::read_edge_list;
use crate::graph::traversal::{DepthFirstIter, DepthFirstOrder};
use crate::graph::validate_vertex;
use num_traits::NumAssign;
use std::io::Read;
use std::str::FromStr;
use tracing::debug;

/// Directed weighted graph. An edge `from -> to` is stored only at `from`.
#[derive(Debug, Clone)]
pub struct Digraph<W> {
    num_edges: usize,
    adj: Vec<Vec<Edge<W>>>,
    in_degrees: Vec<usize>,
    out_degrees: Vec<usize>,
}

impl<W> Digraph<W>
where
    W: NumAssign + Ord + Copy,
{
    pub fn new(num_vertices: usize) -> Self {
        Self { num_edges: 0, adj: vec![Vec::new(); num_vertices], in_degrees: vec![0; num_vertices], out_degrees: vec![0; num_vertices] }
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
        debug!(vertices = graph.num_vertices(), edges = graph.num_edges(), "digraph read from stream");
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

        self.adj[from].push(Edge::new(from, to, weight));
        self.out_degrees[from] += 1;
        self.in_degrees[to] += 1;
        self.num_edges += 1;
        Ok(())
    }

    pub fn in_degree(&self, v: usize) -> Result<usize> {
        validate_vertex(v, self.num_vertices())?;
        Ok(self.in_degrees[v])
    }

    pub fn out_degree(&self, v: usize) -> Result<usize> {
        validate_vertex(v, self.num_vertices())?;
        Ok(self.out_degrees[v])
    }

    /// Edges leaving `v`, in insertion order.
    pub fn adjacent(&self, v: usize) -> Result<std::slice::Iter<'_, Edge<W>>> {
        validate_vertex(v, self.num_vertices())?;
        Ok(self.adj[v].iter())
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adj.iter().flatten()
    }

    /// A new digraph with every edge direction flipped.
    pub fn reversed(&self) -> Self {
        let mut reversed = Self::new(self.num_vertices());
        for e in self.edges() {
            reversed.adj[e.to].push(Edge::new(e.to, e.from, e.weight));
            reversed.out_degrees[e.to] += 1;
            reversed.in_degrees[e.from] += 1;
            reversed.num_edges += 1;
        }
        reversed
    }

    /// Depth-first preorder over all vertices, restarting from the smallest unvisited one.
    pub fn pre_order(&self) -> DepthFirstIter<'_, W> {
        DepthFirstIter::new(self, DepthFirstOrder::Pre)
    }

    /// Depth-first postorder over all vertices, restarting from the smallest unvisited one.
    pub fn post_order(&self) -> DepthFirstIter<'_, W> {
        DepthFirstIter::new(self, DepthFirstOrder::Post)
    }

    #[inline]
    pub(crate) fn neighbors(&self, v: usize) -> std::slice::Iter<'_, Edge<W>> {
        self.adj[v].iter()
    }
}
