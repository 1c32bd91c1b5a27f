//! Single-source shortest paths on a weighted digraph.
//!
//! | solver            | weights          | time        |
//! |-------------------|------------------|-------------|
//! | [`Acyclic`]       | any, DAG only    | O(V + E)    |
//! | [`ArrayDijkstra`] | non-negative     | O(V^2)      |
//! | [`EagerDijkstra`] | non-negative     | O(E log V)  |
//! | [`LazyDijkstra`]  | non-negative     | O(E log E)  |
//! | [`BellmanFord`]   | no neg. cycle    | O(V E)      |
//! | [`Spfa`]          | no neg. cycle    | O(V E)      |

pub mod acyclic;
pub mod array_dijkstra;
pub mod bellman_ford;
pub mod eager_dijkstra;
pub mod lazy_dijkstra;
pub mod spfa;

pub use acyclic::Acyclic;
pub use array_dijkstra::ArrayDijkstra;
pub use bellman_ford::BellmanFord;
pub use eager_dijkstra::EagerDijkstra;
pub use lazy_dijkstra::LazyDijkstra;
pub use spfa::Spfa;

use crate::error::{Error, Result};
use crate::graph::{validate_vertex, Digraph, Edge};
use num_traits::{CheckedAdd, NumAssign};

/// Shortest-path tree from a fixed source. `None` distance means unreachable.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<W> {
    source: usize,
    dist_to: Vec<Option<W>>,
    edge_to: Vec<Option<Edge<W>>>,
}

impl<W> ShortestPaths<W>
where
    W: NumAssign + CheckedAdd + Ord + Copy,
{
    pub(crate) fn new(num_vertices: usize, source: usize) -> Self {
        let mut dist_to = vec![None; num_vertices];
        dist_to[source] = Some(W::zero());
        Self { source, dist_to, edge_to: vec![None; num_vertices] }
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn distances(&self) -> &[Option<W>] {
        &self.dist_to
    }

    pub fn dist_to(&self, v: usize) -> Option<W> {
        self.dist_to.get(v).copied().flatten()
    }

    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to(v).is_some()
    }

    /// Last edge on the best known path to `v`; `None` for the source and unreached vertices.
    pub fn edge_to(&self, v: usize) -> Option<&Edge<W>> {
        self.edge_to.get(v).and_then(Option::as_ref)
    }

    /// Edges of the shortest path from the source to `v`, in travel order.
    pub fn path_to(&self, v: usize) -> Option<Vec<Edge<W>>> {
        if !self.has_path_to(v) {
            return None;
        }

        let mut path = Vec::new();
        let mut u = v;
        while let Some(e) = self.edge_to(u) {
            if path.len() >= self.dist_to.len() {
                return None;
            }
            path.push(*e);
            u = e.from;
        }
        path.reverse();
        Some(path)
    }

    #[inline]
    pub(crate) fn tentative(&self, v: usize) -> Option<W> {
        self.dist_to[v]
    }

    /// Relaxes `e` out of its source vertex; returns whether the distance to `e.to` improved.
    #[inline]
    pub(crate) fn relax(&mut self, e: &Edge<W>) -> Result<bool> {
        let Some(new_dist) = self.distance_through(e)? else {
            return Ok(false);
        };
        if self.dist_to[e.to].map_or(true, |current| new_dist < current) {
            self.dist_to[e.to] = Some(new_dist);
            self.edge_to[e.to] = Some(*e);
            return Ok(true);
        }
        Ok(false)
    }

    /// Distance to `e.to` when arriving over `e`; `None` while `e.from` is unreached.
    #[inline]
    pub(crate) fn distance_through(&self, e: &Edge<W>) -> Result<Option<W>> {
        let Some(d) = self.dist_to[e.from] else {
            return Ok(None);
        };
        d.checked_add(&e.weight).map(Some).ok_or(Error::WeightOverflow { from: e.from, to: e.to })
    }

    pub(crate) fn num_reached(&self) -> usize {
        self.dist_to.iter().filter(|d| d.is_some()).count()
    }
}

pub(crate) fn check_non_negative<W>(graph: &Digraph<W>, source: usize) -> Result<()>
where
    W: NumAssign + Ord + Copy,
{
    validate_vertex(source, graph.num_vertices())?;
    match graph.edges().find(|e| e.weight < W::zero()) {
        Some(e) => Err(Error::NegativeWeight { from: e.from, to: e.to }),
        None => Ok(()),
    }
}
