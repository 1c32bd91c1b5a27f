//! Minimum spanning trees of an undirected weighted graph.
//!
//! The Prim variants grow one tree from a source vertex and span only its component;
//! [`Kruskal`] needs no source and spans every component (a minimum spanning forest).

pub mod array_prim;
pub mod eager_prim;
pub mod kruskal;
pub mod lazy_prim;
mod union_find;

pub use array_prim::ArrayPrim;
pub use eager_prim::EagerPrim;
pub use kruskal::Kruskal;
pub use lazy_prim::LazyPrim;

use crate::error::{Error, Result};
use crate::graph::Edge;
use num_traits::{CheckedAdd, NumAssign};

#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<W> {
    edge_to: Vec<Option<Edge<W>>>,
    weight: W,
}

impl<W> SpanningTree<W>
where
    W: NumAssign + CheckedAdd + Ord + Copy,
{
    pub(crate) fn new(num_vertices: usize) -> Self {
        Self { edge_to: vec![None; num_vertices], weight: W::zero() }
    }

    /// Total weight of the tree edges.
    #[inline]
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Edge joining `v` to the tree; `None` for a root or a vertex outside the tree.
    pub fn edge_to(&self, v: usize) -> Option<&Edge<W>> {
        self.edge_to.get(v).and_then(Option::as_ref)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.edge_to.iter().flatten()
    }

    pub fn num_edges(&self) -> usize {
        self.edges().count()
    }

    #[inline]
    pub(crate) fn connect(&mut self, v: usize, e: Edge<W>) -> Result<()> {
        self.weight = self.weight.checked_add(&e.weight).ok_or(Error::WeightOverflow { from: e.from, to: e.to })?;
        self.edge_to[v] = Some(e);
        Ok(())
    }
}
