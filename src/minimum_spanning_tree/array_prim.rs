use crate::error::Result;
use crate::graph::{validate_vertex, Edge, Graph};
use crate::minimum_spanning_tree::SpanningTree;
use num_traits::{CheckedAdd, NumAssign};
use tracing::debug;

/// Prim with a linear scan for the lightest edge into the tree. O(V^2), no heap.
#[derive(Default)]
pub struct ArrayPrim {
    marked: Vec<bool>,
}

impl ArrayPrim {
    pub fn solve<W>(&mut self, graph: &Graph<W>, source: usize) -> Result<SpanningTree<W>>
    where
        W: NumAssign + CheckedAdd + Ord + Copy,
    {
        let n = graph.num_vertices();
        validate_vertex(source, n)?;
        let mut tree = SpanningTree::new(n);
        // lightest known edge from the tree to each outside vertex
        let mut best: Vec<Option<Edge<W>>> = vec![None; n];
        self.marked.clear();
        self.marked.resize(n, false);

        let mut v = source;
        loop {
            self.marked[v] = true;
            if let Some(e) = best[v] {
                tree.connect(v, e)?;
            }

            for e in graph.neighbors(v) {
                let w = e.other(v)?;
                if !self.marked[w] && best[w].map_or(true, |b| e.weight < b.weight) {
                    best[w] = Some(*e);
                }
            }

            let next = (0..n).filter(|&w| !self.marked[w]).filter_map(|w| best[w].map(|e| (e.weight, w))).min();
            match next {
                Some((_, w)) => v = w,
                None => break,
            }
        }

        debug!(source, edges = tree.num_edges(), "array prim done");
        Ok(tree)
    }
}
