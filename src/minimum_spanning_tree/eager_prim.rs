use crate::error::Result;
use crate::graph::{validate_vertex, Edge, Graph};
use crate::minimum_spanning_tree::SpanningTree;
use crate::priority_queue::IndexPriorityQueue;
use num_traits::{CheckedAdd, NumAssign};
use tracing::debug;

/// Prim over an indexed heap keyed by the lightest known edge into each outside vertex.
#[derive(Default)]
pub struct EagerPrim {
    marked: Vec<bool>,
}

impl EagerPrim {
    pub fn solve<W>(&mut self, graph: &Graph<W>, source: usize) -> Result<SpanningTree<W>>
    where
        W: NumAssign + CheckedAdd + Ord + Copy,
    {
        let n = graph.num_vertices();
        validate_vertex(source, n)?;
        let mut tree = SpanningTree::new(n);
        let mut best: Vec<Option<Edge<W>>> = vec![None; n];
        self.marked.clear();
        self.marked.resize(n, false);

        let mut pq = IndexPriorityQueue::new_min(n);
        pq.enqueue(source, W::zero())?;

        while let Some((v, _)) = pq.dequeue() {
            self.marked[v] = true;
            if let Some(e) = best[v] {
                tree.connect(v, e)?;
            }

            for e in graph.neighbors(v) {
                let w = e.other(v)?;
                if self.marked[w] || best[w].is_some_and(|b| b.weight <= e.weight) {
                    continue;
                }

                best[w] = Some(*e);
                if pq.contains(w)? {
                    pq.change_key(w, e.weight)?;
                } else {
                    pq.enqueue(w, e.weight)?;
                }
            }
        }

        debug!(source, edges = tree.num_edges(), "eager prim done");
        Ok(tree)
    }
}
