use crate::error::Result;
use crate::graph::{validate_vertex, Edge, Graph};
use crate::minimum_spanning_tree::SpanningTree;
use crate::priority_queue::PriorityQueue;
use num_traits::{CheckedAdd, NumAssign};
use tracing::debug;

/// Prim over a plain heap of crossing edges. Edges whose endpoints both joined the
/// tree after being queued are skipped when dequeued.
#[derive(Default)]
pub struct LazyPrim {
    marked: Vec<bool>,
}

impl LazyPrim {
    pub fn solve<W>(&mut self, graph: &Graph<W>, source: usize) -> Result<SpanningTree<W>>
    where
        W: NumAssign + CheckedAdd + Ord + Copy,
    {
        let n = graph.num_vertices();
        validate_vertex(source, n)?;
        let mut tree = SpanningTree::new(n);
        self.marked.clear();
        self.marked.resize(n, false);

        let mut pq = PriorityQueue::new(|a: &Edge<W>, b: &Edge<W>| a.weight < b.weight);
        self.scan(graph, source, &mut pq)?;

        while let Some(e) = pq.dequeue() {
            let (v, w) = (e.from, e.to);
            if self.marked[v] && self.marked[w] {
                continue;
            }

            let reached = if self.marked[v] { w } else { v };
            tree.connect(reached, e)?;
            self.scan(graph, reached, &mut pq)?;
        }

        debug!(source, edges = tree.num_edges(), "lazy prim done");
        Ok(tree)
    }

    fn scan<W, C>(&mut self, graph: &Graph<W>, v: usize, pq: &mut PriorityQueue<Edge<W>, C>) -> Result<()>
    where
        W: NumAssign + Ord + Copy,
        C: Fn(&Edge<W>, &Edge<W>) -> bool,
    {
        self.marked[v] = true;
        for e in graph.neighbors(v) {
            if !self.marked[e.other(v)?] {
                pq.enqueue(*e);
            }
        }
        Ok(())
    }
}
