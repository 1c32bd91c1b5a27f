use crate::error::Result;
use crate::graph::Digraph;
use crate::shortest_path::{check_non_negative, ShortestPaths};
use num_traits::{CheckedAdd, NumAssign};
use tracing::debug;

/// Dijkstra with a linear scan for the closest unfinalized vertex. O(V^2), no heap.
#[derive(Default)]
pub struct ArrayDijkstra {
    marked: Vec<bool>,
}

impl ArrayDijkstra {
    pub fn solve<W>(&mut self, graph: &Digraph<W>, source: usize) -> Result<ShortestPaths<W>>
    where
        W: NumAssign + CheckedAdd + Ord + Copy,
    {
        check_non_negative(graph, source)?;
        let n = graph.num_vertices();
        let mut paths = ShortestPaths::new(n, source);
        self.marked.clear();
        self.marked.resize(n, false);

        loop {
            // closest unmarked vertex
            let closest = (0..n).filter(|&v| !self.marked[v]).filter_map(|v| paths.tentative(v).map(|d| (d, v))).min();
            let Some((_, v)) = closest else {
                break;
            };

            self.marked[v] = true;
            for e in graph.neighbors(v) {
                if !self.marked[e.to] {
                    paths.relax(e)?;
                }
            }
        }

        debug!(source, reached = paths.num_reached(), "array dijkstra done");
        Ok(paths)
    }
}
