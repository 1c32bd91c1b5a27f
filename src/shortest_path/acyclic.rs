use crate::error::Result;
use crate::graph::{validate_vertex, Digraph};
use crate::shortest_path::ShortestPaths;
use crate::topological::DepthFirst;
use num_traits::{CheckedAdd, NumAssign};
use tracing::debug;

/// Relaxes every edge once, in topological order. Negative weights are fine; a cyclic
/// input fails with [`Error::CyclicGraph`](crate::Error::CyclicGraph).
#[derive(Default)]
pub struct Acyclic {
    topological: DepthFirst,
}

impl Acyclic {
    pub fn solve<W>(&mut self, graph: &Digraph<W>, source: usize) -> Result<ShortestPaths<W>>
    where
        W: NumAssign + CheckedAdd + Ord + Copy,
    {
        validate_vertex(source, graph.num_vertices())?;
        let order = self.topological.solve(graph)?;

        let mut paths = ShortestPaths::new(graph.num_vertices(), source);
        for v in order {
            if paths.tentative(v).is_none() {
                continue;
            }
            for e in graph.neighbors(v) {
                paths.relax(e)?;
            }
        }

        debug!(source, reached = paths.num_reached(), "acyclic shortest paths done");
        Ok(paths)
    }
}
