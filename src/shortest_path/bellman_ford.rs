use crate::error::{Error, Result};
use crate::graph::{validate_vertex, Digraph};
use crate::shortest_path::ShortestPaths;
use num_traits::{CheckedAdd, NumAssign};
use tracing::debug;

/// Up to `V - 1` passes relaxing every edge, stopping at the first pass that changes
/// nothing. An edge that still relaxes afterwards proves a negative cycle reachable
/// from the source.
#[derive(Default)]
pub struct BellmanFord;

impl BellmanFord {
    pub fn solve<W>(&mut self, graph: &Digraph<W>, source: usize) -> Result<ShortestPaths<W>>
    where
        W: NumAssign + CheckedAdd + Ord + Copy,
    {
        validate_vertex(source, graph.num_vertices())?;
        let mut paths = ShortestPaths::new(graph.num_vertices(), source);

        let mut passes = 0;
        for _ in 1..graph.num_vertices() {
            passes += 1;
            let mut relaxed = false;
            for e in graph.edges() {
                relaxed |= paths.relax(e)?;
            }
            if !relaxed {
                break;
            }
        }

        for e in graph.edges() {
            if let Some(d) = paths.distance_through(e)? {
                if paths.tentative(e.to).map_or(true, |current| d < current) {
                    debug!(source, from = e.from, to = e.to, "negative cycle detected");
                    return Err(Error::NegativeCycle { vertex: e.to });
                }
            }
        }

        debug!(source, passes, reached = paths.num_reached(), "bellman-ford done");
        Ok(paths)
    }
}
