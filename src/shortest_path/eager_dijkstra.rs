use crate::error::Result;
use crate::graph::Digraph;
use crate::priority_queue::IndexPriorityQueue;
use crate::shortest_path::{check_non_negative, ShortestPaths};
use num_traits::{CheckedAdd, NumAssign};
use tracing::debug;

/// Dijkstra over an indexed heap: an improved vertex has its key changed in place,
/// so the queue never holds more than one entry per vertex.
#[derive(Default)]
pub struct EagerDijkstra;

impl EagerDijkstra {
    pub fn solve<W>(&mut self, graph: &Digraph<W>, source: usize) -> Result<ShortestPaths<W>>
    where
        W: NumAssign + CheckedAdd + Ord + Copy,
    {
        check_non_negative(graph, source)?;
        let mut paths = ShortestPaths::new(graph.num_vertices(), source);
        let mut pq = IndexPriorityQueue::new_min(graph.num_vertices());
        pq.enqueue(source, W::zero())?;

        while let Some((v, _)) = pq.dequeue() {
            for e in graph.neighbors(v) {
                if !paths.relax(e)? {
                    continue;
                }
                let Some(dist) = paths.tentative(e.to) else {
                    continue;
                };
                if pq.contains(e.to)? {
                    pq.change_key(e.to, dist)?;
                } else {
                    pq.enqueue(e.to, dist)?;
                }
            }
        }

        debug!(source, reached = paths.num_reached(), "eager dijkstra done");
        Ok(paths)
    }
}
