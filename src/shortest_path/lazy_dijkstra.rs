use crate::error::Result;
use crate::graph::Digraph;
use crate::priority_queue::PriorityQueue;
use crate::shortest_path::{check_non_negative, ShortestPaths};
use num_traits::{CheckedAdd, NumAssign};
use tracing::debug;

/// Dijkstra over a plain heap of `(vertex, distance)` entries. Every relaxation pushes
/// a fresh entry; entries whose distance is worse than the recorded one are skipped.
#[derive(Default)]
pub struct LazyDijkstra;

impl LazyDijkstra {
    pub fn solve<W>(&mut self, graph: &Digraph<W>, source: usize) -> Result<ShortestPaths<W>>
    where
        W: NumAssign + CheckedAdd + Ord + Copy,
    {
        check_non_negative(graph, source)?;
        let mut paths = ShortestPaths::new(graph.num_vertices(), source);
        let mut pq = PriorityQueue::new(|a: &(usize, W), b: &(usize, W)| a.1 < b.1);
        pq.enqueue((source, W::zero()));

        let mut stale = 0usize;
        while let Some((v, dist)) = pq.dequeue() {
            if paths.tentative(v).map_or(true, |best| dist > best) {
                stale += 1;
                continue;
            }

            for e in graph.neighbors(v) {
                if paths.relax(e)? {
                    if let Some(new_dist) = paths.tentative(e.to) {
                        pq.enqueue((e.to, new_dist));
                    }
                }
            }
        }

        debug!(source, reached = paths.num_reached(), stale, "lazy dijkstra done");
        Ok(paths)
    }
}
