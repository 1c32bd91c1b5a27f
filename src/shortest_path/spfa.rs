use crate::error::{Error, Result};
use crate::graph::{validate_vertex, Digraph};
use crate::sequence::Queue;
use crate::shortest_path::ShortestPaths;
use num_traits::{CheckedAdd, NumAssign};
use tracing::debug;

/// Queue-driven Bellman-Ford: only vertices whose distance changed since they were
/// last dequeued get their edges relaxed again.
///
/// A vertex re-queued by relaxation `V` times aborts the run with
/// [`Error::NegativeCycle`].
#[derive(Default)]
pub struct Spfa {
    queue: Queue<usize>,
    on_queue: Vec<bool>,
    enqueue_counts: Vec<usize>,
}

impl Spfa {
    pub fn solve<W>(&mut self, graph: &Digraph<W>, source: usize) -> Result<ShortestPaths<W>>
    where
        W: NumAssign + CheckedAdd + Ord + Copy,
    {
        let n = graph.num_vertices();
        validate_vertex(source, n)?;
        let mut paths = ShortestPaths::new(n, source);

        self.queue.clear();
        self.on_queue.clear();
        self.on_queue.resize(n, false);
        self.enqueue_counts.clear();
        self.enqueue_counts.resize(n, 0);

        self.queue.enqueue(source);
        self.on_queue[source] = true;

        while let Some(v) = self.queue.dequeue() {
            self.on_queue[v] = false;

            for e in graph.neighbors(v) {
                if !paths.relax(e)? || self.on_queue[e.to] {
                    continue;
                }

                self.enqueue_counts[e.to] += 1;
                if self.enqueue_counts[e.to] >= n {
                    debug!(source, vertex = e.to, "relaxation limit reached, negative cycle");
                    return Err(Error::NegativeCycle { vertex: e.to });
                }
                self.queue.enqueue(e.to);
                self.on_queue[e.to] = true;
            }
        }

        debug!(source, reached = paths.num_reached(), "spfa done");
        Ok(paths)
    }
}
