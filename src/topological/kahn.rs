use crate::error::{Error, Result};
use crate::graph::Digraph;
use crate::sequence::Queue;
use num_traits::NumAssign;
use tracing::debug;

/// Peels zero in-degree vertices breadth-first.
#[derive(Default)]
pub struct Kahn {
    queue: Queue<usize>,
    remaining_in_degrees: Vec<usize>,
}

impl Kahn {
    pub fn solve<W>(&mut self, graph: &Digraph<W>) -> Result<Vec<usize>>
    where
        W: NumAssign + Ord + Copy,
    {
        let n = graph.num_vertices();
        let mut order = Vec::with_capacity(n);

        self.queue.clear();
        self.remaining_in_degrees.clear();
        for v in 0..n {
            let in_degree = graph.in_degree(v)?;
            self.remaining_in_degrees.push(in_degree);
            if in_degree == 0 {
                self.queue.enqueue(v);
            }
        }

        while let Some(v) = self.queue.dequeue() {
            order.push(v);
            for e in graph.neighbors(v) {
                self.remaining_in_degrees[e.to] -= 1;
                if self.remaining_in_degrees[e.to] == 0 {
                    self.queue.enqueue(e.to);
                }
            }
        }

        if order.len() != n {
            debug!(ordered = order.len(), vertices = n, "cycle blocks topological peeling");
            return Err(Error::CyclicGraph);
        }
        Ok(order)
    }
}
