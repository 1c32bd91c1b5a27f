use crate::error::{Error, Result};
use crate::graph::Digraph;
use crate::sequence::Stack;
use num_traits::NumAssign;
use tracing::debug;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Reverse depth-first postorder. Reaching an in-progress vertex is a back edge,
/// i.e. a cycle.
#[derive(Default)]
pub struct DepthFirst {
    marks: Vec<Mark>,
    stack: Stack<(usize, usize)>,
}

impl DepthFirst {
    pub fn solve<W>(&mut self, graph: &Digraph<W>) -> Result<Vec<usize>>
    where
        W: NumAssign + Ord + Copy,
    {
        let n = graph.num_vertices();
        let mut order = Vec::with_capacity(n);

        self.marks.clear();
        self.marks.resize(n, Mark::Unvisited);
        self.stack.clear();

        for root in 0..n {
            if self.marks[root] != Mark::Unvisited {
                continue;
            }
            self.marks[root] = Mark::InProgress;
            self.stack.push((root, 0));

            while let Some(frame) = self.stack.peek_mut() {
                let (v, cursor) = *frame;
                let Some(e) = graph.neighbors(v).nth(cursor) else {
                    self.marks[v] = Mark::Done;
                    order.push(v);
                    self.stack.pop();
                    continue;
                };
                frame.1 += 1;

                match self.marks[e.to] {
                    Mark::Unvisited => {
                        self.marks[e.to] = Mark::InProgress;
                        self.stack.push((e.to, 0));
                    }
                    Mark::InProgress => {
                        debug!(from = v, to = e.to, "back edge found during depth-first ordering");
                        return Err(Error::CyclicGraph);
                    }
                    Mark::Done => {}
                }
            }
        }

        order.reverse();
        Ok(order)
    }
}
