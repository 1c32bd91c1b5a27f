use crate::graph::digraph::Digraph;
use crate::sequence::Stack;
use num_traits::NumAssign;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthFirstOrder {
    Pre,
    Post,
}

/// Lazy depth-first traversal of a digraph, driven by an explicit stack of
/// `(vertex, next adjacency index)` frames.
pub struct DepthFirstIter<'a, W> {
    graph: &'a Digraph<W>,
    order: DepthFirstOrder,
    marked: Vec<bool>,
    stack: Stack<(usize, usize)>,
    next_root: usize,
}

impl<'a, W> DepthFirstIter<'a, W>
where
    W: NumAssign + Ord + Copy,
{
    pub(crate) fn new(graph: &'a Digraph<W>, order: DepthFirstOrder) -> Self {
        Self { graph, order, marked: vec![false; graph.num_vertices()], stack: Stack::new(), next_root: 0 }
    }

    fn visit(&mut self, v: usize) -> Option<usize> {
        self.marked[v] = true;
        self.stack.push((v, 0));
        (self.order == DepthFirstOrder::Pre).then_some(v)
    }
}

impl<W> Iterator for DepthFirstIter<'_, W>
where
    W: NumAssign + Ord + Copy,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            let Some(frame) = self.stack.peek_mut() else {
                while self.next_root < self.marked.len() && self.marked[self.next_root] {
                    self.next_root += 1;
                }
                if self.next_root == self.marked.len() {
                    return None;
                }
                if let Some(v) = self.visit(self.next_root) {
                    return Some(v);
                }
                continue;
            };

            let (v, cursor) = *frame;
            match self.graph.neighbors(v).nth(cursor) {
                Some(edge) => {
                    frame.1 += 1;
                    let w = edge.to;
                    if !self.marked[w] {
                        if let Some(w) = self.visit(w) {
                            return Some(w);
                        }
                    }
                }
                None => {
                    self.stack.pop();
                    if self.order == DepthFirstOrder::Post {
                        return Some(v);
                    }
                }
            }
        }
    }
}

impl<W> FusedIterator for DepthFirstIter<'_, W> where W: NumAssign + Ord + Copy {}
