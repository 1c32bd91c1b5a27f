use crate::error::Result;
use crate::graph::{Edge, Graph};
use crate::minimum_spanning_tree::union_find::UnionFind;
use crate::minimum_spanning_tree::SpanningTree;
use crate::sequence::Queue;
use num_traits::{CheckedAdd, NumAssign};
use tracing::debug;

/// Sorts all edges by weight once and accepts each edge joining two different
/// components. Each resulting tree is then rooted at its smallest vertex so every
/// other vertex has a joining edge.
#[derive(Default)]
pub struct Kruskal {
    queue: Queue<usize>,
}

impl Kruskal {
    pub fn solve<W>(&mut self, graph: &Graph<W>) -> Result<SpanningTree<W>>
    where
        W: NumAssign + CheckedAdd + Ord + Copy,
    {
        let n = graph.num_vertices();
        let mut edges: Vec<Edge<W>> = graph.edges().copied().collect();
        edges.sort_by_key(|e| e.weight);

        let mut components = UnionFind::new(n);
        let mut forest: Vec<Vec<Edge<W>>> = vec![Vec::new(); n];
        for e in edges {
            if components.union(e.from, e.to) {
                forest[e.from].push(e);
                forest[e.to].push(e);
            }
        }

        let mut tree = SpanningTree::new(n);
        let mut visited = vec![false; n];
        let mut roots = 0;
        for root in 0..n {
            if visited[root] {
                continue;
            }
            roots += 1;
            visited[root] = true;
            self.queue.clear();
            self.queue.enqueue(root);

            while let Some(v) = self.queue.dequeue() {
                for e in forest[v].iter() {
                    let w = e.other(v)?;
                    if !visited[w] {
                        visited[w] = true;
                        tree.connect(w, *e)?;
                        self.queue.enqueue(w);
                    }
                }
            }
        }

        debug!(components = roots, edges = tree.num_edges(), "kruskal done");
        Ok(tree)
    }
}
