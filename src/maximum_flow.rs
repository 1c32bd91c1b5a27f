pub mod edmonds_karp;

pub use edmonds_karp::EdmondsKarp;

use crate::graph::FlowEdge;
use num_traits::NumAssign;

/// Maximum flow value together with the minimum cut found alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxFlow<Flow> {
    value: Flow,
    source_side: Vec<bool>,
    cut_edges: Vec<FlowEdge<Flow>>,
}

impl<Flow> MaxFlow<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    #[inline]
    pub fn value(&self) -> Flow {
        self.value
    }

    /// Whether `v` is on the source side of the minimum cut.
    pub fn in_cut(&self, v: usize) -> bool {
        self.source_side.get(v).copied().unwrap_or(false)
    }

    /// Saturated edges leaving the source side.
    pub fn cut_edges(&self) -> &[FlowEdge<Flow>] {
        &self.cut_edges
    }

    pub fn cut_capacity(&self) -> Flow {
        self.cut_edges.iter().fold(Flow::zero(), |sum, e| sum + e.capacity())
    }
}
