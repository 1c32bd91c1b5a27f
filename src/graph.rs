//! Graph representations over dense vertex ids `0..num_vertices`.
//!
//! All three representations are insert-only and can be read from a whitespace
//! separated stream: `V E` followed by `E` triples `from to weight` (or capacity).

pub mod digraph;
pub mod edge;
pub mod flow_network;
mod reader;
pub mod traversal;
pub mod undirected;

pub use digraph::Digraph;
pub use edge::{Edge, FlowEdge};
pub use flow_network::FlowNetwork;
pub use traversal::{DepthFirstIter, DepthFirstOrder};
pub use undirected::Graph;

use crate::error::{Error, Result};

#[inline]
pub(crate) fn validate_vertex(v: usize, num_vertices: usize) -> Result<()> {
    if v >= num_vertices {
        return Err(Error::VertexOutOfRange { vertex: v, num_vertices });
    }
    Ok(())
}
