pub mod error;
pub mod graph;
pub mod maximum_flow;
pub mod minimum_spanning_tree;
pub mod priority_queue;
pub mod sequence;
pub mod shortest_path;
pub mod topological;

pub use error::{Error, Result};
