//! Topological orderings of a digraph.
//!
//! Both solvers return every vertex exactly once such that `u` precedes `v` for every
//! edge `u -> v`, or [`Error::CyclicGraph`](crate::Error::CyclicGraph) when no such order exists.
//! The two solvers may return different valid orders.

pub mod depth_first;
pub mod kahn;

pub use depth_first::DepthFirst;
pub use kahn::Kahn;
