use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("vertex {vertex} is out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },

    #[error("id {id} is out of range for a priority queue of capacity {capacity}")]
    IdOutOfRange { id: usize, capacity: usize },

    #[error("vertex {vertex} is not an endpoint of the edge")]
    NotAnEndpoint { vertex: usize },

    #[error("edge {from} -> {to} has a negative weight")]
    NegativeWeight { from: usize, to: usize },

    #[error("flow edge {from} -> {to} has a negative capacity")]
    NegativeCapacity { from: usize, to: usize },

    #[error("sum along edge {from} -> {to} overflows the weight type")]
    WeightOverflow { from: usize, to: usize },

    #[error("flow on edge {from} -> {to} would leave [0, capacity]")]
    FlowOutOfBounds { from: usize, to: usize },

    #[error("edge {from} -> {to} already carries flow")]
    FlowNotCleared { from: usize, to: usize },

    #[error("source and sink are the same vertex {0}")]
    SourceIsSink(usize),

    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEndOfInput { expected: &'static str },

    #[error("invalid integer token {token:?}")]
    InvalidInteger { token: String },

    #[error("{what} must not be negative, found {value}")]
    NegativeValue { what: &'static str, value: i64 },

    #[error("the digraph has a directed cycle")]
    CyclicGraph,

    #[error("negative cycle reachable from the source (detected at vertex {vertex})")]
    NegativeCycle { vertex: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
