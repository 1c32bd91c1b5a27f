//! Sequence containers backed by a power-of-two circular buffer.
//!
//! Capacity doubles when the buffer is full and halves once occupancy drops to a
//! quarter, never going below [`MIN_CAPACITY`]. Outside of an explicit `with_capacity`
//! hint, capacity never exceeds four times the live size (or the floor).

pub mod deque;
pub mod queue;
mod ring_buffer;
pub mod stack;

pub use deque::Deque;
pub use queue::Queue;
pub use ring_buffer::{Iter, MIN_CAPACITY};
pub use stack::Stack;
