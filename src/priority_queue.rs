//! Comparator-driven binary heaps.
//!
//! A comparator `better(a, b)` returns `true` when `a` must leave the queue before `b`,
//! so `a < b` gives a min-heap and `a > b` a max-heap.

pub mod binary_heap;
pub mod index_heap;

pub use binary_heap::PriorityQueue;
pub use index_heap::IndexPriorityQueue;

pub type Comparator<T> = fn(&T, &T) -> bool;

pub(crate) fn less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

pub(crate) fn greater<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}
