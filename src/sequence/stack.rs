use crate::sequence::ring_buffer::{Iter, RingBuffer, MIN_CAPACITY};

/// LIFO stack. Iteration runs from the bottom of the stack to the top.
pub struct Stack<T> {
    ring: RingBuffer<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Preallocates room for `capacity` items, rounded up to a power of two and at least
    /// [`MIN_CAPACITY`]. A hint larger than four times the live size is kept until pops
    /// halve it back into that bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { ring: RingBuffer::with_capacity(capacity) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    pub fn push(&mut self, item: T) {
        self.ring.push_back(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.ring.pop_back()
    }

    pub fn peek(&self) -> Option<&T> {
        self.ring.back()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.ring.back_mut()
    }

    pub fn clear(&mut self) {
        self.ring.clear();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.ring.iter()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push(item));
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut stack = Self::with_capacity(iter.size_hint().0);
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
