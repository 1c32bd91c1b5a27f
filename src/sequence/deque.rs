use crate::sequence::ring_buffer::{Iter, RingBuffer, MIN_CAPACITY};

/// Double-ended queue.
pub struct Deque<T> {
    ring: RingBuffer<T>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
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

    pub fn push_front(&mut self, item: T) {
        self.ring.push_front(item);
    }

    pub fn push_back(&mut self, item: T) {
        self.ring.push_back(item);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.ring.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.ring.pop_back()
    }

    pub fn front(&self) -> Option<&T> {
        self.ring.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.ring.back()
    }

    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// Front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.ring.iter()
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut deque = Self::with_capacity(iter.size_hint().0);
        deque.extend(iter);
        deque
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
