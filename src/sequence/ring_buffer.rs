use std::iter::FusedIterator;
use tracing::trace;

pub const MIN_CAPACITY: usize = 64;

pub(crate) struct RingBuffer<T> {
    head: usize,
    len: usize,
    buffer: Vec<Option<T>>,
}

impl<T> RingBuffer<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY).next_power_of_two();
        Self { head: 0, len: 0, buffer: Self::allocate(capacity) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    fn mask(&self) -> usize {
        self.buffer.len() - 1
    }

    #[inline]
    fn tail(&self) -> usize {
        (self.head + self.len - 1) & self.mask()
    }

    pub fn push_back(&mut self, item: T) {
        if self.len == self.capacity() {
            self.resize(2 * self.capacity());
        }
        let slot = (self.head + self.len) & self.mask();
        self.buffer[slot] = Some(item);
        self.len += 1;
    }

    pub fn push_front(&mut self, item: T) {
        if self.len == self.capacity() {
            self.resize(2 * self.capacity());
        }
        self.head = (self.head + self.capacity() - 1) & self.mask();
        self.buffer[self.head] = Some(item);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.buffer[self.head].take();
        self.head = (self.head + 1) & self.mask();
        self.len -= 1;
        self.shrink_if_sparse();
        item
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let tail = self.tail();
        let item = self.buffer[tail].take();
        self.len -= 1;
        self.shrink_if_sparse();
        item
    }

    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buffer[self.head].as_ref()
    }

    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buffer[self.tail()].as_ref()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            return None;
        }
        let tail = self.tail();
        self.buffer[tail].as_mut()
    }

    pub fn clear(&mut self) {
        self.buffer = Self::allocate(MIN_CAPACITY);
        self.head = 0;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { buffer: &self.buffer, head: self.head, remaining: self.len }
    }

    // grows at 100% occupancy, shrinks at 25%
    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if capacity > MIN_CAPACITY && self.len <= capacity / 4 {
            self.resize(capacity / 2);
        }
    }

    fn resize(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity.is_power_of_two() && new_capacity >= self.len);
        trace!(from = self.capacity(), to = new_capacity, len = self.len, "ring buffer resized");

        let mut buffer = Self::allocate(new_capacity);
        let mask = self.mask();
        for (i, slot) in buffer.iter_mut().take(self.len).enumerate() {
            *slot = self.buffer[(self.head + i) & mask].take();
        }
        self.buffer = buffer;
        self.head = 0;
    }

    fn allocate(capacity: usize) -> Vec<Option<T>> {
        (0..capacity).map(|_| None).collect()
    }
}

/// Iterator over the items of a sequence container in logical order.
pub struct Iter<'a, T> {
    buffer: &'a [Option<T>],
    head: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.buffer[self.head].as_ref();
        self.head = (self.head + 1) & (self.buffer.len() - 1);
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.buffer[(self.head + self.remaining) & (self.buffer.len() - 1)].as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
