use crate::error::{Error, Result};
use crate::priority_queue::{greater, less, Comparator};

const ABSENT: usize = usize::MAX;

/// Binary heap over dense ids in `[0, capacity)`, each carrying a key.
///
/// Besides the heap itself, the queue keeps the key of every id and the heap slot of
/// every id, so a key can be changed or removed in `O(log n)` without searching.
/// Capacity is fixed at construction; any id outside it is rejected with
/// [`Error::IdOutOfRange`].
pub struct IndexPriorityQueue<K, C> {
    heap: Vec<usize>, // heap slot -> id
    positions: Vec<usize>, // id -> heap slot
    keys: Vec<Option<K>>, // id -> key
    better: C,
}

impl<K: Ord> IndexPriorityQueue<K, Comparator<K>> {
    pub fn new_min(capacity: usize) -> Self {
        Self::new(capacity, less::<K>)
    }

    pub fn new_max(capacity: usize) -> Self {
        Self::new(capacity, greater::<K>)
    }
}

impl<K, C> IndexPriorityQueue<K, C>
where
    C: Fn(&K, &K) -> bool,
{
    pub fn new(capacity: usize, better: C) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: vec![ABSENT; capacity],
            keys: (0..capacity).map(|_| None).collect(),
            better,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    pub fn contains(&self, id: usize) -> Result<bool> {
        self.validate(id)?;
        Ok(self.positions[id] != ABSENT)
    }

    pub fn key_of(&self, id: usize) -> Result<Option<&K>> {
        self.validate(id)?;
        Ok(self.keys[id].as_ref())
    }

    /// Returns `false` if `id` is already queued.
    pub fn enqueue(&mut self, id: usize, key: K) -> Result<bool> {
        if self.contains(id)? {
            return Ok(false);
        }

        self.heap.push(id);
        self.positions[id] = self.heap.len() - 1;
        self.keys[id] = Some(key);
        self.swim(self.heap.len() - 1);
        Ok(true)
    }

    pub fn dequeue(&mut self) -> Option<(usize, K)> {
        let id = *self.heap.first()?;
        self.detach(0);
        self.sink(0);
        self.keys[id].take().map(|key| (id, key))
    }

    pub fn peek(&self) -> Option<(usize, &K)> {
        let id = *self.heap.first()?;
        self.keys[id].as_ref().map(|key| (id, key))
    }

    /// Returns `false` if `id` is not queued.
    pub fn change_key(&mut self, id: usize, key: K) -> Result<bool> {
        if !self.contains(id)? {
            return Ok(false);
        }

        self.keys[id] = Some(key);
        let slot = self.positions[id];
        self.swim(slot);
        self.sink(slot);
        Ok(true)
    }

    pub fn remove(&mut self, id: usize) -> Result<Option<K>> {
        if !self.contains(id)? {
            return Ok(None);
        }

        let slot = self.positions[id];
        self.detach(slot);
        if slot < self.heap.len() {
            self.swim(slot);
            self.sink(slot);
        }
        Ok(self.keys[id].take())
    }

    pub fn clear(&mut self) {
        for &id in self.heap.iter() {
            self.positions[id] = ABSENT;
            self.keys[id] = None;
        }
        self.heap.clear();
    }

    // moves the last entry into `slot` and unlinks the id that was there
    fn detach(&mut self, slot: usize) {
        let last = self.heap.len() - 1;
        self.swap(slot, last);
        if let Some(id) = self.heap.pop() {
            self.positions[id] = ABSENT;
        }
    }

    fn validate(&self, id: usize) -> Result<()> {
        if id >= self.capacity() {
            return Err(Error::IdOutOfRange { id, capacity: self.capacity() });
        }
        Ok(())
    }

    #[inline]
    fn is_better(&self, a: usize, b: usize) -> bool {
        match (&self.keys[self.heap[a]], &self.keys[self.heap[b]]) {
            (Some(a), Some(b)) => (self.better)(a, b),
            _ => false,
        }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = a;
        self.positions[self.heap[b]] = b;
    }

    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if !self.is_better(k, parent) {
                break;
            }
            self.swap(k, parent);
            k = parent;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.heap.len();
        while 2 * k + 1 < n {
            let mut child = 2 * k + 1;
            if child + 1 < n && self.is_better(child + 1, child) {
                child += 1;
            }
            if !self.is_better(child, k) {
                break;
            }
            self.swap(k, child);
            k = child;
        }
    }
}
