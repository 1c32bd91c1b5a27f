use crate::priority_queue::{greater, less, Comparator};

/// Binary heap over items without an external identity.
///
/// There is no decrease-key: to lower a priority, enqueue a fresh item and skip the
/// stale one when it is dequeued later.
pub struct PriorityQueue<T, C> {
    heap: Vec<T>,
    better: C,
}

impl<T: Ord> PriorityQueue<T, Comparator<T>> {
    pub fn new_min() -> Self {
        Self::new(less::<T>)
    }

    pub fn new_max() -> Self {
        Self::new(greater::<T>)
    }
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    pub fn new(better: C) -> Self {
        Self { heap: Vec::new(), better }
    }

    pub fn with_capacity(capacity: usize, better: C) -> Self {
        Self { heap: Vec::with_capacity(capacity), better }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn enqueue(&mut self, item: T) {
        self.heap.push(item);
        self.swim(self.heap.len() - 1);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let best = self.heap.pop();
        self.sink(0);
        best
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Items in heap order, not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if !(self.better)(&self.heap[k], &self.heap[parent]) {
                break;
            }
            self.heap.swap(k, parent);
            k = parent;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.heap.len();
        while 2 * k + 1 < n {
            let mut child = 2 * k + 1;
            if child + 1 < n && (self.better)(&self.heap[child + 1], &self.heap[child]) {
                child += 1;
            }
            if !(self.better)(&self.heap[child], &self.heap[k]) {
                break;
            }
            self.heap.swap(k, child);
            k = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_heap_ordered<T: Ord>(pq: &PriorityQueue<T, Comparator<T>>) -> bool {
        (1..pq.heap.len()).all(|k| !(pq.better)(&pq.heap[k], &pq.heap[(k - 1) / 2]))
    }

    #[test]
    fn heap_order_holds_after_every_operation() {
        let mut pq = PriorityQueue::new_min();
        for x in [5, 3, 8, 1, 9, 2, 7, 3] {
            pq.enqueue(x);
            assert!(is_heap_ordered(&pq));
        }
        while pq.dequeue().is_some() {
            assert!(is_heap_ordered(&pq));
        }
    }

    #[test]
    fn custom_comparator_orders_by_field() {
        let mut pq = PriorityQueue::new(|a: &(char, i32), b: &(char, i32)| a.1 > b.1);
        pq.enqueue(('a', 1));
        pq.enqueue(('b', 10));
        pq.enqueue(('c', 5));

        assert_eq!(pq.peek(), Some(&('b', 10)));
        assert_eq!(pq.dequeue(), Some(('b', 10)));
        assert_eq!(pq.dequeue(), Some(('c', 5)));
        assert_eq!(pq.dequeue(), Some(('a', 1)));
        assert_eq!(pq.dequeue(), None);
    }
}
