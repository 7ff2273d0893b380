//! Unbounded FIFO ring-buffer queue.

/// A first-in-first-out queue over a growable ring buffer.
///
/// The buffer doubles when full and is re-linearized on growth, so the
/// queue is unbounded while keeping enqueue/dequeue amortized O(1).
#[derive(Debug)]
pub struct Queue<T> {
    items: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    /// Create an empty queue with room for at least `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: make_slots(capacity.max(1)),
            head: 0,
            len: 0,
        }
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Peek at the item that `dequeue` would return next.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.items[self.head].as_ref()
        }
    }

    /// Add an item to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        if self.len == self.items.len() {
            self.grow(self.items.len() * 2);
        }
        let tail = (self.head + self.len) % self.items.len();
        self.items[tail] = Some(item);
        self.len += 1;
    }

    /// Remove and return the item at the front of the queue.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.items[self.head].take();
        self.head = (self.head + 1) % self.items.len();
        self.len -= 1;
        item
    }

    /// Grow the ring to `capacity`, moving items to the front in order.
    fn grow(&mut self, capacity: usize) {
        let mut grown = make_slots(capacity);
        for (k, slot) in grown.iter_mut().take(self.len).enumerate() {
            let from = (self.head + k) % self.items.len();
            *slot = self.items[from].take();
        }
        self.items = grown;
        self.head = 0;
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn make_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.front(), Some(&1));
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_fifo_order_across_growth() {
        let mut queue = Queue::with_capacity(2);
        for i in 0..50 {
            queue.enqueue(i);
        }
        for i in 0..50 {
            assert_eq!(queue.dequeue(), Some(i));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_wraparound() {
        let mut queue = Queue::with_capacity(4);
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Some(1));

        // Head is now mid-buffer; keep cycling past the end.
        for i in 3..10 {
            queue.enqueue(i);
        }
        let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
        assert_eq!(drained, vec![2, 3, 4, 5, 6, 7, 8, 9]);
    }
}
