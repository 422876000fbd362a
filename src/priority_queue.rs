use std::cmp::Ordering;
use std::fmt;

pub const INITIAL_CAPACITY: usize = 10;

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * i + 2
}

struct Entry<T> {
    sequence: u64,
    item: T,
}

/// Array backed binary min-heap ordered by a caller supplied comparator.
///
/// The queue knows nothing about its payload beyond what the comparator
/// returns. Entries which compare equal leave the queue in the order they were
/// inserted: every entry carries an insertion sequence number which decides
/// ties, so both sift directions apply the same strict ordering.
pub struct PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    data: Vec<Entry<T>>,
    capacity: usize,
    next_sequence: u64,
    compare: C,
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: C) -> Self {
        PriorityQueue {
            data: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
            next_sequence: 0,
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of entries the backing storage holds before it is doubled.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first().map(|entry| &entry.item)
    }

    pub fn insert(&mut self, item: T) {
        if self.data.len() == self.capacity {
            self.grow();
        }
        let entry = Entry {
            sequence: self.next_sequence,
            item,
        };
        self.next_sequence += 1;
        self.data.push(entry);
        self.sift_up(self.data.len() - 1);
        debug_assert!(self.is_valid_heap(), "heap property violated after insert");
    }

    /// Removes the entry which orders first.
    ///
    /// Panics if the queue is empty. Draining an empty queue is a caller error,
    /// there is no sentinel value to hand back.
    pub fn remove_min(&mut self) -> T {
        if self.data.is_empty() {
            panic!("remove_min called on an empty priority queue");
        }
        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        debug_assert!(self.is_valid_heap(), "heap property violated after removal");
        root.item
    }

    /// Checks that no entry orders before its parent, ties being decided by
    /// insertion order.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|i| !self.orders_before(i, parent(i)))
    }

    fn grow(&mut self) {
        self.capacity *= 2;
        let additional = self.capacity - self.data.len();
        self.data.reserve_exact(additional);
    }

    fn orders_before(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.data[a], &self.data[b]);
        (self.compare)(&a.item, &b.item)
            .then(a.sequence.cmp(&b.sequence))
            .is_lt()
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 && self.orders_before(i, parent(i)) {
            self.data.swap(i, parent(i));
            i = parent(i);
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let count = self.data.len();
        while left(i) < count {
            let mut smallest_child = left(i);
            if right(i) < count && self.orders_before(right(i), left(i)) {
                smallest_child = right(i);
            }
            if !self.orders_before(smallest_child, i) {
                break;
            }
            self.data.swap(i, smallest_child);
            i = smallest_child;
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .field(
                "items",
                &self.data.iter().map(|e| &e.item).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{PriorityQueue, INITIAL_CAPACITY};

    fn ascending(a: &u32, b: &u32) -> std::cmp::Ordering {
        a.cmp(b)
    }

    #[test]
    fn test_new_queue_is_empty() {
        let queue = PriorityQueue::new(ascending);
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), INITIAL_CAPACITY);
        assert!(queue.peek().is_none());
    }

    #[test]
    fn test_len_counts_inserts_and_removals() {
        let mut queue = PriorityQueue::new(ascending);
        for (count, value) in [5, 3, 8, 1, 9, 2].into_iter().enumerate() {
            queue.insert(value);
            assert_eq!(queue.len(), count + 1);
        }
        while !queue.is_empty() {
            queue.remove_min();
        }
        assert_eq!(queue.len(), 0);
    }

    #[test]
    #[should_panic(expected = "empty priority queue")]
    fn test_remove_from_empty_queue_panics() {
        let mut queue = PriorityQueue::new(ascending);
        queue.remove_min();
    }

    #[test]
    #[should_panic(expected = "empty priority queue")]
    fn test_remove_from_drained_queue_panics() {
        let mut queue = PriorityQueue::new(ascending);
        queue.insert(1);
        queue.remove_min();
        queue.remove_min();
    }

    #[test]
    fn test_capacity_doubles_and_never_shrinks() {
        let mut queue = PriorityQueue::new(ascending);
        for value in 0..INITIAL_CAPACITY as u32 {
            queue.insert(value);
        }
        assert_eq!(queue.capacity(), INITIAL_CAPACITY);
        queue.insert(100);
        assert_eq!(queue.capacity(), 2 * INITIAL_CAPACITY);
        for value in 0..INITIAL_CAPACITY as u32 {
            queue.insert(value);
        }
        assert_eq!(queue.capacity(), 4 * INITIAL_CAPACITY);
        while !queue.is_empty() {
            queue.remove_min();
        }
        assert_eq!(queue.capacity(), 4 * INITIAL_CAPACITY);
    }

    #[test]
    fn test_heap_property_holds_after_every_operation() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut queue = PriorityQueue::new(ascending);
        for _ in 0..3 * INITIAL_CAPACITY {
            queue.insert(rng.gen_range(0..20));
            assert!(queue.is_valid_heap(), "Heap invalid after insert: {:?}", queue);
        }
        let mut previous = 0;
        while !queue.is_empty() {
            let value = queue.remove_min();
            assert!(queue.is_valid_heap(), "Heap invalid after removal: {:?}", queue);
            assert!(value >= previous, "{} removed after {}", value, previous);
            previous = value;
        }
    }

    #[test]
    fn test_drains_in_sorted_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut values: Vec<u32> = (0..200).map(|_| rng.gen_range(0..1000)).collect();
        let mut queue = PriorityQueue::new(ascending);
        for &value in &values {
            queue.insert(value);
        }
        values.sort();
        let drained: Vec<u32> = (0..values.len()).map(|_| queue.remove_min()).collect();
        assert_eq!(drained, values);
    }

    #[test]
    fn test_equal_keys_leave_in_insertion_order() {
        let by_key = |a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0);
        let mut queue = PriorityQueue::new(by_key);
        let items = [
            (2, 'a'),
            (1, 'b'),
            (2, 'c'),
            (1, 'd'),
            (1, 'e'),
            (0, 'f'),
            (2, 'g'),
            (1, 'h'),
            (2, 'i'),
            (1, 'j'),
            (1, 'k'),
            (2, 'l'),
        ];
        for item in items {
            queue.insert(item);
        }
        let order: String = (0..items.len()).map(|_| queue.remove_min().1).collect();
        assert_eq!(order, "fbdehjkacgil");
    }

    #[test]
    fn test_heap_property_includes_insertion_order() {
        let mut queue = PriorityQueue::new(|_: &u32, _: &u32| std::cmp::Ordering::Equal);
        for value in 0..3 * INITIAL_CAPACITY as u32 {
            queue.insert(value);
        }
        assert!(queue.is_valid_heap());
        // swapping two equal keys keeps the comparator happy but breaks FIFO
        queue.data.swap(0, 1);
        assert!(!queue.is_valid_heap());
    }

    #[test]
    fn test_peek_returns_minimum_without_removing() {
        let mut queue = PriorityQueue::new(ascending);
        queue.insert(7);
        queue.insert(3);
        queue.insert(5);
        assert_eq!(queue.peek(), Some(&3));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_comparator_decides_ordering() {
        let mut queue = PriorityQueue::new(|a: &u32, b: &u32| b.cmp(a));
        for value in [4, 9, 1, 7] {
            queue.insert(value);
        }
        assert_eq!(queue.remove_min(), 9);
        assert_eq!(queue.remove_min(), 7);
    }
}
