use crate::error::Error;
use crate::Result;

/// Anything that can be ordered in the queue by a weight.
pub trait Weighted {
    fn weight(&self) -> usize;
}

struct Entry<T> {
    weight: usize,
    sequence: u64,
    value: T,
}

impl<T> Entry<T> {
    // equal weights are extracted in insertion order
    fn precedes(&self, other: &Self) -> bool {
        (self.weight, self.sequence) < (other.weight, other.sequence)
    }
}

/// Binary min-heap over `Weighted` values.
pub struct MinHeap<T> {
    entries: Vec<Entry<T>>,
    next_sequence: u64,
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

fn right_child(index: usize) -> usize {
    2 * index + 2
}

impl<T: Weighted> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap {
            entries: Vec::new(),
            next_sequence: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn peek_weight(&self) -> Option<usize> {
        self.entries.first().map(|entry| entry.weight)
    }

    pub fn insert(&mut self, value: T) {
        let entry = Entry {
            weight: value.weight(),
            sequence: self.next_sequence,
            value,
        };
        self.next_sequence += 1;
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
    }

    pub fn extract_min(&mut self) -> Result<T> {
        if self.entries.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let last_index = self.entries.len() - 1;
        self.entries.swap(0, last_index);
        let min = self.entries.pop().ok_or(Error::EmptyQueue)?;
        self.sift_down(0);
        Ok(min.value)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent_index = parent(index);
            if !self.entries[index].precedes(&self.entries[parent_index]) {
                break;
            }
            self.entries.swap(index, parent_index);
            index = parent_index;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = left_child(index);
            let right = right_child(index);
            let mut smallest = index;
            if left < len && self.entries[left].precedes(&self.entries[smallest]) {
                smallest = left;
            }
            if right < len && self.entries[right].precedes(&self.entries[smallest]) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.entries.swap(index, smallest);
            index = smallest;
        }
    }

    /// Checks `weight(parent) <= weight(child)` at every non-root position.
    pub fn is_valid(&self) -> bool {
        (1..self.entries.len())
            .all(|index| self.entries[parent(index)].weight <= self.entries[index].weight)
    }
}

impl<T: Weighted> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Weighted> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut heap = MinHeap::new();
        for value in values {
            heap.insert(value);
        }
        heap
    }
}
