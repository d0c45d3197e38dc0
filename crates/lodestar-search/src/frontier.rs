use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::Cost;

/// Frontier entry, ordered by `g + h` for use in `BinaryHeap`.
///
/// Ties pop in insertion order, so searches are reproducible.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    pub(crate) vertex: T,
    /// Accumulated cost from the start.
    pub(crate) g: Cost,
    /// Heuristic estimate of the remaining cost.
    pub(crate) h: Cost,
    seq: u64,
}

impl<T> Entry<T> {
    #[inline]
    pub(crate) fn f(&self) -> Cost {
        self.g.saturating_add(self.h)
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other
            .f()
            .cmp(&self.f())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of [`Entry`] values.
pub(crate) struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Frontier<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, vertex: T, g: Cost, h: Cost) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { vertex, g, h, seq });
    }

    pub(crate) fn pop(&mut self) -> Option<Entry<T>> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
