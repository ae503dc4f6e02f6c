use std::collections::VecDeque;

use crate::constants::HISTORY_CAPACITY;
use crate::types::motion::MotionSample;

/// Rolling history of recent motion samples.
pub type MotionHistory = HistoryBuffer<MotionSample>;

/// Bounded FIFO buffer. Buffer starts empty and grows up to `capacity` elements.
/// Once full, every pushed element evicts the oldest one.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryBuffer<T> {
    capacity: usize,
    buffer: VecDeque<T>,
}

impl<T: Clone> HistoryBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            buffer: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// New element `elem` is appended. Returns the evicted element if the buffer overflowed.
    pub fn push(&mut self, elem: T) -> Option<T> {
        self.buffer.push_back(elem);
        if self.buffer.len() > self.capacity {
            return self.buffer.pop_front();
        }
        None
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.buffer.get(index)
    }

    /// Most recent element
    pub fn last(&self) -> Option<&T> {
        self.buffer.back()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.buffer.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl<T: Clone> Default for HistoryBuffer<T> {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl<T: Clone> Extend<T> for HistoryBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push(elem);
        }
    }
}
