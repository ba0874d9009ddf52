use log::{debug, trace};

use crate::error::HeapError;

/// A max-heap where every node has up to `2^power` children
#[derive(Debug, Clone)]
pub struct PowHeap {
    /// The implicit tree, with the root at index 0
    elements: Vec<i64>,

    /// The maximum number of children of a node
    fanout: usize,

    /// The exponent the fanout was computed from
    power: u32,
}
impl PowHeap {
    /// Create an empty heap with a branching factor of `2^power`
    pub fn new(power: i32) -> Result<Self, HeapError> {
        Self::with_capacity(power, 0)
    }

    /// Create an empty heap able to hold `capacity` elements without reallocating
    pub fn with_capacity(power: i32, capacity: usize) -> Result<Self, HeapError> {
        let invalid = HeapError::InvalidArgument { power };
        let exp = u32::try_from(power).map_err(|_| invalid)?;
        let fanout = 1usize.checked_shl(exp).ok_or(invalid)?;
        debug!("new heap: power {exp}, fanout {fanout}, capacity {capacity}");
        Ok(Self {
            elements: Vec::with_capacity(capacity),
            fanout,
            power: exp,
        })
    }

    /// The maximum number of children of a node
    pub fn fanout(&self) -> usize {
        self.fanout
    }

    /// The branching exponent
    pub fn power(&self) -> u32 {
        self.power
    }

    /// Check if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Return the number of elements in the heap
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Return a reference to the maximum element, if it exists
    pub fn peek(&self) -> Option<&i64> {
        self.elements.first()
    }

    /// Remove every element, keeping the branching factor
    pub fn clear(&mut self) {
        trace!("clearing {} elements", self.elements.len());
        self.elements.clear();
    }

    /// Insert a new element in the heap
    pub fn insert(&mut self, value: i64) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Delete and return the maximum element
    pub fn extract_max(&mut self) -> Result<i64, HeapError> {
        let last = self.elements.pop().ok_or(HeapError::EmptyStructure)?;
        if self.elements.is_empty() {
            return Ok(last);
        }
        let max = std::mem::replace(&mut self.elements[0], last);
        self.sift_down(0);
        Ok(max)
    }

    /// Return an iterator extracting the elements in non-increasing order
    pub fn drain_sorted(&mut self) -> DrainSorted<'_> {
        DrainSorted { heap: self }
    }

    /// Consume the heap, returning its elements in non-increasing order
    pub fn into_sorted_vec(mut self) -> Vec<i64> {
        self.drain_sorted().collect()
    }

    /// Check that no element is greater than its parent
    pub fn is_valid(&self) -> bool {
        (1..self.elements.len()).all(|i| self.elements[self.parent(i)] >= self.elements[i])
    }

    fn parent(&self, index: usize) -> usize {
        (index - 1) / self.fanout
    }

    // None when the index of the first child overflows
    fn first_child(&self, index: usize) -> Option<usize> {
        index.checked_mul(self.fanout)?.checked_add(1)
    }

    // The in-bounds child holding the largest value, the leftmost one on ties
    fn largest_child(&self, index: usize) -> Option<usize> {
        let first = self.first_child(index)?;
        let end = first.saturating_add(self.fanout).min(self.elements.len());
        (first..end).reduce(|best, child| {
            if self.elements[child] > self.elements[best] {
                child
            } else {
                best
            }
        })
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = self.parent(index);
            if self.elements[index] <= self.elements[parent] {
                break;
            }
            self.elements.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.largest_child(index) {
            if self.elements[child] <= self.elements[index] {
                break;
            }
            self.elements.swap(index, child);
            index = child;
        }
    }
}
impl Extend<i64> for PowHeap {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.elements.reserve(iter.size_hint().0);
        iter.for_each(|value| self.insert(value));
    }
}

/// An iterator extracting the elements of a heap in non-increasing order
#[derive(Debug)]
pub struct DrainSorted<'a> {
    heap: &'a mut PowHeap,
}
impl Iterator for DrainSorted<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.extract_max().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}
impl ExactSizeIterator for DrainSorted<'_> {}
