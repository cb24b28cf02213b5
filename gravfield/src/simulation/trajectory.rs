//! Bounded position history used to draw trails
//!
//! `TrajectoryBuffer` is a fixed arena of `capacity` samples with a write head
//! and a count. Once full, every push overwrites the oldest sample, so the
//! arena is allocated once and never grows.

use super::vector::{NVec3, ZERO};

#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryBuffer {
    samples: Vec<NVec3>, // fixed-size arena
    head: usize,         // next slot to write, oldest sample once full
    len: usize,          // number of valid samples
}

impl TrajectoryBuffer {
    /// Empty buffer holding at most `capacity` samples
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: vec![ZERO; capacity],
            head: 0,
            len: 0,
        }
    }

    /// Full buffer where every sample is `position`
    pub fn filled(capacity: usize, position: NVec3) -> Self {
        Self {
            samples: vec![position; capacity],
            head: 0,
            len: capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append a sample, evicting the oldest one when full
    pub fn push(&mut self, position: NVec3) {
        let cap = self.capacity();
        if cap == 0 {
            return;
        }
        self.samples[self.head] = position;
        self.head = (self.head + 1) % cap;
        if self.len < cap {
            self.len += 1;
        }
    }

    /// Sample `index` in chronological order, 0 being the oldest
    pub fn get(&self, index: usize) -> Option<&NVec3> {
        if index >= self.len {
            return None;
        }
        let start = if self.is_full() { self.head } else { 0 };
        self.samples.get((start + index) % self.capacity())
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<&NVec3> {
        if self.is_empty() {
            return None;
        }
        self.get(self.len - 1)
    }

    /// Valid samples as two chronological runs (older run first)
    pub fn as_slices(&self) -> (&[NVec3], &[NVec3]) {
        if self.is_full() {
            let (newer, older) = self.samples.split_at(self.head);
            (older, newer)
        } else {
            (&self.samples[..self.len], &self.samples[..0])
        }
    }

    /// Oldest to newest; `.rev()` walks newest to oldest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &NVec3> + '_ {
        let (older, newer) = self.as_slices();
        older.iter().chain(newer.iter())
    }

    /// Chronological copy of the samples
    pub fn to_vec(&self) -> Vec<NVec3> {
        self.iter().copied().collect()
    }

    /// Drop all samples, keeping the arena
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

impl<'a> IntoIterator for &'a TrajectoryBuffer {
    type Item = &'a NVec3;
    type IntoIter = std::iter::Chain<std::slice::Iter<'a, NVec3>, std::slice::Iter<'a, NVec3>>;

    fn into_iter(self) -> Self::IntoIter {
        let (older, newer) = self.as_slices();
        older.iter().chain(newer.iter())
    }
}
