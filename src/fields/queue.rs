//! Priority queues and visited bookkeeping for the field builders.
//!
//! Each builder orders its frontier by a different cell value, so each gets
//! its own entry type instead of a shared comparator.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::CellKey;

/// Frontier entry of the heuristic search, ordered by destination cost.
#[derive(Debug, Clone, Copy)]
struct CostEntry {
    cost: f64,
    key: CellKey,
}

impl PartialEq for CostEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CostEntry {}

impl Ord for CostEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour; key breaks ties deterministically.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.key.cmp(&self.key))
    }
}

impl PartialOrd for CostEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-queue of cells by destination cost. May hold stale entries for a
/// cell whose cost was lowered after it was pushed.
#[derive(Debug, Default)]
pub struct CostQueue {
    heap: BinaryHeap<CostEntry>,
}

impl CostQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: CellKey, cost: f64) {
        self.heap.push(CostEntry { cost, key });
    }

    pub fn pop(&mut self) -> Option<(CellKey, f64)> {
        self.heap.pop().map(|entry| (entry.key, entry.cost))
    }
}

/// Frontier entry of the distance transform, ordered by obstacle distance.
#[derive(Debug, Clone, Copy)]
struct DistanceEntry {
    distance: f64,
    key: CellKey,
}

impl PartialEq for DistanceEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DistanceEntry {}

impl Ord for DistanceEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.key.cmp(&self.key))
    }
}

impl PartialOrd for DistanceEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-queue of cells by obstacle distance.
#[derive(Debug, Default)]
pub struct DistanceQueue {
    heap: BinaryHeap<DistanceEntry>,
}

impl DistanceQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: CellKey, distance: f64) {
        self.heap.push(DistanceEntry { distance, key });
    }

    pub fn pop(&mut self) -> Option<(CellKey, f64)> {
        self.heap.pop().map(|entry| (entry.key, entry.distance))
    }
}

/// Dense visited flags over the arena's key space.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    flags: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            flags: vec![false; capacity],
            count: 0,
        }
    }

    /// Returns `true` if `key` was not visited before.
    #[inline]
    pub fn insert(&mut self, key: CellKey) -> bool {
        match self.flags.get_mut(key.index()) {
            Some(flag) if !*flag => {
                *flag = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Number of distinct keys inserted.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}
