//! Puts results from concurrent workers back into (year, day, part) order
//!
//! Two min-heaps: the keys still owed, and the results that arrived ahead of
//! their turn. A result is released once it matches the smallest owed key.

use crate::executor::SolverResult;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl ResultKey {
    fn of(result: &SolverResult) -> Self {
        Self {
            year: result.year,
            day: result.day,
            part: result.part,
        }
    }
}

/// A buffered result, compared by its key only
struct Pending(SolverResult);

impl Pending {
    fn key(&self) -> ResultKey {
        ResultKey::of(&self.0)
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pending {}

pub struct ResultAggregator {
    owed: BinaryHeap<Reverse<ResultKey>>,
    pending: BinaryHeap<Reverse<Pending>>,
}

impl ResultAggregator {
    pub fn new(expected: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            owed: expected.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Accept one result; returns whatever is now releasable, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.push(Reverse(Pending(result)));

        let mut ready = Vec::new();
        while let (Some(Reverse(next)), Some(Reverse(head))) = (self.owed.peek(), self.pending.peek())
        {
            if head.key() != *next {
                break;
            }
            self.owed.pop();
            if let Some(Reverse(Pending(result))) = self.pending.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Everything still buffered, in order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut rest = Vec::with_capacity(self.pending.len());
        while let Some(Reverse(Pending(result))) = self.pending.pop() {
            rest.push(result);
        }
        rest
    }

    pub fn is_complete(&self) -> bool {
        self.owed.is_empty()
    }
}
