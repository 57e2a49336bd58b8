use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Entry of the frontier, ordered by cost and then by insertion order
#[derive(Debug)]
struct FrontierEntry<N, P> {
    priority: P,
    sequence: u64,
    node: N,
}

impl<N, P: Ord> PartialEq for FrontierEntry<N, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, P: Ord> Eq for FrontierEntry<N, P> {}

impl<N, P: Ord> PartialOrd for FrontierEntry<N, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, P: Ord> Ord for FrontierEntry<N, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// A min-priority queue of nodes awaiting expansion.
///
/// The same node may be pushed several times with different costs; outdated
/// entries stay in the heap and have to be recognised by the caller on pop.
/// Entries with equal cost come out in the order they were pushed.
#[derive(Debug)]
pub struct Frontier<N, P>
where
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<FrontierEntry<N, P>>>,

    /// Number of pushes so far, used to break ties
    pushed: u64,
}

impl<N, P> Frontier<N, P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of entries pushed since creation
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    /// Pushes a node with the given cost
    pub fn push(&mut self, node: N, priority: P) {
        let sequence = self.pushed;
        self.pushed += 1;
        self.heap.push(Reverse(FrontierEntry {
            priority,
            sequence,
            node,
        }));
    }

    /// Removes the entry with the lowest cost
    pub fn pop(&mut self) -> Option<(N, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.node, entry.priority))
    }
}

impl<N, P> Default for Frontier<N, P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
