use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::adapter::key::KeyDeriver;
use crate::adapter::{GraphAdapter, NodeKey, Weight};
use crate::Result;

/// Distance and predecessor tables produced by a single search
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShortestPathResult<N, W> {
    /// Best known cost from the start for every reached node
    pub distances: HashMap<NodeKey, W>,

    /// Node through which the best known path enters each reached node
    pub predecessors: HashMap<NodeKey, N>,

    /// Key of the start node
    pub source: NodeKey,

    /// Number of nodes settled before the search stopped
    pub settled: usize,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: Clone,
    W: Weight,
{
    /// Returns the distance recorded for `key`, if the node was reached
    pub fn distance(&self, key: &NodeKey) -> Option<W> {
        self.distances.get(key).copied()
    }

    /// Returns the predecessor recorded for `key`
    pub fn predecessor(&self, key: &NodeKey) -> Option<&N> {
        self.predecessors.get(key)
    }

    /// Returns true if the search found any path to `key`
    pub fn is_reachable(&self, key: &NodeKey) -> bool {
        self.distances.contains_key(key)
    }

    /// Builds the path from the start to `target` out of the predecessor
    /// table, without searching again.
    ///
    /// An unreached target yields the single-element path `[target]`.
    pub fn path_to<A>(&self, adapter: &A, target: &N) -> Result<Vec<N>>
    where
        A: GraphAdapter<Node = N, Weight = W>,
    {
        let keys = adapter.keying().resolve()?;
        Ok(self.walk_back(&keys, target))
    }

    pub(crate) fn walk_back(&self, keys: &KeyDeriver<'_, N>, target: &N) -> Vec<N> {
        let mut path = vec![target.clone()];
        let mut current = keys.key(target);

        while let Some(parent) = self.predecessors.get(&current) {
            current = keys.key(parent);
            path.push(parent.clone());
        }

        path.reverse();
        path
    }
}

/// Shortest path between two nodes together with its cost
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShortestPath<N, W> {
    /// Total cost, `None` when the target was not reached
    pub distance: Option<W>,

    /// Nodes from start to target, both included
    pub path: Vec<N>,
}

impl<N, W> ShortestPath<N, W> {
    /// Returns true if the target was reached
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// Trait for shortest path algorithms working through a [`GraphAdapter`]
pub trait ShortestPathAlgorithm<A>
where
    A: GraphAdapter,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute distances and predecessors from `start`.
    ///
    /// With a `target`, the search stops as soon as the target is settled.
    fn compute_distances(
        &self,
        adapter: &A,
        start: &A::Node,
        target: Option<&A::Node>,
    ) -> Result<ShortestPathResult<A::Node, A::Weight>>;

    /// Get the shortest path from `start` to `target`.
    ///
    /// An unreachable target is not an error: the result has no distance and
    /// the path consists of `target` alone.
    ///
    /// The start node is recorded with distance zero, so `start == target`
    /// gives `Some(zero)` and the path `[start]`.
    fn reconstruct_path(
        &self,
        adapter: &A,
        start: &A::Node,
        target: &A::Node,
    ) -> Result<ShortestPath<A::Node, A::Weight>> {
        let result = self.compute_distances(adapter, start, Some(target))?;
        let keys = adapter.keying().resolve()?;
        let distance = result.distance(&keys.key(target));
        let path = result.walk_back(&keys, target);

        Ok(ShortestPath { distance, path })
    }
}
