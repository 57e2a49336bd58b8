use std::collections::{HashMap, HashSet};

use log::{debug, trace};
use num_traits::Zero;

use crate::adapter::key::KeyDeriver;
use crate::adapter::{Edge, GraphAdapter, NodeKey, Weight};
use crate::algorithm::{ShortestPath, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::Result;

/// Classic Dijkstra's algorithm over a [`GraphAdapter`]
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Relaxation loop, run with an already resolved key strategy
    fn search<A>(
        &self,
        adapter: &A,
        keys: &KeyDeriver<'_, A::Node>,
        start: &A::Node,
        target: Option<&A::Node>,
    ) -> ShortestPathResult<A::Node, A::Weight>
    where
        A: GraphAdapter,
    {
        let source = keys.key(start);
        let target_key = target.map(|node| keys.key(node));

        let mut distances: HashMap<NodeKey, A::Weight> = HashMap::new();
        let mut predecessors: HashMap<NodeKey, A::Node> = HashMap::new();
        let mut explored: HashSet<NodeKey> = HashSet::new();

        distances.insert(source.clone(), A::Weight::zero());

        let mut frontier = Frontier::new();
        frontier.push(start.clone(), A::Weight::zero());

        debug!("dijkstra: searching from {} (target: {:?})", source, target_key);

        while let Some((node, cost)) = frontier.pop() {
            let key = keys.key(&node);

            // Outdated entry, the node was settled through a cheaper one
            if !explored.insert(key.clone()) {
                continue;
            }

            if target_key.as_ref() == Some(&key) {
                debug!("dijkstra: reached {} at cost {:?}", key, cost);
                break;
            }

            for Edge { node: child, weight } in adapter.edges(&node) {
                let child_key = keys.key(&child);

                // Distances of settled nodes are final
                if explored.contains(&child_key) {
                    continue;
                }

                let Some(alt) = cost.checked_sum(weight) else {
                    trace!("dijkstra: {} -> {} overflows, skipped", key, child_key);
                    continue;
                };
                let improves = match distances.get(&child_key) {
                    None => true,
                    Some(&current) => alt < current,
                };

                if improves {
                    trace!("dijkstra: {} -> {} relaxed to {:?}", key, child_key, alt);
                    distances.insert(child_key.clone(), alt);
                    predecessors.insert(child_key, node.clone());
                    frontier.push(child, alt);
                }
            }
        }

        debug!(
            "dijkstra: settled {} nodes, {} frontier pushes",
            explored.len(),
            frontier.pushed()
        );

        ShortestPathResult {
            distances,
            predecessors,
            source,
            settled: explored.len(),
        }
    }
}

impl<A> ShortestPathAlgorithm<A> for Dijkstra
where
    A: GraphAdapter,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_distances(
        &self,
        adapter: &A,
        start: &A::Node,
        target: Option<&A::Node>,
    ) -> Result<ShortestPathResult<A::Node, A::Weight>> {
        // Fails here, before anything is pushed, if the adapter cannot key nodes
        let keys = adapter.keying().resolve()?;

        Ok(self.search(adapter, &keys, start, target))
    }

    fn reconstruct_path(
        &self,
        adapter: &A,
        start: &A::Node,
        target: &A::Node,
    ) -> Result<ShortestPath<A::Node, A::Weight>> {
        let keys = adapter.keying().resolve()?;
        let result = self.search(adapter, &keys, start, Some(target));

        Ok(ShortestPath {
            distance: result.distance(&keys.key(target)),
            path: result.walk_back(&keys, target),
        })
    }
}
