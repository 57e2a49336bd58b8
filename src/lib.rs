//! Adapter Dijkstra - single-source shortest paths over caller-defined graphs
//!
//! The search never owns or inspects a graph structure. Callers implement
//! [`GraphAdapter`] to report the outgoing edges of a node and to say how
//! nodes map to a hashable [`NodeKey`]; nodes can be plain numbers and strings
//! or arbitrary values.
//!
//! ```
//! use adapter_dijkstra::{Dijkstra, Edge, GraphAdapter, Keying, ShortestPathAlgorithm};
//!
//! struct Line;
//!
//! impl GraphAdapter for Line {
//!     type Node = u32;
//!     type Weight = u32;
//!
//!     fn edges(&self, node: &u32) -> Box<dyn Iterator<Item = Edge<u32, u32>> + '_> {
//!         let next = *node + 1;
//!         Box::new((next <= 3).then(|| Edge::new(next, 2)).into_iter())
//!     }
//!
//!     fn keying(&self) -> Keying<'_, u32> {
//!         Keying::self_keyed()
//!     }
//! }
//!
//! let route = Dijkstra::new().reconstruct_path(&Line, &0, &3).unwrap();
//! assert_eq!(route.distance, Some(6));
//! assert_eq!(route.path, vec![0, 1, 2, 3]);
//! ```

pub mod adapter;
pub mod algorithm;
pub mod data_structures;

pub use adapter::{Edge, GraphAdapter, Keying, NodeKey, PrimitiveNode, Weight};
pub use algorithm::{
    dijkstra::Dijkstra, ShortestPath, ShortestPathAlgorithm, ShortestPathResult,
};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("adapter must implement key derivation")]
    MissingKeyDerivation,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
