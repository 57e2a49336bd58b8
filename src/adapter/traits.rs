use std::fmt::Debug;

use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::adapter::key::Keying;

/// Edge weights usable by the search.
///
/// Implemented for the primitive integers and for `OrderedFloat<f32>` /
/// `OrderedFloat<f64>`. Negative weights give no guarantees.
///
/// Path costs are summed with [`Weight::checked_sum`]. A sum that does not fit
/// the weight type is not a path at all: the search skips that edge, so a node
/// only reachable through such sums is reported as unreachable.
pub trait Weight: Zero + Ord + Copy + Debug {
    /// Returns `self + other`, or `None` if it overflows
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Weight for OrderedFloat<f32> {
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

impl Weight for OrderedFloat<f64> {
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

/// An outgoing edge of some node, as reported by a [`GraphAdapter`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge<N, W> {
    /// Node the edge points to
    pub node: N,

    /// Cost of traversing the edge
    pub weight: W,
}

impl<N, W> Edge<N, W> {
    /// Creates a new edge to `node`
    pub fn new(node: N, weight: W) -> Self {
        Edge { node, weight }
    }
}

impl<N, W> From<(N, W)> for Edge<N, W> {
    fn from((node, weight): (N, W)) -> Self {
        Edge { node, weight }
    }
}

/// Caller-side view of a graph, queried lazily by the search.
///
/// The search never sees the whole graph: it only asks for the outgoing
/// edges of nodes it settles, and for node identities through [`keying`].
///
/// [`keying`]: GraphAdapter::keying
pub trait GraphAdapter {
    /// Node representation, opaque to the search
    type Node: Clone;

    /// Edge weight type
    type Weight: Weight;

    /// Returns the outgoing edges of `node`.
    ///
    /// Must be a pure function of `node`. It is called at most once per
    /// settled node during a single search.
    fn edges(
        &self,
        node: &Self::Node,
    ) -> Box<dyn Iterator<Item = Edge<Self::Node, Self::Weight>> + '_>;

    /// Returns the strategy mapping nodes to their identity.
    ///
    /// Adapters over numbers or strings return [`Keying::self_keyed`], adapters
    /// over richer values return [`Keying::derived`]. The default reports that
    /// no derivation exists, which makes every search fail up front.
    fn keying(&self) -> Keying<'_, Self::Node> {
        Keying::Missing
    }
}
