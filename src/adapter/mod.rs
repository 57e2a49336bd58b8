pub mod key;
pub mod traits;

pub use key::{Keying, NodeKey, PrimitiveNode};
pub use traits::{Edge, GraphAdapter, Weight};
