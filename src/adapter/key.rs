use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use ordered_float::OrderedFloat;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Identity of a node inside the distance, predecessor and explored tables.
///
/// Two nodes deriving the same key are the same vertex as far as the search
/// is concerned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKey {
    Int(i128),
    Float(OrderedFloat<f64>),
    Str(String),
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Int(value) => write!(f, "{}", value),
            NodeKey::Float(value) => write!(f, "{}", value),
            NodeKey::Str(value) => f.write_str(value),
        }
    }
}

macro_rules! int_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for NodeKey {
                fn from(value: $ty) -> Self {
                    NodeKey::Int(value as i128)
                }
            }
        )*
    };
}

int_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f32> for NodeKey {
    fn from(value: f32) -> Self {
        NodeKey::Float(OrderedFloat(value as f64))
    }
}

impl From<f64> for NodeKey {
    fn from(value: f64) -> Self {
        NodeKey::Float(OrderedFloat(value))
    }
}

impl From<char> for NodeKey {
    fn from(value: char) -> Self {
        NodeKey::Str(value.to_string())
    }
}

impl From<&str> for NodeKey {
    fn from(value: &str) -> Self {
        NodeKey::Str(value.to_owned())
    }
}

impl From<String> for NodeKey {
    fn from(value: String) -> Self {
        NodeKey::Str(value)
    }
}

/// Node types that are their own identity (numbers and strings).
pub trait PrimitiveNode {
    fn primitive_key(&self) -> NodeKey;
}

macro_rules! primitive_node {
    ($($ty:ty),*) => {
        $(
            impl PrimitiveNode for $ty {
                fn primitive_key(&self) -> NodeKey {
                    NodeKey::from(*self)
                }
            }
        )*
    };
}

primitive_node!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize, f32, f64, char);

impl PrimitiveNode for &str {
    fn primitive_key(&self) -> NodeKey {
        NodeKey::from(*self)
    }
}

impl PrimitiveNode for String {
    fn primitive_key(&self) -> NodeKey {
        NodeKey::Str(self.clone())
    }
}

impl PrimitiveNode for Box<str> {
    fn primitive_key(&self) -> NodeKey {
        NodeKey::from(&**self)
    }
}

impl PrimitiveNode for Rc<str> {
    fn primitive_key(&self) -> NodeKey {
        NodeKey::from(&**self)
    }
}

impl PrimitiveNode for Arc<str> {
    fn primitive_key(&self) -> NodeKey {
        NodeKey::from(&**self)
    }
}

/// How an adapter turns its nodes into [`NodeKey`]s.
///
/// The strategy is asked for once per search, not once per node.
pub enum Keying<'a, N> {
    /// The node is a primitive identifier and keys itself.
    SelfKeyed(fn(&N) -> NodeKey),
    /// The adapter derives the key from a richer node value.
    Derived(Box<dyn Fn(&N) -> NodeKey + 'a>),
    /// No key derivation available; any search fails before it starts.
    Missing,
}

impl<'a, N: PrimitiveNode> Keying<'a, N> {
    /// Strategy for nodes that are numbers or strings.
    pub fn self_keyed() -> Self {
        Keying::SelfKeyed(N::primitive_key)
    }
}

impl<'a, N> Keying<'a, N> {
    /// Strategy backed by an adapter-supplied derivation.
    pub fn derived<F>(derive: F) -> Self
    where
        F: Fn(&N) -> NodeKey + 'a,
    {
        Keying::Derived(Box::new(derive))
    }

    /// Returns true unless the strategy is [`Keying::Missing`].
    pub fn is_available(&self) -> bool {
        !matches!(self, Keying::Missing)
    }

    /// Derives the key of a single node.
    pub fn key(&self, node: &N) -> Result<NodeKey> {
        match self {
            Keying::SelfKeyed(derive) => Ok(derive(node)),
            Keying::Derived(derive) => Ok(derive(node)),
            Keying::Missing => Err(Error::MissingKeyDerivation),
        }
    }

    /// Checks the strategy once and returns an infallible deriver.
    pub(crate) fn resolve(self) -> Result<KeyDeriver<'a, N>> {
        match self {
            Keying::SelfKeyed(derive) => Ok(KeyDeriver::Function(derive)),
            Keying::Derived(derive) => Ok(KeyDeriver::Closure(derive)),
            Keying::Missing => Err(Error::MissingKeyDerivation),
        }
    }
}

impl<N> fmt::Debug for Keying<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Keying::SelfKeyed(_) => f.write_str("SelfKeyed"),
            Keying::Derived(_) => f.write_str("Derived"),
            Keying::Missing => f.write_str("Missing"),
        }
    }
}

/// A key strategy already known to be usable.
pub(crate) enum KeyDeriver<'a, N> {
    Function(fn(&N) -> NodeKey),
    Closure(Box<dyn Fn(&N) -> NodeKey + 'a>),
}

impl<N> KeyDeriver<'_, N> {
    pub(crate) fn key(&self, node: &N) -> NodeKey {
        match self {
            KeyDeriver::Function(derive) => derive(node),
            KeyDeriver::Closure(derive) => derive(node),
        }
    }
}
