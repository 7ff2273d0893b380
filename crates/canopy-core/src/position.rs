//! Opaque handle to a location in a tree.

use crate::node::TreeId;

/// An abstraction representing the location of a single element.
///
/// A `Position` pairs the minting tree's [`TreeId`] with a slot index
/// and the slot's generation at mint time. Equality is identity-based:
/// two positions are equal only if they name the same slot of the same
/// tree at the same generation, never because the stored elements
/// compare equal. Positions from different trees never compare equal.
///
/// Every operation that accepts a `Position` validates it first and
/// fails with [`TreeError::WrongContainer`](crate::TreeError) or
/// [`TreeError::StalePosition`](crate::TreeError) rather than touching
/// the wrong node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) tree: TreeId,
    pub(crate) slot: usize,
    pub(crate) generation: u32,
}

impl Position {
    /// The id of the tree that minted this position.
    pub fn tree(&self) -> TreeId {
        self.tree
    }
}
