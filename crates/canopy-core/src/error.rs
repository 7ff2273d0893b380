//! Error types for tree operations.

use std::fmt;

use thiserror::Error;

/// Which child slot of a node an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Errors that can occur on tree operations.
///
/// All of these are raised synchronously at the offending call; no
/// mutator leaves the tree partially changed on an error path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The position was created by a different tree instance.
    #[error("position does not belong to this tree")]
    WrongContainer,

    /// The position refers to a node that has since been removed.
    #[error("position refers to a removed node")]
    StalePosition,

    /// `add_root` was called on a non-empty tree.
    #[error("tree already has a root")]
    RootExists,

    /// `add_left`/`add_right` targeted an occupied child slot.
    #[error("{side} child already exists")]
    ChildExists { side: Side },

    /// `delete` targeted a node with both children present.
    #[error("node has two children")]
    TwoChildren,

    /// `attach` targeted a position that is not a leaf.
    #[error("position must be a leaf")]
    NotALeaf,
}
