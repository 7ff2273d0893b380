//! Generic navigation over positional trees.

use crate::error::TreeError;
use crate::position::Position;

/// Navigation primitives plus the helpers derivable from them.
///
/// Any structure exposing root/parent/left/right links gets the derived
/// queries (`is_root`, `is_leaf`, `children`, `depth`, `height`) for
/// free; none of them are specific to one tree representation.
pub trait Navigate {
    /// Position of the tree's root, or `None` if the tree is empty.
    fn root(&self) -> Option<Position>;

    /// Position of `p`'s parent, or `None` if `p` is the root.
    fn parent(&self, p: Position) -> Result<Option<Position>, TreeError>;

    /// Position of `p`'s left child, or `None` if there is none.
    fn left(&self, p: Position) -> Result<Option<Position>, TreeError>;

    /// Position of `p`'s right child, or `None` if there is none.
    fn right(&self, p: Position) -> Result<Option<Position>, TreeError>;

    /// Number of children of `p` (0, 1, or 2), counted from the links.
    fn num_children(&self, p: Position) -> Result<usize, TreeError>;

    /// Total number of elements in the tree.
    fn len(&self) -> usize;

    /// Check whether the tree holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `p` is the root (has no parent).
    fn is_root(&self, p: Position) -> Result<bool, TreeError> {
        Ok(self.parent(p)?.is_none())
    }

    /// Check whether `p` has no children.
    fn is_leaf(&self, p: Position) -> Result<bool, TreeError> {
        Ok(self.num_children(p)? == 0)
    }

    /// Children of `p`, left before right, skipping absent slots.
    fn children(&self, p: Position) -> Result<Vec<Position>, TreeError> {
        let mut found = Vec::with_capacity(2);
        if let Some(left) = self.left(p)? {
            found.push(left);
        }
        if let Some(right) = self.right(p)? {
            found.push(right);
        }
        Ok(found)
    }

    /// Number of parent hops from `p` to the root.
    fn depth(&self, p: Position) -> Result<usize, TreeError> {
        let mut hops = 0;
        let mut cursor = p;
        while let Some(up) = self.parent(cursor)? {
            hops += 1;
            cursor = up;
        }
        Ok(hops)
    }

    /// Height of the subtree rooted at `p`; a leaf has height 0.
    ///
    /// Computed structurally over the subtree's links rather than by
    /// enumerating the whole tree.
    fn height(&self, p: Position) -> Result<usize, TreeError> {
        let mut tallest = 0;
        for child in self.children(p)? {
            tallest = tallest.max(1 + self.height(child)?);
        }
        Ok(tallest)
    }
}
