//! Positional binary tree for canopy.
//!
//! This crate provides [`LinkedBinaryTree`], a rooted binary tree whose
//! nodes live in a generational arena and are exposed to callers only
//! through opaque [`Position`] handles. Handles stay cheap to copy and
//! are validated on every use: a position from another tree or one whose
//! node has been deleted is rejected instead of silently reading the
//! wrong node.
//!
//! # Example
//!
//! ```rust
//! use canopy_core::{LinkedBinaryTree, Navigate};
//!
//! let mut tree = LinkedBinaryTree::new();
//! let root = tree.add_root(1).unwrap();
//! let left = tree.add_left(root, 2).unwrap();
//! tree.add_right(root, 3).unwrap();
//! tree.add_left(left, 4).unwrap();
//!
//! let preorder: Vec<_> = tree
//!     .preorder()
//!     .map(|p| *tree.element(p).unwrap())
//!     .collect();
//! assert_eq!(preorder, vec![1, 2, 4, 3]);
//! ```

mod error;
mod nav;
mod node;
mod position;
mod traverse;
mod tree;

pub use error::{Side, TreeError};
pub use nav::Navigate;
pub use node::TreeId;
pub use position::Position;
pub use traverse::{BreadthFirst, Elements, Inorder, Postorder, Preorder};
pub use tree::LinkedBinaryTree;
