//! Small data-structure library built from three pieces:
//!
//! - [`LinkedBinaryTree`], a positional binary tree addressed through
//!   validated [`Position`] handles, with preorder, postorder, inorder
//!   and breadth-first traversals;
//! - [`DynArray`] and [`Queue`], a doubling growable array and an
//!   unbounded FIFO ring buffer;
//! - [`DiskUsage`], a recursive walker summing the bytes used by a
//!   file or directory tree.
//!
//! This crate is a facade; each piece also lives in its own crate
//! (`canopy-core`, `canopy-collections`, `canopy-walk`).

pub use canopy_collections::{CollectionError, DynArray, Queue};
pub use canopy_core::{
    BreadthFirst, Elements, Inorder, LinkedBinaryTree, Navigate, Position, Postorder, Preorder,
    Side, TreeError, TreeId,
};
pub use canopy_walk::{
    DiskUsage, FileSystem, OsFileSystem, UsageEntry, UsageReport, WalkConfig, WalkConfigBuilder,
    WalkError, WalkWarning, WarningKind,
};
