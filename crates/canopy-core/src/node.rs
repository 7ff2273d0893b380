//! Arena slot and node representation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identifier for a tree instance.
///
/// Stored in every [`Position`](crate::Position) so that a handle can be
/// rejected when presented to a tree other than the one that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(u64);

impl TreeId {
    /// Mint the next unique id.
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// The physical tree unit: an element plus structural links.
///
/// Links are indices into the owning tree's arena. `parent` is a
/// non-owning back-reference used only for navigation; children are
/// owned through the arena.
#[derive(Debug)]
pub(crate) struct Node<E> {
    pub element: E,
    pub parent: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl<E> Node<E> {
    pub fn new(element: E, parent: Option<usize>) -> Self {
        Self {
            element,
            parent,
            left: None,
            right: None,
        }
    }
}

/// One arena cell. Retiring a node bumps the generation stored in the
/// vacant slot, which is what invalidates outstanding handles.
#[derive(Debug)]
pub(crate) enum Slot<E> {
    Occupied { generation: u32, node: Node<E> },
    Vacant { generation: u32, next_free: Option<usize> },
}
