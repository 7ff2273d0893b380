//! Linked representation of a binary tree over a generational arena.

use crate::error::{Side, TreeError};
use crate::nav::Navigate;
use crate::node::{Node, Slot, TreeId};
use crate::position::Position;

/// A rooted binary tree addressed through [`Position`] handles.
///
/// Nodes live in a slot arena owned by the tree. Each slot carries a
/// generation counter that is bumped when the slot is retired, so a
/// `Position` taken before a deletion is detected as stale afterwards
/// instead of resolving to whatever node reuses the slot.
#[derive(Debug)]
pub struct LinkedBinaryTree<E> {
    pub(crate) id: TreeId,
    pub(crate) slots: Vec<Slot<E>>,
    pub(crate) root: Option<usize>,
    pub(crate) size: usize,
    free_head: Option<usize>,
}

impl<E> LinkedBinaryTree<E> {
    /// Create an initially empty binary tree.
    pub fn new() -> Self {
        Self {
            id: TreeId::next(),
            slots: Vec::new(),
            root: None,
            size: 0,
            free_head: None,
        }
    }

    /// This tree's process-unique id.
    pub fn id(&self) -> TreeId {
        self.id
    }

    /// Resolve a position to its slot index, or fail.
    ///
    /// Pure check: rejects positions minted by another tree and
    /// positions whose node has been removed (the slot is vacant or its
    /// generation moved on). Never mutates.
    pub(crate) fn validate(&self, p: Position) -> Result<usize, TreeError> {
        if p.tree != self.id {
            return Err(TreeError::WrongContainer);
        }
        match self.slots.get(p.slot) {
            Some(Slot::Occupied { generation, .. }) if *generation == p.generation => Ok(p.slot),
            _ => Err(TreeError::StalePosition),
        }
    }

    /// Wrap an occupied slot index into a handle carrying the slot's
    /// current generation.
    pub(crate) fn position_at(&self, index: usize) -> Position {
        match &self.slots[index] {
            Slot::Occupied { generation, .. } => Position {
                tree: self.id,
                slot: index,
                generation: *generation,
            },
            Slot::Vacant { .. } => unreachable!("live link to vacant slot"),
        }
    }

    pub(crate) fn node(&self, index: usize) -> &Node<E> {
        match &self.slots[index] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("live link to vacant slot"),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<E> {
        match &mut self.slots[index] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("live link to vacant slot"),
        }
    }

    /// Place a new node in the arena, reusing a vacant slot if one is
    /// available, and return its index.
    fn allocate(&mut self, element: E, parent: Option<usize>) -> usize {
        let node = Node::new(element, parent);
        match self.free_head {
            Some(index) => {
                let (generation, next_free) = match &self.slots[index] {
                    Slot::Vacant {
                        generation,
                        next_free,
                    } => (*generation, *next_free),
                    Slot::Occupied { .. } => unreachable!("free list points at occupied slot"),
                };
                self.free_head = next_free;
                self.slots[index] = Slot::Occupied { generation, node };
                index
            }
            None => {
                self.slots.push(Slot::Occupied {
                    generation: 0,
                    node,
                });
                self.slots.len() - 1
            }
        }
    }

    /// Retire an occupied slot, bumping its generation so outstanding
    /// handles to it go stale, and return the node it held.
    fn retire(&mut self, index: usize) -> Node<E> {
        let generation = match &self.slots[index] {
            Slot::Occupied { generation, .. } => *generation,
            Slot::Vacant { .. } => unreachable!("retiring vacant slot"),
        };
        let vacant = Slot::Vacant {
            generation: generation.wrapping_add(1),
            next_free: self.free_head,
        };
        self.free_head = Some(index);
        match std::mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    /// The element stored at position `p`.
    pub fn element(&self, p: Position) -> Result<&E, TreeError> {
        let index = self.validate(p)?;
        Ok(&self.node(index).element)
    }

    /// Mutable access to the element stored at position `p`.
    pub fn element_mut(&mut self, p: Position) -> Result<&mut E, TreeError> {
        let index = self.validate(p)?;
        Ok(&mut self.node_mut(index).element)
    }

    /// Replace the element at position `p`, returning the old element.
    pub fn replace(&mut self, p: Position, element: E) -> Result<E, TreeError> {
        let index = self.validate(p)?;
        Ok(std::mem::replace(&mut self.node_mut(index).element, element))
    }

    /// Place `element` at the root of an empty tree and return its
    /// position. Fails with [`TreeError::RootExists`] on a non-empty
    /// tree.
    pub fn add_root(&mut self, element: E) -> Result<Position, TreeError> {
        if self.root.is_some() {
            return Err(TreeError::RootExists);
        }
        let index = self.allocate(element, None);
        self.root = Some(index);
        self.size = 1;
        Ok(self.position_at(index))
    }

    /// Create a new left child for `p` and return the new child's
    /// position. Fails with [`TreeError::ChildExists`] if `p` already
    /// has a left child.
    pub fn add_left(&mut self, p: Position, element: E) -> Result<Position, TreeError> {
        self.add_child(p, element, Side::Left)
    }

    /// Create a new right child for `p` and return the new child's
    /// position. Fails with [`TreeError::ChildExists`] if `p` already
    /// has a right child.
    pub fn add_right(&mut self, p: Position, element: E) -> Result<Position, TreeError> {
        self.add_child(p, element, Side::Right)
    }

    fn add_child(&mut self, p: Position, element: E, side: Side) -> Result<Position, TreeError> {
        let parent = self.validate(p)?;
        let occupied = match side {
            Side::Left => self.node(parent).left,
            Side::Right => self.node(parent).right,
        };
        if occupied.is_some() {
            return Err(TreeError::ChildExists { side });
        }
        let child = self.allocate(element, Some(parent));
        let parent_node = self.node_mut(parent);
        match side {
            Side::Left => parent_node.left = Some(child),
            Side::Right => parent_node.right = Some(child),
        }
        self.size += 1;
        Ok(self.position_at(child))
    }

    /// Delete the node at `p`, splicing its sole child (if any) into
    /// its place, and return the element it held.
    ///
    /// Fails with [`TreeError::TwoChildren`] when both child slots are
    /// occupied; the tree is left unmodified in that case. The deleted
    /// node's slot is retired, so `p` and any copies of it go stale.
    pub fn delete(&mut self, p: Position) -> Result<E, TreeError> {
        let index = self.validate(p)?;
        let target = self.node(index);
        if target.left.is_some() && target.right.is_some() {
            return Err(TreeError::TwoChildren);
        }
        let child = target.left.or(target.right);

        let node = self.retire(index);
        if let Some(c) = child {
            self.node_mut(c).parent = node.parent;
        }
        match node.parent {
            None => self.root = child,
            Some(parent) => {
                let parent_node = self.node_mut(parent);
                if parent_node.left == Some(index) {
                    parent_node.left = child;
                } else {
                    parent_node.right = child;
                }
            }
        }
        self.size -= 1;
        Ok(node.element)
    }

    /// Graft `left` and `right` as the left and right subtrees of leaf
    /// `p`, leaving both donor trees empty.
    ///
    /// Fails with [`TreeError::NotALeaf`] if `p` has any children. On
    /// success the receiver grows by `left.len() + right.len()`, both
    /// donors end with a cleared root and size 0, and every position
    /// minted by a donor goes stale.
    pub fn attach(
        &mut self,
        p: Position,
        left: &mut Self,
        right: &mut Self,
    ) -> Result<(), TreeError> {
        let index = self.validate(p)?;
        let target = self.node(index);
        if target.left.is_some() || target.right.is_some() {
            return Err(TreeError::NotALeaf);
        }

        self.size += left.size + right.size;

        if let Some(donor_root) = left.root {
            let grafted = self.graft(left, donor_root, index);
            self.node_mut(index).left = Some(grafted);
        }
        left.root = None;
        left.size = 0;

        if let Some(donor_root) = right.root {
            let grafted = self.graft(right, donor_root, index);
            self.node_mut(index).right = Some(grafted);
        }
        right.root = None;
        right.size = 0;

        Ok(())
    }

    /// Move the donor subtree rooted at `donor_index` into this arena,
    /// preserving structure, and return the new index of its root.
    fn graft(&mut self, donor: &mut Self, donor_index: usize, parent: usize) -> usize {
        let node = donor.retire(donor_index);
        let index = self.allocate(node.element, Some(parent));
        if let Some(donor_left) = node.left {
            let grafted = self.graft(donor, donor_left, index);
            self.node_mut(index).left = Some(grafted);
        }
        if let Some(donor_right) = node.right {
            let grafted = self.graft(donor, donor_right, index);
            self.node_mut(index).right = Some(grafted);
        }
        index
    }
}

impl<E> Navigate for LinkedBinaryTree<E> {
    fn root(&self) -> Option<Position> {
        self.root.map(|index| self.position_at(index))
    }

    fn parent(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let index = self.validate(p)?;
        Ok(self.node(index).parent.map(|up| self.position_at(up)))
    }

    fn left(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let index = self.validate(p)?;
        Ok(self.node(index).left.map(|child| self.position_at(child)))
    }

    fn right(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let index = self.validate(p)?;
        Ok(self.node(index).right.map(|child| self.position_at(child)))
    }

    fn num_children(&self, p: Position) -> Result<usize, TreeError> {
        let index = self.validate(p)?;
        let node = self.node(index);
        let mut count = 0;
        if node.left.is_some() {
            count += 1;
        }
        if node.right.is_some() {
            count += 1;
        }
        Ok(count)
    }

    fn len(&self) -> usize {
        self.size
    }
}

impl<E> Default for LinkedBinaryTree<E> {
    fn default() -> Self {
        Self::new()
    }
}
