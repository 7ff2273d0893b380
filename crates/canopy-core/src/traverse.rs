//! Lazy traversal iterators over tree positions.
//!
//! Each call produces a fresh sequence reflecting the tree at call
//! time; the iterators borrow the tree, so mutation during a traversal
//! is rejected at compile time. An abandoned iterator does no further
//! work.

use canopy_collections::Queue;

use crate::position::Position;
use crate::tree::LinkedBinaryTree;

impl<E> LinkedBinaryTree<E> {
    /// Preorder positions: each node before its children, left subtree
    /// before right.
    pub fn preorder(&self) -> Preorder<'_, E> {
        Preorder {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Postorder positions: children left-to-right, then the node.
    pub fn postorder(&self) -> Postorder<'_, E> {
        Postorder {
            tree: self,
            stack: self.root.map(|index| (index, false)).into_iter().collect(),
        }
    }

    /// Inorder positions: left subtree, node, right subtree.
    pub fn inorder(&self) -> Inorder<'_, E> {
        Inorder {
            tree: self,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    /// The tree's default position ordering (inorder).
    pub fn positions(&self) -> Inorder<'_, E> {
        self.inorder()
    }

    /// Breadth-first positions: level by level, left-to-right, driven
    /// by a FIFO queue.
    pub fn breadth_first(&self) -> BreadthFirst<'_, E> {
        let mut queue = Queue::new();
        if let Some(root) = self.root {
            queue.enqueue(root);
        }
        BreadthFirst { tree: self, queue }
    }

    /// Elements in inorder sequence.
    pub fn iter(&self) -> Elements<'_, E> {
        Elements {
            inner: self.inorder(),
        }
    }
}

impl<'a, E> IntoIterator for &'a LinkedBinaryTree<E> {
    type Item = &'a E;
    type IntoIter = Elements<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over positions in preorder.
#[derive(Debug)]
pub struct Preorder<'a, E> {
    tree: &'a LinkedBinaryTree<E>,
    stack: Vec<usize>,
}

impl<E> Iterator for Preorder<'_, E> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let index = self.stack.pop()?;
        let node = self.tree.node(index);
        // Right pushed first so the left subtree is produced first.
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(left) = node.left {
            self.stack.push(left);
        }
        Some(self.tree.position_at(index))
    }
}

/// Iterator over positions in postorder.
#[derive(Debug)]
pub struct Postorder<'a, E> {
    tree: &'a LinkedBinaryTree<E>,
    /// Frames are (index, expanded): a frame is expanded once its
    /// children have been pushed above it.
    stack: Vec<(usize, bool)>,
}

impl<E> Iterator for Postorder<'_, E> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        loop {
            let (index, expanded) = self.stack.pop()?;
            if expanded {
                return Some(self.tree.position_at(index));
            }
            self.stack.push((index, true));
            let node = self.tree.node(index);
            if let Some(right) = node.right {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left {
                self.stack.push((left, false));
            }
        }
    }
}

/// Iterator over positions in inorder.
#[derive(Debug)]
pub struct Inorder<'a, E> {
    tree: &'a LinkedBinaryTree<E>,
    stack: Vec<usize>,
    cursor: Option<usize>,
}

impl<E> Iterator for Inorder<'_, E> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while let Some(index) = self.cursor {
            self.stack.push(index);
            self.cursor = self.tree.node(index).left;
        }
        let index = self.stack.pop()?;
        self.cursor = self.tree.node(index).right;
        Some(self.tree.position_at(index))
    }
}

/// Iterator over positions level by level.
#[derive(Debug)]
pub struct BreadthFirst<'a, E> {
    tree: &'a LinkedBinaryTree<E>,
    queue: Queue<usize>,
}

impl<E> Iterator for BreadthFirst<'_, E> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let index = self.queue.dequeue()?;
        let node = self.tree.node(index);
        if let Some(left) = node.left {
            self.queue.enqueue(left);
        }
        if let Some(right) = node.right {
            self.queue.enqueue(right);
        }
        Some(self.tree.position_at(index))
    }
}

/// Iterator over elements in inorder.
#[derive(Debug)]
pub struct Elements<'a, E> {
    inner: Inorder<'a, E>,
}

impl<'a, E> Iterator for Elements<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        let p = self.inner.next()?;
        Some(&self.inner.tree.node(p.slot).element)
    }
}
