use canopy_core::{LinkedBinaryTree, Navigate, Position, TreeError};

/// root(1) - left(2, left 4, right 5) - right(3, left 6, right 7)
fn balanced_seven() -> (LinkedBinaryTree<i32>, Position) {
    let mut tree = LinkedBinaryTree::new();
    let n1 = tree.add_root(1).unwrap();
    let n2 = tree.add_left(n1, 2).unwrap();
    let n3 = tree.add_right(n1, 3).unwrap();
    tree.add_left(n2, 4).unwrap();
    tree.add_right(n2, 5).unwrap();
    tree.add_left(n3, 6).unwrap();
    tree.add_right(n3, 7).unwrap();
    (tree, n1)
}

#[test]
fn test_len_tracks_live_nodes() {
    let mut tree = LinkedBinaryTree::new();
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert!(tree.root().is_none());

    let root = tree.add_root(0).unwrap();
    let mut frontier = vec![root];
    let mut value = 1;
    for _ in 0..3 {
        let mut next = Vec::new();
        for p in frontier {
            next.push(tree.add_left(p, value).unwrap());
            next.push(tree.add_right(p, value + 1).unwrap());
            value += 2;
        }
        frontier = next;
    }

    // Full tree of depth 3.
    assert_eq!(tree.len(), 15);
    assert_eq!(tree.preorder().count(), 15);
    assert_eq!(tree.breadth_first().count(), 15);
}

#[test]
fn test_parent_child_link_symmetry() {
    let (tree, _) = balanced_seven();
    for p in tree.preorder() {
        for child in tree.children(p).unwrap() {
            assert_eq!(tree.parent(child).unwrap(), Some(p));
            let is_left = tree.left(p).unwrap() == Some(child);
            let is_right = tree.right(p).unwrap() == Some(child);
            assert!(is_left || is_right);
        }
        match tree.parent(p).unwrap() {
            Some(up) => assert!(
                tree.left(up).unwrap() == Some(p) || tree.right(up).unwrap() == Some(p)
            ),
            None => assert_eq!(tree.root(), Some(p)),
        }
    }
}

#[test]
fn test_num_children_matches_links() {
    let (tree, root) = balanced_seven();
    assert_eq!(tree.num_children(root), Ok(2));
    for p in tree.preorder() {
        let expected = tree.children(p).unwrap().len();
        assert_eq!(tree.num_children(p), Ok(expected));
        assert_eq!(tree.is_leaf(p), Ok(expected == 0));
    }
}

#[test]
fn test_delete_leaf_disappears_from_traversals() {
    let (mut tree, root) = balanced_seven();
    let n2 = tree.left(root).unwrap().unwrap();
    let n4 = tree.left(n2).unwrap().unwrap();

    assert_eq!(tree.delete(n4), Ok(4));
    assert_eq!(tree.len(), 6);
    assert!(tree.preorder().all(|p| p != n4));
    assert!(tree.breadth_first().all(|p| p != n4));
    let inorder: Vec<_> = tree.iter().copied().collect();
    assert_eq!(inorder, vec![2, 5, 1, 6, 3, 7]);
}

#[test]
fn test_delete_one_child_preserves_child_subtree() {
    // 1 -> left 2 -> left 4, where 4 has children 8 and 9.
    let mut tree = LinkedBinaryTree::new();
    let n1 = tree.add_root(1).unwrap();
    let n2 = tree.add_left(n1, 2).unwrap();
    let n4 = tree.add_left(n2, 4).unwrap();
    let n8 = tree.add_left(n4, 8).unwrap();
    let n9 = tree.add_right(n4, 9).unwrap();

    assert_eq!(tree.delete(n2), Ok(2));
    assert_eq!(tree.len(), 4);

    // 4 slid into 2's former slot, its own subtree unchanged.
    assert_eq!(tree.left(n1).unwrap(), Some(n4));
    assert_eq!(tree.parent(n4).unwrap(), Some(n1));
    assert_eq!(tree.left(n4).unwrap(), Some(n8));
    assert_eq!(tree.right(n4).unwrap(), Some(n9));
    assert_eq!(tree.parent(n8).unwrap(), Some(n4));
}

#[test]
fn test_stale_position_on_every_navigation_call() {
    let (mut tree, root) = balanced_seven();
    let n3 = tree.right(root).unwrap().unwrap();
    let n6 = tree.left(n3).unwrap().unwrap();
    tree.delete(n6).unwrap();

    assert_eq!(tree.parent(n6), Err(TreeError::StalePosition));
    assert_eq!(tree.left(n6), Err(TreeError::StalePosition));
    assert_eq!(tree.right(n6), Err(TreeError::StalePosition));
    assert_eq!(tree.num_children(n6), Err(TreeError::StalePosition));
    assert_eq!(tree.element(n6), Err(TreeError::StalePosition));
    assert_eq!(tree.depth(n6), Err(TreeError::StalePosition));
    assert_eq!(tree.delete(n6), Err(TreeError::StalePosition));
}

#[test]
fn test_positions_never_cross_containers() {
    let (tree_a, root_a) = balanced_seven();
    let (tree_b, root_b) = balanced_seven();

    assert_ne!(root_a, root_b);
    assert_eq!(tree_b.element(root_a), Err(TreeError::WrongContainer));
    assert_eq!(tree_a.num_children(root_b), Err(TreeError::WrongContainer));
}

#[test]
fn test_attach_merges_in_relative_order() {
    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root(1).unwrap();

    let mut t1 = LinkedBinaryTree::new();
    let t1_root = t1.add_root(2).unwrap();
    t1.add_left(t1_root, 4).unwrap();
    t1.add_right(t1_root, 5).unwrap();

    let mut t2 = LinkedBinaryTree::new();
    let t2_root = t2.add_root(3).unwrap();
    t2.add_left(t2_root, 6).unwrap();
    t2.add_right(t2_root, 7).unwrap();

    let old_len = tree.len();
    let t1_len = t1.len();
    let t2_len = t2.len();

    tree.attach(root, &mut t1, &mut t2).unwrap();

    assert_eq!(tree.len(), old_len + t1_len + t2_len);
    assert_eq!(t1.len(), 0);
    assert_eq!(t2.len(), 0);

    // The grafted subtrees keep their internal structure and sides.
    let preorder: Vec<_> = tree.preorder().map(|p| *tree.element(p).unwrap()).collect();
    assert_eq!(preorder, vec![1, 2, 4, 5, 3, 6, 7]);
    let breadth: Vec<_> = tree
        .breadth_first()
        .map(|p| *tree.element(p).unwrap())
        .collect();
    assert_eq!(breadth, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_attach_with_empty_donors() {
    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root(1).unwrap();
    let mut t1: LinkedBinaryTree<i32> = LinkedBinaryTree::new();
    let mut t2: LinkedBinaryTree<i32> = LinkedBinaryTree::new();

    tree.attach(root, &mut t1, &mut t2).unwrap();
    assert_eq!(tree.len(), 1);
    assert!(tree.is_leaf(root).unwrap());
}

#[test]
fn test_prune_leaves_until_root_remains() {
    let (mut tree, root) = balanced_seven();

    while tree.len() > 1 {
        let leaf = tree
            .postorder()
            .find(|&p| tree.is_leaf(p).unwrap() && Some(p) != tree.root())
            .unwrap();
        let before = tree.len();
        tree.delete(leaf).unwrap();
        assert_eq!(tree.len(), before - 1);
    }

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root(), Some(root));
    assert_eq!(tree.num_children(root), Ok(0));
}

#[test]
fn test_depth_sums_match_levels() {
    let (tree, _) = balanced_seven();
    let depths: Vec<_> = tree
        .breadth_first()
        .map(|p| tree.depth(p).unwrap())
        .collect();
    assert_eq!(depths, vec![0, 1, 1, 2, 2, 2, 2]);
}
