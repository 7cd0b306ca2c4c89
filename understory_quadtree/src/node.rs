// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena node storage and the read-only [`Node`] view.

use core::fmt::Debug;

use smallvec::SmallVec;

use crate::quadrant::Quadrant;
use crate::region::Region;
use crate::tree::QuadTree;

/// Items a leaf holds inline before spilling to the heap.
pub(crate) type LeafItems<I> = SmallVec<[I; 4]>;

/// Either a list of items or the index of four contiguous children.
#[derive(Clone, Debug)]
pub(crate) enum NodeKind<I> {
    Leaf(LeafItems<I>),
    /// Arena index of the top-left child; the other three follow in quadrant order.
    Branch(usize),
}

/// One cell of the partition as stored in the arena.
#[derive(Clone, Debug)]
pub(crate) struct NodeSlot<I> {
    pub(crate) region: Region,
    pub(crate) depth: u32,
    pub(crate) kind: NodeKind<I>,
}

impl<I> NodeSlot<I> {
    pub(crate) fn empty_leaf(region: Region, depth: u32) -> Self {
        Self {
            region,
            depth,
            kind: NodeKind::Leaf(SmallVec::new()),
        }
    }
}

/// Read-only view of one node of a [`QuadTree`].
///
/// Obtained from [`QuadTree::root`] and meant for introspection such as
/// drawing the partition. It borrows the tree, so the tree cannot change
/// while a view is alive.
pub struct Node<'a, I> {
    tree: &'a QuadTree<I>,
    idx: usize,
}

// Manual impls avoid requiring `I: Clone`/`I: Copy`.
impl<I> Clone for Node<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for Node<'_, I> {}

impl<I> Debug for Node<'_, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let slot = self.slot();
        let mut s = f.debug_struct("Node");
        s.field("region", &slot.region).field("depth", &slot.depth);
        match &slot.kind {
            NodeKind::Leaf(items) => s.field("items", &items.len()),
            NodeKind::Branch(_) => s.field("children", &4_usize),
        };
        s.finish_non_exhaustive()
    }
}

impl<'a, I> Node<'a, I> {
    pub(crate) fn new(tree: &'a QuadTree<I>, idx: usize) -> Self {
        Self { tree, idx }
    }

    fn slot(&self) -> &'a NodeSlot<I> {
        &self.tree.nodes[self.idx]
    }

    /// Area this node is responsible for.
    pub fn region(&self) -> Region {
        self.slot().region
    }

    /// Distance from the root, which is depth 0.
    pub fn depth(&self) -> u32 {
        self.slot().depth
    }

    /// Whether this node holds items directly rather than children.
    pub fn is_leaf(&self) -> bool {
        matches!(self.slot().kind, NodeKind::Leaf(_))
    }

    /// Items held by this node.
    ///
    /// Always empty for a subdivided node: its items were moved into its
    /// children when it split.
    pub fn items(&self) -> &'a [I] {
        match &self.slot().kind {
            NodeKind::Leaf(items) => items.as_slice(),
            NodeKind::Branch(_) => &[],
        }
    }

    /// The four children in quadrant order, or `None` for a leaf.
    pub fn children(&self) -> Option<[Self; 4]> {
        match self.slot().kind {
            NodeKind::Branch(first) => {
                Some(Quadrant::ALL.map(|q| Self::new(self.tree, first + q.index())))
            }
            NodeKind::Leaf(_) => None,
        }
    }

    /// The child covering `quadrant`, or `None` for a leaf.
    pub fn child(&self, quadrant: Quadrant) -> Option<Self> {
        match self.slot().kind {
            NodeKind::Branch(first) => Some(Self::new(self.tree, first + quadrant.index())),
            NodeKind::Leaf(_) => None,
        }
    }

    /// Visit this node and every descendant, parents before children.
    ///
    /// Children are visited in quadrant order.
    pub fn walk<F: FnMut(Self)>(&self, mut f: F) {
        let mut stack: SmallVec<[Self; 32]> = SmallVec::new();
        stack.push(*self);
        while let Some(node) = stack.pop() {
            f(node);
            if let Some(children) = node.children() {
                // Reverse so the top-left child is popped first.
                stack.extend(children.into_iter().rev());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::quadrant::Quadrant;
    use crate::region::Region;
    use crate::tree::QuadTree;
    use crate::vector::Vector2;

    fn tree() -> QuadTree<Vector2> {
        QuadTree::new(Region::from_xywh(0.0, 0.0, 100.0, 100.0), 5, 2)
    }

    #[test]
    fn fresh_root_is_empty_leaf() {
        let tree = tree();
        let root = tree.root();
        assert!(root.is_leaf());
        assert_eq!(root.depth(), 0);
        assert!(root.items().is_empty());
        assert!(root.children().is_none());
        assert!(root.child(Quadrant::TopLeft).is_none());
        assert_eq!(root.region(), Region::from_xywh(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn children_tile_parent_region() {
        let mut tree = tree();
        for p in [(10.0, 10.0), (60.0, 10.0), (10.0, 60.0)] {
            tree.insert(Vector2::from(p));
        }
        let root = tree.root();
        let children = root.children().expect("root should have split");
        for (q, child) in Quadrant::ALL.into_iter().zip(children) {
            assert_eq!(child.depth(), 1);
            assert_eq!(child.region(), root.region().quadrant(q));
        }
    }

    #[test]
    fn nodes_are_never_both_leaf_and_branch() {
        let mut tree = tree();
        for i in 0..40 {
            let f = f64::from(i);
            tree.insert(Vector2::new((f * 37.0) % 100.0, (f * 61.0) % 100.0));
        }
        tree.root().walk(|node| {
            if node.is_leaf() {
                assert!(node.children().is_none());
            } else {
                assert!(node.items().is_empty(), "branch at depth {} holds items", node.depth());
                assert!(node.children().is_some());
            }
        });
    }

    #[test]
    fn walk_is_preorder_in_quadrant_order() {
        let mut tree = tree();
        for p in [(10.0, 10.0), (20.0, 20.0), (90.0, 90.0)] {
            tree.insert(Vector2::from(p));
        }
        let mut seen = Vec::new();
        tree.root().walk(|node| seen.push((node.depth(), node.region().origin)));
        assert_eq!(
            seen,
            [
                (0, Vector2::new(0.0, 0.0)),
                (1, Vector2::new(0.0, 0.0)),
                (1, Vector2::new(50.0, 0.0)),
                (1, Vector2::new(0.0, 50.0)),
                (1, Vector2::new(50.0, 50.0)),
            ]
        );
    }
}
