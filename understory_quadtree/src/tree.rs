// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`QuadTree`] coordinator: insertion, subdivision, and retrieval.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::mem;

use tracing::{debug, trace};

use crate::config::QuadTreeConfig;
use crate::item::BoundedItem;
use crate::node::{Node, NodeKind, NodeSlot};
use crate::quadrant::Quadrant;
use crate::region::Region;
use crate::vector::Vector2;

const ROOT: usize = 0;

/// A bounded-depth region quadtree over items of type `I`.
///
/// Items are routed by their anchor point ([`BoundedItem::position`]) only.
/// A leaf splits into four children once it holds more than
/// [`max_items`](QuadTreeConfig::max_items) items, unless it already sits at
/// [`max_depth`](QuadTreeConfig::max_depth). Nodes never merge back; the
/// intended use is to [`clear`](Self::clear) and refill the tree each tick.
///
/// Nodes live in a single arena, so clearing and refilling reuses storage.
#[derive(Clone)]
pub struct QuadTree<I> {
    config: QuadTreeConfig,
    pub(crate) nodes: Vec<NodeSlot<I>>,
    len: usize,
}

impl<I> Debug for QuadTree<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("config", &self.config)
            .field("nodes", &self.nodes.len())
            .field("items", &self.len)
            .finish_non_exhaustive()
    }
}

impl<I> QuadTree<I> {
    /// Create an empty tree covering `region`.
    ///
    /// `max_depth` and `max_items` are not validated; see [`QuadTreeConfig`]
    /// for how zero values behave.
    pub fn new(region: Region, max_depth: u32, max_items: usize) -> Self {
        Self::with_config(QuadTreeConfig::new(region, max_depth, max_items))
    }

    /// Create an empty tree from a config.
    pub fn with_config(config: QuadTreeConfig) -> Self {
        let mut nodes = Vec::new();
        nodes.push(NodeSlot::empty_leaf(config.region, 0));
        Self {
            config,
            nodes,
            len: 0,
        }
    }

    /// The parameters this tree was built with.
    pub fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// Region covered by the root.
    pub fn region(&self) -> Region {
        self.config.region
    }

    /// Number of items inserted since construction or the last clear.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no items have been inserted since the last clear.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, leaves and branches alike. A fresh tree has one.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Read-only view of the root node.
    pub fn root(&self) -> Node<'_, I> {
        Node::new(self, ROOT)
    }

    /// Drop every item and node and start over with an empty root.
    ///
    /// Region and split policy are unchanged. The arena keeps its capacity.
    pub fn clear(&mut self) {
        debug!(
            nodes = self.nodes.len(),
            items = self.len,
            "clearing quadtree"
        );
        self.nodes.clear();
        self.nodes.push(NodeSlot::empty_leaf(self.config.region, 0));
        self.len = 0;
    }

    /// Walk from the root to the leaf that owns `position`.
    fn leaf_for(&self, position: Vector2) -> usize {
        let mut idx = ROOT;
        while let NodeKind::Branch(first) = self.nodes[idx].kind {
            let quadrant = Quadrant::route(position, self.nodes[idx].region.midpoint());
            idx = first + quadrant.index();
        }
        idx
    }

    /// Items sharing a leaf with `position`.
    pub fn retrieve_point(&self, position: Vector2) -> &[I] {
        match &self.nodes[self.leaf_for(position)].kind {
            NodeKind::Leaf(items) => items.as_slice(),
            NodeKind::Branch(_) => &[],
        }
    }

    /// Candidate colliders for `item`.
    ///
    /// Returns every item in the leaf that `item`'s anchor routes to. This is
    /// a broad-phase filter: it may include items that do not overlap, it may
    /// miss overlapping items whose anchors fall in a neighbouring leaf, and
    /// it includes `item` itself if `item` was inserted. Callers run their own
    /// exact test on the result.
    pub fn retrieve<Q: BoundedItem + ?Sized>(&self, item: &Q) -> &[I] {
        self.retrieve_point(item.position())
    }

    /// Call `f` once for each unordered pair of items that share a leaf.
    ///
    /// Every item is stored in exactly one leaf, so no pair is reported twice
    /// and no item is paired with itself. This is the same candidate set that
    /// calling [`retrieve`](Self::retrieve) for every inserted item would
    /// produce, minus self-matches and mirrored duplicates.
    pub fn visit_candidate_pairs<F: FnMut(&I, &I)>(&self, mut f: F) {
        for slot in &self.nodes {
            if let NodeKind::Leaf(items) = &slot.kind {
                for (i, a) in items.iter().enumerate() {
                    for b in &items[i + 1..] {
                        f(a, b);
                    }
                }
            }
        }
    }
}

impl<I: BoundedItem> QuadTree<I> {
    /// Build a fresh, independently owned tree holding `items`.
    pub fn from_items<It: IntoIterator<Item = I>>(config: QuadTreeConfig, items: It) -> Self {
        let mut tree = Self::with_config(config);
        tree.extend(items);
        tree
    }

    /// Add `item`, subdividing leaves as needed.
    pub fn insert(&mut self, item: I) {
        self.len += 1;
        self.insert_from(ROOT, item);
    }

    /// Clear the tree and insert every item from `items`.
    pub fn rebuild<It: IntoIterator<Item = I>>(&mut self, items: It) {
        self.clear();
        self.extend(items);
        debug!(items = self.len, nodes = self.nodes.len(), "rebuilt quadtree");
    }

    fn insert_from(&mut self, start: usize, item: I) {
        let max_depth = self.config.max_depth;
        let max_items = self.config.max_items;
        let mut idx = start;
        loop {
            let slot = &mut self.nodes[idx];
            match &mut slot.kind {
                NodeKind::Branch(first) => {
                    let quadrant = Quadrant::route(item.position(), slot.region.midpoint());
                    idx = *first + quadrant.index();
                }
                NodeKind::Leaf(items) => {
                    items.push(item);
                    if slot.depth < max_depth && items.len() > max_items {
                        self.subdivide(idx);
                    }
                    return;
                }
            }
        }
    }

    /// Turn the leaf at `idx` into a branch and redistribute its items.
    fn subdivide(&mut self, idx: usize) {
        let first = self.nodes.len();
        let NodeSlot { region, depth, .. } = self.nodes[idx];
        self.nodes.extend(
            region
                .split()
                .map(|child| NodeSlot::empty_leaf(child, depth + 1)),
        );

        let old = mem::replace(&mut self.nodes[idx].kind, NodeKind::Branch(first));
        let NodeKind::Leaf(items) = old else {
            unreachable!("subdivide called on a branch");
        };
        trace!(depth, items = items.len(), "subdividing leaf");
        for item in items {
            self.insert_from(idx, item);
        }
    }
}

impl<I: BoundedItem> Extend<I> for QuadTree<I> {
    fn extend<It: IntoIterator<Item = I>>(&mut self, iter: It) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<I> Default for QuadTree<I> {
    fn default() -> Self {
        Self::with_config(QuadTreeConfig::default())
    }
}
