// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a bounded-depth region quadtree for broad-phase queries.
//!
//! Understory Quadtree partitions a fixed 2D region so that proximity and
//! collision checks only compare objects that share a cell.
//!
//! - Insert any value implementing [`BoundedItem`] (a position and a size).
//! - Retrieve the candidate set for an item or a point.
//! - Clear and refill once per tick; nodes are never merged or moved.
//!
//! It does not resolve collisions. [`QuadTree::retrieve`] returns a coarse
//! candidate set and callers run their own exact test over it.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{QuadTree, Region, Vector2};
//!
//! // 100x100 region, at most 5 levels deep, split a leaf when it holds more than 2 items.
//! let mut tree = QuadTree::new(Region::from_xywh(0.0, 0.0, 100.0, 100.0), 5, 2);
//! tree.insert(Vector2::new(10.0, 10.0));
//! tree.insert(Vector2::new(20.0, 20.0));
//! tree.insert(Vector2::new(90.0, 90.0));
//!
//! // The third insert split the root; the two top-left points share a leaf.
//! assert!(!tree.root().is_leaf());
//! assert_eq!(tree.retrieve(&Vector2::new(15.0, 15.0)).len(), 2);
//!
//! // Next tick: start over.
//! tree.clear();
//! assert!(tree.retrieve(&Vector2::new(15.0, 15.0)).is_empty());
//! ```
//!
//! Objects owned elsewhere can be indexed by reference for the duration of a tick:
//!
//! ```rust
//! use understory_quadtree::{BoundedItem, QuadTree, QuadTreeConfig, Vector2};
//!
//! struct Ball {
//!     pos: Vector2,
//!     radius: f64,
//! }
//!
//! impl BoundedItem for Ball {
//!     fn position(&self) -> Vector2 {
//!         self.pos
//!     }
//!     fn size(&self) -> Vector2 {
//!         Vector2::new(self.radius, self.radius)
//!     }
//! }
//!
//! let balls = [
//!     Ball { pos: Vector2::new(100.0, 100.0), radius: 5.0 },
//!     Ball { pos: Vector2::new(103.0, 101.0), radius: 5.0 },
//!     Ball { pos: Vector2::new(600.0, 600.0), radius: 5.0 },
//! ];
//!
//! let tree = QuadTree::from_items(QuadTreeConfig::default(), &balls);
//! let mut close = 0;
//! tree.visit_candidate_pairs(|a, b| {
//!     if a.pos.distance(b.pos) < a.radius + b.radius {
//!         close += 1;
//!     }
//! });
//! assert_eq!(close, 1);
//! ```
//!
//! ## Routing
//!
//! A subdivided node sends an item to exactly one child, chosen from the
//! item's anchor point alone (see [`Quadrant::route`]). An item whose box
//! straddles a split line is still filed on one side, so neighbours across the
//! line are not reported. This keeps insertion and retrieval at one
//! root-to-leaf walk each.
//!
//! ## Limits
//!
//! A leaf at [`QuadTreeConfig::max_depth`] never splits and keeps every item it
//! receives; many items at one anchor therefore end up in one long leaf.
//! Coordinates are assumed finite. NaN or infinite positions route
//! arbitrarily.
//!
//! ## Features
//!
//! - `std` *(default)*: use `std` float math and enable `std` in dependencies.
//! - `libm`: float math via `libm` for `no_std` builds.
//!
//! Events are emitted through [`tracing`] at `debug`/`trace` level; install a
//! subscriber to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
mod item;
mod node;
mod quadrant;
mod region;
mod tree;
pub(crate) mod util;
mod vector;

pub use config::{ConfigError, QuadTreeConfig};
pub use item::BoundedItem;
pub use node::Node;
pub use quadrant::Quadrant;
pub use region::Region;
pub use tree::QuadTree;
pub use vector::Vector2;
