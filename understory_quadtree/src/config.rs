// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction parameters for a [`QuadTree`][crate::QuadTree].

use thiserror::Error;

use crate::region::Region;

/// Fixed bounds and split policy of a tree.
///
/// These never change for the lifetime of a tree; [`clear`][crate::QuadTree::clear]
/// rebuilds the root from the same values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadTreeConfig {
    /// Area covered by the root node.
    pub region: Region,
    /// Deepest level a node may be created at. The root is depth 0.
    ///
    /// A leaf at this depth never subdivides and keeps every item it receives.
    /// `0` disables subdivision entirely.
    pub max_depth: u32,
    /// Item count a leaf may hold before it subdivides.
    ///
    /// A leaf splits once it holds *more* than this many items. `0` splits on
    /// the first insert, as long as depth allows.
    pub max_items: usize,
}

impl Default for QuadTreeConfig {
    /// A 750x750 region at the origin, depth 5, two items per leaf.
    fn default() -> Self {
        Self {
            region: Region::from_xywh(0.0, 0.0, 750.0, 750.0),
            max_depth: 5,
            max_items: 2,
        }
    }
}

/// Reasons a [`QuadTreeConfig`] is considered degenerate by [`QuadTreeConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Origin or size has a NaN or infinite component.
    #[error("region has a non-finite component: {0:?}")]
    NonFiniteRegion(Region),
    /// Width or height is negative.
    #[error("region has a negative size: {0:?}")]
    NegativeSize(Region),
    /// `max_depth` is zero, so the tree can never subdivide.
    #[error("max_depth must be positive")]
    ZeroDepth,
    /// `max_items` is zero, so every leaf splits on its first item.
    #[error("max_items must be positive")]
    ZeroItems,
}

impl QuadTreeConfig {
    /// Create a config from its three parameters.
    pub const fn new(region: Region, max_depth: u32, max_items: usize) -> Self {
        Self {
            region,
            max_depth,
            max_items,
        }
    }

    /// Replace the region.
    #[must_use]
    pub const fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Replace `max_depth`.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replace `max_items`.
    #[must_use]
    pub const fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Strict check for callers that want to reject degenerate settings.
    ///
    /// The tree accepts any config; this is opt-in.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Region { origin, size } = self.region;
        if ![origin.x, origin.y, size.x, size.y]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ConfigError::NonFiniteRegion(self.region));
        }
        if size.x < 0.0 || size.y < 0.0 {
            return Err(ConfigError::NegativeSize(self.region));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if self.max_items == 0 {
            return Err(ConfigError::ZeroItems);
        }
        Ok(())
    }
}
