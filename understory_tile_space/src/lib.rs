// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tile_space --heading-base-level=0

//! Understory Tile Space: a recursively subdividable 2D tile hierarchy.
//!
//! A tile space starts from one root rectangle. Any tile can be split into a
//! uniform `k × k` grid of child tiles, at any depth, and each tile can carry
//! an optional fill value (for example a color). Point queries descend to the
//! deepest tile containing the point.
//!
//! - [`Tile`]: a rectangular region, leaf or subdivided, owning its children.
//! - [`TileSpace`]: container for one optional root tile and the space's
//!   default [`PartitionCount`].
//! - [`TileError`]: the only failure, an invalid partition count at construction.
//!
//! Geometry uses [`kurbo`] points. The fill value is a type parameter and is
//! opaque to this crate; it is cloned into children when a tile is split.
//!
//! ## Containment
//!
//! Tiles are half-open: a point on the lower border of a tile is inside it, a
//! point on the upper border is not. Neighboring tiles therefore never both
//! claim a point on their shared edge.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_tile_space::{Tile, TileSpace};
//!
//! // The number of partitions in a tile along one axis.
//! let partition_count = 2.0;
//! let mut space: TileSpace<u32> = TileSpace::new(partition_count).unwrap();
//!
//! // Create the first tile and split it into 2 × 2 children.
//! let mut root = Tile::new(Point::new(0.0, 0.0), Point::new(8.0, 8.0), partition_count).unwrap();
//! root.split();
//! space.root = Some(root);
//!
//! // The tile at (7, 3) goes from (4, 0) to (8, 4).
//! let tile = space.find_tile(Point::new(7.0, 3.0)).unwrap();
//! assert_eq!(tile.min(), Point::new(4.0, 0.0));
//! assert_eq!(tile.max(), Point::new(8.0, 4.0));
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: use the standard library float functions through `kurbo/std`.
//! - `libm`: use `libm` for float functions in `no_std` builds.
//!
//! Logging goes through [`tracing`]; the crate never installs a subscriber.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod iter;
mod partition;
mod space;
mod tile;

pub use error::{TileError, TileResult};
pub use iter::Leaves;
pub use partition::PartitionCount;
pub use space::TileSpace;
pub use tile::{Tile, TilePath};
