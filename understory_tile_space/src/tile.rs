// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiles: rectangular regions that can be split into a uniform grid of child tiles.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::error::TileResult;
use crate::iter::Leaves;
use crate::partition::PartitionCount;

/// Child indices leading from a tile down to one of its descendants.
///
/// Each entry is a row-major index (`x + y * k`) into the children of the
/// tile reached so far. An empty path designates the starting tile itself.
pub type TilePath = SmallVec<[usize; 8]>;

/// A rectangular region of a tile space, either a leaf or split into a grid.
///
/// A tile covers the half-open rectangle `[min.x, max.x) × [min.y, max.y)`.
/// Splitting it with [`Tile::split`] creates `k * k` children, where `k` is
/// the tile's [`PartitionCount`], laid out in row-major order. Children are
/// owned by their parent; dropping a tile drops its whole subtree.
///
/// The type parameter `F` is an opaque fill value (for example a color). The
/// tile only ever clones it into children when splitting.
///
/// ## Example
///
/// ```rust
/// use kurbo::Point;
/// use understory_tile_space::Tile;
///
/// let mut tile: Tile<u32> = Tile::new(Point::new(0.0, 0.0), Point::new(9.0, 9.0), 3.0).unwrap();
/// tile.split();
/// assert_eq!(tile.children().len(), 9);
///
/// // (2.5, 5.5) lies in column 0, row 1 of the grid.
/// let found = tile.find_tile(Point::new(2.5, 5.5)).unwrap();
/// assert!(core::ptr::eq(found, &tile.children()[3]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tile<F> {
    min: Point,
    max: Point,
    partition_count: PartitionCount,
    filling: Option<F>,
    /// Either empty or exactly `partition_count²` entries.
    children: Vec<Self>,
}

impl<F> Tile<F> {
    /// Create a leaf tile with the given corners.
    ///
    /// `partition_count` is floored; values that floor below 2 fail with
    /// [`TileError::InvalidArgument`](crate::TileError::InvalidArgument).
    /// `min` is expected to be component-wise less than or equal to `max`;
    /// this is not checked.
    pub fn new(min: Point, max: Point, partition_count: f64) -> TileResult<Self> {
        let partition_count = PartitionCount::new(partition_count)?;
        Ok(Self::with_partition_count(min, max, partition_count))
    }

    /// Create a leaf tile covering `rect`.
    ///
    /// The rectangle is normalized first, so its corners may be given in any
    /// order.
    pub fn from_rect(rect: Rect, partition_count: f64) -> TileResult<Self> {
        let rect = rect.abs();
        Self::new(
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y1),
            partition_count,
        )
    }

    /// Create a leaf tile from an already validated partition count.
    pub fn with_partition_count(min: Point, max: Point, partition_count: PartitionCount) -> Self {
        Self {
            min,
            max,
            partition_count,
            filling: None,
            children: Vec::new(),
        }
    }

    /// The corner with the smaller x and y values.
    #[inline]
    pub fn min(&self) -> Point {
        self.min
    }

    /// The corner with the greater x and y values.
    #[inline]
    pub fn max(&self) -> Point {
        self.max
    }

    /// The tile's region as a rectangle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.min, self.max)
    }

    /// The number of partitions along one axis.
    #[inline]
    pub fn partition_count(&self) -> usize {
        self.partition_count.get()
    }

    /// The fill value, if any.
    #[inline]
    pub fn filling(&self) -> Option<&F> {
        self.filling.as_ref()
    }

    /// Mutable access to the fill value.
    #[inline]
    pub fn filling_mut(&mut self) -> Option<&mut F> {
        self.filling.as_mut()
    }

    /// Replace the fill value, returning the previous one.
    ///
    /// Only this tile changes; existing children keep their own filling.
    pub fn set_filling(&mut self, filling: Option<F>) -> Option<F> {
        core::mem::replace(&mut self.filling, filling)
    }

    /// The child tiles in row-major order (empty for a leaf).
    #[inline]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Mutable access to the child tiles.
    ///
    /// The slice cannot grow or shrink, so a split tile keeps exactly
    /// `partition_count²` children.
    #[inline]
    pub fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    /// Whether this tile has not been split.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether `p` lies inside the tile.
    ///
    /// The lower borders are included and the upper borders are excluded,
    /// independently on each axis.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// Find the deepest tile containing `point`.
    ///
    /// Every level is bounds-checked, so a point outside this tile yields
    /// `None` even if this tile is the root of the query.
    pub fn find_tile(&self, point: Point) -> Option<&Self> {
        let mut tile = self;
        loop {
            if !tile.contains_point(point) {
                return None;
            }
            if tile.is_leaf() {
                return Some(tile);
            }
            let index = tile.child_index(point);
            tracing::trace!(index, "descending into child tile");
            tile = tile.children.get(index)?;
        }
    }

    /// Mutable variant of [`Tile::find_tile`], for painting the tile under a point.
    pub fn find_tile_mut(&mut self, point: Point) -> Option<&mut Self> {
        let path = self.find_path(point)?;
        self.tile_at_mut(&path)
    }

    /// The path from this tile to the deepest tile containing `point`.
    ///
    /// Returns `None` when the point is outside this tile. The path is empty
    /// when this tile is itself a leaf containing the point.
    pub fn find_path(&self, point: Point) -> Option<TilePath> {
        let mut path = TilePath::new();
        let mut tile = self;
        loop {
            if !tile.contains_point(point) {
                return None;
            }
            if tile.is_leaf() {
                return Some(path);
            }
            let index = tile.child_index(point);
            path.push(index);
            tile = tile.children.get(index)?;
        }
    }

    /// Follow `path` down from this tile.
    ///
    /// Returns `None` if any index is out of range for the tile reached so far.
    pub fn tile_at(&self, path: &[usize]) -> Option<&Self> {
        let mut tile = self;
        for &index in path {
            tile = tile.children.get(index)?;
        }
        Some(tile)
    }

    /// Mutable variant of [`Tile::tile_at`].
    pub fn tile_at_mut(&mut self, path: &[usize]) -> Option<&mut Self> {
        let mut tile = self;
        for &index in path {
            tile = tile.children.get_mut(index)?;
        }
        Some(tile)
    }

    /// Height of the subtree rooted at this tile; 0 for a leaf.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = alloc::vec![(self, 0_usize)];
        while let Some((tile, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(tile.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Iterate over the leaf tiles of this subtree, depth-first in row-major order.
    pub fn leaves(&self) -> Leaves<'_, F> {
        Leaves::new(self)
    }

    /// Row-major index of the child cell containing `point`.
    ///
    /// The offset is normalized by the tile extent, scaled by the partition
    /// count and then floored. Rounding at the far edge can produce `k`, so
    /// each coordinate is clamped into the grid.
    fn child_index(&self, point: Point) -> usize {
        let k = self.partition_count.get();
        let normalized = div_components(point - self.min, self.max - self.min);
        let cell = (normalized * self.partition_count.as_f64()).floor();
        grid_coord(cell.x, k) + grid_coord(cell.y, k) * k
    }
}

impl<F: Clone> Tile<F> {
    /// Split the tile into `partition_count²` children.
    ///
    /// Children are appended in row-major order (`index = x + y * k`). Each
    /// boundary is computed directly from the grid index, so the max corner
    /// of one cell equals the min corner of its neighbor. Children inherit
    /// the partition count and a clone of the filling.
    ///
    /// Splitting a tile that already has children does nothing.
    pub fn split(&mut self) {
        if !self.is_leaf() {
            tracing::warn!(
                children = self.children.len(),
                "tile is already split, ignoring"
            );
            return;
        }

        let k = self.partition_count.get();
        let cell_size = (self.max - self.min) / self.partition_count.as_f64();
        self.children.reserve_exact(self.partition_count.cell_count());
        for y in 0..k {
            for x in 0..k {
                let min = self.min + mul_components(cell_size, grid_vec(x, y));
                let max = self.min + mul_components(cell_size, grid_vec(x + 1, y + 1));
                let mut child = Self::with_partition_count(min, max, self.partition_count);
                child.filling = self.filling.clone();
                self.children.push(child);
            }
        }

        tracing::debug!(
            min.x = self.min.x,
            min.y = self.min.y,
            max.x = self.max.x,
            max.y = self.max.y,
            partition_count = k,
            children = self.children.len(),
            "split tile"
        );
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "Grid indices are bounded by the partition count."
)]
#[inline]
fn grid_vec(x: usize, y: usize) -> Vec2 {
    Vec2::new(x as f64, y as f64)
}

#[inline]
fn mul_components(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x * b.x, a.y * b.y)
}

#[inline]
fn div_components(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x / b.x, a.y / b.y)
}

/// Convert a floored cell coordinate into a grid coordinate in `0..k`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The value is floored and clamped into the grid before use."
)]
#[inline]
fn grid_coord(value: f64, k: usize) -> usize {
    if value > 0.0 {
        (value as usize).min(k - 1)
    } else {
        0
    }
}
