// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tile space: top-level container of a tile hierarchy.

use kurbo::Point;

use crate::error::TileResult;
use crate::partition::PartitionCount;
use crate::tile::Tile;

/// Top of a tile space document.
///
/// Holds at most one root [`Tile`] and the default partition count of the
/// space. The count is fixed at construction. It is not pushed down into the
/// root: every tile carries its own count, and the space does not check that
/// the two agree. [`TileSpace::create_root`] is the convenient way to build a
/// root that matches.
///
/// ## Example
///
/// ```rust
/// use kurbo::Point;
/// use understory_tile_space::TileSpace;
///
/// let mut space: TileSpace<u32> = TileSpace::new(2.0).unwrap();
/// let root = space.create_root(Point::new(0.0, 0.0), Point::new(8.0, 8.0));
/// root.split();
///
/// let tile = space.find_tile(Point::new(7.0, 3.0)).unwrap();
/// assert_eq!(tile.min(), Point::new(4.0, 0.0));
/// assert_eq!(tile.max(), Point::new(8.0, 4.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TileSpace<F> {
    /// The top-most tile, if one has been assigned.
    pub root: Option<Tile<F>>,
    partition_count: PartitionCount,
}

impl<F> TileSpace<F> {
    /// Create an empty tile space.
    ///
    /// `partition_count` follows the same policy as [`Tile::new`]: it is
    /// floored, and values that floor below 2 fail with
    /// [`TileError::InvalidArgument`](crate::TileError::InvalidArgument).
    pub fn new(partition_count: f64) -> TileResult<Self> {
        Ok(Self::with_partition_count(PartitionCount::new(partition_count)?))
    }

    /// Create an empty tile space from an already validated partition count.
    pub fn with_partition_count(partition_count: PartitionCount) -> Self {
        Self {
            root: None,
            partition_count,
        }
    }

    /// The number of partitions along one axis.
    #[inline]
    pub fn partition_count(&self) -> usize {
        self.partition_count.get()
    }

    /// Build a leaf root tile using the space's partition count and assign it.
    ///
    /// Any previous root is dropped.
    pub fn create_root(&mut self, min: Point, max: Point) -> &mut Tile<F> {
        self.root
            .insert(Tile::with_partition_count(min, max, self.partition_count))
    }

    /// Find the deepest tile containing `point`, starting at the root.
    ///
    /// Returns `None` when there is no root or the point lies outside it.
    pub fn find_tile(&self, point: Point) -> Option<&Tile<F>> {
        self.root.as_ref()?.find_tile(point)
    }

    /// Mutable variant of [`TileSpace::find_tile`].
    pub fn find_tile_mut(&mut self, point: Point) -> Option<&mut Tile<F>> {
        self.root.as_mut()?.find_tile_mut(point)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::TileSpace;
    use crate::{Tile, TileError};

    #[test]
    fn new_sets_partition_count() {
        let space: TileSpace<u32> = TileSpace::new(2.).unwrap();
        assert_eq!(space.partition_count(), 2);
        assert!(space.root.is_none());
    }

    #[test]
    fn new_floors_partition_count() {
        let space: TileSpace<u32> = TileSpace::new(3.9).unwrap();
        assert_eq!(space.partition_count(), 3);
    }

    #[test]
    fn new_rejects_partition_count_below_two() {
        assert_eq!(
            TileSpace::<u32>::new(1.).unwrap_err(),
            TileError::InvalidArgument {
                partition_count: 1.
            }
        );
    }

    #[test]
    fn find_tile_without_root_is_none() {
        let mut space: TileSpace<u32> = TileSpace::new(2.).unwrap();
        assert!(space.find_tile(Point::ZERO).is_none());
        assert!(space.find_tile_mut(Point::ZERO).is_none());
    }

    #[test]
    fn split_and_find_through_assigned_root() {
        let partition_count = 2.;
        let mut space = TileSpace::new(partition_count).unwrap();

        let root: Tile<u32> =
            Tile::new(Point::new(0., 0.), Point::new(8., 8.), partition_count).unwrap();
        space.root = Some(root);
        space.root.as_mut().unwrap().split();

        let tile = space
            .root
            .as_ref()
            .unwrap()
            .find_tile(Point::new(7., 3.))
            .unwrap();
        assert_eq!(tile.min().x, 4.);
        assert_eq!(tile.min().y, 0.);
        assert_eq!(tile.max().x, 8.);
        assert_eq!(tile.max().y, 4.);
    }

    #[test]
    fn root_partition_count_is_independent() {
        let mut space: TileSpace<u32> = TileSpace::new(2.).unwrap();
        space.root = Some(Tile::new(Point::ZERO, Point::new(9., 9.), 3.).unwrap());
        space.root.as_mut().unwrap().split();

        assert_eq!(space.partition_count(), 2);
        assert_eq!(space.root.as_ref().unwrap().children().len(), 9);
    }

    #[test]
    fn create_root_uses_space_partition_count() {
        let mut space: TileSpace<u32> = TileSpace::new(4.).unwrap();
        let root = space.create_root(Point::ZERO, Point::new(4., 4.));
        assert_eq!(root.partition_count(), 4);
        root.split();
        assert_eq!(space.root.as_ref().unwrap().children().len(), 16);
    }

    #[test]
    fn paint_through_space() {
        let mut space: TileSpace<u32> = TileSpace::new(2.).unwrap();
        space.create_root(Point::ZERO, Point::new(8., 8.)).split();
        space
            .find_tile_mut(Point::new(1., 7.))
            .unwrap()
            .set_filling(Some(0xff0000));

        let painted = space.find_tile(Point::new(3.5, 4.)).unwrap();
        assert_eq!(painted.filling(), Some(&0xff0000));
        assert!(space.find_tile(Point::new(5., 5.)).unwrap().filling().is_none());
    }
}
