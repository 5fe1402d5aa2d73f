// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal over the leaves of a tile subtree.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::tile::Tile;

/// Depth-first iterator over the leaf tiles of a subtree.
///
/// Siblings are visited in row-major order, so for a single split the leaves
/// come out in the same order as [`Tile::children`].
///
/// Created by [`Tile::leaves`].
#[derive(Clone, Debug)]
pub struct Leaves<'a, F> {
    stack: Vec<&'a Tile<F>>,
}

impl<'a, F> Leaves<'a, F> {
    pub(crate) fn new(root: &'a Tile<F>) -> Self {
        Self {
            stack: alloc::vec![root],
        }
    }
}

impl<'a, F> Iterator for Leaves<'a, F> {
    type Item = &'a Tile<F>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(tile) = self.stack.pop() {
            if tile.is_leaf() {
                return Some(tile);
            }
            // Reversed so the first child is popped first.
            self.stack.extend(tile.children().iter().rev());
        }
        None
    }
}

impl<F> FusedIterator for Leaves<'_, F> {}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use crate::Tile;

    #[test]
    fn leaf_yields_itself_once() {
        let t: Tile<()> = Tile::new(Point::ZERO, Point::new(1., 1.), 2.).unwrap();
        let mut leaves = t.leaves();
        assert!(core::ptr::eq(leaves.next().unwrap(), &t));
        assert!(leaves.next().is_none());
        assert!(leaves.next().is_none());
    }

    #[test]
    fn leaves_cover_the_whole_area() {
        let mut t: Tile<()> = Tile::new(Point::ZERO, Point::new(27., 27.), 3.).unwrap();
        t.split();
        for child in t.children_mut().iter_mut().step_by(2) {
            child.split();
        }

        let area: f64 = t.leaves().map(|leaf| leaf.bounds().area()).sum();
        assert_eq!(area, 27. * 27.);
        assert_eq!(t.leaves().count(), 4 + 5 * 9);
    }
}
