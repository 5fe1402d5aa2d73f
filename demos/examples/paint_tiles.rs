// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint colors into a tile space and sample it as a tiny ASCII raster.
//!
//! Shows how an editing layer would use the tile space: refine the area under
//! a stroke by splitting, paint the leaf under the pointer, then point-sample
//! the result.
//!
//! Run:
//! - `cargo run -p understory_tile_space_demos --example paint_tiles`

use kurbo::Point;
use understory_tile_space::{TileError, TileSpace};

/// Simple opaque color used as the fill value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Rgb(u8, u8, u8);

impl Rgb {
    const WHITE: Self = Self(0xff, 0xff, 0xff);
    const BLUE: Self = Self(0x03, 0x69, 0xcf);
    const RED: Self = Self(0xcf, 0x03, 0x36);

    fn glyph(self) -> char {
        match self {
            Self::BLUE => '#',
            Self::RED => '*',
            _ => '.',
        }
    }
}

fn main() -> Result<(), TileError> {
    understory_tile_space_demos::init_tracing();

    let mut space = TileSpace::new(3.0)?;
    let root = space.create_root(Point::new(0.0, 0.0), Point::new(27.0, 27.0));
    root.set_filling(Some(Rgb::WHITE));
    root.split();

    // Paint a coarse block, then refine a second area twice before painting.
    if let Some(tile) = space.find_tile_mut(Point::new(1.0, 1.0)) {
        tile.set_filling(Some(Rgb::BLUE));
    }
    for depth in 0..2 {
        if let Some(tile) = space.find_tile_mut(Point::new(20.0, 20.0)) {
            tile.split();
            tracing::info!(depth, bounds = ?tile.bounds(), "refined tile");
        }
    }
    if let Some(tile) = space.find_tile_mut(Point::new(20.0, 20.0)) {
        tile.set_filling(Some(Rgb::RED));
    }

    // Sample every cell center of a 27 × 27 raster.
    for y in 0..27 {
        let row: String = (0..27)
            .map(|x| {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                space
                    .find_tile(center)
                    .and_then(|tile| tile.filling().copied())
                    .map_or(' ', Rgb::glyph)
            })
            .collect();
        println!("{row}");
    }

    if let Some(root) = &space.root {
        println!(
            "depth: {}, leaves: {}",
            root.depth(),
            root.leaves().count()
        );
    }

    Ok(())
}
