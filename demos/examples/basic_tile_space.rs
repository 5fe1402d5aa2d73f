// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a tile space, split it, and locate the tile under a point.
//!
//! Run:
//! - `cargo run -p understory_tile_space_demos --example basic_tile_space`

use kurbo::Point;
use understory_tile_space::{Tile, TileError, TileSpace};

fn main() -> Result<(), TileError> {
    understory_tile_space_demos::init_tracing();

    // The number of partitions in a tile along one axis.
    let partition_count = 2.0;

    // Create the tile space document and its first tile.
    let mut space: TileSpace<()> = TileSpace::new(partition_count)?;
    let root = Tile::new(Point::new(0.0, 0.0), Point::new(8.0, 8.0), partition_count)?;
    space.root = Some(root);

    if let Some(root) = space.root.as_mut() {
        root.split();
    }

    // Find the tile at a given point; it goes from (4, 0) to (8, 4).
    let point = Point::new(7.0, 3.0);
    match space.find_tile(point) {
        Some(tile) => println!("{point:?} is in tile {:?}", tile.bounds()),
        None => println!("{point:?} is outside the tile space"),
    }

    // Points on the upper border belong to no tile.
    println!("(8, 8) found: {}", space.find_tile(Point::new(8.0, 8.0)).is_some());

    // Invalid partition counts are rejected up front.
    if let Err(err) = TileSpace::<()>::new(1.0) {
        println!("TileSpace::new(1.0): {err}");
    }

    Ok(())
}
