// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the tile space demos.

use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber that prints to stderr.
///
/// The filter is read from `RUST_LOG` and defaults to `debug` for the tile
/// space crate, so splits show up without any setup.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("understory_tile_space=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
