// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for tile space construction.

use thiserror::Error;

/// Errors raised while building tiles or tile spaces.
///
/// Only construction can fail; splitting and querying are total.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum TileError {
    /// The partition count floors to less than 2, or is not finite.
    #[error("number of partitions must be 2 or more (got {partition_count})")]
    InvalidArgument {
        /// The rejected value, as passed by the caller.
        partition_count: f64,
    },
}

/// Result type for tile space construction.
pub type TileResult<T> = Result<T, TileError>;
