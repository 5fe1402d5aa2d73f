// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated partition counts.

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::error::{TileError, TileResult};

/// Number of grid divisions per axis used when a tile is split.
///
/// A partition count `k` splits a tile into `k * k` children. The value is
/// always at least 2; [`PartitionCount::new`] is the only place raw input is
/// validated, so every [`Tile`](crate::Tile) and
/// [`TileSpace`](crate::TileSpace) shares the same policy:
///
/// - the input is truncated with `floor` (never rounded), so `3.9` becomes `3`;
/// - anything that floors below 2, and any non-finite input, is rejected.
///
/// ```rust
/// use understory_tile_space::{PartitionCount, TileError};
///
/// assert_eq!(PartitionCount::new(3.9).unwrap().get(), 3);
/// assert_eq!(
///     PartitionCount::new(1.0),
///     Err(TileError::InvalidArgument { partition_count: 1.0 })
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartitionCount(usize);

impl PartitionCount {
    /// The smallest valid partition count.
    pub const MIN: Self = Self(2);

    /// Validate and floor-truncate a raw partition count.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "The value is finite and at least 2; larger values saturate."
    )]
    pub fn new(value: f64) -> TileResult<Self> {
        let floored = value.floor();
        if !value.is_finite() || floored < 2.0 {
            tracing::debug!(partition_count = value, "rejected partition count");
            return Err(TileError::InvalidArgument {
                partition_count: value,
            });
        }
        Ok(Self(floored as usize))
    }

    /// The number of divisions per axis.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// The number of children produced by one split (`k * k`).
    #[inline]
    pub const fn cell_count(self) -> usize {
        self.0.saturating_mul(self.0)
    }

    /// The partition count as a float, for grid arithmetic.
    #[allow(
        clippy::cast_precision_loss,
        reason = "Partition counts are small in practice."
    )]
    #[inline]
    pub(crate) fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl Default for PartitionCount {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<f64> for PartitionCount {
    type Error = TileError;

    fn try_from(value: f64) -> TileResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<usize> for PartitionCount {
    type Error = TileError;

    #[allow(
        clippy::cast_precision_loss,
        reason = "Only values below 2 are converted."
    )]
    fn try_from(value: usize) -> TileResult<Self> {
        if value < 2 {
            return Err(TileError::InvalidArgument {
                partition_count: value as f64,
            });
        }
        Ok(Self(value))
    }
}

impl From<PartitionCount> for usize {
    fn from(count: PartitionCount) -> Self {
        count.0
    }
}

impl fmt::Display for PartitionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::PartitionCount;
    use crate::TileError;

    #[test]
    fn integers_are_kept() {
        assert_eq!(PartitionCount::new(2.0).unwrap().get(), 2);
        assert_eq!(PartitionCount::new(5.0).unwrap().get(), 5);
    }

    #[test]
    fn fractions_are_floored_not_rounded() {
        assert_eq!(PartitionCount::new(3.9).unwrap().get(), 3);
        assert_eq!(PartitionCount::new(2.5).unwrap().get(), 2);
        assert_eq!(PartitionCount::new(2.999_999).unwrap().get(), 2);
    }

    #[test]
    fn below_two_is_rejected() {
        for value in [1.999, 1.0, 0.0, -3.0] {
            assert_eq!(
                PartitionCount::new(value),
                Err(TileError::InvalidArgument {
                    partition_count: value
                }),
            );
        }
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(PartitionCount::new(f64::NAN).is_err());
        assert!(PartitionCount::new(f64::INFINITY).is_err());
        assert!(PartitionCount::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn try_from_usize() {
        assert_eq!(PartitionCount::try_from(4_usize).unwrap().cell_count(), 16);
        assert!(PartitionCount::try_from(1_usize).is_err());
        assert!(PartitionCount::try_from(0_usize).is_err());
    }

    #[test]
    fn error_message_names_the_value() {
        let err = PartitionCount::new(1.0).unwrap_err();
        assert_eq!(
            alloc::format!("{err}"),
            "number of partitions must be 2 or more (got 1)"
        );
    }
}
