//! # UUID range splitting
//!
//! UUIDs are treated as plain 128-bit unsigned integers. Partition `i` of `k` starts
//! at `floor(i * (2^128 - 1) / k)`: multiply first, over the inclusive maximum. For
//! `k = 2` that puts the second boundary at `7fffffff-ffff-ffff-ffff-ffffffffffff`,
//! one below the midpoint.

use crate::error::{Result, SplitError};
use tracing::{debug, trace};
use uuid::Uuid;

pub const MAX: u128 = u128::MAX;

/// `floor(ordinal * MAX / splits)` without a 256-bit intermediate.
///
/// With `MAX = q * splits + r` the product splits into `ordinal * q` plus
/// `floor(ordinal * r / splits)`; both `ordinal` and `r` are below `2^64`.
pub fn boundary_value(ordinal: u64, splits: u64) -> u128 {
    debug_assert!(splits > 0 && ordinal < splits);
    let splits = u128::from(splits);
    let ordinal = u128::from(ordinal);
    let quotient = MAX / splits;
    let remainder = MAX % splits;
    ordinal * quotient + (ordinal * remainder) / splits
}

pub fn boundaries(splits: u64) -> Result<Vec<Uuid>> {
    if splits == 0 {
        return Err(SplitError::InvalidArgument(
            "Number of partitions must be positive".to_string(),
        ));
    }
    debug!(splits, "splitting uuid space");

    let uuids = (0..splits)
        .map(|ordinal| {
            let uuid = Uuid::from_u128(boundary_value(ordinal, splits));
            trace!(ordinal, %uuid, "boundary");
            uuid
        })
        .collect();
    Ok(uuids)
}
