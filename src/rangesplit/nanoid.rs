//! # Nano ID range splitting
//!
//! A Nano ID of length `L` over an alphabet of `b` symbols is a base-`b` numeral, so
//! the identifier space is the integer range `[0, b^L)`. Splitting it into `k`
//! partitions uses a fixed partition size of `floor(b^L / k)`; partition `i` starts
//! at `i * floor(b^L / k)`. Any remainder is absorbed by the last partition.
//!
//! Note this is divide-then-multiply. The UUID splitter multiplies first, see
//! [`crate::uuid_space`]. The two policies disagree for non-exact divisions and are
//! kept apart on purpose, since unifying them would move emitted boundaries.

use crate::alphabet::Alphabet;
use crate::error::{Result, SplitError};
use crate::numeral::Numeral;
use serde::Serialize;
use tracing::{debug, trace};

pub const DEFAULT_LENGTH: usize = 21;

/// First identifier of a partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Boundary {
    /// Position of the partition, starting at 0.
    pub ordinal: u64,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct NanoIdSplitter {
    alphabet: Alphabet,
}

impl NanoIdSplitter {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// `b^length`, or `None` only when that is wider than 128 bits.
    pub fn space_size(&self, length: usize) -> Option<u128> {
        let base = u128::from(self.alphabet.len());
        if base == 1 {
            return Some(1);
        }
        // Any base of 2 or more overflows long before the exponent saturates.
        let exponent = u32::try_from(length).unwrap_or(u32::MAX);
        base.checked_pow(exponent)
    }

    pub fn boundaries(&self, splits: u64, length: usize) -> Result<Vec<Boundary>> {
        if splits == 0 {
            return Err(SplitError::InvalidArgument(
                "Number of partitions must be positive".to_string(),
            ));
        }
        if length == 0 {
            return Err(SplitError::InvalidArgument(
                "ID length must be positive".to_string(),
            ));
        }

        // A space wider than 128 bits always holds more than u64::MAX ids.
        if let Some(total) = self.space_size(length) {
            if u128::from(splits) > total {
                return Err(SplitError::TooManyPartitions { splits, total });
            }
        }

        if splits == 1 {
            // Also the only valid request for a one-symbol alphabet.
            return Ok(vec![Boundary {
                ordinal: 0,
                value: std::iter::repeat(self.alphabet.zero())
                    .take(length)
                    .collect(),
            }]);
        }

        let space = Numeral::power(self.alphabet.len(), length);
        let (partition_size, remainder) = space.div_small(splits);
        debug!(
            alphabet_size = self.alphabet.len(),
            length,
            splits,
            space = %space,
            partition_size = %partition_size,
            remainder,
            "splitting nano id space"
        );

        let mut boundaries = Vec::new();
        let mut offset = Numeral::zero(self.alphabet.len(), length + 1);
        for ordinal in 0..splits {
            let value = offset
                .render(&self.alphabet, length)
                .ok_or_else(|| SplitError::Overflow {
                    value: offset.to_string(),
                    length,
                })?;
            trace!(ordinal, %value, "boundary");
            boundaries.push(Boundary { ordinal, value });

            if ordinal + 1 < splits {
                offset = offset
                    .checked_add(&partition_size)
                    .ok_or_else(|| SplitError::Overflow {
                        value: format!("{} + {}", offset, partition_size),
                        length,
                    })?;
            }
        }

        Ok(boundaries)
    }
}
