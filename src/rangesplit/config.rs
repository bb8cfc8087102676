//! Validated options for a single run.
//!
//! Raw flag values arrive as signed integers so that `-s -3` reaches validation and
//! fails with a proper message instead of a parser usage error. Everything is checked
//! here, before any boundary is computed or printed.

use crate::alphabet::AlphabetSpec;
use crate::error::{Result, SplitError};
use crate::nanoid::DEFAULT_LENGTH;
use crate::statement::TargetType;

pub const DEFAULT_ALPHABET: &str = "standard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub kind: TargetType,
}

impl Target {
    pub fn new(name: impl Into<String>, kind: TargetType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NanoIdOptions {
    pub splits: u64,
    pub length: usize,
    pub alphabet: AlphabetSpec,
    pub target: Target,
}

impl NanoIdOptions {
    pub fn new(splits: i64, length: i64, alphabet: &str, target: Target) -> Result<Self> {
        Ok(Self {
            splits: positive(splits, "Number of partitions must be positive")?,
            length: usize::try_from(positive(length, "ID length must be positive")?).map_err(
                |_| SplitError::InvalidArgument(format!("ID length {} is too large", length)),
            )?,
            alphabet: AlphabetSpec::parse(alphabet),
            target,
        })
    }

    pub fn with_defaults(splits: u64, target: Target) -> Self {
        Self {
            splits,
            length: DEFAULT_LENGTH,
            alphabet: AlphabetSpec::default(),
            target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UuidOptions {
    pub splits: u64,
    pub target: Target,
}

impl UuidOptions {
    pub fn new(splits: i64, target: Target) -> Result<Self> {
        Ok(Self {
            splits: positive(splits, "Number of partitions must be positive")?,
            target,
        })
    }
}

fn positive(value: i64, message: &str) -> Result<u64> {
    match u64::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(SplitError::InvalidArgument(message.to_string())),
    }
}
