use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Alphabet cannot be empty")]
    InvalidAlphabet,

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Number of partitions ({splits}) cannot exceed total possible combinations ({total})")]
    TooManyPartitions { splits: u64, total: u128 },

    #[error("Value {value} does not fit in {length} digits")]
    Overflow { value: String, length: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SplitError>;
