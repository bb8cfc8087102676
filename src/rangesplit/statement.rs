use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// What the partition boundaries are applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetType {
    Table,
    Index,
}

impl TargetType {
    pub fn keyword(&self) -> &'static str {
        match self {
            TargetType::Table => "TABLE",
            TargetType::Index => "INDEX",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One output line: `TABLE users ('<boundary>')`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionStatement {
    pub target_type: TargetType,
    pub target: String,
    pub ordinal: u64,
    pub boundary: String,
}

impl PartitionStatement {
    pub fn new(
        target_type: TargetType,
        target: impl Into<String>,
        ordinal: u64,
        boundary: impl Into<String>,
    ) -> Self {
        Self {
            target_type,
            target: target.into(),
            ordinal,
            boundary: boundary.into(),
        }
    }
}

impl fmt::Display for PartitionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ('{}')",
            self.target_type, self.target, self.boundary
        )
    }
}
