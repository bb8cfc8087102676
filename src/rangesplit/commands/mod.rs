use crate::statement::PartitionStatement;

pub mod nanoid;
pub mod uuid;

#[derive(Debug, Default)]
pub struct CmdResult {
    pub statements: Vec<PartitionStatement>,
}

impl CmdResult {
    pub fn with_statements(mut self, statements: Vec<PartitionStatement>) -> Self {
        self.statements = statements;
        self
    }

    pub fn boundaries(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().map(|s| s.boundary.as_str())
    }
}
