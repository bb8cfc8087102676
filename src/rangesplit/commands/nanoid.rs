use crate::commands::CmdResult;
use crate::config::NanoIdOptions;
use crate::error::Result;
use crate::nanoid::NanoIdSplitter;
use crate::statement::PartitionStatement;
use tracing::info;

pub fn run(options: &NanoIdOptions) -> Result<CmdResult> {
    let alphabet = options.alphabet.resolve()?;
    info!(alphabet = %alphabet, size = alphabet.len(), "resolved alphabet");

    let splitter = NanoIdSplitter::new(alphabet);
    let statements = splitter
        .boundaries(options.splits, options.length)?
        .into_iter()
        .map(|b| {
            PartitionStatement::new(options.target.kind, &options.target.name, b.ordinal, b.value)
        })
        .collect();

    Ok(CmdResult::default().with_statements(statements))
}
