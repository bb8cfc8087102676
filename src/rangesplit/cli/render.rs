use super::setup::OutputMode;
use crate::commands::CmdResult;
use crate::error::Result;
use std::io::Write;

pub fn write_statements<W: Write>(
    out: &mut W,
    result: &CmdResult,
    mode: OutputMode,
) -> Result<()> {
    match mode {
        OutputMode::Text => {
            for statement in &result.statements {
                writeln!(out, "{}", statement)?;
            }
        }
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, &result.statements)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
