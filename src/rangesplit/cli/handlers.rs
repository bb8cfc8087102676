use super::render::write_statements;
use super::setup::{init_logging, NanoIdCli, TargetArgs, UuidCli};
use crate::api;
use crate::config::{NanoIdOptions, Target, UuidOptions};
use crate::error::Result;
use clap::Parser;
use std::io::Write;
use tracing::debug;

fn target(args: &TargetArgs) -> Target {
    Target::new(args.target.clone(), args.target_type)
}

/// Validates, computes every boundary, then writes. Nothing reaches `out` on error.
pub fn handle_nanoid<W: Write>(cli: &NanoIdCli, out: &mut W) -> Result<()> {
    let options = NanoIdOptions::new(
        cli.common.splits,
        cli.length,
        &cli.alphabet,
        target(&cli.common),
    )?;
    debug!(?options, "nanoid-partitioner");
    let result = api::split_nanoid(&options)?;
    write_statements(out, &result, cli.common.output)
}

pub fn handle_uuid<W: Write>(cli: &UuidCli, out: &mut W) -> Result<()> {
    let options = UuidOptions::new(cli.common.splits, target(&cli.common))?;
    debug!(?options, "uuid-partitioner");
    let result = api::split_uuid(&options)?;
    write_statements(out, &result, cli.common.output)
}

pub fn run_nanoid() -> Result<()> {
    let cli = NanoIdCli::parse();
    init_logging(cli.common.verbose);
    handle_nanoid(&cli, &mut std::io::stdout().lock())
}

pub fn run_uuid() -> Result<()> {
    let cli = UuidCli::parse();
    init_logging(cli.common.verbose);
    handle_uuid(&cli, &mut std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SplitError;

    fn nanoid(args: &[&str]) -> (Result<()>, String) {
        let cli = NanoIdCli::try_parse_from(
            std::iter::once("nanoid-partitioner").chain(args.iter().copied()),
        )
        .unwrap();
        let mut out = Vec::new();
        let result = handle_nanoid(&cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn custom_alphabet_statements() {
        let (result, out) = nanoid(&[
            "-s",
            "3",
            "-t",
            "SpecialData",
            "-y",
            "index",
            "-l",
            "1",
            "-a",
            "ABC123",
        ]);
        result.unwrap();
        assert_eq!(
            out,
            "INDEX SpecialData ('1')\nINDEX SpecialData ('3')\nINDEX SpecialData ('B')\n"
        );
    }

    #[test]
    fn too_many_partitions_writes_nothing() {
        let (result, out) = nanoid(&[
            "-s", "11", "-t", "T", "-y", "table", "-l", "1", "-a", "numbers",
        ]);
        assert!(matches!(result, Err(SplitError::TooManyPartitions { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn uuid_statements() {
        let cli = UuidCli::try_parse_from([
            "uuid-partitioner",
            "-s",
            "1",
            "-t",
            "Users",
            "-y",
            "table",
        ])
        .unwrap();
        let mut out = Vec::new();
        handle_uuid(&cli, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "TABLE Users ('00000000-0000-0000-0000-000000000000')\n"
        );
    }

    #[test]
    fn uuid_rejects_zero_splits() {
        let cli = UuidCli::try_parse_from([
            "uuid-partitioner",
            "-s",
            "0",
            "-t",
            "Users",
            "-y",
            "table",
        ])
        .unwrap();
        let mut out = Vec::new();
        assert!(matches!(
            handle_uuid(&cli, &mut out),
            Err(SplitError::InvalidArgument(_))
        ));
        assert!(out.is_empty());
    }
}
