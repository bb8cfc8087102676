use crate::commands::CmdResult;
use crate::config::UuidOptions;
use crate::error::Result;
use crate::statement::PartitionStatement;
use crate::uuid_space;

pub fn run(options: &UuidOptions) -> Result<CmdResult> {
    let statements = uuid_space::boundaries(options.splits)?
        .into_iter()
        .zip(0u64..)
        .map(|(uuid, ordinal)| {
            PartitionStatement::new(
                options.target.kind,
                &options.target.name,
                ordinal,
                uuid.hyphenated().to_string(),
            )
        })
        .collect();

    Ok(CmdResult::default().with_statements(statements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Target;
    use crate::statement::TargetType;

    #[test]
    fn builds_statements_for_target() {
        let opts = UuidOptions::new(2, Target::new("Users", TargetType::Table)).unwrap();
        let result = run(&opts).unwrap();
        let lines: Vec<String> = result.statements.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "TABLE Users ('00000000-0000-0000-0000-000000000000')",
                "TABLE Users ('7fffffff-ffff-ffff-ffff-ffffffffffff')",
            ]
        );
    }
}
