use crate::config::DEFAULT_ALPHABET;
use crate::nanoid::DEFAULT_LENGTH;
use crate::statement::TargetType;
use clap::{ArgAction, Args, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

const NANOID_EXAMPLES: &str = "\
Examples:
  # 3 splits for a table named 'Users'
  nanoid-partitioner -s 3 -t Users -y table

  # 5 splits for an index named 'UserIndex'
  nanoid-partitioner -s 5 -t UserIndex -y index

  # Nano IDs of 10 characters
  nanoid-partitioner -s 3 -t Users -y table -l 10

  # Letters and digits only
  nanoid-partitioner -s 3 -t Users -y table -a alphanumeric

  # Literal alphabet (deduplicated and sorted: 123ABC)
  nanoid-partitioner -s 3 -t SpecialData -y index -a ABC123";

const UUID_EXAMPLES: &str = "\
Examples:
  # 3 splits for a table named 'Users'
  uuid-partitioner -s 3 -t Users -y table

  # 5 splits for an index named 'UserIndex'
  uuid-partitioner -s 5 -t UserIndex -y index";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// One statement per line
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Flags shared by both tools.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Number of splits to create
    #[arg(short, long, allow_negative_numbers = true)]
    pub splits: i64,

    /// Name of the table or index
    #[arg(short, long)]
    pub target: String,

    /// Type of target
    #[arg(short = 'y', long = "targettype", value_enum)]
    pub target_type: TargetType,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Parser, Debug)]
#[command(name = "nanoid-partitioner", version)]
#[command(about = "Partition Nano ID ranges", long_about = None)]
#[command(after_help = NANOID_EXAMPLES)]
pub struct NanoIdCli {
    #[command(flatten)]
    pub common: TargetArgs,

    /// Length of the Nano ID
    #[arg(short, long, default_value_t = DEFAULT_LENGTH as i64, allow_negative_numbers = true)]
    pub length: i64,

    /// Alphabet preset (standard, no_underscore, alphanumeric, numbers, lowercase,
    /// uppercase) or a literal alphabet string
    #[arg(short, long, default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,
}

#[derive(Parser, Debug)]
#[command(name = "uuid-partitioner", version)]
#[command(about = "Partition UUID ranges", long_about = None)]
#[command(after_help = UUID_EXAMPLES)]
pub struct UuidCli {
    #[command(flatten)]
    pub common: TargetArgs,
}

/// Installs the stderr subscriber. Verbosity comes from the flag only.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
