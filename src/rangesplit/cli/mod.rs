//! # CLI Layer
//!
//! The only part of the crate that knows about argument parsing, stdout, stderr
//! and logging setup. Both binaries are thin wrappers around [`run_nanoid`] and
//! [`run_uuid`]; exit codes are decided in `main`.
//!
//! - `setup`: clap definitions and the tracing subscriber
//! - `handlers`: validate, dispatch to [`crate::api`], render
//! - `render`: text and JSON output

mod handlers;
mod render;
mod setup;

pub use handlers::{handle_nanoid, handle_uuid, run_nanoid, run_uuid};
pub use render::write_statements;
pub use setup::{init_logging, NanoIdCli, OutputMode, TargetArgs, UuidCli};
