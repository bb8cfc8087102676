//! # API Facade
//!
//! Single entry point for front ends. The facade dispatches to the command layer and
//! returns structured results; it never prints and never exits.

use crate::commands::{self, CmdResult};
use crate::config::{NanoIdOptions, UuidOptions};
use crate::error::Result;

pub fn split_nanoid(options: &NanoIdOptions) -> Result<CmdResult> {
    commands::nanoid::run(options)
}

pub fn split_uuid(options: &UuidOptions) -> Result<CmdResult> {
    commands::uuid::run(options)
}
