//! # Rangesplit Architecture
//!
//! Rangesplit computes evenly spaced partition boundaries over identifier spaces and
//! prints them as partition statements (`TABLE users ('...')`). Two identifier kinds
//! are supported:
//!
//! - **Nano IDs**: fixed-length strings over an alphabet, i.e. base-`b` numerals of
//!   width `L`. The space holds `b^L` identifiers.
//! - **UUIDs**: 128-bit integers rendered as `8-4-4-4-12` lowercase hex.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by the two binaries)                │
//! │  - Parses arguments, sets up logging, writes output         │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Command Layer (api.rs, commands/)                    │
//! │  - Validated options in, `CmdResult` out                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Splitters (nanoid.rs, uuid_space.rs, numeral.rs)           │
//! │  - Pure arithmetic, no I/O                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every boundary is computed before anything is written, so a failed run prints
//! nothing to stdout.
//!
//! ## Module Overview
//!
//! - [`alphabet`]: presets, literal alphabets, digit lookup
//! - [`numeral`]: fixed-width base-`b` arithmetic for spaces wider than 128 bits
//! - [`nanoid`]: Nano ID range splitting
//! - [`uuid_space`]: UUID range splitting
//! - [`statement`]: target types and partition statements
//! - [`config`]: validated per-run options
//! - [`commands`] and [`api`]: command layer and facade
//! - [`cli`]: argument parsing and output for the binaries
//! - [`error`]: error types

pub mod alphabet;
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod nanoid;
pub mod numeral;
pub mod statement;
pub mod uuid_space;
