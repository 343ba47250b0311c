//! Doclint core library.
//!
//! This crate exposes programmatic APIs for validating markdown
//! documentation trees against a fixed convention: frontmatter schema,
//! formatting hygiene, link integrity, and size thresholds. Safe issues can
//! be repaired in place; dry runs report the same findings with writes
//! suppressed.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `models`: Issue and result types shared by checks and printers.
//! - `checks`: The individual document checks and their fix plans.
//! - `validate`: Orchestration over files and directory trees.
//! - `output`: Console/JSON printers.
//! - `utils`: Supporting helpers.

pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod utils;
pub mod validate;
