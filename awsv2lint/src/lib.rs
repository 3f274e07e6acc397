//! `awsv2lint` — a migration linter for shell scripts that use the AWS CLI.
//!
//! AWS CLI v2 changed several behavioral defaults that silently break
//! scripts written against v1: binary parameters are base64-decoded, output
//! goes through a pager, `cloudformation deploy` tolerates empty changesets,
//! S3-to-S3 copies pull object properties, a set of undocumented parameter
//! aliases disappeared, and `ecr get-login` is gone entirely.
//!
//! The crate parses a script into a bash syntax tree, runs a fixed catalog
//! of rules against it, and applies non-overlapping node-scoped edits to
//! produce a fixed script, preserving every byte the rules did not match.
//! Findings without a safe rewrite are surfaced for manual review instead.
//!
//! Everything the binary uses is exported here so tests drive the same code
//! paths.

/// Command-line surface.
pub mod cli;
/// Configuration file loading.
pub mod config;
/// Linting engine: rule execution, finding order, fix application.
pub mod engine;
/// Shared entry point for the CLI binary.
pub mod entry_point;
/// Interactive accept/reject fix sessions.
pub mod interactive;
/// Terminal and JSON rendering of results.
pub mod output;
/// The rule trait, findings, and the built-in catalog.
pub mod rules;
/// Syntax-tree parsing, structural queries, and text edits.
pub mod syntax;
/// Path helpers and shell-script discovery.
pub mod utils;
