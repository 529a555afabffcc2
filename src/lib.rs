//! `execheck` — a lint-plugin checker that cross-checks a file's shebang
//! line against its executable permission bit.
//!
//! This crate provides the core library functionality for evaluating one
//! source file per invocation and reporting EXE001/EXE002/EXE003 findings
//! to a host linting framework.

/// Shebang and executable-bit agreement checks.
pub mod check;
