//! Structured diagnostics for the executable checks.
//!
//! This module defines the stable machine-readable findings the checker
//! reports to its host: the closed set of EXE codes, their fixed message
//! templates and applicability rules, and the positional tuple form the
//! host's reporting pipeline consumes.

use super::target::CheckTarget;

/// Positional diagnostic form consumed by the host framework:
/// `(line_number, offset, message, check)`, where `message` is
/// `"<CODE> <description>"` and `check` is reserved for host bookkeeping.
pub type ReportTuple = (usize, usize, String, String);

/// Stable diagnostic classification codes for the executable checks.
///
/// The set is closed: each variant carries its fixed message template and
/// its own applicability rule, and nothing is ever written back into a
/// variant at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecCode {
    /// `EXE001`: a shebang is present but the file is not executable.
    ShebangNotExecutable,
    /// `EXE002`: the file is executable but no shebang is present.
    ExecutableNoShebang,
    /// `EXE003`: a shebang is present but does not reference `python`.
    ShebangMissingPython,
}

impl ExecCode {
    /// Returns the stable, machine-readable code string.
    ///
    /// # Examples
    ///
    ///     use execheck::check::ExecCode;
    ///
    ///     assert_eq!(ExecCode::ShebangNotExecutable.as_str(), "EXE001");
    ///     assert_eq!(ExecCode::ShebangMissingPython.as_str(), "EXE003");
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShebangNotExecutable => "EXE001",
            Self::ExecutableNoShebang => "EXE002",
            Self::ShebangMissingPython => "EXE003",
        }
    }

    /// Returns the fixed human-readable message template for this code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ShebangNotExecutable => "Shebang is present but the file is not executable.",
            Self::ExecutableNoShebang => "The file is executable but no shebang is present.",
            Self::ShebangMissingPython => "Shebang is present but does not contain \"python\"",
        }
    }

    /// Returns `true` when this code should be considered for `target`.
    ///
    /// The permission-bit codes are suppressed on operating systems
    /// without a meaningful executable bit and for targets that are not
    /// real files on disk (standard input, unnamed sources). The content
    /// check `EXE003` applies unconditionally: it depends only on a line
    /// the host has already read.
    #[must_use]
    pub const fn applies_to(self, target: &CheckTarget) -> bool {
        match self {
            Self::ShebangNotExecutable | Self::ExecutableNoShebang => {
                cfg!(unix) && target.is_real_file()
            }
            Self::ShebangMissingPython => true,
        }
    }
}

/// A single finding produced by the executable checker.
///
/// Findings are immutable once constructed. The position fields are always
/// zero for this rule family (the finding concerns the file as a whole),
/// and `check` is always empty — both are carried explicitly because the
/// host tuple format is positional and fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line the finding points at; always `0` for this rule family.
    pub line_number: usize,
    /// Column offset within the line; always `0` for this rule family.
    pub offset: usize,
    /// Stable code for programmatic handling.
    pub code: ExecCode,
    /// Human-readable message, without the code prefix.
    pub message: String,
    /// Opaque tag reserved for host bookkeeping; always empty.
    pub check: String,
}

impl Diagnostic {
    /// Constructs the fixed-message finding for `code`.
    pub(crate) fn fixed(code: ExecCode) -> Self {
        Self {
            line_number: 0,
            offset: 0,
            code,
            message: code.message().to_owned(),
            check: String::new(),
        }
    }

    /// Constructs the `EXE003` finding, appending the offending shebang
    /// line (already trimmed of surrounding whitespace) to the template.
    pub(crate) fn shebang_missing_python(shebang: &str) -> Self {
        Self {
            line_number: 0,
            offset: 0,
            code: ExecCode::ShebangMissingPython,
            message: format!("{}: {shebang}", ExecCode::ShebangMissingPython.message()),
            check: String::new(),
        }
    }

    /// Renders the finding into the positional tuple the host consumes.
    ///
    /// # Examples
    ///
    ///     use execheck::check::ExecutableChecker;
    ///
    ///     let lines = vec!["#!/bin/sh\n".to_owned(), "echo hi\n".to_owned()];
    ///     let checker = ExecutableChecker::new(Some("-"), Some(lines));
    ///     let diagnostics = checker.evaluate().unwrap();
    ///     let (line, offset, message, check) = diagnostics[0].render();
    ///     assert_eq!((line, offset), (0, 0));
    ///     assert!(message.starts_with("EXE003 "));
    ///     assert!(check.is_empty());
    #[must_use]
    pub fn render(&self) -> ReportTuple {
        (
            self.line_number,
            self.offset,
            format!("{} {}", self.code.as_str(), self.message),
            self.check.clone(),
        )
    }
}
