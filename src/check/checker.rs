//! Per-file rule evaluation.
//!
//! Provides [`ExecutableChecker`], the engine a host linting framework
//! constructs once per file, and [`check_path`] for checking a single
//! on-disk file directly. One evaluation resolves the file's first line,
//! probes the executable permission bit, and walks a fixed decision table
//! to produce at most two diagnostics.

use camino::Utf8Path;

use super::diagnostic::{Diagnostic, ExecCode};
use super::error::CheckError;
use super::probe;
use super::target::CheckTarget;

/// Two-character marker opening an interpreter directive line.
const SHEBANG_PREFIX: &str = "#!";

/// Interpreter name a shebang is expected to mention in a Python-focused
/// lint context.
const EXPECTED_INTERPRETER: &str = "python";

/// Checks a single file on disk, reading its first line directly.
///
/// Equivalent to constructing an [`ExecutableChecker`] for the path with
/// no pre-read lines and evaluating it once.
///
/// # Errors
///
/// Returns [`CheckError::FirstLineRead`] when the file cannot be opened
/// or its first line cannot be read.
///
/// # Examples
///
///     use camino::Utf8Path;
///     use execheck::check::check_path;
///
///     // A plain, non-executable text file raises nothing.
///     let diagnostics = check_path(Utf8Path::new("Cargo.toml")).unwrap();
///     assert!(diagnostics.is_empty());
pub fn check_path(path: &Utf8Path) -> Result<Vec<Diagnostic>, CheckError> {
    ExecutableChecker::new(Some(path.as_str()), None).evaluate()
}

/// Stateless-per-invocation evaluator for the executable checks.
///
/// A host constructs one checker per file, handing over the filename as
/// the host conveys it plus any lines it has already read, then calls
/// [`ExecutableChecker::evaluate`] once and consumes the findings. The
/// host's parse tree plays no part in these checks and is dropped by the
/// host adapter before construction.
#[derive(Debug, Clone)]
pub struct ExecutableChecker {
    target: CheckTarget,
    lines: Option<Vec<String>>,
}

impl ExecutableChecker {
    /// Name under which this checker registers with the host framework.
    pub const NAME: &'static str = "execheck";

    /// Version string reported to the host framework at registration.
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    /// Creates a checker for one file.
    ///
    /// `filename` follows host conventions (`None` for no file, `-` for
    /// standard input, anything else a filesystem path). `lines` is the
    /// host's pre-read line buffer; when it is absent or empty (hosts
    /// produce an empty buffer for empty sources) the first line is read
    /// from the filesystem instead.
    #[must_use]
    pub fn new(filename: Option<&str>, lines: Option<Vec<String>>) -> Self {
        Self {
            target: CheckTarget::from_host(filename),
            lines,
        }
    }

    /// Evaluates the checks for this file, producing at most two
    /// diagnostics.
    ///
    /// The decision table, in emission order:
    ///
    /// - a shebang with the executable bit clear raises `EXE001` (real
    ///   files on Unix only);
    /// - a shebang whose line does not mention `python` raises `EXE003`,
    ///   independently of `EXE001` (both fire for a non-executable
    ///   foreign-interpreter script);
    /// - an executable file with no shebang raises `EXE002` (real files
    ///   on Unix only).
    ///
    /// Evaluating twice against an unchanged file yields the identical
    /// findings.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::FirstLineRead`] when the first line must be
    /// read from disk and the read fails, and
    /// [`CheckError::NoReadableSource`] when no usable line buffer was
    /// supplied and the target denotes no file. Either way the evaluation
    /// fails before producing any diagnostic.
    pub fn evaluate(&self) -> Result<Vec<Diagnostic>, CheckError> {
        let first_line = self.first_line()?;
        let has_shebang = first_line.starts_with(SHEBANG_PREFIX);
        let is_executable = self.target.path().is_some_and(probe::is_executable);

        let mut diagnostics = Vec::new();
        if has_shebang {
            if !is_executable && ExecCode::ShebangNotExecutable.applies_to(&self.target) {
                diagnostics.push(Diagnostic::fixed(ExecCode::ShebangNotExecutable));
            }
            if !first_line.contains(EXPECTED_INTERPRETER)
                && ExecCode::ShebangMissingPython.applies_to(&self.target)
            {
                diagnostics.push(Diagnostic::shebang_missing_python(first_line.trim()));
            }
        } else if is_executable && ExecCode::ExecutableNoShebang.applies_to(&self.target) {
            diagnostics.push(Diagnostic::fixed(ExecCode::ExecutableNoShebang));
        }
        Ok(diagnostics)
    }

    /// Resolves the first line from the supplied buffer, falling back to
    /// the filesystem when the buffer is absent or empty.
    fn first_line(&self) -> Result<String, CheckError> {
        self.lines
            .as_ref()
            .and_then(|lines| lines.first())
            .map_or_else(|| self.first_line_from_disk(), |line| Ok(line.clone()))
    }

    /// Reads the first line from the target path.
    fn first_line_from_disk(&self) -> Result<String, CheckError> {
        match &self.target {
            CheckTarget::File(path) => probe::read_first_line(path),
            CheckTarget::Stdin | CheckTarget::Unnamed => Err(CheckError::NoReadableSource {
                target: self.target.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
