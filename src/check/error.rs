//! Error types for executable-check evaluation.

use camino::Utf8PathBuf;

/// Errors that can occur while evaluating the executable checks.
///
/// All variants abort the evaluation before any diagnostic is produced;
/// the host surfaces them as tool-level failures for the file in question.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// Reading the first line of the target file failed.
    #[error("failed to read first line of '{path}': {source}")]
    FirstLineRead {
        /// Path whose first line could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O failure reported by the operating system.
        #[source]
        source: std::io::Error,
    },

    /// No pre-read lines were supplied and the target is not a readable
    /// file (standard input or an unnamed source).
    #[error("no lines were supplied and '{target}' is not a readable file")]
    NoReadableSource {
        /// Display form of the target that cannot be read.
        target: String,
    },
}
