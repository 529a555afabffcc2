//! Shebang and executable-bit agreement checks.
//!
//! A host linting framework constructs one [`ExecutableChecker`] per file
//! and consumes the structured [`Diagnostic`] findings its evaluation
//! produces. Three stable codes exist: `EXE001` (shebang without the
//! executable bit), `EXE002` (executable bit without a shebang), and
//! `EXE003` (shebang that does not reference `python`).

mod checker;
mod diagnostic;
mod error;
mod probe;
mod target;

pub use checker::{ExecutableChecker, check_path};
pub use diagnostic::{Diagnostic, ExecCode, ReportTuple};
pub use error::CheckError;
pub use target::CheckTarget;
