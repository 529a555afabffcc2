//! The file-or-pseudo-file a checker invocation inspects.
//!
//! Lint hosts hand filenames over as loosely-conventioned strings: a real
//! path, the `-` sentinel for standard input, or nothing at all.
//! `CheckTarget` resolves those conventions into a closed enum at
//! construction time, so downstream code never re-interprets sentinel
//! strings.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

/// Filename hosts pass when the source arrived on standard input.
const STDIN_SENTINEL: &str = "-";

/// Placeholder rendered for targets with no filename at all.
const UNNAMED_SOURCE: &str = "<unnamed>";

/// The file (or pseudo-file) one checker invocation inspects.
///
/// # Examples
///
///     use execheck::check::CheckTarget;
///
///     assert!(CheckTarget::from_host(Some("bin/deploy.sh")).is_real_file());
///     assert!(!CheckTarget::from_host(Some("-")).is_real_file());
///     assert!(!CheckTarget::from_host(None).is_real_file());
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckTarget {
    /// A named path on the local filesystem.
    File(Utf8PathBuf),
    /// The host read the source from standard input (`-` sentinel).
    Stdin,
    /// The host supplied no filename.
    Unnamed,
}

impl CheckTarget {
    /// Resolves a host-supplied filename into a target.
    ///
    /// `None` maps to [`CheckTarget::Unnamed`], the `-` sentinel to
    /// [`CheckTarget::Stdin`], and anything else to [`CheckTarget::File`].
    #[must_use]
    pub fn from_host(filename: Option<&str>) -> Self {
        match filename {
            None => Self::Unnamed,
            Some(STDIN_SENTINEL) => Self::Stdin,
            Some(path) => Self::File(Utf8Path::new(path).to_path_buf()),
        }
    }

    /// Returns `true` when the target denotes a path on the filesystem.
    ///
    /// Permission-bit checks are meaningless for standard input and for
    /// unnamed sources, so their diagnostics consult this before firing.
    #[must_use]
    pub const fn is_real_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Returns the filesystem path for a [`CheckTarget::File`] target.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin | Self::Unnamed => None,
        }
    }
}

impl fmt::Display for CheckTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => f.write_str(path.as_str()),
            Self::Stdin => f.write_str(STDIN_SENTINEL),
            Self::Unnamed => f.write_str(UNNAMED_SOURCE),
        }
    }
}
