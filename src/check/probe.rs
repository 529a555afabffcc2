//! Read-only filesystem probes backing the executable checks.
//!
//! One invocation needs at most two facts from the filesystem: the target's
//! first line and whether any executable permission bit is set. Both probes
//! live here so the checker itself stays free of I/O detail.

use std::fs::File;
use std::io::{BufRead, BufReader};

use camino::Utf8Path;

use super::error::CheckError;

/// Reads the first line of `path`, including its trailing newline if one
/// is present. An empty file yields an empty string.
///
/// Only the first line is pulled from disk; the rest of the file is never
/// read.
pub(crate) fn read_first_line(path: &Utf8Path) -> Result<String, CheckError> {
    let file = File::open(path).map_err(|source| CheckError::FirstLineRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let mut first_line = String::new();
    reader
        .read_line(&mut first_line)
        .map_err(|source| CheckError::FirstLineRead {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(first_line)
}

/// Returns `true` when any of the owner/group/other executable permission
/// bits is set on `path`.
///
/// A path that cannot be inspected (missing file, permission denied on the
/// parent) probes as not executable rather than failing: the permission
/// question is advisory, unlike the first-line read.
#[cfg(unix)]
pub(crate) fn is_executable(path: &Utf8Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path).is_ok_and(|metadata| metadata.permissions().mode() & 0o111 != 0)
}

/// Non-Unix platforms have no meaningful executable bit; the probe always
/// answers `false` and the permission-dependent codes additionally
/// suppress themselves via their applicability rules.
#[cfg(not(unix))]
pub(crate) const fn is_executable(_path: &Utf8Path) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    use super::*;

    /// Creates `name` under `dir` with `content` and, on Unix, `mode`.
    fn write_script(dir: &TempDir, name: &str, content: &str, mode: u32) -> Utf8PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).expect("should write script");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode))
                .expect("should set permissions");
        }
        #[cfg(not(unix))]
        let _ = mode;
        Utf8PathBuf::from_path_buf(path).expect("temp path should be UTF-8")
    }

    // ── First-line reads ────────────────────────────────────────────

    #[test]
    fn first_line_keeps_trailing_newline() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = write_script(&dir, "run.sh", "#!/bin/sh\necho hi\n", 0o644);
        let line = read_first_line(&path).expect("should read first line");
        assert_eq!(line, "#!/bin/sh\n");
    }

    #[test]
    fn single_line_file_without_newline_reads_whole_content() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = write_script(&dir, "one.txt", "#!", 0o644);
        let line = read_first_line(&path).expect("should read first line");
        assert_eq!(line, "#!");
    }

    #[test]
    fn empty_file_reads_as_empty_line() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = write_script(&dir, "empty", "", 0o644);
        let line = read_first_line(&path).expect("should read first line");
        assert_eq!(line, "");
    }

    #[test]
    fn missing_file_fails_with_read_error() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.py"))
            .expect("temp path should be UTF-8");
        let result = read_first_line(&path);
        assert!(result.is_err());
        let message = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(
            message.contains("absent.py"),
            "error should name the path, got: {message}"
        );
    }

    // ── Executable-bit probes ───────────────────────────────────────

    #[cfg(unix)]
    #[test]
    fn mode_755_probes_executable() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = write_script(&dir, "tool", "#!/bin/sh\n", 0o755);
        assert!(is_executable(&path));
    }

    #[cfg(unix)]
    #[test]
    fn mode_644_probes_not_executable() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = write_script(&dir, "plain", "data\n", 0o644);
        assert!(!is_executable(&path));
    }

    #[cfg(unix)]
    #[test]
    fn group_only_execute_bit_counts() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = write_script(&dir, "group", "#!/bin/sh\n", 0o610);
        assert!(is_executable(&path));
    }

    #[test]
    fn missing_file_probes_not_executable() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent"))
            .expect("temp path should be UTF-8");
        assert!(!is_executable(&path));
    }
}
