//! Shared test helpers for integration tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary on-disk script with controlled content and permissions.
///
/// The backing directory lives as long as the fixture, so the path stays
/// valid for the duration of a test.
pub struct ScriptFixture {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl ScriptFixture {
    /// Creates a script containing `content` with permission `mode`
    /// (ignored on platforms without Unix permission bits).
    ///
    /// # Panics
    ///
    /// Panics if the temporary file cannot be created.
    #[must_use]
    pub fn new(content: &str, mode: u32) -> Self {
        let dir = TempDir::new().expect("should create temp dir");
        let raw_path = dir.path().join("script");
        std::fs::write(&raw_path, content).expect("should write script");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            std::fs::set_permissions(&raw_path, std::fs::Permissions::from_mode(mode))
                .expect("should set permissions");
        }
        #[cfg(not(unix))]
        let _ = mode;
        let path = Utf8PathBuf::from_path_buf(raw_path).expect("temp path should be UTF-8");
        Self { _dir: dir, path }
    }

    /// Path of the script on disk.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}
