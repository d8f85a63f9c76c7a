//! Filesystem utilities for code generation
//!
//! Everything that mutates disk goes through [`Filesystem`], so the
//! orchestrator can be exercised against instrumented or failing
//! implementations in tests.

use std::fs;
use std::io;
use std::path::Path;
use tempfile::TempDir;

/// Filesystem operations used by a generation run
pub trait Filesystem {
    /// True if anything (file, directory, dangling symlink) occupies `path`
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and its parents; existing directories are fine
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create an empty staging directory inside `parent`. The directory is
    /// removed when the returned guard drops unless it was published.
    fn create_staging_dir(&self, parent: &Path, prefix: &str) -> io::Result<TempDir>;

    /// Write content to a file, creating parent directories if needed
    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Move a fully staged directory to its final location. Fails if
    /// `target` already exists with content.
    fn publish_dir(&self, staged: &Path, target: &Path) -> io::Result<()>;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn create_staging_dir(&self, parent: &Path, prefix: &str) -> io::Result<TempDir> {
        tempfile::Builder::new().prefix(prefix).tempdir_in(parent)
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        write_file(path, contents)
    }

    fn publish_dir(&self, staged: &Path, target: &Path) -> io::Result<()> {
        // rename(2) replaces an empty directory but never a populated one
        fs::rename(staged, target)
    }
}

/// Write content to a file, creating parent directories if needed
pub fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, contents)
}
