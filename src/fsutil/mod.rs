//! File-system facade.
//!
//! Build plumbing asks three questions about paths over and over: is it a
//! file, is it a directory, is it anything at all. The [`FileSystem`]
//! trait puts those probes behind a seam so higher layers can be tested
//! against a fake; [`StdFileSystem`] forwards to `std::fs`.

use std::fs;
use std::path::Path;

use crate::common::Result;

/// Minimal file-system probe surface.
pub trait FileSystem {
    /// Whether `path` exists and is a regular file.
    fn file_exists(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory.
    fn directory_exists(&self, path: &Path) -> bool;

    /// Whether `path` exists at all (file, directory, or anything else).
    fn file_or_directory_exists(&self, path: &Path) -> bool;

    /// Length of the file at `path` in bytes.
    ///
    /// # Errors
    /// I/O errors from the underlying metadata call (missing file,
    /// permission denied, ...).
    fn file_length(&self, path: &Path) -> Result<u64>;
}

/// [`FileSystem`] implementation backed by `std::fs`.
///
/// Existence probes swallow I/O errors into `false`; a path we cannot
/// stat is treated as absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn file_exists(&self, path: &Path) -> bool {
        fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
    }

    fn directory_exists(&self, path: &Path) -> bool {
        fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }

    fn file_or_directory_exists(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok()
    }

    fn file_length(&self, path: &Path) -> Result<u64> {
        Ok(fs::metadata(path)?.len())
    }
}
