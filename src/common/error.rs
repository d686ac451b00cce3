//! Error types for buildplumb.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write
/// `Result<T>`. This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in buildplumb.
///
/// The string cache itself has no recoverable failure mode (allocation
/// failure aborts); these variants come from the adapter surfaces.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from file-system operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource string missing from both the primary and shared catalogs.
    #[error("resource string '{0}' not found")]
    ResourceNotFound(String),

    /// A resource template referenced an argument that was not supplied.
    #[error("resource string '{name}' references missing argument {{{index}}}")]
    MissingFormatArgument { name: String, index: usize },
}
