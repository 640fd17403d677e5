//! Error types shared across simulator backends.

use std::path::PathBuf;

/// Errors raised while building a compile command for a single source file.
///
/// A `CompileError` is scoped to the offending file: the caller decides
/// whether sibling files continue to compile. It is never retried by the
/// backend itself.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The source file's language kind is unknown or unsupported by the backend.
    #[error("unsupported source file kind for {path}")]
    UnsupportedKind {
        /// The file that could not be compiled.
        path: PathBuf,
    },
}
