//! Error types for XSim backend construction.

use std::path::PathBuf;

/// Errors that abort construction of the XSim backend.
///
/// Both variants are fatal and never retried: a backend whose toolchain or
/// seed mapping file cannot be resolved must not be used at all. Failures of
/// the spawned tools at run time are not errors; they surface as the boolean
/// verdict of [`simulate`](strobe_backend::Simulator::simulate).
#[derive(Debug, thiserror::Error)]
pub enum XsimError {
    /// A required toolchain executable was not found under the installation
    /// prefix, neither as a script-suffixed nor as a bare file.
    #[error("cannot find toolchain executable '{0}'")]
    ToolNotFound(String),

    /// The library-mapping seed template could not be read, or the store
    /// file could not be written.
    #[error("failed to initialize library mapping from {path}: {source}")]
    Initialization {
        /// The template or store path involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
