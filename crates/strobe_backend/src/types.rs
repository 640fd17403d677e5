//! Source file and library descriptors handed to a backend.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The language kind of an HDL source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    /// VHDL (any standard revision; the backend picks the flag it supports).
    Vhdl,
    /// Verilog (IEEE 1364).
    Verilog,
    /// SystemVerilog (IEEE 1800).
    SystemVerilog,
}

impl SourceKind {
    /// Guesses the source kind from a file extension.
    ///
    /// Returns `None` for extensions no backend understands; compiling such
    /// a file fails with [`CompileError`](crate::CompileError).
    pub fn from_path(path: &Path) -> Option<SourceKind> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "vhd" | "vhdl" => Some(SourceKind::Vhdl),
            "v" | "vp" => Some(SourceKind::Verilog),
            "sv" | "svp" | "svh" => Some(SourceKind::SystemVerilog),
            _ => None,
        }
    }
}

/// A single HDL source file queued for compilation into a logical library.
///
/// The project model decides *which* files to compile and in what order;
/// the backend only turns one `SourceFile` into one compile invocation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path to the source file on disk.
    pub path: PathBuf,

    /// Name of the logical library the file compiles into.
    pub library: String,

    /// Detected language kind, or `None` when the extension is unknown.
    pub kind: Option<SourceKind>,

    /// Include search directories (Verilog/SystemVerilog only).
    #[serde(default)]
    pub include_dirs: Vec<PathBuf>,

    /// Preprocessor defines rendered as `name=value`, in the given order
    /// (Verilog/SystemVerilog only).
    #[serde(default)]
    pub defines: Vec<(String, String)>,
}

impl SourceFile {
    /// Creates a descriptor for `path` owned by `library`, guessing the
    /// language kind from the file extension.
    pub fn new(path: impl Into<PathBuf>, library: impl Into<String>) -> Self {
        let path = path.into();
        let kind = SourceKind::from_path(&path);
        Self {
            path,
            library: library.into(),
            kind,
            include_dirs: Vec::new(),
            defines: Vec::new(),
        }
    }
}

/// A logical compilation library and its on-disk object directory.
///
/// An empty `directory` marks an implicit/system library shipped with the
/// toolchain that has no explicit path of its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Logical library name, unique within a project.
    pub name: String,

    /// Object directory path; empty for implicit/system libraries.
    pub directory: String,
}

impl Library {
    /// Creates a library descriptor.
    pub fn new(name: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
        }
    }
}
