//! The backend contract every vendor simulator family implements.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use crate::command_line::CommandLine;
use crate::error::CompileError;
use crate::settings::SimSettings;
use crate::types::{Library, SourceFile};

/// One vendor simulation toolchain, driven through a uniform contract.
///
/// Construction is backend-specific (each backend resolves its own
/// executables and fails fast if they are missing); everything after that
/// goes through this trait, so the orchestrator holds a `&dyn Simulator` or
/// `Box<dyn Simulator>` and never a concrete backend type.
///
/// All calls block the calling thread until the spawned tool exits. The
/// backend performs no scheduling of its own; running several requests in
/// parallel is the caller's decision.
pub trait Simulator {
    /// Short backend identifier, e.g. `"xsim"`.
    fn name(&self) -> &'static str;

    /// Builds the command that compiles one source file into its library.
    ///
    /// Fails with [`CompileError`] when the file's kind is unknown; the
    /// error is scoped to this file and does not abort sibling files.
    fn compile_command(&self, source: &SourceFile) -> Result<CommandLine, CompileError>;

    /// Registers a logical library, creating its object directory and
    /// persisting the name-to-directory association for later invocations.
    ///
    /// Calling this again with the same library leaves the persisted
    /// mapping byte-identical; the object directory is recreated if it
    /// has gone missing since the previous call.
    fn map_library(&mut self, library: &Library) -> io::Result<()>;

    /// The library associations currently persisted by the backend,
    /// excluding any reserved bookkeeping entries.
    fn mapped_libraries(&self) -> io::Result<BTreeMap<String, String>>;

    /// Elaborates `settings.library.unit` with its generics and, unless
    /// `settings.elaborate_only` is set, runs the resulting snapshot.
    ///
    /// Tool output is streamed to the log as it arrives. Failures of the
    /// spawned tools never propagate as errors; the single boolean is the
    /// whole verdict: elaboration succeeded and, when a simulation phase
    /// ran, it succeeded too.
    fn simulate(&self, output_dir: &Path, settings: &SimSettings) -> bool;
}
