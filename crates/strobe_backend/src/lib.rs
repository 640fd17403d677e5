//! Vendor-neutral simulator backend contract for the Strobe HDL test runner.
//!
//! This crate defines the interface between the test orchestrator and a
//! vendor simulation toolchain. A backend (one per vendor family) resolves
//! its executables at construction, compiles source files into logical
//! libraries, and elaborates and runs a single test configuration, reporting
//! one pass/fail result per run.
//!
//! # Modules
//!
//! - `command_line` — Argument vectors with platform-sensitive flattening
//! - `error` — Per-file compilation errors
//! - `settings` — Per-run simulation settings (unit, generics, options)
//! - `simulator` — The [`Simulator`] trait every backend implements
//! - `types` — Source file and library descriptors
//! - `value` — Typed generic (elaboration-time parameter) values

#![warn(missing_docs)]

pub mod command_line;
pub mod error;
pub mod settings;
pub mod simulator;
pub mod types;
pub mod value;

pub use command_line::CommandLine;
pub use error::CompileError;
pub use settings::SimSettings;
pub use simulator::Simulator;
pub use types::{Library, SourceFile, SourceKind};
pub use value::GenericValue;
