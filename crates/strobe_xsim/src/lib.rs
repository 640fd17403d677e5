//! Vivado XSim backend adapter for the Strobe HDL test runner.
//!
//! This crate turns a logical "compile and simulate this unit with these
//! settings" request into invocations of the Vivado simulation toolchain
//! (`xvhdl`, `xvlog`, `xelab`, `xsim`, `vivado`) and reports a single
//! pass/fail result per run. It owns the persisted library mapping file
//! every compilation reads, the command construction for all three phases,
//! and the generated startup script that controls waveform capture.
//!
//! All calls are synchronous and block until the spawned tool exits. The
//! only internal concurrency primitive is the optional elaboration gate
//! serializing `xelab` invocations.
//!
//! # Usage
//!
//! ```ignore
//! use strobe_backend::{Library, SimSettings, Simulator, SourceFile};
//! use strobe_xsim::{Xsim, XsimOptions};
//!
//! let mut backend = Xsim::new(prefix, output_dir, XsimOptions::default())?;
//! backend.map_library(&Library::new("lib", "/out/libs/lib"))?;
//! let cmd = backend.compile_command(&SourceFile::new("tb_x.vhd", "lib"))?;
//! // ... spawn cmd per file, then:
//! let passed = backend.simulate(run_dir, &SimSettings::new("lib", "tb_x"));
//! ```
//!
//! # Modules
//!
//! - `adapter` — The [`Xsim`] orchestrator implementing the backend contract
//! - `command` — Compile/elaborate/simulate argument vectors
//! - `encode` — Generic-value encoding for `--generic_top`
//! - `error` — Construction-time errors
//! - `mapping` — The persisted `xsim.ini` library mapping store
//! - `process` — Process spawning and the elaboration gate
//! - `script` — Startup Tcl script generation
//! - `toolchain` — Executable resolution

#![warn(missing_docs)]

mod command;

pub mod adapter;
pub mod encode;
pub mod error;
pub mod mapping;
pub mod process;
pub mod script;
pub mod toolchain;

pub use adapter::{Xsim, XsimOptions};
pub use encode::encode_generic;
pub use error::XsimError;
pub use mapping::MappingStore;
pub use process::{run_command, ElabGate};
pub use script::WaveScript;
pub use toolchain::Toolchain;
