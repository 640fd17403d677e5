//! The XSim backend adapter tying resolver, store, builder, and runner together.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strobe_backend::{CommandLine, CompileError, Library, SimSettings, Simulator, SourceFile};

use crate::command::CommandBuilder;
use crate::error::XsimError;
use crate::mapping::MappingStore;
use crate::process::{run_command, ElabGate};
use crate::script::{WaveScript, STARTUP_SCRIPT};
use crate::toolchain::Toolchain;

/// Construction-time options for the XSim backend.
///
/// These are fixed for the lifetime of the adapter; per-run knobs live in
/// [`SimSettings`] instead.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct XsimOptions {
    /// Run the kernel in GUI mode and keep the session interactive.
    #[serde(default)]
    pub gui: bool,

    /// Record a VCD waveform during simulation.
    #[serde(default)]
    pub vcd_enable: bool,

    /// Waveform output path override; see
    /// [`WaveScript::resolve_wave_path`] for how it resolves.
    #[serde(default)]
    pub vcd_path: Option<PathBuf>,

    /// Serialize elaboration invocations through the adapter's gate.
    #[serde(default)]
    pub serialize_elab: bool,

    /// Explicit seed template for the library mapping store, overriding
    /// both the environment variable and the toolchain default.
    #[serde(default)]
    pub ini_template: Option<PathBuf>,
}

/// The Vivado XSim simulator backend.
///
/// Construction resolves the toolchain executables and seeds the library
/// mapping store; both failures are fatal and leave no usable adapter.
/// Afterwards the adapter is driven entirely through the
/// [`Simulator`] contract.
#[derive(Debug)]
pub struct Xsim {
    tools: Toolchain,
    store: MappingStore,
    gate: ElabGate,
    options: XsimOptions,
}

impl Xsim {
    /// Backend identifier used in logs and option namespaces.
    pub const NAME: &'static str = "xsim";

    /// Creates an adapter for the installation under `prefix`, keeping its
    /// working files (mapping store, per-run directories) under `output_dir`.
    pub fn new(prefix: &Path, output_dir: &Path, options: XsimOptions) -> Result<Xsim, XsimError> {
        let tools = Toolchain::locate(prefix)?;
        let default_template = tools.default_ini_template();
        let store = MappingStore::initialize(
            output_dir,
            &default_template,
            options.ini_template.as_deref(),
        )?;
        let gate = ElabGate::new(options.serialize_elab);
        Ok(Xsim {
            tools,
            store,
            gate,
            options,
        })
    }

    /// Path of the persisted library mapping file.
    pub fn mapping_file(&self) -> &Path {
        self.store.path()
    }

    fn builder(&self) -> CommandBuilder<'_> {
        CommandBuilder::new(&self.tools, self.store.path())
    }

    /// Runs the elaboration phase, holding the gate across the spawn only.
    fn elaborate(&self, output_dir: &Path, settings: &SimSettings) -> bool {
        let cmd = CommandLine::for_host(self.builder().elaborate(settings));
        let _guard = self.gate.acquire();
        run_command(&cmd, output_dir)
    }

    /// Writes the startup script and runs the simulation kernel.
    fn run_kernel(&self, output_dir: &Path, settings: &SimSettings) -> bool {
        let wave_path =
            WaveScript::resolve_wave_path(output_dir, self.options.vcd_path.as_deref());
        let script = WaveScript::new(self.options.gui, self.options.vcd_enable, wave_path);
        let tcl_path = output_dir.join(STARTUP_SCRIPT);
        if let Err(err) = script.write_to(&tcl_path) {
            log::error!("failed to write {}: {err}", tcl_path.display());
            return false;
        }

        let cmd =
            CommandLine::for_host(self.builder().simulate(self.options.gui, &tcl_path, settings));
        log::info!("{cmd}");
        run_command(&cmd, output_dir)
    }
}

impl Simulator for Xsim {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compile_command(&self, source: &SourceFile) -> Result<CommandLine, CompileError> {
        Ok(CommandLine::for_host(self.builder().compile(source)?))
    }

    fn map_library(&mut self, library: &Library) -> io::Result<()> {
        if library.directory.is_empty() {
            // Implicit/system library: nothing on disk to create.
            return self.store.set(&library.name, &library.directory);
        }
        // The directory is recreated even for an already-mapped library, so
        // a mapping survives its object directory being wiped between runs.
        // `set` is a no-op for a matching entry, keeping the store file
        // byte-identical.
        self.store.ensure(&library.name, &library.directory)
    }

    fn mapped_libraries(&self) -> io::Result<BTreeMap<String, String>> {
        Ok(self.store.read_all()?.into_iter().collect())
    }

    fn simulate(&self, output_dir: &Path, settings: &SimSettings) -> bool {
        if let Err(err) = fs::create_dir_all(output_dir) {
            log::error!("failed to create {}: {err}", output_dir.display());
            return false;
        }
        let elab_ok = self.elaborate(output_dir, settings);
        compose_outcome(elab_ok, settings.elaborate_only, || {
            self.run_kernel(output_dir, settings)
        })
    }
}

/// Composes the per-run verdict from the phase outcomes.
///
/// A failed elaboration short-circuits: the simulation phase is never
/// invoked. Elaborate-only runs succeed on elaboration alone.
fn compose_outcome(elab_ok: bool, elaborate_only: bool, run_sim: impl FnOnce() -> bool) -> bool {
    elab_ok && (elaborate_only || run_sim())
}
