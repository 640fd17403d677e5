//! Construction of compile, elaborate, and simulate argument vectors.

use std::path::Path;

use strobe_backend::{CompileError, SimSettings, SourceFile, SourceKind};

use crate::encode::encode_generic;
use crate::toolchain::Toolchain;

/// Fixed identifier of the elaborated snapshot consumed by the kernel.
pub const SNAPSHOT: &str = "strobe_test";

/// Builds raw argument vectors for one backend instance.
///
/// Borrows the resolved toolchain and the mapping-store path; the adapter
/// wraps the vectors into platform-appropriate `CommandLine`s before
/// spawning.
pub(crate) struct CommandBuilder<'a> {
    tools: &'a Toolchain,
    ini_file: &'a Path,
}

impl<'a> CommandBuilder<'a> {
    pub(crate) fn new(tools: &'a Toolchain, ini_file: &'a Path) -> Self {
        Self { tools, ini_file }
    }

    /// Dispatches on the source kind; unknown kinds fail the file.
    pub(crate) fn compile(&self, source: &SourceFile) -> Result<Vec<String>, CompileError> {
        match source.kind {
            Some(SourceKind::Vhdl) => Ok(self.compile_vhdl(source)),
            Some(SourceKind::Verilog) => Ok(self.compile_verilog(source, false)),
            Some(SourceKind::SystemVerilog) => Ok(self.compile_verilog(source, true)),
            None => {
                log::error!("unknown file type: {}", source.path.display());
                Err(CompileError::UnsupportedKind {
                    path: source.path.clone(),
                })
            }
        }
    }

    // xvhdl is pinned to --2008 regardless of the file's declared standard.
    fn compile_vhdl(&self, source: &SourceFile) -> Vec<String> {
        let mut cmd = vec![path_arg(&self.tools.xvhdl), "--2008".to_string()];
        cmd.extend(self.work_library(source));
        cmd.extend(self.init_file());
        cmd.extend(shared_compile_flags());
        cmd.push(path_arg(&source.path));
        cmd
    }

    fn compile_verilog(&self, source: &SourceFile, system_verilog: bool) -> Vec<String> {
        let mut cmd = vec![path_arg(&self.tools.xvlog)];
        if system_verilog {
            cmd.push("--sv".to_string());
        }
        cmd.push(path_arg(&source.path));
        cmd.extend(self.work_library(source));
        cmd.extend(self.init_file());
        cmd.extend(shared_compile_flags());
        for include_dir in &source.include_dirs {
            cmd.push("--include".to_string());
            cmd.push(path_arg(include_dir));
        }
        for (name, value) in &source.defines {
            cmd.push("--define".to_string());
            cmd.push(format!("{name}={value}"));
        }
        cmd
    }

    /// The elaboration command for `settings.library.unit`.
    ///
    /// `-debug all` keeps units from other packages debuggable. Generics are
    /// appended in the settings' stable iteration order; caller-supplied
    /// extra flags go last, verbatim.
    pub(crate) fn elaborate(&self, settings: &SimSettings) -> Vec<String> {
        let mut cmd = vec![path_arg(&self.tools.xelab)];
        cmd.push("-debug".to_string());
        cmd.push("all".to_string());
        cmd.push("--notimingchecks".to_string());
        cmd.push("--nospecify".to_string());
        cmd.push("--nolog".to_string());
        cmd.push("--relax".to_string());
        cmd.push("--incr".to_string());
        cmd.push("--sdfnowarn".to_string());
        cmd.push("--stats".to_string());
        cmd.push("--O2".to_string());
        cmd.push("--snapshot".to_string());
        cmd.push(SNAPSHOT.to_string());
        cmd.extend(self.init_file());

        cmd.push(format!("{}.{}", settings.library, settings.unit));
        if settings.enable_glbl {
            cmd.push("xil_defaultlib.glbl".to_string());
        }
        if let Some(timescale) = &settings.timescale {
            cmd.push("-timescale".to_string());
            cmd.push(timescale.clone());
        }
        for (name, value) in &settings.generics {
            cmd.push("--generic_top".to_string());
            cmd.push(format!("\"{name}={}\"", encode_generic(value)));
        }
        cmd.extend(settings.elab_flags.iter().cloned());
        cmd
    }

    /// The kernel invocation running the elaborated snapshot with the
    /// generated startup script.
    pub(crate) fn simulate(&self, gui: bool, tcl_file: &Path, settings: &SimSettings) -> Vec<String> {
        let mut cmd = vec![path_arg(&self.tools.xsim)];
        if gui {
            cmd.push("--gui".to_string());
        }
        cmd.push("--tclbatch".to_string());
        cmd.push(tcl_arg(tcl_file));
        cmd.push(SNAPSHOT.to_string());
        cmd.extend(settings.sim_flags.iter().cloned());
        cmd
    }

    fn work_library(&self, source: &SourceFile) -> Vec<String> {
        vec!["-work".to_string(), source.library.clone()]
    }

    fn init_file(&self) -> Vec<String> {
        vec!["--initfile".to_string(), path_arg(self.ini_file)]
    }
}

fn shared_compile_flags() -> Vec<String> {
    vec![
        "--incr".to_string(),
        "--relax".to_string(),
        "--nolog".to_string(),
    ]
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Tcl wants forward slashes even on Windows.
fn tcl_arg(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
