//! Generation of the startup Tcl script driving the simulation kernel.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default waveform file name inside the run's output directory.
const WAVE_FILE: &str = "wave.vcd";

/// File name of the generated startup script.
pub const STARTUP_SCRIPT: &str = "xsim_startup.tcl";

/// The startup script controlling signal capture and run mode.
///
/// The script content is the cross of two switches: GUI mode keeps the
/// session interactive and opens a default all-signal wave view, batch mode
/// runs to completion and exits the kernel with the simulation's reported
/// exit code (the kernel itself always exits zero otherwise). Capture adds
/// the VCD logging commands in either mode.
#[derive(Clone, Debug)]
pub struct WaveScript {
    gui: bool,
    capture: bool,
    wave_path: PathBuf,
}

impl WaveScript {
    /// Creates a script description for one run.
    pub fn new(gui: bool, capture: bool, wave_path: PathBuf) -> Self {
        Self {
            gui,
            capture,
            wave_path,
        }
    }

    /// Resolves the waveform output path for a run.
    ///
    /// No override means `<output_dir>/wave.vcd`. An absolute override is
    /// used as-is; a relative override resolves against the invoking working
    /// directory, not the output directory (the kernel runs with its cwd set
    /// to the output directory, so leaving it relative would silently move
    /// the file).
    pub fn resolve_wave_path(output_dir: &Path, override_path: Option<&Path>) -> PathBuf {
        match override_path {
            None => output_dir.join(WAVE_FILE),
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(path),
        }
    }

    /// The waveform file this script logs to.
    pub fn wave_path(&self) -> &Path {
        &self.wave_path
    }

    /// Renders the script content, one command per line.
    pub fn render(&self) -> String {
        let mut script = String::new();
        let wave = self.wave_path.to_string_lossy();
        if self.gui {
            script.push_str(
                "create_wave_config; add_wave /; set_property needs_save false [current_wave_config]\n",
            );
            if self.capture {
                script.push_str(&format!("open_vcd {wave}\n"));
                script.push_str("log_vcd *\n");
            }
            // Interactive session: no run, no exit.
        } else {
            if self.capture {
                script.push_str(&format!("open_vcd {wave}\n"));
                script.push_str("log_vcd [get_objects -recursive]\n");
            }
            script.push_str("run all\n");
            // The kernel exits zero regardless of assertion failures; the
            // testbench publishes its verdict in /core_pkg/exit_code.
            script.push_str("set sim_error [get_value -radix unsigned /core_pkg/exit_code]\n");
            script.push_str("exit $sim_error\n");
        }
        script
    }

    /// Deletes a stale waveform file, then writes the script to `tcl_path`.
    pub fn write_to(&self, tcl_path: &Path) -> io::Result<()> {
        if self.wave_path.exists() {
            fs::remove_file(&self.wave_path)?;
        }
        fs::write(tcl_path, self.render())
    }
}
