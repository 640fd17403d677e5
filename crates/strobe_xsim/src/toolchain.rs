//! Resolution of the XSim toolchain executables.

use std::path::{Path, PathBuf};

use crate::error::XsimError;

/// Absolute paths to the XSim toolchain executables, resolved once at
/// backend construction.
///
/// Each tool is probed first as its script-suffixed variant (`<name>.bat`,
/// how Vivado ships its entry points on Windows) and then as the bare
/// `<name>`; the first existing file wins. A tool that resolves neither way
/// makes construction fail.
#[derive(Clone, Debug)]
pub struct Toolchain {
    /// Installation prefix the tools were resolved under.
    pub prefix: PathBuf,
    /// VHDL compiler (`xvhdl`).
    pub xvhdl: PathBuf,
    /// Verilog/SystemVerilog compiler (`xvlog`).
    pub xvlog: PathBuf,
    /// Elaborator (`xelab`).
    pub xelab: PathBuf,
    /// Simulation kernel (`xsim`).
    pub xsim: PathBuf,
    /// Management utility (`vivado`).
    pub vivado: PathBuf,
}

impl Toolchain {
    /// Resolves all five executables under `prefix`.
    ///
    /// Fails with [`XsimError::ToolNotFound`] naming the first tool that is
    /// missing in both variants.
    pub fn locate(prefix: &Path) -> Result<Toolchain, XsimError> {
        Ok(Toolchain {
            prefix: prefix.to_path_buf(),
            xvhdl: resolve_tool(prefix, "xvhdl")?,
            xvlog: resolve_tool(prefix, "xvlog")?,
            xelab: resolve_tool(prefix, "xelab")?,
            xsim: resolve_tool(prefix, "xsim")?,
            vivado: resolve_tool(prefix, "vivado")?,
        })
    }

    /// Default location of the installation's seed `xsim.ini`, relative to
    /// the binary prefix (`<prefix>/../data/xsim/xsim.ini`).
    pub fn default_ini_template(&self) -> PathBuf {
        self.prefix.join("..").join("data").join("xsim").join("xsim.ini")
    }
}

/// Probes `<prefix>/<name>.bat` then `<prefix>/<name>`.
fn resolve_tool(prefix: &Path, name: &str) -> Result<PathBuf, XsimError> {
    let script = prefix.join(format!("{name}.bat"));
    if script.is_file() {
        return Ok(script);
    }
    let bare = prefix.join(name);
    if bare.is_file() {
        return Ok(bare);
    }
    Err(XsimError::ToolNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    const TOOLS: [&str; 5] = ["xvhdl", "xvlog", "xelab", "xsim", "vivado"];

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn locates_bare_tools() {
        let dir = tempfile::tempdir().unwrap();
        for tool in TOOLS {
            touch(dir.path(), tool);
        }
        let tools = Toolchain::locate(dir.path()).unwrap();
        assert_eq!(tools.xvhdl, dir.path().join("xvhdl"));
        assert_eq!(tools.vivado, dir.path().join("vivado"));
        assert_eq!(tools.prefix, dir.path());
    }

    #[test]
    fn script_variant_wins_over_bare() {
        let dir = tempfile::tempdir().unwrap();
        for tool in TOOLS {
            touch(dir.path(), tool);
        }
        touch(dir.path(), "xelab.bat");
        let tools = Toolchain::locate(dir.path()).unwrap();
        assert_eq!(tools.xelab, dir.path().join("xelab.bat"));
        assert_eq!(tools.xvlog, dir.path().join("xvlog"));
    }

    #[test]
    fn missing_tool_fails_with_its_name() {
        let dir = tempfile::tempdir().unwrap();
        for tool in TOOLS {
            if tool != "xsim" {
                touch(dir.path(), tool);
            }
        }
        let err = Toolchain::locate(dir.path()).unwrap_err();
        match err {
            XsimError::ToolNotFound(name) => assert_eq!(name, "xsim"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn default_template_is_toolchain_relative() {
        let dir = tempfile::tempdir().unwrap();
        for tool in TOOLS {
            touch(dir.path(), tool);
        }
        let tools = Toolchain::locate(dir.path()).unwrap();
        let template = tools.default_ini_template();
        assert!(template.ends_with(Path::new("data/xsim/xsim.ini")));
        assert!(template.starts_with(dir.path()));
    }
}
