//! Persistent logical-library to directory mappings (`xsim.ini`).
//!
//! XSim reads library associations from a flat ini-like file whose leading
//! section is plain `name = path` lines. The file is hand-written by the
//! vendor installer and must round-trip exactly, so this module parses and
//! serializes it with an explicit ordered key/value representation instead
//! of a general configuration-format crate.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::XsimError;

/// File name of the mapping store inside the output directory.
const STORE_FILE: &str = "xsim.ini";

/// Environment variable overriding the seed template location.
pub const TEMPLATE_ENV: &str = "STROBE_XSIM_INI";

/// Reserved key marking the default search behavior; never surfaced to
/// callers of [`MappingStore::read_all`].
pub const RESERVED_KEY: &str = "others";

/// The on-disk library mapping store.
///
/// Every mutating call leaves the in-memory view and the file consistent:
/// the file is rewritten in full (never patched in place), so a concurrent
/// external reader sees either the old or the new complete content. Callers
/// running compiles in parallel must serialize `set`/`ensure` themselves;
/// each call is a full-file read-modify-write.
#[derive(Clone, Debug)]
pub struct MappingStore {
    path: PathBuf,
}

impl MappingStore {
    /// Creates the store file by seeding it from a template.
    ///
    /// The output directory is created if missing. The template is, in
    /// order of preference: `template_override`, the [`TEMPLATE_ENV`]
    /// environment variable, or `default_template` (the toolchain-relative
    /// location). Its bytes are copied verbatim. Fails with
    /// [`XsimError::Initialization`] when the template cannot be read or
    /// the store cannot be written.
    pub fn initialize(
        output_dir: &Path,
        default_template: &Path,
        template_override: Option<&Path>,
    ) -> Result<MappingStore, XsimError> {
        fs::create_dir_all(output_dir).map_err(|source| XsimError::Initialization {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let template = match template_override {
            Some(path) => path.to_path_buf(),
            None => env::var_os(TEMPLATE_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| default_template.to_path_buf()),
        };

        let bytes = fs::read(&template).map_err(|source| XsimError::Initialization {
            path: template.clone(),
            source,
        })?;

        let path = output_dir.join(STORE_FILE);
        fs::write(&path, bytes).map_err(|source| XsimError::Initialization {
            path: path.clone(),
            source,
        })?;

        Ok(MappingStore { path })
    }

    /// Path of the store file, passed to every compile and elaborate
    /// invocation via `--initfile`.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All persisted associations in file order, excluding the reserved
    /// [`RESERVED_KEY`] entry.
    pub fn read_all(&self) -> io::Result<Vec<(String, String)>> {
        let mut entries = self.read_entries()?;
        entries.retain(|(name, _)| name != RESERVED_KEY);
        Ok(entries)
    }

    /// Inserts or updates the association for `name`.
    ///
    /// A call that matches the existing entry is a no-op, so repeated calls
    /// with identical arguments produce byte-identical file content. Any
    /// change rewrites the whole file, one `name = path` line per entry in
    /// the current order with new entries appended.
    pub fn set(&self, name: &str, directory: &str) -> io::Result<()> {
        let mut entries = self.read_entries()?;
        match entries.iter_mut().find(|(entry, _)| entry == name) {
            Some((_, existing)) if existing == directory => return Ok(()),
            Some((_, existing)) => *existing = directory.to_string(),
            None => entries.push((name.to_string(), directory.to_string())),
        }
        self.write_entries(&entries)
    }

    /// Creates `directory` (and its parent) if missing, then persists the
    /// association via [`set`](Self::set).
    pub fn ensure(&self, name: &str, directory: &str) -> io::Result<()> {
        let dir = Path::new(directory);
        if let Some(parent) = dir.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        self.set(name, directory)
    }

    /// Parses the leading section of the store file, reserved entry included.
    ///
    /// Blank lines and `;`/`#` comments are skipped; parsing stops at the
    /// first explicit `[section]` header, which XSim's own files never
    /// contain in the library section.
    fn read_entries(&self) -> io::Result<Vec<(String, String)>> {
        let content = fs::read_to_string(&self.path)?;
        let mut entries = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') {
                break;
            }
            if let Some((name, directory)) = line.split_once('=') {
                entries.push((name.trim().to_string(), directory.trim().to_string()));
            }
        }
        Ok(entries)
    }

    /// Rewrites the whole store file from the given entries.
    fn write_entries(&self, entries: &[(String, String)]) -> io::Result<()> {
        let mut content = String::new();
        for (name, directory) in entries {
            content.push_str(name);
            content.push_str(" = ");
            content.push_str(directory);
            content.push('\n');
        }
        fs::write(&self.path, content)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    /// Serializes tests that read or write the [`TEMPLATE_ENV`](super::TEMPLATE_ENV)
    /// variable, which is process-global state.
    pub(crate) static ENV_LOCK: Mutex<()> = Mutex::new(());
}
