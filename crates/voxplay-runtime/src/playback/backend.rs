//! Player backend executables.

use std::fmt;
use std::path::{Path, PathBuf};

/// A player program that accepts a WAV path as its only argument
/// (`paplay`, `aplay`, `afplay`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerBackend {
    program: String,
}

impl PlayerBackend {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program as configured (absolute path or bare name).
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Short name for logs and handles, e.g. `paplay` for `/usr/bin/paplay`.
    pub fn name(&self) -> &str {
        Path::new(&self.program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.program)
    }

    /// Resolve the executable on this host.
    ///
    /// Checked on every call: players may be installed or removed while the
    /// server runs.
    pub fn locate(&self) -> Option<PathBuf> {
        let path = Path::new(&self.program);
        if path.components().count() > 1 {
            path.is_file().then(|| path.to_path_buf())
        } else {
            which::which(path).ok()
        }
    }
}

impl fmt::Display for PlayerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)
    }
}
