//! Common test utilities.
//!
//! Fake player executables: small shell scripts that accept a WAV path and
//! then sleep, exit, or refuse to run.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Write an executable shell script named `name` into `dir`.
pub fn fake_player(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write fake player");
    set_mode(&path, 0o755);
    path
}

/// A player that keeps "playing" for `secs` seconds.
pub fn sleeping_player(dir: &TempDir, name: &str, secs: f32) -> PathBuf {
    fake_player(dir, name, &format!("exec sleep {secs}"))
}

/// A player that records its argument to `<script>.args` and exits.
pub fn recording_player(dir: &TempDir, name: &str) -> PathBuf {
    let log = dir.path().join(format!("{name}.args"));
    fake_player(dir, name, &format!("echo \"$1\" > '{}'", log.display()))
}

/// A file that exists but cannot be executed.
pub fn unexecutable_player(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, "#!/bin/sh\nexit 0\n").expect("write fake player");
    set_mode(&path, 0o644);
    path
}

fn set_mode(path: &Path, mode: u32) {
    let mut perms = fs::metadata(path).expect("stat fake player").permissions();
    perms.set_mode(mode);
    fs::set_permissions(path, perms).expect("chmod fake player");
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
