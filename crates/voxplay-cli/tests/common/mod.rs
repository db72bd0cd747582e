//! Common test utilities.
//!
//! Fake `espeak-ng` and player executables so commands can run end to end
//! without audio hardware or a real engine.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use voxplay_cli::{EngineArgs, PlaybackArgs};
use voxplay_core::PcmAudio;
use voxplay_voice::{EngineKind, write_wav};

pub const FIXTURE_RATE: u32 = 16_000;

fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    let mut perms = fs::metadata(path).expect("stat script").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("chmod script");
}

/// A fake `espeak-ng` that copies a fixture WAV to its `-w` argument and
/// answers `--voices` with a two-voice listing.
pub fn fake_espeak(dir: &TempDir) -> PathBuf {
    let fixture = dir.path().join("fixture.wav");
    write_wav(&PcmAudio::new(vec![0.0; 320], FIXTURE_RATE), &fixture).expect("write fixture");

    let script = dir.path().join("espeak-ng");
    write_script(
        &script,
        &format!(
            r#"if [ "$1" = "--voices" ]; then
  echo "Pty Language       Age/Gender VoiceName          File                 Other Languages"
  echo " 5  af              --/M      Afrikaans          gmw/af"
  echo " 2  en-us           --/M      English_(America)  gmw/en-US"
  exit 0
fi
cat > /dev/null
cp '{}' "$2""#,
            fixture.display()
        ),
    );
    script
}

/// A player that exits right away.
pub fn quick_player(dir: &TempDir) -> PathBuf {
    let script = dir.path().join("aplay");
    write_script(&script, "exit 0");
    script
}

pub fn espeak_args(binary: &Path) -> EngineArgs {
    EngineArgs {
        engine: EngineKind::Espeak,
        piper_bin: "piper".into(),
        piper_model: None,
        piper_config: None,
        espeak_bin: binary.to_path_buf(),
        espeak_voice: None,
    }
}

pub fn playback_args(player: &Path) -> PlaybackArgs {
    PlaybackArgs {
        players: vec![player.to_string_lossy().into_owned()],
        grace_ms: 500,
        autoplay: false,
    }
}
