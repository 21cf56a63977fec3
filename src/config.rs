use crate::cli::Args;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) fps_cap: u32,
    /// 0 means seed from the OS.
    pub(crate) seed: u64,
    pub(crate) enable_color: bool,
    pub(crate) sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps_cap: 30,
            seed: 0,
            enable_color: true,
            sound: true,
        }
    }
}

impl Settings {
    /// Command-line flags win over the settings file.
    pub(crate) fn apply_args(mut self, args: &Args) -> Self {
        if let Some(fps) = args.fps {
            self.fps_cap = fps;
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if args.no_color {
            self.enable_color = false;
        }
        if args.mute {
            self.sound = false;
        }
        self.fps_cap = self.fps_cap.clamp(10, 120);
        self
    }
}

pub(crate) struct Paths {
    pub(crate) settings_path: PathBuf,
    pub(crate) log_path: PathBuf,
}

pub(crate) fn project_paths() -> Result<Paths> {
    let proj = ProjectDirs::from("com", "sweetheart", "Sweetheart")
        .context("could not resolve project directories")?;
    let data = proj.data_local_dir().to_path_buf();
    fs::create_dir_all(&data).ok();
    Ok(Paths {
        settings_path: proj.config_dir().join("settings.json"),
        log_path: data.join("sweetheart.log"),
    })
}

/// Reads the settings file. A missing file is normal; a broken one is
/// reported and ignored.
pub(crate) fn load_settings(path: &Path) -> Settings {
    let Ok(s) = fs::read_to_string(path) else {
        return Settings::default();
    };
    parse_settings(&s).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings");
        Settings::default()
    })
}

fn parse_settings(s: &str) -> Result<Settings> {
    serde_json::from_str(s).context("settings.json is not valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let s = parse_settings(r#"{ "fps_cap": 60 }"#).unwrap();
        assert_eq!(s.fps_cap, 60);
        assert!(s.enable_color);
        assert!(s.sound);
    }

    #[test]
    fn malformed_file_falls_back() {
        let dir = std::env::temp_dir().join(format!("sweetheart-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_settings(&path), Settings::default());
        assert_eq!(load_settings(&dir.join("absent.json")), Settings::default());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn flags_override_file() {
        let file = Settings {
            fps_cap: 24,
            seed: 7,
            enable_color: true,
            sound: true,
        };
        let args = Args::parse_from(["sweetheart", "--seed", "99", "--mute", "--no-color"]);
        let s = file.apply_args(&args);
        assert_eq!(s.seed, 99);
        assert_eq!(s.fps_cap, 24);
        assert!(!s.sound);
        assert!(!s.enable_color);
    }

    #[test]
    fn fps_is_kept_in_a_sane_range() {
        let args = Args::parse_from(["sweetheart", "--fps", "1000"]);
        assert_eq!(Settings::default().apply_args(&args).fps_cap, 120);
    }
}
