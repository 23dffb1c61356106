//! Runtime settings
//!
//! Compiled-in defaults, optionally overridden from the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;

/// Environment variable naming the sprite directory
pub const IMAGES_ENV: &str = "LANE_HOPPER_IMAGES";
/// Environment variable overriding the frame rate
pub const FPS_ENV: &str = "LANE_HOPPER_FPS";
/// Sprite directory name, looked up next to the executable
pub const IMAGE_DIR_NAME: &str = "images";

/// `images/` beside the executable, else the one shipped in the source tree
pub fn default_image_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(IMAGE_DIR_NAME)))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/images")))
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding background.png, frogger.png and car1-4.png
    pub image_dir: PathBuf,
    /// Frames per second; gameplay speeds are per frame
    pub target_fps: u32,
    /// Initial window position in screen pixels
    pub window_position: (i32, i32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            image_dir: default_image_dir(),
            target_fps: TARGET_FPS,
            window_position: (10, 50),
        }
    }
}

impl Settings {
    /// Defaults with overrides from the process environment
    pub fn from_env() -> Self {
        Self::with_env(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from `lookup`
    pub fn with_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(dir) = lookup(IMAGES_ENV).filter(|d| !d.trim().is_empty()) {
            settings.image_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(FPS_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(fps) if fps > 0 => settings.target_fps = fps,
                _ => log::warn!(
                    "Ignoring {}={:?}, keeping {} fps",
                    FPS_ENV,
                    raw,
                    settings.target_fps
                ),
            }
        }

        settings
    }

    /// Full path of a sprite file
    pub fn image_path(&self, file_name: &str) -> PathBuf {
        self.image_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::with_env(env(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.target_fps, 60);
        assert_eq!(
            settings.image_path("car1.png"),
            settings.image_dir.join("car1.png")
        );
    }

    #[test]
    fn test_env_overrides() {
        let settings = Settings::with_env(env(&[(IMAGES_ENV, "/opt/sprites"), (FPS_ENV, " 30 ")]));
        assert_eq!(settings.image_dir, PathBuf::from("/opt/sprites"));
        assert_eq!(settings.target_fps, 30);
    }

    #[test]
    fn test_bad_fps_ignored() {
        for raw in ["0", "-5", "fast", ""] {
            let settings = Settings::with_env(env(&[(FPS_ENV, raw)]));
            assert_eq!(settings.target_fps, TARGET_FPS);
        }
    }

    #[test]
    fn test_blank_image_dir_ignored() {
        let settings = Settings::with_env(env(&[(IMAGES_ENV, "  ")]));
        assert_eq!(settings.image_dir, default_image_dir());
    }

    #[test]
    fn test_default_image_dir_independent_of_cwd() {
        let dir = Settings::default().image_dir;
        assert!(dir.is_absolute(), "{} is relative", dir.display());
        assert!(dir.ends_with(IMAGE_DIR_NAME));
    }

    #[test]
    fn test_default_image_dir_holds_sprites() {
        // Under test the executable lives in target/, so this is the source tree copy
        let dir = default_image_dir();
        for file in ["background.png", "frogger.png", "car1.png", "car4.png"] {
            assert!(dir.join(file).is_file(), "missing {}", file);
        }
    }
}
