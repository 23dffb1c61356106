//! Sprite loading
//!
//! Every sprite is decoded once at startup and scaled to the exact pixel size
//! it is drawn at. A missing or unreadable file is fatal.

use std::path::Path;

use image::imageops::FilterType;

use crate::error::AssetError;
use crate::settings::Settings;
use crate::sim::{GameState, Obstacle, ObstacleSkin};

pub const BACKGROUND_FILE: &str = "background.png";
pub const PLAYER_FILE: &str = "frogger.png";

/// Decoded RGBA8 pixels, row-major, top row first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Decode `path` and scale it to `width` x `height`
pub fn load_bitmap(path: &Path, width: u32, height: u32) -> Result<Bitmap, AssetError> {
    if width == 0 || height == 0 {
        return Err(AssetError::InvalidSize {
            path: path.to_path_buf(),
            width,
            height,
        });
    }

    let decoded = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let scaled = decoded
        .resize_exact(width, height, FilterType::Nearest)
        .to_rgba8();

    log::debug!(
        "Loaded {} ({}x{} -> {}x{})",
        path.display(),
        decoded.width(),
        decoded.height(),
        width,
        height
    );

    Ok(Bitmap {
        width,
        height,
        rgba: scaled.into_raw(),
    })
}

/// One scaled sprite bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Background,
    Player,
    Obstacle {
        skin: ObstacleSkin,
        width: u32,
        height: u32,
    },
}

impl SpriteKey {
    pub fn for_obstacle(obstacle: &Obstacle) -> Self {
        SpriteKey::Obstacle {
            skin: obstacle.skin,
            width: obstacle.size.x as u32,
            height: obstacle.size.y as u32,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            SpriteKey::Background => BACKGROUND_FILE,
            SpriteKey::Player => PLAYER_FILE,
            SpriteKey::Obstacle { skin, .. } => skin.file_name(),
        }
    }
}

/// All bitmaps a session draws, keyed by sprite
#[derive(Debug, Clone, Default)]
pub struct AssetSet {
    entries: Vec<(SpriteKey, Bitmap)>,
}

impl AssetSet {
    /// Sprites needed to draw `state`, with their pixel sizes, first use first
    pub fn required(state: &GameState) -> Vec<(SpriteKey, u32, u32)> {
        let screen = crate::screen_size();
        let mut keys = vec![
            (SpriteKey::Background, screen.x as u32, screen.y as u32),
            (
                SpriteKey::Player,
                state.player.size.x as u32,
                state.player.size.y as u32,
            ),
        ];

        for obstacle in &state.obstacles {
            let key = SpriteKey::for_obstacle(obstacle);
            if let SpriteKey::Obstacle { width, height, .. } = key {
                if !keys.iter().any(|(k, _, _)| *k == key) {
                    keys.push((key, width, height));
                }
            }
        }

        keys
    }

    /// Load every sprite `state` needs from the configured image directory
    pub fn load(settings: &Settings, state: &GameState) -> Result<Self, AssetError> {
        let mut entries = Vec::new();
        for (key, width, height) in Self::required(state) {
            let bitmap = load_bitmap(&settings.image_path(key.file_name()), width, height)?;
            entries.push((key, bitmap));
        }

        log::info!(
            "Loaded {} sprites from {}",
            entries.len(),
            settings.image_dir.display()
        );
        Ok(Self { entries })
    }

    pub fn get(&self, key: SpriteKey) -> Option<&Bitmap> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, b)| b)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(SpriteKey, Bitmap)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
