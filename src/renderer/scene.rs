//! Turns a game state into a sprite batch

use glam::Vec2;

use super::font;
use super::shapes::{SpriteBatch, TextureId};
use super::vertex::colors;
use crate::assets::SpriteKey;
use crate::sim::{GamePhase, GameState};

/// Top-left corner of the score readout
pub const SCORE_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);
pub const SCORE_SCALE: f32 = 3.0;

/// Uploaded texture for each sprite
#[derive(Debug, Clone)]
pub struct SpriteTable {
    white: TextureId,
    sprites: Vec<(SpriteKey, TextureId)>,
}

impl SpriteTable {
    pub fn new(white: TextureId) -> Self {
        Self {
            white,
            sprites: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: SpriteKey, texture: TextureId) {
        match self.sprites.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = texture,
            None => self.sprites.push((key, texture)),
        }
    }

    pub fn get(&self, key: SpriteKey) -> Option<TextureId> {
        self.sprites
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, t)| *t)
    }

    pub fn white(&self) -> TextureId {
        self.white
    }
}

/// Fill `batch` with everything visible this frame.
///
/// Paused frames show the background under a translucent overlay and hide
/// the actors and the score. Sprites missing from `table` are skipped.
pub fn build_scene(state: &GameState, table: &SpriteTable, batch: &mut SpriteBatch) {
    batch.clear();
    let screen = crate::screen_size();

    if let Some(background) = table.get(SpriteKey::Background) {
        batch.push_quad(background, Vec2::ZERO, screen, colors::SPRITE);
    }

    match state.phase {
        GamePhase::Running => {
            if let Some(player) = table.get(SpriteKey::Player) {
                batch.push_quad(player, state.player.pos, state.player.size, colors::SPRITE);
            }

            for obstacle in &state.obstacles {
                if let Some(texture) = table.get(SpriteKey::for_obstacle(obstacle)) {
                    batch.push_quad(texture, obstacle.pos, obstacle.size, colors::SPRITE);
                }
            }

            let text = format!("Score: {}", state.score);
            for (min, size) in font::layout(&text, SCORE_ORIGIN, SCORE_SCALE) {
                batch.push_quad(table.white(), min, size, colors::SCORE_TEXT);
            }
        }
        GamePhase::Paused => {
            batch.push_quad(table.white(), Vec2::ZERO, screen, colors::PAUSE_OVERLAY);
        }
        GamePhase::Terminated => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetSet;

    /// Texture 0 is white, the rest follow the required sprite order
    fn full_table(state: &GameState) -> SpriteTable {
        let mut table = SpriteTable::new(TextureId(0));
        for (i, (key, _, _)) in AssetSet::required(state).into_iter().enumerate() {
            table.insert(key, TextureId(i + 1));
        }
        table
    }

    fn quads_with(batch: &SpriteBatch, texture: TextureId) -> u32 {
        batch
            .draws
            .iter()
            .filter(|d| d.texture == texture)
            .map(|d| d.vertex_count / 6)
            .sum()
    }

    #[test]
    fn test_running_scene_draws_everything() {
        let state = GameState::new();
        let table = full_table(&state);
        let mut batch = SpriteBatch::new();
        build_scene(&state, &table, &mut batch);

        // Background first, covering the screen
        assert_eq!(batch.draws[0].texture, TextureId(1));
        assert_eq!(batch.vertices[0].position, [0.0, 0.0]);
        assert_eq!(batch.vertices[5].position, [1000.0, 800.0]);

        assert_eq!(quads_with(&batch, TextureId(2)), 1);
        let obstacle_quads: u32 = (3..=6).map(|i| quads_with(&batch, TextureId(i))).sum();
        assert_eq!(obstacle_quads as usize, state.obstacles.len());

        let text_quads = font::layout("Score: 0", SCORE_ORIGIN, SCORE_SCALE).len() as u32;
        assert_eq!(quads_with(&batch, TextureId(0)), text_quads);
    }

    #[test]
    fn test_score_text_is_last_and_white() {
        let mut state = GameState::new();
        state.score = 120;
        let table = full_table(&state);
        let mut batch = SpriteBatch::new();
        build_scene(&state, &table, &mut batch);

        let last = batch.draws.last().copied().unwrap();
        assert_eq!(last.texture, table.white());
        let first = batch.vertices[last.first_vertex as usize];
        assert_eq!(first.color, colors::SCORE_TEXT);
        assert!(first.position[0] >= SCORE_ORIGIN.x && first.position[1] >= SCORE_ORIGIN.y);
    }

    #[test]
    fn test_paused_scene_is_background_and_overlay() {
        let mut state = GameState::new();
        state.phase = GamePhase::Paused;
        let table = full_table(&state);
        let mut batch = SpriteBatch::new();
        build_scene(&state, &table, &mut batch);

        assert_eq!(batch.vertices.len(), 12);
        assert_eq!(batch.draws.len(), 2);
        assert_eq!(batch.draws[1].texture, table.white());
        assert_eq!(batch.vertices[6].color, colors::PAUSE_OVERLAY);
        assert_eq!(batch.vertices[11].position, [1000.0, 800.0]);
    }

    #[test]
    fn test_player_drawn_at_position() {
        let mut state = GameState::new();
        state.player.pos = Vec2::new(123.0, 456.0);
        let table = full_table(&state);
        let mut batch = SpriteBatch::new();
        build_scene(&state, &table, &mut batch);

        let draw = batch.draws.iter().find(|d| d.texture == TextureId(2)).unwrap();
        let tl = batch.vertices[draw.first_vertex as usize];
        assert_eq!(tl.position, [123.0, 456.0]);
    }

    #[test]
    fn test_missing_sprites_are_skipped() {
        let state = GameState::new();
        let table = SpriteTable::new(TextureId(0));
        let mut batch = SpriteBatch::new();
        build_scene(&state, &table, &mut batch);

        // Only the score text remains
        assert_eq!(batch.draws.len(), 1);
        assert_eq!(batch.draws[0].texture, TextureId(0));
    }

    #[test]
    fn test_build_scene_clears_previous_frame() {
        let state = GameState::new();
        let table = full_table(&state);
        let mut batch = SpriteBatch::new();
        build_scene(&state, &table, &mut batch);
        let len = batch.vertices.len();
        build_scene(&state, &table, &mut batch);
        assert_eq!(batch.vertices.len(), len);
    }

    #[test]
    fn test_table_insert_replaces() {
        let mut table = SpriteTable::new(TextureId(0));
        table.insert(SpriteKey::Player, TextureId(4));
        table.insert(SpriteKey::Player, TextureId(7));
        assert_eq!(table.get(SpriteKey::Player), Some(TextureId(7)));
        assert_eq!(table.get(SpriteKey::Background), None);
    }
}
