//! Quad generation and per-texture batching

use glam::Vec2;

use super::vertex::SpriteVertex;

/// Index into the renderer's texture list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// A run of vertices drawn with one texture bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub texture: TextureId,
    pub first_vertex: u32,
    pub vertex_count: u32,
}

/// Two triangles covering the rectangle at `min` with `size`, full texture
pub fn quad(min: Vec2, size: Vec2, color: [f32; 4]) -> [SpriteVertex; 6] {
    let max = min + size;
    let tl = SpriteVertex::new([min.x, min.y], [0.0, 0.0], color);
    let tr = SpriteVertex::new([max.x, min.y], [1.0, 0.0], color);
    let bl = SpriteVertex::new([min.x, max.y], [0.0, 1.0], color);
    let br = SpriteVertex::new([max.x, max.y], [1.0, 1.0], color);
    [tl, bl, tr, tr, bl, br]
}

/// Vertices for one frame, in pixel coordinates, with their draw calls
#[derive(Debug, Clone, Default)]
pub struct SpriteBatch {
    pub vertices: Vec<SpriteVertex>,
    pub draws: Vec<DrawCall>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.draws.clear();
    }

    pub fn push_quad(&mut self, texture: TextureId, min: Vec2, size: Vec2, color: [f32; 4]) {
        let first = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&quad(min, size, color));

        if let Some(last) = self.draws.last_mut() {
            if last.texture == texture && last.first_vertex + last.vertex_count == first {
                last.vertex_count += 6;
                return;
            }
        }
        self.draws.push(DrawCall {
            texture,
            first_vertex: first,
            vertex_count: 6,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_corners() {
        let v = quad(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), [1.0; 4]);
        let xs: Vec<f32> = v.iter().map(|p| p.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|p| p.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
        // Top-left pixel samples the top-left texel
        assert_eq!(v[0].tex_coords, [0.0, 0.0]);
        assert_eq!(v[5].tex_coords, [1.0, 1.0]);
    }

    #[test]
    fn test_batch_merges_same_texture() {
        let mut batch = SpriteBatch::new();
        let a = TextureId(0);
        let b = TextureId(1);
        batch.push_quad(a, Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        batch.push_quad(a, Vec2::ONE, Vec2::ONE, [1.0; 4]);
        batch.push_quad(b, Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        batch.push_quad(a, Vec2::ZERO, Vec2::ONE, [1.0; 4]);

        assert_eq!(batch.vertices.len(), 24);
        assert_eq!(
            batch.draws,
            vec![
                DrawCall {
                    texture: a,
                    first_vertex: 0,
                    vertex_count: 12
                },
                DrawCall {
                    texture: b,
                    first_vertex: 12,
                    vertex_count: 6
                },
                DrawCall {
                    texture: a,
                    first_vertex: 18,
                    vertex_count: 6
                },
            ]
        );
    }

    #[test]
    fn test_batch_clear() {
        let mut batch = SpriteBatch::new();
        batch.push_quad(TextureId(3), Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        batch.clear();
        assert!(batch.is_empty());
        assert!(batch.draws.is_empty());
    }
}
