//! WebGPU rendering module
//!
//! Every frame is a list of textured quads in screen pixels. Solid fills
//! (text, the pause overlay) sample a 1x1 white texture.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod texture;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{SpriteTable, build_scene};
pub use shapes::{DrawCall, SpriteBatch, TextureId};
pub use vertex::SpriteVertex;
