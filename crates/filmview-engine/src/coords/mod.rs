//! Coordinate and geometry types shared by the framing model and the renderer.
//!
//! Canonical CPU space:
//! - Drawable pixels (physical, as reported by the surface)
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! The transform maps this space to NDC on the CPU; shaders only see NDC.

mod drawable;
mod rect;
mod vec2;

pub use drawable::DrawableSize;
pub use rect::Rect;
pub use vec2::Vec2;
