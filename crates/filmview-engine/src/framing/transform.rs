use bytemuck::{Pod, Zeroable};

use crate::coords::{DrawableSize, Rect, Vec2};
use crate::error::FrameSkip;

use super::state::ViewportState;

/// Scale that stretches the unit quad ([-0.5, 0.5]) over all of NDC.
const FULL_SCREEN_SCALE: f32 = 2.0;

/// Vertex-stage uniform: where the unit quad goes and how large it is, in NDC.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TransformUniform {
    pub offset: [f32; 2],
    pub scale: [f32; 2],
}

impl TransformUniform {
    pub const FULL_SCREEN: TransformUniform = TransformUniform {
        offset: [0.0, 0.0],
        scale: [FULL_SCREEN_SCALE, FULL_SCREEN_SCALE],
    };
}

/// Maps viewport state onto the unit quad's NDC offset and scale.
///
/// Fails with `FrameSkip::InvalidSurface` before any division when the
/// drawable has no area. Full screen wins over every other field.
pub fn compute(state: &ViewportState, drawable: DrawableSize) -> Result<TransformUniform, FrameSkip> {
    if !drawable.is_valid() {
        return Err(FrameSkip::InvalidSurface {
            width: drawable.width,
            height: drawable.height,
        });
    }

    if state.is_full_screen() {
        return Ok(TransformUniform::FULL_SCREEN);
    }

    // Pixel origin is bottom-left, same as NDC, so no Y flip.
    let center = state.center_position();
    let ndc_x = (center.x / drawable.width) * 2.0 - 1.0;
    let ndc_y = (center.y / drawable.height) * 2.0 - 1.0;

    let base = state.film_format().base_size();
    let scaled_w = base.width * state.scale_factor();
    let scaled_h = base.height * state.scale_factor();

    // The quad already spans 1.0 unit, so no extra factor of two here.
    Ok(TransformUniform {
        offset: [ndc_x, ndc_y],
        scale: [scaled_w / drawable.width, scaled_h / drawable.height],
    })
}

/// The highlight's footprint in drawable pixels.
pub fn highlight_rect_px(state: &ViewportState, drawable: DrawableSize) -> Option<Rect> {
    if !drawable.is_valid() {
        return None;
    }
    if state.is_full_screen() {
        return Some(Rect::from_drawable(drawable));
    }
    let base = state.film_format().base_size();
    let size = Vec2::new(base.width, base.height) * state.scale_factor();
    Some(Rect::from_center_size(state.center_position(), size))
}
