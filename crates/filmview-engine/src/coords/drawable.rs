/// Size of the current drawable in pixels.
///
/// Stored as `f32` because every consumer divides by it; validity must be
/// checked before that happens.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DrawableSize {
    pub width: f32,
    pub height: f32,
}

impl DrawableSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Converts a physical surface size.
    #[inline]
    pub fn from_physical(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Midpoint of the drawable, in the same bottom-left pixel space.
    #[inline]
    pub fn center(self) -> super::Vec2 {
        super::Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}
