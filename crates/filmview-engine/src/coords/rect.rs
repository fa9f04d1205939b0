use super::{DrawableSize, Vec2};

/// Axis-aligned rectangle in drawable pixels (bottom-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds a rectangle of `size` centered on `center`.
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            origin: center - size * 0.5,
            size,
        }
    }

    /// The full drawable as a rectangle anchored at the origin.
    #[inline]
    pub fn from_drawable(drawable: DrawableSize) -> Self {
        Self::new(0.0, 0.0, drawable.width, drawable.height)
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn area(self) -> f32 {
        if self.is_empty() { 0.0 } else { self.size.x * self.size.y }
    }

    /// Overlap of two rectangles; `None` when they only touch or are disjoint.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.origin.x.max(other.origin.x);
        let y0 = self.origin.y.max(other.origin.y);
        let x1 = self.max().x.min(other.max().x);
        let y1 = self.max().y.min(other.max().y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── from_center_size ──────────────────────────────────────────────────

    #[test]
    fn center_size_places_origin_at_lower_left() {
        let rect = Rect::from_center_size(Vec2::new(500.0, 400.0), Vec2::new(200.0, 100.0));
        assert_eq!(rect, r(400.0, 350.0, 200.0, 100.0));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(b), Some(r(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersect(b).is_none());
    }

    #[test]
    fn intersect_with_drawable_clips_offscreen_part() {
        let screen = Rect::from_drawable(DrawableSize::new(1000.0, 800.0));
        let parked = r(900.0, 700.0, 400.0, 400.0);
        assert_eq!(parked.intersect(screen), Some(r(900.0, 700.0, 100.0, 100.0)));
    }

    // ── area ──────────────────────────────────────────────────────────────

    #[test]
    fn area_of_empty_is_zero() {
        assert_eq!(r(0.0, 0.0, -3.0, 5.0).area(), 0.0);
        assert_eq!(r(0.0, 0.0, 3.0, 5.0).area(), 15.0);
    }
}
