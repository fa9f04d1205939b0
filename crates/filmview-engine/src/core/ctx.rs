use winit::window::{Window, WindowId};

use crate::coords::DrawableSize;
use crate::input::InputState;
use crate::render::RenderCoordinator;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

/// Context passed to `core::App` callbacks.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `RenderCoordinator<'w>`
pub struct ViewCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub coordinator: &'a mut RenderCoordinator<'w>,
    pub input: &'a InputState,
}

impl<'a, 'w> ViewCtx<'a, 'w> {
    /// Drawable size as last configured on the surface.
    pub fn drawable_size(&self) -> DrawableSize {
        self.coordinator.drawable_size()
    }
}
