//! GPU rendering subsystem.
//!
//! The coordinator owns the device, the highlight pipeline and its buffers,
//! and renders strictly on demand.
//!
//! Convention:
//! - CPU state is in drawable pixels (bottom-left origin, +Y up).
//! - The transform is resolved to NDC on the CPU; the vertex shader only
//!   scales and offsets the unit quad.

mod coordinator;
mod ctx;
mod highlight;
mod quad;
mod schedule;

pub use coordinator::RenderCoordinator;
pub use ctx::{RenderCtx, RenderTarget};
pub use highlight::{HighlightRenderer, HighlightStyle, TintUniform};
pub use schedule::RedrawScheduler;
