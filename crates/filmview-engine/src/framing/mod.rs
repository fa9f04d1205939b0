//! Framing model: what the highlight is and where it goes.
//!
//! Everything here is pure CPU code. The renderer pulls a `ViewportState`
//! snapshot, runs it through `compute` and uploads the result.

mod controller;
mod format;
mod state;
mod transform;

pub use controller::{FrameSink, ViewportController};
pub use format::{FilmFormat, FormatGeometry, UnknownFormat, WidthHeight};
pub use state::{Channel, ChannelWeights, ViewportState, SCALE_RANGE, WEIGHT_RANGE};
pub use transform::{compute, highlight_rect_px, TransformUniform};
