//! Error taxonomy for configuration and per-frame failures.

/// Configure-time failures. Both variants end the session.
#[derive(thiserror::Error, Debug)]
pub enum ConfigureError {
    /// No usable adapter, device or surface format.
    #[error("no usable GPU device: {0}")]
    DeviceUnavailable(String),

    /// Shader or render pipeline validation failed.
    #[error("render pipeline construction failed: {0}")]
    PipelineBuild(String),
}

impl ConfigureError {
    pub fn device_unavailable(msg: impl Into<String>) -> Self {
        Self::DeviceUnavailable(msg.into())
    }

    pub fn pipeline_build(msg: impl Into<String>) -> Self {
        Self::PipelineBuild(msg.into())
    }
}

/// Reasons a single frame was dropped.
///
/// Frames are best effort: a skip is never surfaced to the caller as an
/// error, the next redraw request simply tries again.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum FrameSkip {
    /// The drawable reported a zero, negative or non-finite dimension.
    #[error("drawable has invalid size {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },

    /// The surface texture could not be acquired for this frame.
    #[error("surface texture unavailable")]
    Acquisition,
}

/// Result of one `render_frame` call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FrameOutcome {
    Presented,
    /// Nothing has been published to draw yet; no GPU work was done.
    Idle,
    Skipped(FrameSkip),
    /// The surface cannot recover (commonly out of memory); the session ends.
    Fatal,
}
