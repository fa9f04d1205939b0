/// Coalesces redraw requests into at most one pending frame.
///
/// The first request after a frame must be forwarded to the platform;
/// further requests before that frame runs are absorbed.
#[derive(Debug, Default, Clone)]
pub struct RedrawScheduler {
    pending: bool,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a request. Returns `true` when the platform must be signaled.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Consumes the pending request at the start of a frame.
    ///
    /// Returns `false` when nothing was requested (platform-initiated redraw).
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
