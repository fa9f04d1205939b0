/// How strictly the surface must support values outside `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ExtendedRange {
    /// Configuration fails when no extended-range format is offered.
    #[default]
    Required,
    /// Fall back to the surface's first format with a warning.
    Preferred,
}

/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Extended-range surface policy.
    ///
    /// Over-unity highlight values are only visible on an `Rgba16Float`
    /// surface; on an 8-bit surface they clip to white.
    pub extended_range: ExtendedRange,

    /// Present mode (swap behavior).
    ///
    /// FIFO is broadly supported and fits on-demand redraws.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If unset or unsupported, `Opaque` is tried before the first supported mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            extended_range: ExtendedRange::Required,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
