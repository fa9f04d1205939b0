use winit::dpi::PhysicalSize;

use super::{ExtendedRange, SurfaceErrorAction};

/// Surface formats able to hold over-unity values, best first.
pub(crate) const EXTENDED_RANGE_FORMATS: [wgpu::TextureFormat; 1] = [wgpu::TextureFormat::Rgba16Float];

/// Picks the swapchain format.
///
/// Returns `None` when `formats` is empty or when the policy requires an
/// extended-range format the surface does not offer.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    policy: ExtendedRange,
) -> Option<wgpu::TextureFormat> {
    if let Some(f) = EXTENDED_RANGE_FORMATS.into_iter().find(|f| formats.contains(f)) {
        return Some(f);
    }

    match policy {
        ExtendedRange::Required => None,
        ExtendedRange::Preferred => {
            // Prefer a non-sRGB format so the shader's linear output isn't re-encoded.
            formats
                .iter()
                .copied()
                .find(|f| !f.is_srgb())
                .or_else(|| formats.first().copied())
        }
    }
}

pub(crate) fn choose_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| modes.contains(m))
        .or_else(|| modes.iter().copied().find(|m| *m == wgpu::CompositeAlphaMode::Opaque))
        .or_else(|| modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// wgpu does not support configuring a surface with a 0x0 size; in that
/// case only the tracked size is updated and configuration is deferred.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;

    surface.configure(device, config);
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}
