use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::coords::DrawableSize;
use crate::device::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
use crate::error::{ConfigureError, FrameOutcome, FrameSkip};
use crate::framing::{self, ChannelWeights, FrameSink, TransformUniform, ViewportState};

use super::{HighlightRenderer, HighlightStyle, RedrawScheduler, RenderCtx, RenderTarget};

/// Owns the GPU context and runs the per-frame protocol.
///
/// GPU work happens only in `render_frame`, which the platform calls after
/// `request_redraw` asked for it or when the window contents were damaged.
/// There is no continuous loop.
pub struct RenderCoordinator<'w> {
    window: &'w Window,
    gpu: Gpu<'w>,
    highlight: HighlightRenderer,
    state: Option<ViewportState>,
    scheduler: RedrawScheduler,
    frames_presented: u64,
}

impl<'w> RenderCoordinator<'w> {
    /// Binds a device and queue to the window's surface and builds the
    /// highlight pipeline. Any failure here is fatal for the session.
    pub fn configure(
        window: &'w Window,
        init: GpuInit,
        style: HighlightStyle,
    ) -> Result<Self, ConfigureError> {
        let gpu = pollster::block_on(Gpu::new(window, init))
            .map_err(|e| ConfigureError::device_unavailable(format!("{e:#}")))?;

        let highlight = {
            let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format());
            HighlightRenderer::new(&ctx, style)?
        };

        log::info!(
            "render coordinator ready: {:?} (extended range: {})",
            gpu.surface_format(),
            gpu.is_extended_range()
        );

        Ok(Self {
            window,
            gpu,
            highlight,
            state: None,
            scheduler: RedrawScheduler::new(),
            frames_presented: 0,
        })
    }

    /// Current drawable size as reported by the surface.
    pub fn drawable_size(&self) -> DrawableSize {
        DrawableSize::from_physical(self.gpu.size())
    }

    /// Takes effect on the next frame; no GPU work.
    pub fn set_state(&mut self, state: ViewportState) {
        self.state = Some(state);
    }

    /// Schedules one frame. Requests made before that frame runs are merged.
    pub fn request_redraw(&mut self) {
        if self.scheduler.request() {
            self.window.request_redraw();
        }
    }

    /// Reconfigures the surface and schedules a frame at the new size.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.resize(new_size);
        self.request_redraw();
    }

    /// Runs one frame from the cached state.
    ///
    /// Per-frame failures are absorbed and reported as `Skipped`; nothing is
    /// submitted for a skipped frame.
    pub fn render_frame(&mut self) -> FrameOutcome {
        let drawable = self.drawable_size();
        let mut backend = SurfaceBackend {
            window: self.window,
            gpu: &mut self.gpu,
            highlight: &self.highlight,
        };

        let outcome = drive_frame(&mut backend, &mut self.scheduler, self.state.as_ref(), drawable);
        if outcome == FrameOutcome::Presented {
            self.frames_presented = self.frames_presented.wrapping_add(1);
            log::trace!("frame {} presented", self.frames_presented);
        }
        outcome
    }
}

impl FrameSink for RenderCoordinator<'_> {
    fn set_state(&mut self, state: ViewportState) {
        RenderCoordinator::set_state(self, state);
    }

    fn request_redraw(&mut self) {
        RenderCoordinator::request_redraw(self);
    }
}

// ── frame protocol ────────────────────────────────────────────────────────

/// What a redraw does, decided before touching the GPU.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum FramePlan {
    Idle,
    Skip(FrameSkip),
    Draw {
        transform: TransformUniform,
        weights: ChannelWeights,
    },
}

/// Consumes the pending request and resolves the transform.
///
/// A redraw nobody requested (expose, damage) repaints the cached state once
/// it exists.
pub(crate) fn plan_frame(
    scheduler: &mut RedrawScheduler,
    state: Option<&ViewportState>,
    drawable: DrawableSize,
) -> FramePlan {
    let requested = scheduler.take();

    let Some(state) = state else {
        log::trace!("redraw before any state was published");
        return FramePlan::Idle;
    };
    if !requested {
        log::trace!("unrequested redraw, repainting cached state");
    }

    match framing::compute(state, drawable) {
        Ok(transform) => FramePlan::Draw {
            transform,
            weights: state.channel_weights(),
        },
        Err(skip) => FramePlan::Skip(skip),
    }
}

pub(crate) fn surface_error_outcome(action: SurfaceErrorAction) -> FrameOutcome {
    match action {
        SurfaceErrorAction::Fatal => FrameOutcome::Fatal,
        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
            FrameOutcome::Skipped(FrameSkip::Acquisition)
        }
    }
}

/// GPU side of a single frame.
pub(crate) trait FrameBackend {
    type Frame;

    fn acquire(&mut self) -> Result<Self::Frame, SurfaceErrorAction>;

    /// Uploads uniforms and records the highlight pass.
    fn encode(&mut self, frame: &mut Self::Frame, transform: &TransformUniform, weights: ChannelWeights);

    fn present(&mut self, frame: Self::Frame);
}

pub(crate) fn drive_frame<B: FrameBackend>(
    backend: &mut B,
    scheduler: &mut RedrawScheduler,
    state: Option<&ViewportState>,
    drawable: DrawableSize,
) -> FrameOutcome {
    let (transform, weights) = match plan_frame(scheduler, state, drawable) {
        FramePlan::Idle => return FrameOutcome::Idle,
        FramePlan::Skip(skip) => {
            log::debug!("frame skipped: {skip}");
            return FrameOutcome::Skipped(skip);
        }
        FramePlan::Draw { transform, weights } => (transform, weights),
    };

    let mut frame = match backend.acquire() {
        Ok(frame) => frame,
        Err(action) => return surface_error_outcome(action),
    };

    backend.encode(&mut frame, &transform, weights);
    backend.present(frame);

    log::trace!("offset {:?} scale {:?}", transform.offset, transform.scale);
    FrameOutcome::Presented
}

struct SurfaceBackend<'a, 'w> {
    window: &'w Window,
    gpu: &'a mut Gpu<'w>,
    highlight: &'a HighlightRenderer,
}

impl FrameBackend for SurfaceBackend<'_, '_> {
    type Frame = GpuFrame;

    fn acquire(&mut self) -> Result<GpuFrame, SurfaceErrorAction> {
        self.gpu.begin_frame().map_err(|err| {
            log::debug!("surface texture unavailable: {err}");
            self.gpu.handle_surface_error(err)
        })
    }

    fn encode(&mut self, frame: &mut GpuFrame, transform: &TransformUniform, weights: ChannelWeights) {
        self.highlight.write_uniforms(self.gpu.queue(), transform, weights);

        let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
        self.highlight.draw(&mut target);
    }

    fn present(&mut self, frame: GpuFrame) {
        self.window.pre_present_notify();
        self.gpu.submit(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framing::{Channel, FilmFormat};

    #[derive(Default)]
    struct RecordingBackend {
        fail_with: Option<SurfaceErrorAction>,
        acquired: usize,
        uniforms: Vec<(TransformUniform, ChannelWeights)>,
        presented: usize,
    }

    impl FrameBackend for RecordingBackend {
        type Frame = ();

        fn acquire(&mut self) -> Result<(), SurfaceErrorAction> {
            self.acquired += 1;
            match self.fail_with {
                Some(action) => Err(action),
                None => Ok(()),
            }
        }

        fn encode(&mut self, _: &mut (), transform: &TransformUniform, weights: ChannelWeights) {
            self.uniforms.push((*transform, weights));
        }

        fn present(&mut self, _: ()) {
            self.presented += 1;
        }
    }

    fn drawable() -> DrawableSize {
        DrawableSize::new(1000.0, 800.0)
    }

    fn requested() -> RedrawScheduler {
        let mut s = RedrawScheduler::new();
        s.request();
        s
    }

    // ── plan ──────────────────────────────────────────────────────────────

    #[test]
    fn nothing_published_is_idle() {
        let mut s = requested();
        assert_eq!(plan_frame(&mut s, None, drawable()), FramePlan::Idle);
        assert!(!s.take());
    }

    #[test]
    fn zero_width_skips_before_any_transform() {
        let state = ViewportState::default();
        let mut s = requested();
        let plan = plan_frame(&mut s, Some(&state), DrawableSize::new(0.0, 800.0));
        assert_eq!(
            plan,
            FramePlan::Skip(FrameSkip::InvalidSurface { width: 0.0, height: 800.0 })
        );
        assert!(!s.take());
    }

    #[test]
    fn requested_frame_draws_computed_transform() {
        let state = ViewportState::default();
        let mut s = requested();
        let expected = framing::compute(&state, drawable()).unwrap();
        assert_eq!(
            plan_frame(&mut s, Some(&state), drawable()),
            FramePlan::Draw {
                transform: expected,
                weights: ChannelWeights::NEUTRAL,
            }
        );
    }

    #[test]
    fn unrequested_redraw_repaints_cached_state() {
        let state = ViewportState::default();
        let mut s = RedrawScheduler::new();
        assert!(matches!(plan_frame(&mut s, Some(&state), drawable()), FramePlan::Draw { .. }));
    }

    // ── drive ─────────────────────────────────────────────────────────────

    #[test]
    fn invalid_surface_writes_and_submits_nothing() {
        let state = ViewportState::default();
        let mut backend = RecordingBackend::default();
        let mut s = requested();

        let outcome = drive_frame(&mut backend, &mut s, Some(&state), DrawableSize::new(0.0, 800.0));

        assert!(matches!(outcome, FrameOutcome::Skipped(FrameSkip::InvalidSurface { .. })));
        assert_eq!(backend.acquired, 0);
        assert!(backend.uniforms.is_empty());
        assert_eq!(backend.presented, 0);
    }

    #[test]
    fn idle_frame_touches_no_gpu_state() {
        let mut backend = RecordingBackend::default();
        let mut s = requested();
        assert_eq!(drive_frame(&mut backend, &mut s, None, drawable()), FrameOutcome::Idle);
        assert_eq!(backend.acquired, 0);
        assert_eq!(backend.presented, 0);
    }

    #[test]
    fn burst_of_requests_yields_one_frame_with_latest_state() {
        let mut state = ViewportState::default();
        let mut s = RedrawScheduler::new();
        let mut signals = 0;
        for _ in 0..4 {
            state.adjust_scale(1.0);
            if s.request() {
                signals += 1;
            }
        }
        state.set_format(FilmFormat::Format120);
        state.set_channel_weight(Channel::Red, 0.5);

        let mut backend = RecordingBackend::default();
        let outcome = drive_frame(&mut backend, &mut s, Some(&state), drawable());

        assert_eq!(signals, 1);
        assert_eq!(outcome, FrameOutcome::Presented);
        assert_eq!(backend.presented, 1);
        let (transform, weights) = backend.uniforms[0];
        assert_eq!(transform, framing::compute(&state, drawable()).unwrap());
        assert_eq!(weights.get(Channel::Red), 0.5);
    }

    #[test]
    fn acquisition_failure_skips_without_presenting() {
        let state = ViewportState::default();
        for action in [SurfaceErrorAction::Reconfigured, SurfaceErrorAction::SkipFrame] {
            let mut backend = RecordingBackend {
                fail_with: Some(action),
                ..RecordingBackend::default()
            };
            let mut s = requested();
            let outcome = drive_frame(&mut backend, &mut s, Some(&state), drawable());
            assert_eq!(outcome, FrameOutcome::Skipped(FrameSkip::Acquisition));
            assert!(backend.uniforms.is_empty());
            assert_eq!(backend.presented, 0);
        }
    }

    #[test]
    fn out_of_memory_is_fatal() {
        let state = ViewportState::default();
        let mut backend = RecordingBackend {
            fail_with: Some(SurfaceErrorAction::Fatal),
            ..RecordingBackend::default()
        };
        let mut s = requested();
        assert_eq!(
            drive_frame(&mut backend, &mut s, Some(&state), drawable()),
            FrameOutcome::Fatal
        );
        assert_eq!(backend.presented, 0);
    }

    #[test]
    fn surface_error_actions_map_to_outcomes() {
        assert_eq!(
            surface_error_outcome(SurfaceErrorAction::Reconfigured),
            FrameOutcome::Skipped(FrameSkip::Acquisition)
        );
        assert_eq!(
            surface_error_outcome(SurfaceErrorAction::SkipFrame),
            FrameOutcome::Skipped(FrameSkip::Acquisition)
        );
        assert_eq!(surface_error_outcome(SurfaceErrorAction::Fatal), FrameOutcome::Fatal);
    }
}
