use clap::Parser;

use filmview_engine::device::{ExtendedRange, GpuInit};
use filmview_engine::framing::{FilmFormat, ViewportState};
use filmview_engine::render::HighlightStyle;
use filmview_engine::window::{RuntimeConfig, WindowMode};

/// EDR film framing viewer.
#[derive(Parser, Debug)]
#[command(name = "filmview", version)]
pub struct Options {
    /// Start in a borderless full-screen window.
    #[arg(long, default_value_t = false)]
    pub fullscreen: bool,

    /// Run on surfaces without an extended-range format (highlights clip at 1.0).
    #[arg(long, default_value_t = false)]
    pub allow_sdr: bool,

    /// Base brightness of the highlight; values above 1.0 need an EDR display.
    #[arg(long, default_value_t = 1.0, value_parser = parse_intensity)]
    pub intensity: f32,

    /// Initial film format (135 or 120).
    #[arg(long, default_value_t = FilmFormat::Format135)]
    pub format: FilmFormat,

    /// Initial scale factor.
    #[arg(long, default_value_t = 3.0)]
    pub scale: f32,

    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long)]
    pub log: Option<String>,
}

impl Options {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            mode: if self.fullscreen { WindowMode::Fullscreen } else { WindowMode::Windowed },
            style: HighlightStyle {
                base_color: [self.intensity; 3],
            },
            ..RuntimeConfig::default()
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        GpuInit {
            extended_range: if self.allow_sdr {
                ExtendedRange::Preferred
            } else {
                ExtendedRange::Required
            },
            ..GpuInit::default()
        }
    }

    pub fn initial_state(&self) -> ViewportState {
        let mut state = ViewportState::default();
        state.set_format(self.format);
        state.set_scale(self.scale);
        state
    }
}

fn parse_intensity(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if v.is_finite() && v >= 0.0 {
        Ok(v)
    } else {
        Err(format!("intensity must be a non-negative number, got {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Options {
        Options::try_parse_from(std::iter::once("filmview").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_require_extended_range() {
        let o = parse(&[]);
        assert_eq!(o.gpu_init().extended_range, ExtendedRange::Required);
        assert_eq!(o.runtime_config().mode, WindowMode::Windowed);
        assert_eq!(o.initial_state(), ViewportState::default());
    }

    #[test]
    fn flags_map_into_configs() {
        let o = parse(&["--allow-sdr", "--fullscreen", "--intensity", "4", "--format", "120"]);
        assert_eq!(o.gpu_init().extended_range, ExtendedRange::Preferred);
        assert_eq!(o.runtime_config().mode, WindowMode::Fullscreen);
        assert_eq!(o.runtime_config().style.base_color, [4.0; 3]);
        assert_eq!(o.initial_state().film_format(), FilmFormat::Format120);
    }

    #[test]
    fn initial_scale_is_clamped() {
        let o = parse(&["--scale", "40"]);
        assert_eq!(o.initial_state().scale_factor(), 15.0);
    }

    #[test]
    fn negative_intensity_is_rejected() {
        let res = Options::try_parse_from(["filmview", "--intensity", "-2"]);
        assert!(res.is_err());
    }
}
