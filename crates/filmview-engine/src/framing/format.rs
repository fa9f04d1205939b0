use std::fmt;
use std::str::FromStr;

/// Width/height pair in drawable pixels (or ratio units for aspects).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WidthHeight {
    pub width: f32,
    pub height: f32,
}

impl WidthHeight {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Highlight geometry for one film format.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FormatGeometry {
    /// Highlight size at `scale_factor == 1.0`.
    pub base_size: WidthHeight,
    /// Nominal frame aspect, informational only.
    pub aspect: WidthHeight,
}

/// Supported negative formats.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FilmFormat {
    #[default]
    Format135,
    Format120,
}

impl FilmFormat {
    /// All variants in UI order.
    pub const ALL: [FilmFormat; 2] = [FilmFormat::Format135, FilmFormat::Format120];

    /// Static geometry table. The match is exhaustive, so a new variant
    /// cannot compile without an entry.
    pub const fn geometry(self) -> FormatGeometry {
        match self {
            FilmFormat::Format135 => FormatGeometry {
                base_size: WidthHeight::new(900.0, 300.0),
                aspect: WidthHeight::new(3.0, 2.0),
            },
            FilmFormat::Format120 => FormatGeometry {
                base_size: WidthHeight::new(900.0, 550.0),
                aspect: WidthHeight::new(6.0, 4.0),
            },
        }
    }

    #[inline]
    pub const fn base_size(self) -> WidthHeight {
        self.geometry().base_size
    }

    pub const fn label(self) -> &'static str {
        match self {
            FilmFormat::Format135 => "135",
            FilmFormat::Format120 => "120",
        }
    }

    /// Next variant in `ALL`, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for FilmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown film format `{0}` (expected 135 or 120)")]
pub struct UnknownFormat(pub String);

impl FromStr for FilmFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.label() == s.trim())
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}
