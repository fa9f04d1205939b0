//! Filmview engine crate.
//!
//! Viewport transform, EDR render coordinator and the on-demand window
//! runtime used by the studio binary.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod error;
pub mod framing;
pub mod logging;
pub mod render;
