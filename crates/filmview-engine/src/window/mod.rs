//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single viewer window, and wires them to
//! the render coordinator.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, WindowMode};
