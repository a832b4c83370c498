//! Astral engine crate.
//!
//! This crate owns the graphics-context runtime used by higher layers:
//! platform context acquisition (desktop windowed vs. mobile full-screen),
//! viewport/resolution bookkeeping across window changes, and the per-frame
//! camera matrix snapshot that draw submission depends on.

pub mod components;
pub mod coords;
pub mod graphics;
pub mod logging;
pub mod render;
pub mod scene;
