//! Resolution and viewport math.
//!
//! Everything here is pure and renderer-agnostic; applying a computed
//! viewport to a live context is the `graphics` module's job.

mod resolution;
mod viewport;

pub use resolution::Resolution;
pub use viewport::{ViewportRect, letterbox};
