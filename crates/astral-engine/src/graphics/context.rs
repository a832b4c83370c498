use crate::coords::{Resolution, ViewportRect};

use super::error::{ContextError, FrameError, VsyncError};

/// Swap-interval state as reported by the platform.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VsyncState {
    Enabled,
    Disabled,
    /// The platform or driver offers no swap-interval control.
    Unsupported,
}

/// Capability surface the graphics manager needs from a platform.
///
/// One implementation per platform family (desktop windowed, mobile
/// full-screen); the coordinator stays platform-agnostic. All methods are
/// rendering-thread only.
pub trait PlatformContext {
    /// Acquires the rendering context and surface, returning the drawable
    /// surface size.
    ///
    /// Idempotent: re-initializing an initialized context reports the current
    /// size without redoing acquisition. A failed attempt must release
    /// anything partially acquired and leave the context retriable.
    fn initialize(&mut self) -> Result<Resolution, ContextError>;

    /// Releases every acquired handle in reverse-acquisition order.
    ///
    /// Idempotent; safe on a never-initialized context.
    fn destroy(&mut self);

    /// Applies a viewport rectangle to the context's raster state.
    ///
    /// Takes effect from the next [`begin_frame`](Self::begin_frame).
    fn apply_viewport(&mut self, rect: ViewportRect);

    /// Propagates a new drawable size to the surface configuration.
    ///
    /// Full-screen platforms may ignore this.
    fn resize_surface(&mut self, size: Resolution);

    /// Opens the frame: clears to opaque black within the active viewport.
    fn begin_frame(&mut self) -> Result<(), FrameError>;

    /// Closes the frame: submits recorded work and presents.
    ///
    /// With no frame open this is a no-op (the frame was skipped).
    fn end_frame(&mut self) -> Result<(), FrameError>;

    /// Requests swap interval 1 (`true`) or 0 (`false`).
    fn set_vsync(&mut self, enabled: bool) -> Result<(), VsyncError>;

    /// Reports the current swap-interval state.
    fn vsync(&self) -> VsyncState;
}
