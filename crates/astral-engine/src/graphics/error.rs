use std::fmt;

/// A failed step in platform context acquisition.
///
/// Every variant aborts initialization. Handles acquired before the failing
/// step are released by scope exit, so the context stays retriable.
#[derive(Debug)]
pub enum ContextError {
    /// The window or native surface reports a degenerate size.
    ZeroSize { width: u32, height: u32 },
    CreateSurface(wgpu::CreateSurfaceError),
    RequestAdapter(wgpu::RequestAdapterError),
    RequestDevice(wgpu::RequestDeviceError),
    /// The surface advertises no usable texture format.
    NoSurfaceFormat,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::ZeroSize { width, height } => {
                write!(f, "surface has degenerate size {width}x{height}")
            }
            ContextError::CreateSurface(e) => write!(f, "could not create surface: {e}"),
            ContextError::RequestAdapter(e) => write!(f, "no suitable adapter: {e}"),
            ContextError::RequestDevice(e) => write!(f, "could not create device: {e}"),
            ContextError::NoSurfaceFormat => write!(f, "no supported surface format"),
        }
    }
}

impl std::error::Error for ContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContextError::CreateSurface(e) => Some(e),
            ContextError::RequestAdapter(e) => Some(e),
            ContextError::RequestDevice(e) => Some(e),
            _ => None,
        }
    }
}

/// Swap-interval control failure.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VsyncError {
    /// The context has not been initialized yet.
    Uninitialized,
    /// The platform or driver offers no swap-interval control.
    Unsupported,
}

impl fmt::Display for VsyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VsyncError::Uninitialized => write!(f, "vsync control requested before initialization"),
            VsyncError::Unsupported => {
                write!(f, "swap-interval control is not supported on this platform")
            }
        }
    }
}

impl std::error::Error for VsyncError {}

/// Frame bracket failure. Non-fatal: the affected frame is dropped.
#[derive(Debug)]
pub enum FrameError {
    /// The frame bracket ran before initialization.
    Uninitialized,
    Surface(wgpu::SurfaceError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Uninitialized => write!(f, "frame started before initialization"),
            FrameError::Surface(e) => write!(f, "surface error: {e}"),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Surface(e) => Some(e),
            FrameError::Uninitialized => None,
        }
    }
}
