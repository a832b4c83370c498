//! Graphics-context subsystem.
//!
//! Responsibilities:
//! - platform context acquisition/teardown behind [`PlatformContext`]
//! - viewport/resolution bookkeeping across window changes
//! - per-frame camera matrix aggregation and frame bracketing
//!
//! The coordinator ([`GraphicsManager`]) is platform-agnostic; the desktop
//! and mobile variants differ only in how they acquire a surface and what
//! swap-interval control they can offer.

mod context;
mod desktop;
mod error;
mod frame;
mod manager;
mod mobile;

pub use context::{PlatformContext, VsyncState};
pub use desktop::DesktopContext;
pub use error::{ContextError, FrameError, VsyncError};
pub use manager::GraphicsManager;
pub use mobile::{MobileContext, NativeHandle};
