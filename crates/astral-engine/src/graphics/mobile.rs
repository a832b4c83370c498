use raw_window_handle::{RawDisplayHandle, RawWindowHandle};

use crate::coords::{Resolution, ViewportRect};

use super::context::{PlatformContext, VsyncState};
use super::error::{ContextError, FrameError, VsyncError};
use super::frame::{self, FrameInFlight};

/// Opaque native window handle handed over by the mobile host.
///
/// Surface dimensions come from the host alongside the raw handles; a wgpu
/// surface cannot be queried for its size after creation.
#[derive(Debug, Copy, Clone)]
pub struct NativeHandle {
    pub display: RawDisplayHandle,
    pub window: RawWindowHandle,
    pub width: u32,
    pub height: u32,
}

/// Mobile full-screen rendering context.
///
/// Initialization walks the display → surface → adapter → device → configure
/// chain step by step; a failing step logs an error, aborts, and leaves the
/// context uninitialized and retriable. Handles acquired before the failure
/// are released on scope exit, so a partial attempt leaks nothing.
///
/// Mobile is assumed full-screen: viewport and screen resolution are always
/// the surface size, with no letterboxing offset.
pub struct MobileContext {
    handle: NativeHandle,
    gpu: Option<MobileGpu>,
    in_flight: Option<FrameInFlight>,
    viewport: ViewportRect,
}

struct MobileGpu {
    // Field order is teardown order: unbind/destroy the context (device and
    // queue) before the surface, the surface before the display (instance).
    queue: wgpu::Queue,
    device: wgpu::Device,
    surface: wgpu::Surface<'static>,
    #[allow(dead_code)]
    instance: wgpu::Instance,
    config: wgpu::SurfaceConfiguration,
}

impl MobileContext {
    /// The handles in `handle` must stay valid until [`PlatformContext::destroy`]
    /// runs (or this context is dropped).
    pub fn new(handle: NativeHandle) -> Self {
        Self {
            handle,
            gpu: None,
            in_flight: None,
            viewport: ViewportRect::default(),
        }
    }

    fn acquire(&self) -> Result<MobileGpu, ContextError> {
        if self.handle.width == 0 || self.handle.height == 0 {
            log::error!("graphics: native window reports a degenerate size");
            return Err(ContextError::ZeroSize {
                width: self.handle.width,
                height: self.handle.height,
            });
        }

        // GL-flavored backend: on Android this negotiates through EGL.
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::GL,
            ..Default::default()
        });

        // SAFETY: the host guarantees the raw handles outlive this context
        // (see `new`); `destroy` drops the surface before they can go away.
        let surface = unsafe {
            instance.create_surface_unsafe(wgpu::SurfaceTargetUnsafe::RawHandle {
                raw_display_handle: self.handle.display,
                raw_window_handle: self.handle.window,
            })
        }
        .map_err(|e| {
            log::error!("graphics: could not create window surface");
            ContextError::CreateSurface(e)
        })?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .map_err(|e| {
            log::error!("graphics: no display adapter found");
            ContextError::RequestAdapter(e)
        })?;

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("astral-engine device"),
            required_features: wgpu::Features::empty(),
            // Mobile GL/ES adapters often cannot satisfy default limits.
            required_limits: wgpu::Limits::downlevel_defaults(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        }))
        .map_err(|e| {
            log::error!("graphics: could not create rendering context");
            ContextError::RequestDevice(e)
        })?;

        let caps = surface.get_capabilities(&adapter);
        let format = choose_mobile_format(&caps).ok_or_else(|| {
            log::error!("graphics: no display config");
            ContextError::NoSurfaceFormat
        })?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: self.handle.width,
            height: self.handle.height,
            // Mobile compositors are refresh-locked; interval 1 always.
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        Ok(MobileGpu {
            queue,
            device,
            surface,
            instance,
            config,
        })
    }
}

impl PlatformContext for MobileContext {
    fn initialize(&mut self) -> Result<Resolution, ContextError> {
        if let Some(gpu) = &self.gpu {
            return Ok(Resolution::new(
                gpu.config.width as f32,
                gpu.config.height as f32,
            ));
        }

        log::info!("graphics: initializing mobile context");
        let gpu = self.acquire()?;
        let size = Resolution::new(gpu.config.width as f32, gpu.config.height as f32);
        self.gpu = Some(gpu);

        // Full-screen surface: viewport == surface.
        self.viewport = ViewportRect::full(size);

        log::info!(
            "graphics: mobile context initialized at {}x{}",
            size.width,
            size.height
        );
        Ok(size)
    }

    fn destroy(&mut self) {
        self.in_flight = None;
        if let Some(gpu) = self.gpu.take() {
            // MobileGpu's field order drops context, surface and display in
            // reverse-acquisition order.
            drop(gpu);
            log::info!("graphics: mobile context destroyed");
        }
    }

    fn apply_viewport(&mut self, rect: ViewportRect) {
        self.viewport = rect;
    }

    fn resize_surface(&mut self, _size: Resolution) {
        // Full-screen surface; the native window does not resize.
    }

    fn begin_frame(&mut self) -> Result<(), FrameError> {
        let gpu = self.gpu.as_ref().ok_or(FrameError::Uninitialized)?;
        let in_flight =
            frame::open_frame(&gpu.surface, &gpu.device, self.viewport).map_err(FrameError::Surface)?;
        self.in_flight = Some(in_flight);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), FrameError> {
        let Some(in_flight) = self.in_flight.take() else {
            return Ok(());
        };
        let gpu = self.gpu.as_ref().ok_or(FrameError::Uninitialized)?;
        frame::present_frame(&gpu.queue, in_flight);
        Ok(())
    }

    fn set_vsync(&mut self, _enabled: bool) -> Result<(), VsyncError> {
        if self.gpu.is_none() {
            return Err(VsyncError::Uninitialized);
        }
        log::warn!("graphics: setting vsync on mobile is not supported, vsync stays enabled");
        Err(VsyncError::Unsupported)
    }

    fn vsync(&self) -> VsyncState {
        // Refresh-locked once a context exists; unknowable before that.
        if self.gpu.is_some() {
            VsyncState::Enabled
        } else {
            VsyncState::Unsupported
        }
    }
}

/// Raw-color pipeline: prefer a non-sRGB format, like the 16-bit config the
/// GL/ES path would negotiate.
fn choose_mobile_format(caps: &wgpu::SurfaceCapabilities) -> Option<wgpu::TextureFormat> {
    let preferred = [
        wgpu::TextureFormat::Rgba8Unorm,
        wgpu::TextureFormat::Bgra8Unorm,
    ];
    for f in preferred {
        if caps.formats.contains(&f) {
            return Some(f);
        }
    }

    caps.formats.first().copied()
}
