use winit::window::Window;

use crate::coords::{Resolution, ViewportRect};

use super::context::{PlatformContext, VsyncState};
use super::error::{ContextError, FrameError, VsyncError};
use super::frame::{self, FrameInFlight};

/// Desktop windowed rendering context.
///
/// Owns the wgpu instance/surface/device chain for a borrowed window; the
/// window must outlive the context (surface lifetime `'w`). Swap-interval
/// control depends on the driver exposing a non-synchronized present mode,
/// probed once at initialization.
pub struct DesktopContext<'w> {
    window: &'w Window,
    /// Logical screen size reported by the window layer.
    requested: Resolution,
    gpu: Option<GpuState<'w>>,
    in_flight: Option<FrameInFlight>,
    viewport: ViewportRect,
}

struct GpuState<'w> {
    // Field order is teardown order: device-side objects before the surface,
    // the surface before the instance that created it.
    queue: wgpu::Queue,
    device: wgpu::Device,
    surface: wgpu::Surface<'w>,
    #[allow(dead_code)]
    adapter: wgpu::Adapter,
    #[allow(dead_code)]
    instance: wgpu::Instance,
    config: wgpu::SurfaceConfiguration,
    /// Present mode used when vsync is off, when the driver offers one.
    no_sync_mode: Option<wgpu::PresentMode>,
}

impl<'w> DesktopContext<'w> {
    /// `width`/`height` are the logical screen dimensions the window layer
    /// reports; acquisition itself happens in
    /// [`PlatformContext::initialize`].
    pub fn new(window: &'w Window, width: u32, height: u32) -> Self {
        Self {
            window,
            requested: Resolution::new(width as f32, height as f32),
            gpu: None,
            in_flight: None,
            viewport: ViewportRect::default(),
        }
    }

    /// Whether the driver exposes swap-interval control.
    pub fn swap_control_supported(&self) -> bool {
        self.gpu.as_ref().is_some_and(|g| g.no_sync_mode.is_some())
    }

    fn acquire(&self) -> Result<GpuState<'w>, ContextError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(self.window)
            .map_err(ContextError::CreateSurface)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .map_err(ContextError::RequestAdapter)?;

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("astral-engine device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        }))
        .map_err(ContextError::RequestDevice)?;

        let caps = surface.get_capabilities(&adapter);
        let format = choose_surface_format(&caps).ok_or(ContextError::NoSurfaceFormat)?;
        let no_sync_mode = choose_no_sync_mode(&caps);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: self.requested.width as u32,
            height: self.requested.height as u32,
            // Swap interval 1 until told otherwise.
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

        Ok(GpuState {
            queue,
            device,
            surface,
            adapter,
            instance,
            config,
            no_sync_mode,
        })
    }
}

impl<'w> PlatformContext for DesktopContext<'w> {
    fn initialize(&mut self) -> Result<Resolution, ContextError> {
        if let Some(gpu) = &self.gpu {
            return Ok(Resolution::new(
                gpu.config.width as f32,
                gpu.config.height as f32,
            ));
        }

        if !self.requested.is_valid() {
            log::error!("graphics: refusing to initialize a zero-size window");
            return Err(ContextError::ZeroSize {
                width: self.requested.width as u32,
                height: self.requested.height as u32,
            });
        }

        log::info!("graphics: initializing desktop context");
        let gpu = self.acquire()?;

        if gpu.no_sync_mode.is_none() {
            // The swap-control extension probe of old: without a
            // non-synchronized present mode the interval is pinned to 1.
            log::warn!("graphics: driver offers no swap-interval control, vsync stays enabled");
        }

        self.gpu = Some(gpu);
        Ok(self.requested)
    }

    fn destroy(&mut self) {
        self.in_flight = None;
        if self.gpu.take().is_some() {
            log::info!("graphics: desktop context destroyed");
        }
    }

    fn apply_viewport(&mut self, rect: ViewportRect) {
        self.viewport = rect;
    }

    fn resize_surface(&mut self, size: Resolution) {
        self.requested = size;

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        // A zero-size surface cannot be configured; keep the old
        // configuration and let the next valid resize catch up.
        if !size.is_valid() {
            return;
        }

        gpu.config.width = size.width as u32;
        gpu.config.height = size.height as u32;
        gpu.surface.configure(&gpu.device, &gpu.config);
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

    fn set_vsync(&mut self, enabled: bool) -> Result<(), VsyncError> {
        let gpu = self.gpu.as_mut().ok_or(VsyncError::Uninitialized)?;
        let Some(no_sync_mode) = gpu.no_sync_mode else {
            return Err(VsyncError::Unsupported);
        };

        let mode = if enabled {
            wgpu::PresentMode::Fifo
        } else {
            no_sync_mode
        };
        if mode != gpu.config.present_mode {
            gpu.config.present_mode = mode;
            gpu.surface.configure(&gpu.device, &gpu.config);
        }
        Ok(())
    }

    fn vsync(&self) -> VsyncState {
        match &self.gpu {
            None => VsyncState::Unsupported,
            Some(gpu) if gpu.no_sync_mode.is_none() => VsyncState::Unsupported,
            Some(gpu) => match gpu.config.present_mode {
                wgpu::PresentMode::Immediate
                | wgpu::PresentMode::Mailbox
                | wgpu::PresentMode::AutoNoVsync => VsyncState::Disabled,
                _ => VsyncState::Enabled,
            },
        }
    }
}

fn choose_surface_format(caps: &wgpu::SurfaceCapabilities) -> Option<wgpu::TextureFormat> {
    if caps.formats.is_empty() {
        return None;
    }

    let preferred = [
        wgpu::TextureFormat::Bgra8UnormSrgb,
        wgpu::TextureFormat::Rgba8UnormSrgb,
    ];
    for f in preferred {
        if caps.formats.contains(&f) {
            return Some(f);
        }
    }

    Some(caps.formats[0])
}

/// Probes for a present mode with swap interval 0.
fn choose_no_sync_mode(caps: &wgpu::SurfaceCapabilities) -> Option<wgpu::PresentMode> {
    [wgpu::PresentMode::Immediate, wgpu::PresentMode::Mailbox]
        .into_iter()
        .find(|m| caps.present_modes.contains(m))
}
