use glam::Mat4;

use crate::components::CameraComponent;
use crate::coords::{Resolution, letterbox};
use crate::render::SpriteBatch;
use crate::scene::Scene;

use super::context::{PlatformContext, VsyncState};
use super::error::{ContextError, VsyncError};

/// Coordinates the platform context, viewport bookkeeping and the per-frame
/// camera snapshot.
///
/// Owned by the application's composition root and handed (by reference) to
/// the systems that need it; one instance per rendering thread. All methods
/// assume the strict per-frame order `update` → `start_draw` → scene draws →
/// `stop_draw`.
pub struct GraphicsManager<C: PlatformContext> {
    ctx: C,
    batch: SpriteBatch,

    screen_resolution: Resolution,
    viewport_resolution: Resolution,

    // Latest camera snapshot; identity until the first `update` that sees an
    // active camera, last-known whenever the camera goes missing.
    view_projection: Mat4,
    projection: Mat4,
    view_inverse: Mat4,

    has_window_changed: bool,
    initialized: bool,
}

impl<C: PlatformContext> GraphicsManager<C> {
    pub fn new(ctx: C) -> Self {
        Self {
            ctx,
            batch: SpriteBatch::new(),
            screen_resolution: Resolution::default(),
            viewport_resolution: Resolution::default(),
            view_projection: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view_inverse: Mat4::IDENTITY,
            has_window_changed: false,
            initialized: false,
        }
    }

    /// Acquires GPU resources once; later calls are no-ops.
    ///
    /// On failure nothing is considered acquired and the call can be retried
    /// from scratch.
    pub fn initialize(&mut self) -> Result<(), ContextError> {
        if self.initialized {
            return Ok(());
        }

        let size = self.ctx.initialize().map_err(|e| {
            log::error!("graphics: initialization failed: {e}");
            e
        })?;

        self.screen_resolution = size;
        self.calculate_viewport();

        // Swap interval defaults to 1; not every driver can change it.
        if let Err(e) = self.ctx.set_vsync(true) {
            log::warn!("graphics: {e}");
        }

        self.initialized = true;
        log::info!("graphics: initialized at {}x{}", size.width, size.height);
        Ok(())
    }

    /// Releases the context and the batch pool.
    ///
    /// Idempotent; after this the manager can be initialized again.
    pub fn destroy(&mut self) {
        self.ctx.destroy();
        self.batch.clean_up();
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Opens the frame: resets the batch pool and clears the surface.
    ///
    /// Frame-acquisition failures are logged and the frame is skipped;
    /// nothing propagates past the frame boundary.
    pub fn start_draw(&mut self) {
        self.batch.clear();
        if let Err(e) = self.ctx.begin_frame() {
            log::warn!("graphics: frame skipped: {e}");
        }
    }

    /// Closes the frame and presents it.
    ///
    /// Presentation failures are logged and the frame is dropped.
    pub fn stop_draw(&mut self) {
        if let Err(e) = self.ctx.end_frame() {
            log::warn!("graphics: frame dropped: {e}");
        }
    }

    /// Snapshots the active camera's matrices for this frame.
    ///
    /// With no scene, no active camera, or a camera object without a
    /// [`CameraComponent`], the previous snapshot is kept unchanged.
    pub fn update(&mut self, scene: Option<&Scene>) {
        let Some(scene) = scene else { return };
        let Some(camera_object) = scene.active_camera() else {
            return;
        };
        let Some(camera) = camera_object.component::<CameraComponent>() else {
            return;
        };

        self.projection = *camera.projection();
        self.view_inverse = *camera.view_inverse();
        // Column-vector convention: projection applied after view.
        self.view_projection = self.projection * self.view_inverse;
    }

    pub fn set_vsync(&mut self, enabled: bool) -> Result<(), VsyncError> {
        self.ctx.set_vsync(enabled)
    }

    pub fn vsync(&self) -> VsyncState {
        self.ctx.vsync()
    }

    /// The window layer's direct resize path: stores the new screen
    /// resolution, propagates it to the surface and recomputes the viewport.
    pub fn set_window_dimensions(&mut self, width: u32, height: u32) {
        self.screen_resolution = Resolution::new(width as f32, height as f32);
        self.ctx.resize_surface(self.screen_resolution);
        self.calculate_viewport();
    }

    /// The window layer's change-notification path. The viewport is
    /// recomputed only on a `true` notification.
    pub fn set_has_window_changed(&mut self, changed: bool) {
        self.has_window_changed = changed;
        if changed {
            self.calculate_viewport();
        }
    }

    pub fn has_window_changed(&self) -> bool {
        self.has_window_changed
    }

    pub fn window_width(&self) -> i32 {
        self.screen_resolution.width as i32
    }

    pub fn window_height(&self) -> i32 {
        self.screen_resolution.height as i32
    }

    pub fn window_aspect_ratio(&self) -> f32 {
        self.screen_resolution.aspect_ratio()
    }

    pub fn window_resolution(&self) -> Resolution {
        self.screen_resolution
    }

    pub fn viewport_resolution(&self) -> Resolution {
        self.viewport_resolution
    }

    pub fn view_projection_matrix(&self) -> &Mat4 {
        &self.view_projection
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection
    }

    pub fn view_inverse_matrix(&self) -> &Mat4 {
        &self.view_inverse
    }

    pub fn batch(&self) -> &SpriteBatch {
        &self.batch
    }

    pub fn batch_mut(&mut self) -> &mut SpriteBatch {
        &mut self.batch
    }

    /// Recomputes the letterboxed viewport from the screen resolution and
    /// applies it to the context.
    fn calculate_viewport(&mut self) {
        let rect = letterbox(self.screen_resolution);
        self.viewport_resolution = Resolution::new(rect.width, rect.height);
        self.ctx.apply_viewport(rect);
    }
}
