use crate::coords::ViewportRect;

/// A single acquired frame.
///
/// Short-lived: created by `begin_frame`, consumed by `end_frame`. Holding
/// the surface texture blocks acquisition of subsequent frames.
pub(super) struct FrameInFlight {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// Opaque black.
pub(super) const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Acquires the next surface texture and records the frame-opening clear
/// pass, restricted to `viewport`.
pub(super) fn open_frame(
    surface: &wgpu::Surface<'_>,
    device: &wgpu::Device,
    viewport: ViewportRect,
) -> Result<FrameInFlight, wgpu::SurfaceError> {
    let surface_texture = surface.get_current_texture()?;
    let view = surface_texture
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("astral frame encoder"),
    });

    {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("astral clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            // 2D content controls its own draw order; no depth buffer anywhere.
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if viewport.width > 0.0 && viewport.height > 0.0 {
            rpass.set_viewport(
                viewport.x_offset as f32,
                viewport.y_offset as f32,
                viewport.width,
                viewport.height,
                0.0,
                1.0,
            );
        }
    }

    Ok(FrameInFlight {
        surface_texture,
        view,
        encoder,
    })
}

/// Submits recorded work and presents an open frame.
pub(super) fn present_frame(queue: &wgpu::Queue, frame: FrameInFlight) {
    queue.submit(std::iter::once(frame.encoder.finish()));
    drop(frame.view);
    frame.surface_texture.present();
}
