use bytemuck::{Pod, Zeroable};

/// Tint applied to sprites that do not override their color: opaque white.
pub const DEFAULT_DRAW_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// One corner of a sprite quad.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

/// Vertex staging pool shared by sprite draw submission.
///
/// CPU staging grows as quads are pushed during a frame; the GPU buffer is
/// created lazily, grows to fit and is reused until [`clean_up`](Self::clean_up).
#[derive(Default)]
pub struct SpriteBatch {
    vertices: Vec<SpriteVertex>,
    vertex_buffer: Option<wgpu::Buffer>,
    buffer_capacity: u64,
}

impl SpriteBatch {
    /// Source-over blending for sprite pipelines. The frame bracket clears to
    /// opaque black; sprites composite over it with this state.
    pub const BLEND: wgpu::BlendState = wgpu::BlendState::ALPHA_BLENDING;

    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one axis-aligned quad as two triangles.
    pub fn push_quad(
        &mut self,
        min: [f32; 2],
        max: [f32; 2],
        uv_min: [f32; 2],
        uv_max: [f32; 2],
        color: [f32; 4],
    ) {
        let [x0, y0] = min;
        let [x1, y1] = max;
        let [u0, v0] = uv_min;
        let [u1, v1] = uv_max;

        self.vertices.extend_from_slice(&[
            SpriteVertex { position: [x0, y0], uv: [u0, v0], color },
            SpriteVertex { position: [x1, y0], uv: [u1, v0], color },
            SpriteVertex { position: [x1, y1], uv: [u1, v1], color },
            SpriteVertex { position: [x0, y0], uv: [u0, v0], color },
            SpriteVertex { position: [x1, y1], uv: [u1, v1], color },
            SpriteVertex { position: [x0, y1], uv: [u0, v1], color },
        ]);
    }

    #[inline]
    pub fn vertices(&self) -> &[SpriteVertex] {
        &self.vertices
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Per-frame reset; keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Ensures the GPU vertex buffer can hold the staged vertices, creating
    /// or growing it as needed. `None` while nothing is staged.
    pub fn ensure_buffer(&mut self, device: &wgpu::Device) -> Option<&wgpu::Buffer> {
        if self.vertices.is_empty() {
            return None;
        }

        let needed = std::mem::size_of_val(self.vertices.as_slice()) as u64;
        if self.vertex_buffer.is_none() || self.buffer_capacity < needed {
            self.vertex_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("astral sprite batch vertices"),
                size: needed,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.buffer_capacity = needed;
        }

        self.vertex_buffer.as_ref()
    }

    /// Copies staged vertices into the GPU buffer.
    ///
    /// Call after [`ensure_buffer`](Self::ensure_buffer) in the same frame.
    pub fn upload(&self, queue: &wgpu::Queue) {
        if let Some(buffer) = &self.vertex_buffer {
            if !self.vertices.is_empty() {
                queue.write_buffer(buffer, 0, bytemuck::cast_slice(&self.vertices));
            }
        }
    }

    /// Releases GPU and CPU storage. Idempotent; the pool is reusable after.
    pub fn clean_up(&mut self) {
        self.vertex_buffer = None;
        self.buffer_capacity = 0;
        self.vertices = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_stages_six_vertices() {
        let mut batch = SpriteBatch::new();
        batch.push_quad([0.0, 0.0], [32.0, 32.0], [0.0, 0.0], [1.0, 1.0], DEFAULT_DRAW_COLOR);
        assert_eq!(batch.vertices().len(), 6);
        assert!(!batch.is_empty());
    }

    #[test]
    fn vertex_byte_layout_is_tightly_packed() {
        let mut batch = SpriteBatch::new();
        batch.push_quad([0.0, 0.0], [1.0, 1.0], [0.0, 0.0], [1.0, 1.0], DEFAULT_DRAW_COLOR);

        // 2 + 2 + 4 floats per vertex, no padding.
        let bytes: &[u8] = bytemuck::cast_slice(batch.vertices());
        assert_eq!(bytes.len(), 6 * 8 * std::mem::size_of::<f32>());
    }

    #[test]
    fn clear_resets_staging() {
        let mut batch = SpriteBatch::new();
        batch.push_quad([0.0, 0.0], [1.0, 1.0], [0.0, 0.0], [1.0, 1.0], DEFAULT_DRAW_COLOR);
        batch.clear();
        assert!(batch.is_empty());
    }

    #[test]
    fn clean_up_is_idempotent() {
        let mut batch = SpriteBatch::new();
        batch.push_quad([0.0, 0.0], [1.0, 1.0], [0.0, 0.0], [1.0, 1.0], DEFAULT_DRAW_COLOR);
        batch.clean_up();
        assert!(batch.is_empty());
        batch.clean_up();
        assert!(batch.is_empty());
    }

    #[test]
    fn default_draw_color_is_opaque_white() {
        assert_eq!(DEFAULT_DRAW_COLOR, [1.0, 1.0, 1.0, 1.0]);
    }
}
