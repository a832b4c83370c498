use glam::Mat4;

use super::Component;

/// Camera data the graphics manager snapshots each frame.
///
/// Holds the projection and the inverse of the camera's world transform;
/// the manager composes them into the view-projection matrix.
#[derive(Debug, Clone)]
pub struct CameraComponent {
    projection: Mat4,
    view_inverse: Mat4,
}

impl CameraComponent {
    /// 2D orthographic camera over a top-left-origin viewport.
    ///
    /// Depth range is ±1000 so z-ordered 2D content never clips.
    pub fn orthographic(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            projection: Mat4::orthographic_rh(
                0.0,
                viewport_width,
                viewport_height,
                0.0,
                -1000.0,
                1000.0,
            ),
            view_inverse: Mat4::IDENTITY,
        }
    }

    pub fn from_matrices(projection: Mat4, view_inverse: Mat4) -> Self {
        Self { projection, view_inverse }
    }

    /// Stores the inverse of a world-space view transform.
    pub fn set_view(&mut self, view: Mat4) {
        self.view_inverse = view.inverse();
    }

    pub fn set_view_inverse(&mut self, view_inverse: Mat4) {
        self.view_inverse = view_inverse;
    }

    pub fn set_projection(&mut self, projection: Mat4) {
        self.projection = projection;
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    pub fn view_inverse(&self) -> &Mat4 {
        &self.view_inverse
    }
}

impl Component for CameraComponent {}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn orthographic_maps_viewport_corners_to_clip_space() {
        let camera = CameraComponent::orthographic(800.0, 600.0);

        let top_left = camera.projection().project_point3(Vec3::new(0.0, 0.0, 0.0));
        assert!(close(top_left.x, -1.0));
        assert!(close(top_left.y, 1.0));

        let bottom_right = camera.projection().project_point3(Vec3::new(800.0, 600.0, 0.0));
        assert!(close(bottom_right.x, 1.0));
        assert!(close(bottom_right.y, -1.0));
    }

    #[test]
    fn set_view_stores_the_inverse() {
        let mut camera = CameraComponent::orthographic(800.0, 600.0);
        camera.set_view(Mat4::from_translation(Vec3::new(5.0, 3.0, 0.0)));

        let p = camera.view_inverse().transform_point3(Vec3::ZERO);
        assert!(close(p.x, -5.0));
        assert!(close(p.y, -3.0));
    }
}
