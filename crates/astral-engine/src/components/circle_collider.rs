use super::Component;

/// Circle collision volume attached to a scene object.
///
/// Triggers report overlaps without resolving them; non-triggers participate
/// in collision response.
#[derive(Debug, Clone)]
pub struct CircleColliderComponent {
    radius: f32,
    is_trigger: bool,
}

impl CircleColliderComponent {
    /// `radius` must be positive; collision math assumes a non-degenerate
    /// circle.
    pub fn new(radius: f32) -> Self {
        debug_assert!(radius > 0.0, "circle collider needs a positive radius");
        Self { radius, is_trigger: false }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn set_as_trigger(&mut self, is_trigger: bool) {
        self.is_trigger = is_trigger;
    }

    #[inline]
    pub fn is_trigger(&self) -> bool {
        self.is_trigger
    }
}

impl Component for CircleColliderComponent {}
