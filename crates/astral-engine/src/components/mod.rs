//! Component model.
//!
//! Components bind data and behavior to scene objects. The owning object
//! holds its components; components never own their object (back-reference
//! only, by convention).

mod camera;
mod circle_collider;
mod component;

pub use camera::CameraComponent;
pub use circle_collider::CircleColliderComponent;
pub use component::{AsAny, Component, UpdateContext};
