//! Minimal scene graph consumed by the graphics manager.
//!
//! Responsibilities:
//! - own scene objects and their components
//! - track which object carries the active camera

mod object;

pub use object::{ObjectId, SceneObject};

/// A collection of scene objects with an optional active camera.
#[derive(Default)]
pub struct Scene {
    name: String,
    objects: Vec<SceneObject>,
    active_camera: Option<ObjectId>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            active_camera: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds an object and returns its id. Ids are stable for the scene's
    /// lifetime (objects are never removed, only scenes are dropped whole).
    pub fn add_object(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(object);
        id
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.0)
    }

    /// Marks `id` as the camera carrier. `None` clears the active camera.
    pub fn set_active_camera(&mut self, id: Option<ObjectId>) {
        self.active_camera = id;
    }

    /// The object currently carrying the active camera, if any.
    pub fn active_camera(&self) -> Option<&SceneObject> {
        self.active_camera.and_then(|id| self.objects.get(id.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CircleColliderComponent;

    #[test]
    fn no_active_camera_by_default() {
        let mut scene = Scene::new("level");
        scene.add_object(SceneObject::new("player"));
        assert!(scene.active_camera().is_none());
    }

    #[test]
    fn active_camera_resolves_to_object() {
        let mut scene = Scene::new("level");
        let id = scene.add_object(SceneObject::new("camera"));
        scene.set_active_camera(Some(id));
        assert_eq!(scene.active_camera().map(SceneObject::name), Some("camera"));
    }

    #[test]
    fn clearing_active_camera() {
        let mut scene = Scene::new("level");
        let id = scene.add_object(SceneObject::new("camera"));
        scene.set_active_camera(Some(id));
        scene.set_active_camera(None);
        assert!(scene.active_camera().is_none());
    }

    #[test]
    fn objects_are_addressable_by_id() {
        let mut scene = Scene::new("level");
        let id = scene.add_object(SceneObject::new("pickup"));
        scene
            .object_mut(id)
            .unwrap()
            .add_component(CircleColliderComponent::new(4.0));

        let radius = scene
            .object(id)
            .and_then(|o| o.component::<CircleColliderComponent>())
            .map(CircleColliderComponent::radius);
        assert_eq!(radius, Some(4.0));
    }
}
