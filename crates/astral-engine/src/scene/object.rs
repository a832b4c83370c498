use crate::components::{Component, UpdateContext};

/// Stable handle to an object within one scene.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ObjectId(pub(crate) usize);

/// A named bag of components.
///
/// One component per type is the intended shape; lookup returns the first
/// match, so a duplicate type shadows later ones.
#[derive(Default)]
pub struct SceneObject {
    name: String,
    components: Vec<Box<dyn Component>>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_component(&mut self, component: impl Component) -> &mut Self {
        self.components.push(Box::new(component));
        self
    }

    /// Typed component lookup.
    pub fn component<T: Component>(&self) -> Option<&T> {
        self.components
            .iter()
            .find_map(|c| c.as_ref().as_any_ref().downcast_ref::<T>())
    }

    pub fn component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find_map(|c| c.as_mut().as_any_mut().downcast_mut::<T>())
    }

    /// Runs `initialize` on every component, in attach order.
    pub fn initialize_components(&mut self) {
        for component in &mut self.components {
            component.initialize();
        }
    }

    /// Runs `update` on every component, in attach order.
    pub fn update_components(&mut self, ctx: &UpdateContext) {
        for component in &mut self.components {
            component.update(ctx);
        }
    }

    /// Runs `draw` on every component, in attach order.
    pub fn draw_components(&self) {
        for component in &self.components {
            component.draw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CameraComponent, CircleColliderComponent};

    #[test]
    fn component_lookup_is_typed() {
        let mut object = SceneObject::new("player");
        object.add_component(CircleColliderComponent::new(1.5));
        object.add_component(CameraComponent::orthographic(800.0, 600.0));

        assert!(object.component::<CircleColliderComponent>().is_some());
        assert!(object.component::<CameraComponent>().is_some());
    }

    #[test]
    fn missing_component_is_none() {
        let object = SceneObject::new("empty");
        assert!(object.component::<CameraComponent>().is_none());
    }

    #[test]
    fn component_mut_mutates_in_place() {
        let mut object = SceneObject::new("door");
        object.add_component(CircleColliderComponent::new(1.0));

        object
            .component_mut::<CircleColliderComponent>()
            .unwrap()
            .set_as_trigger(true);

        assert!(object.component::<CircleColliderComponent>().unwrap().is_trigger());
    }

    #[test]
    fn lifecycle_hooks_run_for_every_component() {
        // Default hook bodies are no-ops; this pins that running them over a
        // mixed component bag is safe.
        let mut object = SceneObject::new("mixed");
        object.add_component(CircleColliderComponent::new(1.0));
        object.add_component(CameraComponent::orthographic(64.0, 64.0));

        object.initialize_components();
        object.update_components(&UpdateContext { delta_seconds: 0.016 });
        object.draw_components();
    }
}
