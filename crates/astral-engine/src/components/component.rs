use std::any::Any;

/// Trait-upcasting workaround for typed component lookup.
///
/// Blanket-implemented for every `Any` type so `&dyn Component` can be
/// coerced to `&dyn Any`; user components never implement this by hand.
pub trait AsAny {
    fn as_any_ref(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any_ref(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Per-frame data handed to [`Component::update`].
#[derive(Debug, Copy, Clone, Default)]
pub struct UpdateContext {
    pub delta_seconds: f32,
}

/// Behavior attached to a scene object.
///
/// All hooks default to no-ops so data-only components stay one-line impls:
///
/// ```
/// use astral_engine::components::Component;
///
/// struct Health(f32);
/// impl Component for Health {}
/// ```
pub trait Component: AsAny + Any {
    /// Called once when the owning object enters a scene.
    fn initialize(&mut self) {}

    /// Called once per frame before draw submission.
    fn update(&mut self, ctx: &UpdateContext) {
        let _ = ctx;
    }

    /// Called once per frame during draw submission.
    fn draw(&self) {}
}
