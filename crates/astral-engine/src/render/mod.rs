//! GPU-visible render resources.
//!
//! Only the batch resource pool lives here; draw submission is owned by
//! higher layers. Each pool is responsible for its own GPU resources.

mod batch;

pub use batch::{DEFAULT_DRAW_COLOR, SpriteBatch, SpriteVertex};
