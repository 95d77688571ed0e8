pub mod builder;
pub mod lifecycle;
pub mod object;

pub use lifecycle::{Phase, SceneLifecycle};
pub use object::{DecorativeObject, Motion, Shape};
