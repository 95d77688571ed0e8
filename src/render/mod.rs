pub mod geometry;
pub mod gpu;
pub mod target;

pub use gpu::{GpuRenderer, UiFrame};
pub use target::RenderTarget;
