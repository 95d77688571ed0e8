use anyhow::Result;

use crate::camera::Camera;
use crate::scene::object::DecorativeObject;

/// Drawable surface the decorative scene renders into.
///
/// The GPU renderer is the real implementation; tests substitute a counting
/// mock so the whole lifecycle runs headless.
pub trait RenderTarget {
    /// Match the drawable to new physical dimensions.
    fn resize(&mut self, width: u32, height: u32);

    /// Render one frame of the decorative objects through `camera`.
    fn draw(&mut self, objects: &[DecorativeObject], camera: &Camera) -> Result<()>;
}
