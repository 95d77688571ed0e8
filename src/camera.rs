use glam::{Mat4, Vec3};

pub const DEFAULT_FOV_Y_DEG: f32 = 75.0;
pub const NEAR_CLIP: f32 = 0.1;
pub const FAR_CLIP: f32 = 1000.0;

/// Fixed-eye perspective camera for the decorative scene. The eye sits on
/// the +Z axis looking at the origin; only the aspect ratio changes over a
/// mount, driven by resize events.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    fov_y_deg: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            fov_y_deg: DEFAULT_FOV_Y_DEG,
            aspect: 1.0,
            near: NEAR_CLIP,
            far: FAR_CLIP,
        };
        camera.set_aspect(width, height);
        camera
    }

    /// Recompute the aspect ratio from physical dimensions. Zero dimensions
    /// are ignored to keep the projection valid during minimization.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Combined view-projection matrix for the current configuration.
    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
        let view = Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y);
        proj * view
    }
}
