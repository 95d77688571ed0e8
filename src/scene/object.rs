use glam::{EulerRot, Mat4, Vec3};

/// Geometry of a decorative primitive. Point clouds carry their scattered
/// positions; wireframe shapes are tessellated from parameters at upload.
#[derive(Debug, Clone)]
pub enum Shape {
    PointCloud { points: Vec<Vec3> },
    Torus { radius: f32, tube: f32 },
    Cube { size: f32 },
    Sphere { radius: f32 },
}

/// Deterministic per-frame motion rule.
#[derive(Debug, Clone, Copy)]
pub enum Motion {
    /// Rotation advances by a fixed delta every frame.
    Spin { rate: Vec3 },
    /// Spin plus a vertical sine oscillation of elapsed time. `phase` is
    /// derived from the object's index so neighbors bob out of step.
    SpinAndBob {
        rate: Vec3,
        amplitude: f32,
        speed: f32,
        phase: f32,
    },
}

/// A non-interactive visual primitive updated every tick for ambient motion.
/// Created once at scene setup; all are discarded together at disposal.
#[derive(Debug, Clone)]
pub struct DecorativeObject {
    pub shape: Shape,
    pub position: Vec3,
    pub rotation: Vec3,
    pub color: [f32; 3],
    pub opacity: f32,
    pub motion: Motion,
    /// Rest position the bob oscillates around.
    anchor: Vec3,
}

impl DecorativeObject {
    pub fn new(shape: Shape, position: Vec3, color: [f32; 3], opacity: f32, motion: Motion) -> Self {
        Self {
            shape,
            position,
            rotation: Vec3::ZERO,
            color,
            opacity,
            motion,
            anchor: position,
        }
    }

    /// Advance one frame. `elapsed` is scene time in seconds.
    pub fn advance(&mut self, elapsed: f32) {
        match self.motion {
            Motion::Spin { rate } => {
                self.rotation += rate;
            }
            Motion::SpinAndBob {
                rate,
                amplitude,
                speed,
                phase,
            } => {
                self.rotation += rate;
                self.position.y = self.anchor.y + amplitude * (speed * elapsed + phase).sin();
            }
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spinning_cube(rate: Vec3) -> DecorativeObject {
        DecorativeObject::new(
            Shape::Cube { size: 1.0 },
            Vec3::new(1.0, 2.0, 3.0),
            [1.0, 0.0, 0.0],
            0.5,
            Motion::Spin { rate },
        )
    }

    #[test]
    fn spin_accumulates_fixed_delta() {
        let mut obj = spinning_cube(Vec3::new(0.01, 0.01, 0.0));

        for _ in 0..100 {
            obj.advance(0.0);
        }

        assert!((obj.rotation.x - 1.0).abs() < 1e-4);
        assert!((obj.rotation.y - 1.0).abs() < 1e-4);
        assert_eq!(obj.rotation.z, 0.0);
        // Pure spin never moves the object
        assert_eq!(obj.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn bob_oscillates_around_anchor() {
        let mut obj = DecorativeObject::new(
            Shape::Sphere { radius: 0.5 },
            Vec3::new(0.0, 2.0, 0.0),
            [1.0, 1.0, 1.0],
            1.0,
            Motion::SpinAndBob {
                rate: Vec3::ZERO,
                amplitude: 0.5,
                speed: 1.0,
                phase: 0.0,
            },
        );

        // sin(pi) == 0: back at the anchor
        obj.advance(std::f32::consts::PI);
        assert!((obj.position.y - 2.0).abs() < 1e-5);

        // sin(pi/2) == 1: at full amplitude
        obj.advance(std::f32::consts::FRAC_PI_2);
        assert!((obj.position.y - 2.5).abs() < 1e-5);
    }

    #[test]
    fn phase_offsets_desynchronize_neighbors() {
        let make = |phase| {
            DecorativeObject::new(
                Shape::Cube { size: 1.0 },
                Vec3::ZERO,
                [1.0, 1.0, 1.0],
                1.0,
                Motion::SpinAndBob {
                    rate: Vec3::ZERO,
                    amplitude: 1.0,
                    speed: 1.0,
                    phase,
                },
            )
        };

        let mut a = make(0.0);
        let mut b = make(std::f32::consts::FRAC_PI_2);
        a.advance(1.0);
        b.advance(1.0);

        assert_ne!(a.position.y, b.position.y);
    }

    #[test]
    fn advance_is_deterministic() {
        let mut a = spinning_cube(Vec3::new(0.001, 0.001, 0.0));
        let mut b = spinning_cube(Vec3::new(0.001, 0.001, 0.0));

        for frame in 0..50 {
            let t = frame as f32 / 60.0;
            a.advance(t);
            b.advance(t);
        }

        assert_eq!(a.rotation, b.rotation);
        assert_eq!(a.position, b.position);
    }
}
