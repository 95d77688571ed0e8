use glam::Vec3;
use rand::Rng;

use crate::theme::Theme;

use super::object::{DecorativeObject, Motion, Shape};

/// Particles in the ambient point cloud.
pub const TERMINAL_PARTICLES: usize = 1000;
pub const KAWAII_PARTICLES: usize = 500;

/// Initial positions are uniform over (-RANGE, RANGE) per coordinate.
pub const PLACEMENT_RANGE: f32 = 5.0;

/// Build the decorative object set for a theme. Placement and color
/// assignment come entirely from the injected generator, so a seeded run
/// reproduces the same scene.
pub fn build_scene(theme: Theme, rng: &mut impl Rng) -> Vec<DecorativeObject> {
    match theme {
        Theme::Terminal => terminal_scene(theme, rng),
        Theme::Kawaii => kawaii_scene(theme, rng),
    }
}

/// Point cloud plus a slow wireframe torus at the origin.
fn terminal_scene(theme: Theme, rng: &mut impl Rng) -> Vec<DecorativeObject> {
    let palette = theme.scene_palette();

    let cloud = DecorativeObject::new(
        Shape::PointCloud {
            points: scatter_points(TERMINAL_PARTICLES, rng),
        },
        Vec3::ZERO,
        palette[0],
        0.8,
        Motion::Spin {
            rate: Vec3::new(0.001, 0.001, 0.0),
        },
    );

    let torus = DecorativeObject::new(
        Shape::Torus {
            radius: 0.7,
            tube: 0.2,
        },
        Vec3::ZERO,
        palette[0],
        0.1,
        Motion::Spin {
            rate: Vec3::new(0.01, 0.01, 0.0),
        },
    );

    vec![cloud, torus]
}

/// Pastel cloud with bobbing cubes and spheres scattered through it.
fn kawaii_scene(theme: Theme, rng: &mut impl Rng) -> Vec<DecorativeObject> {
    let palette = theme.scene_palette();
    let mut objects = Vec::with_capacity(12);

    objects.push(DecorativeObject::new(
        Shape::PointCloud {
            points: scatter_points(KAWAII_PARTICLES, rng),
        },
        Vec3::ZERO,
        palette[0],
        0.6,
        Motion::Spin {
            rate: Vec3::new(0.0005, 0.001, 0.0),
        },
    ));

    for i in 0..6 {
        objects.push(DecorativeObject::new(
            Shape::Cube { size: 0.4 },
            scatter(rng),
            pick_color(palette, rng),
            0.35,
            Motion::SpinAndBob {
                rate: Vec3::new(0.008, 0.012, 0.0),
                amplitude: 0.4,
                speed: 0.8,
                phase: i as f32 * std::f32::consts::FRAC_PI_3,
            },
        ));
    }

    for i in 0..5 {
        objects.push(DecorativeObject::new(
            Shape::Sphere { radius: 0.3 },
            scatter(rng),
            pick_color(palette, rng),
            0.25,
            Motion::SpinAndBob {
                rate: Vec3::new(0.0, 0.01, 0.004),
                amplitude: 0.3,
                speed: 1.1,
                phase: i as f32 * std::f32::consts::FRAC_PI_4,
            },
        ));
    }

    objects
}

fn scatter(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-PLACEMENT_RANGE..PLACEMENT_RANGE),
        rng.gen_range(-PLACEMENT_RANGE..PLACEMENT_RANGE),
        rng.gen_range(-PLACEMENT_RANGE..PLACEMENT_RANGE),
    )
}

fn scatter_points(count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
    (0..count).map(|_| scatter(rng)).collect()
}

fn pick_color(palette: &[[f32; 3]], rng: &mut impl Rng) -> [f32; 3] {
    palette[rng.gen_range(0..palette.len())]
}
