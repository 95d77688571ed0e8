//! Procedural wireframe tessellation for the decorative shapes. Everything
//! comes out as a flat line list (vertex pairs) ready for a vertex buffer.

use glam::Vec3;

const TORUS_MAJOR_SEGMENTS: usize = 24;
const TORUS_MINOR_SEGMENTS: usize = 12;
const SPHERE_RINGS: usize = 8;
const SPHERE_SECTORS: usize = 16;

/// The 12 edges of an axis-aligned cube centered on the origin.
pub fn cube_edges(size: f32) -> Vec<[f32; 3]> {
    let h = size * 0.5;
    let corners: [Vec3; 8] = [
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ];
    const EDGES: [(usize, usize); 12] = [
        (0, 1), (1, 2), (2, 3), (3, 0), // back face
        (4, 5), (5, 6), (6, 7), (7, 4), // front face
        (0, 4), (1, 5), (2, 6), (3, 7), // connecting edges
    ];

    let mut vertices = Vec::with_capacity(EDGES.len() * 2);
    for (a, b) in EDGES {
        vertices.push(corners[a].to_array());
        vertices.push(corners[b].to_array());
    }
    vertices
}

/// Torus wireframe: a grid of segments along both the major and minor
/// directions, matching the classic wireframe-material look.
pub fn torus_wireframe(radius: f32, tube: f32) -> Vec<[f32; 3]> {
    let point = |i: usize, j: usize| -> [f32; 3] {
        let u = i as f32 / TORUS_MAJOR_SEGMENTS as f32 * std::f32::consts::TAU;
        let v = j as f32 / TORUS_MINOR_SEGMENTS as f32 * std::f32::consts::TAU;
        [
            (radius + tube * v.cos()) * u.cos(),
            tube * v.sin(),
            (radius + tube * v.cos()) * u.sin(),
        ]
    };

    let mut vertices = Vec::with_capacity(TORUS_MAJOR_SEGMENTS * TORUS_MINOR_SEGMENTS * 4);
    for i in 0..TORUS_MAJOR_SEGMENTS {
        for j in 0..TORUS_MINOR_SEGMENTS {
            vertices.push(point(i, j));
            vertices.push(point(i + 1, j));
            vertices.push(point(i, j));
            vertices.push(point(i, j + 1));
        }
    }
    vertices
}

/// Sphere wireframe as latitude rings and longitude meridians.
pub fn sphere_wireframe(radius: f32) -> Vec<[f32; 3]> {
    let point = |ring: usize, sector: usize| -> [f32; 3] {
        let polar = ring as f32 / SPHERE_RINGS as f32 * std::f32::consts::PI;
        let azimuth = sector as f32 / SPHERE_SECTORS as f32 * std::f32::consts::TAU;
        [
            radius * polar.sin() * azimuth.cos(),
            radius * polar.cos(),
            radius * polar.sin() * azimuth.sin(),
        ]
    };

    let mut vertices = Vec::new();
    for ring in 0..=SPHERE_RINGS {
        for sector in 0..SPHERE_SECTORS {
            // Latitude ring segment (skip the degenerate poles)
            if ring > 0 && ring < SPHERE_RINGS {
                vertices.push(point(ring, sector));
                vertices.push(point(ring, sector + 1));
            }
            // Meridian segment
            if ring < SPHERE_RINGS {
                vertices.push(point(ring, sector));
                vertices.push(point(ring + 1, sector));
            }
        }
    }
    vertices
}
