//! Mesh generation utilities
//!
//! Every shape uses counter-clockwise front faces and comes with normals,
//! UVs, bounds and tangents filled in.

use glam::{Vec2, Vec3};
use meshflip_core::Mesh;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Shapes that can be requested by name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Plane,
    Sphere,
    #[default]
    Capsule,
    Quads,
}

impl PrimitiveKind {
    /// Build the shape at a reasonable default size
    pub fn build(self) -> Mesh {
        match self {
            PrimitiveKind::Plane => plane(2.0, 8),
            PrimitiveKind::Sphere => uv_sphere(1.0, 24, 16),
            PrimitiveKind::Capsule => capsule(1.8, 0.4, 16, 16),
            PrimitiveKind::Quads => quad_pair(),
        }
    }
}

/// Flat plane in XZ facing +Y, centred on the origin
pub fn plane(size: f32, subdivisions: u32) -> Mesh {
    let subdivisions = subdivisions.max(1);
    let mut vertices = Vec::new();
    let mut uvs = Vec::new();
    let mut indices = Vec::new();

    let half_size = size / 2.0;
    let step = size / subdivisions as f32;

    for z in 0..=subdivisions {
        for x in 0..=subdivisions {
            vertices.push(Vec3::new(
                -half_size + x as f32 * step,
                0.0,
                -half_size + z as f32 * step,
            ));
            uvs.push(Vec2::new(
                x as f32 / subdivisions as f32,
                z as f32 / subdivisions as f32,
            ));
        }
    }

    for z in 0..subdivisions {
        for x in 0..subdivisions {
            let current = z * (subdivisions + 1) + x;
            let next = current + subdivisions + 1;

            indices.extend_from_slice(&[current, next, current + 1]);
            indices.extend_from_slice(&[current + 1, next, next + 1]);
        }
    }

    let normals = vec![Vec3::Y; vertices.len()];
    Mesh::new(vertices, normals, vec![indices]).with_uvs(uvs)
}

/// UV sphere centred on the origin
pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> Mesh {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();

    for ring in 0..=rings {
        let phi = PI * ring as f32 / rings as f32;
        let y = radius * phi.cos();
        let ring_radius = radius * phi.sin();

        for seg in 0..=segments {
            let theta = 2.0 * PI * seg as f32 / segments as f32;
            let position = Vec3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin());

            vertices.push(position);
            normals.push(position.normalize_or_zero());
            uvs.push(Vec2::new(
                seg as f32 / segments as f32,
                ring as f32 / rings as f32,
            ));
        }
    }

    let indices = grid_indices(rings, segments);
    Mesh::new(vertices, normals, vec![indices]).with_uvs(uvs)
}

/// Capsule along Y: a cylindrical body of total `height` with hemispherical caps
pub fn capsule(height: f32, radius: f32, segments: u32, rings: u32) -> Mesh {
    let segments = segments.max(3);
    let half_rings = (rings / 2).max(1);
    let half_height = (height - 2.0 * radius).max(0.0) / 2.0;

    let mut vertices = Vec::new();
    let mut normals = Vec::new();

    let mut push_ring = |phi: f32, y_offset: f32| {
        let y = phi.sin() * radius + y_offset;
        let ring_radius = phi.cos() * radius;

        for seg in 0..=segments {
            let theta = 2.0 * PI * seg as f32 / segments as f32;
            let (x, z) = (ring_radius * theta.cos(), ring_radius * theta.sin());

            vertices.push(Vec3::new(x, y, z));
            normals.push(Vec3::new(x, phi.sin() * radius, z).normalize_or_zero());
        }
    };

    // Top hemisphere, pole first
    for ring in 0..=half_rings {
        let phi = PI * 0.5 * (1.0 - ring as f32 / half_rings as f32);
        push_ring(phi, half_height);
    }

    // Bottom hemisphere, equator first
    for ring in 0..=half_rings {
        let phi = -PI * 0.5 * ring as f32 / half_rings as f32;
        push_ring(phi, -half_height);
    }

    let rows = 2 * (half_rings + 1);
    let uvs = (0..rows)
        .flat_map(|row| {
            (0..=segments).map(move |seg| {
                Vec2::new(
                    seg as f32 / segments as f32,
                    row as f32 / (rows - 1) as f32,
                )
            })
        })
        .collect();

    // The strip between the two equator rows is the cylinder body
    let indices = grid_indices(rows - 1, segments);
    Mesh::new(vertices, normals, vec![indices]).with_uvs(uvs)
}

/// Two unit quads side by side in XY facing +Z, each in its own submesh
pub fn quad_pair() -> Mesh {
    let mut vertices = Vec::new();
    let mut uvs = Vec::new();
    let mut submeshes = Vec::new();

    for quad in 0..2u32 {
        let x0 = quad as f32;
        let base = quad * 4;

        vertices.extend_from_slice(&[
            Vec3::new(x0, 0.0, 0.0),
            Vec3::new(x0 + 1.0, 0.0, 0.0),
            Vec3::new(x0 + 1.0, 1.0, 0.0),
            Vec3::new(x0, 1.0, 0.0),
        ]);
        uvs.extend_from_slice(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]);
        submeshes.push(vec![base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    let normals = vec![Vec3::Z; vertices.len()];
    Mesh::new(vertices, normals, submeshes).with_uvs(uvs)
}

/// Index a (rows + 1) x (segments + 1) vertex grid, top row first,
/// so faces point away from the axis of revolution.
fn grid_indices(rows: u32, segments: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity((rows * segments * 6) as usize);

    for ring in 0..rows {
        for seg in 0..segments {
            let current = ring * (segments + 1) + seg;
            let next = current + segments + 1;

            indices.extend_from_slice(&[current, current + 1, next]);
            indices.extend_from_slice(&[current + 1, next + 1, next]);
        }
    }

    indices
}
