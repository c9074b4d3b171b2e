//! Small procedural meshes.
//!
//! Triangles are wound counter-clockwise when seen from outside, so triangle normals point
//! away from the solid.

use crate::geometry::Vector3;
use crate::mesh::{Facet, Mesh};

fn build(vertices: &[[f32; 3]], facets: &[[u32; 3]]) -> Mesh {
    Mesh::from_raw(
        vertices.iter().map(|&v| Vector3::from(v)).collect(),
        facets.iter().map(|&f| Facet::from(f)).collect(),
    )
}

/// Axis-aligned cube spanning `[0, 1]` on every axis: 8 vertices, 2 triangles per face.
pub fn unit_cube() -> Mesh {
    build(
        &[
            [0., 0., 0.],
            [1., 0., 0.],
            [1., 1., 0.],
            [0., 1., 0.],
            [0., 0., 1.],
            [1., 0., 1.],
            [1., 1., 1.],
            [0., 1., 1.],
        ],
        &[
            // z = 0
            [0, 2, 1],
            [0, 3, 2],
            // z = 1
            [4, 5, 6],
            [4, 6, 7],
            // y = 0
            [0, 1, 5],
            [0, 5, 4],
            // y = 1
            [3, 7, 6],
            [3, 6, 2],
            // x = 0
            [0, 4, 7],
            [0, 7, 3],
            // x = 1
            [1, 2, 6],
            [1, 6, 5],
        ],
    )
}

/// Regular tetrahedron inscribed in the cube `[-1, 1]^3`, centred on the origin.
pub fn tetrahedron() -> Mesh {
    build(
        &[
            [1., 1., 1.],
            [1., -1., -1.],
            [-1., 1., -1.],
            [-1., -1., 1.],
        ],
        &[[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]],
    )
}
