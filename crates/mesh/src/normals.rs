//! Per-vertex normal estimation.

use cgmath::Zero;
use log::warn;

use crate::error::{MeshError, Result};
use crate::geometry::{try_normalize, Aabb, Triangle, Vector3, DEGENERATE_SINE};
use crate::mesh::Facet;

/// Selects how a vertex normal is derived from the triangles around it.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum NormalPolicy {
    /// Use the normal of the first triangle, in triangle order, that references the vertex.
    ///
    /// Both edges leaving the triangle's first point are normalized before taking their
    /// cross product. Cheap, but on a curved surface the result depends on triangle order.
    #[default]
    FirstIncident,
    /// Sum the unnormalized normals of every incident triangle, so larger faces count
    /// more, then normalize.
    AreaWeighted,
}

/// Computes one unit normal per vertex.
///
/// Fails with `UnreferencedVertex` if some vertex belongs to no triangle. With
/// `FirstIncident`, a zero-area first triangle yields `DegenerateTriangle`; with
/// `AreaWeighted`, incident faces summing to nothing yield `DegenerateNormal`.
pub fn vertex_normals(
    vertices: &[Vector3],
    facets: &[Facet],
    policy: NormalPolicy,
) -> Result<Vec<Vector3>> {
    let normals = match policy {
        NormalPolicy::FirstIncident => first_incident(vertices, facets),
        NormalPolicy::AreaWeighted => area_weighted(vertices, facets),
    };
    normals.map_err(|e| {
        warn!("cannot compute {:?} vertex normals: {}", policy, e);
        e
    })
}

fn resolve(vertices: &[Vector3], f: &Facet) -> Triangle {
    Triangle::new(
        vertices[f.p0 as usize],
        vertices[f.p1 as usize],
        vertices[f.p2 as usize],
    )
}

fn first_incident(vertices: &[Vector3], facets: &[Facet]) -> Result<Vec<Vector3>> {
    let mut first = vec![None; vertices.len()];
    for (t, facet) in facets.iter().enumerate() {
        for i in facet.indices() {
            first[i as usize].get_or_insert(t);
        }
    }

    first
        .into_iter()
        .enumerate()
        .map(|(vertex, t)| {
            let t = t.ok_or(MeshError::UnreferencedVertex(vertex))?;
            let (u, v) = resolve(vertices, &facets[t]).edges();
            try_normalize(u, 0.0)
                .zip(try_normalize(v, 0.0))
                .and_then(|(u, v)| try_normalize(u.cross(v), DEGENERATE_SINE))
                .ok_or(MeshError::DegenerateTriangle(t))
        })
        .collect()
}

fn area_weighted(vertices: &[Vector3], facets: &[Facet]) -> Result<Vec<Vector3>> {
    // Positions are divided by the mesh extent so the cross products stay within f32 range.
    // A uniform factor leaves the relative face weights unchanged.
    let extent = Aabb::from_points(vertices)
        .map(|bb| bb.max_extent())
        .filter(|e| *e > 0.0 && e.is_finite())
        .unwrap_or(1.0);

    let mut sums = vec![Vector3::zero(); vertices.len()];
    let mut referenced = vec![false; vertices.len()];
    for facet in facets {
        let t = resolve(vertices, facet);
        let n = Triangle::new(t.p0 / extent, t.p1 / extent, t.p2 / extent).scaled_normal();
        for i in facet.indices() {
            sums[i as usize] += n;
            referenced[i as usize] = true;
        }
    }

    sums.into_iter()
        .zip(referenced)
        .enumerate()
        .map(|(vertex, (sum, referenced))| {
            if !referenced {
                return Err(MeshError::UnreferencedVertex(vertex));
            }
            try_normalize(sum, f32::MIN_POSITIVE).ok_or(MeshError::DegenerateNormal(vertex))
        })
        .collect()
}
