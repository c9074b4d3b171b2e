use std::collections::HashMap;

use cgmath::Zero;
use log::debug;
use ordered_float::OrderedFloat;

use crate::error::{MeshError, Result};
use crate::geometry::{Aabb, Triangle, Vector3};
use crate::normals::{self, NormalPolicy};
use crate::TriangleMesh;

/// Maintains geometry for a single facet.
///
/// This type must be paired with a list of vertices. The points here are only indices into
/// another vector, so a vertex shared by several facets is stored once.
///
/// As a simple example, consider a simple geometry such as:
///
/// ```text
///    *-------*
///    |\     /|
///    | \   / |
///    |  \ /  |
///    |   *   |
///    |  / \  |
///    | /   \ |
///    |/     \|
///    *-------*
/// ```
///
/// Here we have 5 points and 4 facets. Each facet names three of the 5 points, and the
/// centre point is shared by all 4 of them.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Facet {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

impl Facet {
    pub fn new(p0: u32, p1: u32, p2: u32) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.p0, self.p1, self.p2]
    }
}

impl From<[u32; 3]> for Facet {
    fn from([p0, p1, p2]: [u32; 3]) -> Self {
        Self { p0, p1, p2 }
    }
}

/// How `Mesh::center` picks the point that is moved to the origin.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum CenterMode {
    /// Mean of all vertex positions.
    #[default]
    Average,
    /// Midpoint of the axis-aligned bounding box.
    BoundingBox,
}

/// A triangulated surface: shared vertices, index triangles and optional per-vertex normals.
///
/// Every facet index is checked against the vertex list on construction, and `normals` is
/// either empty or holds exactly one entry per vertex. All methods rely on both.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    vertices: Vec<Vector3>,
    triangles: Vec<Facet>,
    normals: Vec<Vector3>,
}

impl Mesh {
    /// Creates a mesh from externally supplied geometry.
    ///
    /// `normals` may be empty; otherwise it must be parallel to `vertices`.
    pub fn new(
        vertices: Vec<Vector3>,
        triangles: Vec<Facet>,
        normals: Vec<Vector3>,
    ) -> Result<Self> {
        if !normals.is_empty() && normals.len() != vertices.len() {
            return Err(MeshError::NormalCountMismatch {
                expected: vertices.len(),
                actual: normals.len(),
            });
        }
        for (i, facet) in triangles.iter().enumerate() {
            if let Some(&index) = facet
                .indices()
                .iter()
                .find(|&&index| index as usize >= vertices.len())
            {
                return Err(MeshError::IndexOutOfRange {
                    triangle: i,
                    index,
                    vertex_count: vertices.len(),
                });
            }
        }
        Ok(Self {
            vertices,
            triangles,
            normals,
        })
    }

    /// Creates a mesh without normals from plain coordinate and index arrays.
    pub fn from_arrays(vertices: &[[f32; 3]], triangles: &[[u32; 3]]) -> Result<Self> {
        Self::new(
            vertices.iter().map(|&v| v.into()).collect(),
            triangles.iter().map(|&t| t.into()).collect(),
            Vec::new(),
        )
    }

    /// Builds a mesh from data already known to satisfy the index invariant.
    pub(crate) fn from_raw(vertices: Vec<Vector3>, triangles: Vec<Facet>) -> Self {
        debug_assert!(triangles
            .iter()
            .flat_map(Facet::indices)
            .all(|i| (i as usize) < vertices.len()));
        Self {
            vertices,
            triangles,
            normals: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Facet] {
        &self.triangles
    }

    /// Per-vertex normals. Empty until supplied or computed.
    pub fn normals(&self) -> &[Vector3] {
        &self.normals
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Resolves a facet into the triangle it describes.
    pub fn triangle(&self, facet: &Facet) -> Triangle {
        Triangle {
            p0: self.vertices[facet.p0 as usize],
            p1: self.vertices[facet.p1 as usize],
            p2: self.vertices[facet.p2 as usize],
        }
    }

    /// Recomputes the vertex normals using the first triangle that references each vertex.
    ///
    /// This is an approximation: every other incident face is ignored. See
    /// `compute_normals_with` for an area-weighted alternative.
    pub fn compute_normals(&mut self) -> Result<()> {
        self.compute_normals_with(NormalPolicy::FirstIncident)
    }

    /// Recomputes the vertex normals with the given policy.
    ///
    /// On error the previously stored normals are kept.
    pub fn compute_normals_with(&mut self, policy: NormalPolicy) -> Result<()> {
        self.normals = normals::vertex_normals(&self.vertices, &self.triangles, policy)?;
        Ok(())
    }

    /// Mean of the three vertex positions of every triangle, in triangle order.
    pub fn triangle_centers(&self) -> Vec<Vector3> {
        self.triangles
            .iter()
            .map(|f| self.triangle(f).center())
            .collect()
    }

    /// Unit normal of every triangle, in triangle order.
    ///
    /// Fails on the first zero-area triangle.
    pub fn triangle_normals(&self) -> Result<Vec<Vector3>> {
        self.triangles
            .iter()
            .enumerate()
            .map(|(i, f)| {
                self.triangle(f)
                    .normal()
                    .ok_or(MeshError::DegenerateTriangle(i))
            })
            .collect()
    }

    /// Mean vertex position, or `None` for a mesh without vertices.
    pub fn centroid(&self) -> Option<Vector3> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zero(), |acc, &v| acc + v);
        Some(sum / self.vertices.len() as f32)
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: Vector3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Moves the point selected by `mode` to the origin. Does nothing for an empty mesh.
    pub fn center(&mut self, mode: CenterMode) {
        let anchor = match mode {
            CenterMode::Average => self.centroid(),
            CenterMode::BoundingBox => self.bounding_box().map(|bb| bb.center()),
        };
        if let Some(anchor) = anchor {
            debug!("centering {:?}: translating by {:?}", mode, -anchor);
            self.translate(-anchor);
        }
    }

    /// Re-centers the vertices at their average position.
    pub fn center_vertices_avg(&mut self) {
        self.center(CenterMode::Average)
    }

    /// Re-centers the vertices at the center of their bounding box.
    pub fn center_vertices_bb(&mut self) {
        self.center(CenterMode::BoundingBox)
    }

    /// Scales every vertex coordinate by `factor`.
    ///
    /// Any factor is accepted. Zero collapses the mesh to the origin and a negative factor
    /// mirrors it through the origin, which also inverts the triangle winding. Stored
    /// normals are left as they are.
    pub fn rescale(&mut self, factor: f32) {
        debug!("rescaling {} vertices by {}", self.vertices.len(), factor);
        for v in &mut self.vertices {
            *v *= factor;
        }
    }
}

/// Iterator over the triangles of a `Mesh`, resolved to their points.
pub struct Triangles<'a> {
    vertices: &'a [Vector3],
    facets: std::slice::Iter<'a, Facet>,
}

impl<'a> Iterator for Triangles<'a> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Self::Item> {
        self.facets.next().map(|f| Triangle {
            p0: self.vertices[f.p0 as usize],
            p1: self.vertices[f.p1 as usize],
            p2: self.vertices[f.p2 as usize],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.facets.size_hint()
    }
}

impl<'a> ExactSizeIterator for Triangles<'a> {}

type PointKey = [OrderedFloat<f32>; 3];

fn point_key(p: &Vector3) -> PointKey {
    [p.x.into(), p.y.into(), p.z.into()]
}

impl TriangleMesh for Mesh {
    type Triangles<'a> = Triangles<'a>;

    /// Welds a triangle soup into an indexed mesh.
    ///
    /// Points with identical coordinates become a single shared vertex. Vertices are
    /// numbered in order of first appearance.
    fn from_triangles(triangles: Vec<Triangle>) -> Self {
        let mut lookup: HashMap<PointKey, u32> = HashMap::new();
        let mut vertices = Vec::new();
        let mut index_of = |p: Vector3| {
            *lookup.entry(point_key(&p)).or_insert_with(|| {
                vertices.push(p);
                (vertices.len() - 1) as u32
            })
        };
        let facets: Vec<Facet> = triangles
            .iter()
            .map(|t| Facet::new(index_of(t.p0), index_of(t.p1), index_of(t.p2)))
            .collect();
        debug!(
            "welded {} triangles into {} vertices",
            facets.len(),
            vertices.len()
        );
        Mesh::from_raw(vertices, facets)
    }

    fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    fn triangle_iter(&self) -> Triangles<'_> {
        Triangles {
            vertices: &self.vertices,
            facets: self.triangles.iter(),
        }
    }
}
