//! Triangle meshes for grasp planning.
//!
//! [`Mesh`] stores shared vertices, index triangles ([`Facet`]) and optional per-vertex
//! normals, and derives normals, triangle centers and re-centering/rescaling transforms
//! from them.

mod error;
mod geometry;
mod mesh;
pub mod normals;
pub mod shapes;

pub use error::{MeshError, Result};
pub use geometry::*;
pub use mesh::*;
pub use normals::NormalPolicy;

pub trait TriangleMesh: Sized {
    /// Iterator returned by `triangle_iter`.
    type Triangles<'a>: Iterator<Item = Triangle>
    where
        Self: 'a;

    /// Creates a TriangleMesh from a list of triangles given by value.
    ///
    /// # Arguments
    ///
    /// * `triangles` - A vector of the triangles of the mesh.
    fn from_triangles(triangles: Vec<Triangle>) -> Self;

    /// Returns the number of triangles that comprises this mesh.
    fn triangle_count(&self) -> usize;

    /// Returns every triangle of the mesh, resolved to its points, in order.
    fn triangle_iter(&self) -> Self::Triangles<'_>;
}
