/// Raw mesh geometry, as it would arrive from a mesh file reader.
pub struct TestMesh {
    pub vertices: &'static [[f32; 3]],
    pub triangles: &'static [[u32; 3]],
}

/// A single triangle on the three unit axes plus a fourth vertex that no triangle uses.
pub const CORNER_TRIANGLE: TestMesh = TestMesh {
    vertices: &[[0., 0., 0.], [1., 0., 0.], [0., 1., 0.], [0., 0., 1.]],
    triangles: &[[0, 1, 2]],
};

/// A square pyramid away from the origin. Base `[3, 5] x [-4, -2]` at z = 7, apex at
/// z = 10. Its vertex centroid and bounding box center differ.
pub const OFFSET_PYRAMID: TestMesh = TestMesh {
    vertices: &[
        [3., -4., 7.],
        [5., -4., 7.],
        [5., -2., 7.],
        [3., -2., 7.],
        [4., -3., 10.],
    ],
    triangles: &[
        [0, 2, 1],
        [0, 3, 2],
        [0, 1, 4],
        [1, 2, 4],
        [2, 3, 4],
        [3, 0, 4],
    ],
};

/// One proper triangle followed by one whose points are collinear.
pub const SLIVER: TestMesh = TestMesh {
    vertices: &[
        [0., 0., 0.],
        [1., 0., 0.],
        [0., 1., 0.],
        [2., 0., 0.],
    ],
    triangles: &[[0, 1, 2], [0, 1, 3]],
};
