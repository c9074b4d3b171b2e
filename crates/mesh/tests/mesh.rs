use cgmath::InnerSpace;
use float_eq::{assert_float_eq, float_eq};
use grasplab_mesh::{shapes, Mesh, MeshError, NormalPolicy, Triangle, TriangleMesh, Vector3};
use grasplab_test_data::{TestMesh, CORNER_TRIANGLE, OFFSET_PYRAMID, SLIVER};

fn load(m: &TestMesh) -> Mesh {
    Mesh::from_arrays(m.vertices, m.triangles).unwrap()
}

fn arr(v: Vector3) -> [f32; 3] {
    v.into()
}

#[test]
fn corner_triangle_center() {
    let mesh = load(&CORNER_TRIANGLE);
    let centers = mesh.triangle_centers();
    assert_eq!(1, centers.len());
    assert_float_eq!(
        [1. / 3., 1. / 3., 0.],
        arr(centers[0]),
        abs_all <= 1e-6
    );
}

#[test]
fn tetrahedron_centers_are_vertex_means() {
    let mesh = shapes::tetrahedron();
    let centers = mesh.triangle_centers();
    assert_eq!(4, centers.len());
    for (facet, center) in mesh.triangles().iter().zip(&centers) {
        let v = mesh.vertices();
        let mean = (v[facet.p0 as usize] + v[facet.p1 as usize] + v[facet.p2 as usize]) / 3.0;
        assert_float_eq!(arr(mean), arr(*center), abs_all <= 1e-6);
    }
}

#[test]
fn triangle_normals_are_unit_and_orthogonal() {
    for mesh in [
        shapes::unit_cube(),
        shapes::tetrahedron(),
        load(&OFFSET_PYRAMID),
    ] {
        let normals = mesh.triangle_normals().unwrap();
        assert_eq!(mesh.triangle_count(), normals.len());
        for (t, n) in mesh.triangle_iter().zip(&normals) {
            let (u, v) = t.edges();
            assert_float_eq!(1.0, n.magnitude(), abs <= 1e-6);
            assert_float_eq!(0.0, n.dot(u), abs <= 1e-5);
            assert_float_eq!(0.0, n.dot(v), abs <= 1e-5);
        }
    }
}

#[test]
fn triangle_normals_reject_collinear_triangle() {
    let mesh = load(&SLIVER);
    assert_eq!(Err(MeshError::DegenerateTriangle(1)), mesh.triangle_normals());
    // Centers are still defined.
    assert_float_eq!([1., 0., 0.], arr(mesh.triangle_centers()[1]), abs_all <= 1e-6);
}

#[test]
fn center_vertices_avg_moves_centroid_to_origin() {
    let mut mesh = load(&OFFSET_PYRAMID);
    assert_float_eq!(
        [4., -3., 7.6],
        arr(mesh.centroid().unwrap()),
        abs_all <= 1e-5
    );
    mesh.center_vertices_avg();
    assert_float_eq!([0., 0., 0.], arr(mesh.centroid().unwrap()), abs_all <= 1e-5);
    // The bounding box center is not the centroid for this shape.
    assert_float_eq!(
        [0., 0., 0.9],
        arr(mesh.bounding_box().unwrap().center()),
        abs_all <= 1e-5
    );
}

#[test]
fn center_vertices_bb_moves_box_center_to_origin() {
    let mut mesh = load(&OFFSET_PYRAMID);
    mesh.center_vertices_bb();
    let bb = mesh.bounding_box().unwrap();
    assert_float_eq!([0., 0., 0.], arr(bb.center()), abs_all <= 1e-5);
    assert_float_eq!([-1., -1., -1.5], arr(bb.min), abs_all <= 1e-5);
    assert_float_eq!([1., 1., 1.5], arr(bb.max), abs_all <= 1e-5);
}

#[test]
fn centering_keeps_shape() {
    let original = load(&OFFSET_PYRAMID);
    let mut mesh = original.clone();
    mesh.center_vertices_avg();
    let offset = mesh.vertices()[0] - original.vertices()[0];
    for (a, b) in original.vertices().iter().zip(mesh.vertices()) {
        assert_float_eq!(arr(*a + offset), arr(*b), abs_all <= 1e-5);
    }
    assert_eq!(original.triangles(), mesh.triangles());
}

#[test]
fn rescale_scales_every_coordinate() {
    let original = shapes::unit_cube();
    for k in [2.0, -0.5, 3.7, 1e3] {
        let mut mesh = original.clone();
        mesh.rescale(k);
        for (a, b) in original.vertices().iter().zip(mesh.vertices()) {
            assert_eq!(*a * k, *b);
        }
        mesh.rescale(1.0 / k);
        for (a, b) in original.vertices().iter().zip(mesh.vertices()) {
            assert_float_eq!(arr(*a), arr(*b), abs_all <= 1e-6);
        }
    }
}

#[test]
fn rescale_by_zero_collapses() {
    let mut mesh = shapes::unit_cube();
    mesh.rescale(0.0);
    assert!(mesh.vertices().iter().all(|v| v.magnitude2() == 0.0));
    assert!(mesh.triangle_normals().is_err());
}

#[test]
fn normals_do_not_depend_on_mesh_size() {
    let unit = shapes::unit_cube();
    let expected = unit.triangle_normals().unwrap();
    for k in [1e-12, 1e-6, 1e6, 1e20] {
        let mut mesh = unit.clone();
        mesh.rescale(k);

        let normals = mesh.triangle_normals().unwrap();
        for (a, b) in expected.iter().zip(&normals) {
            assert_float_eq!(arr(*a), arr(*b), abs_all <= 1e-6);
        }

        mesh.compute_normals().unwrap();
        for policy in [NormalPolicy::FirstIncident, NormalPolicy::AreaWeighted] {
            let mut reference = unit.clone();
            reference.compute_normals_with(policy).unwrap();
            mesh.compute_normals_with(policy).unwrap();
            for (a, b) in reference.normals().iter().zip(mesh.normals()) {
                assert_float_eq!(arr(*a), arr(*b), abs_all <= 1e-6);
            }
        }
    }
}

#[test]
fn compute_normals_reports_unused_vertex() {
    let mut mesh = load(&CORNER_TRIANGLE);
    assert_eq!(Err(MeshError::UnreferencedVertex(3)), mesh.compute_normals());
    assert!(!mesh.has_normals());
}

#[test]
fn compute_normals_on_cube_points_outward() {
    let mut mesh = shapes::unit_cube();
    mesh.compute_normals().unwrap();
    assert_eq!(mesh.vertex_count(), mesh.normals().len());

    let centroid = mesh.centroid().unwrap();
    for (v, n) in mesh.vertices().iter().zip(mesh.normals()) {
        assert_float_eq!(1.0, n.magnitude(), abs <= 1e-6);
        // First-incident normals are face normals, so each is a single axis.
        assert_eq!(
            1,
            [n.x, n.y, n.z]
                .iter()
                .filter(|c| float_eq!(c.abs(), 1.0, abs <= 1e-6))
                .count()
        );
        assert!((*v - centroid).dot(*n) > 0.0);
    }
}

#[test]
fn area_weighted_normals_on_cube_corners() {
    let mut mesh = shapes::unit_cube();
    mesh.compute_normals_with(NormalPolicy::AreaWeighted).unwrap();
    let c = 1.0 / 3f32.sqrt();
    assert_float_eq!([-c, -c, -c], arr(mesh.normals()[0]), abs_all <= 1e-6);
    assert_float_eq!([c, c, c], arr(mesh.normals()[6]), abs_all <= 1e-6);
}

#[test]
fn welding_a_triangle_soup() {
    let cube = shapes::unit_cube();
    let soup: Vec<Triangle> = cube.triangle_iter().collect();
    assert_eq!(36, soup.len() * 3);

    let welded = Mesh::from_triangles(soup.clone());
    assert_eq!(8, welded.vertex_count());
    assert_eq!(12, welded.triangle_count());
    assert_eq!(soup, welded.triangle_iter().collect::<Vec<_>>());
    assert_eq!(
        cube.triangle_normals().unwrap(),
        welded.triangle_normals().unwrap()
    );
}
