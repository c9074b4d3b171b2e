use std::io::Write;

use anyhow::Context;
use grasplab_mesh::TriangleMesh;
use log::info;

use crate::args::InspectArgs;
use crate::format_vector;

pub fn inspect_command<W: Write>(args: InspectArgs, out: &mut W) -> anyhow::Result<()> {
    let mut mesh = args.shape.build();
    info!("loaded {:?} mesh", args.shape);
    if let Some(center) = args.center {
        mesh.center(center.into());
    }
    if let Some(scale) = args.scale {
        mesh.rescale(scale);
    }
    mesh.compute_normals_with(args.normals.into())
        .context("failed to compute vertex normals")?;

    writeln!(out, "Num vertices: {}", mesh.vertex_count())?;
    writeln!(out, "Num triangles: {}", mesh.triangle_count())?;
    writeln!(out, "Num normals: {}", mesh.normals().len())?;
    if let (Some(centroid), Some(bb)) = (mesh.centroid(), mesh.bounding_box()) {
        writeln!(out, "Centroid: {}", format_vector(&centroid))?;
        writeln!(
            out,
            "Bounds: {} .. {}",
            format_vector(&bb.min),
            format_vector(&bb.max)
        )?;
    }

    writeln!(out, "Vertices:")?;
    for (i, (v, n)) in mesh.vertices().iter().zip(mesh.normals()).enumerate() {
        writeln!(
            out,
            "  {:>3}: {} normal {}",
            i,
            format_vector(v),
            format_vector(n)
        )?;
    }

    let normals = mesh
        .triangle_normals()
        .context("failed to compute triangle normals")?;
    writeln!(out, "Triangles:")?;
    for (i, (facet, (center, normal))) in mesh
        .triangles()
        .iter()
        .zip(mesh.triangle_centers().iter().zip(&normals))
        .enumerate()
    {
        writeln!(
            out,
            "  {:>3}: {:?} center {} normal {}",
            i,
            facet.indices(),
            format_vector(center),
            format_vector(normal)
        )?;
    }
    Ok(())
}
