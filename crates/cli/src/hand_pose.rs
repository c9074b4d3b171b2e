use std::io::Write;

use anyhow::Context;
use grasplab_grasp::contacts_to_hand_pose;
use log::info;

use crate::args::HandPoseArgs;
use crate::format_vector;

pub fn hand_pose_command<W: Write>(args: HandPoseArgs, out: &mut W) -> anyhow::Result<()> {
    let mesh = args.shape.build();
    let vertices = mesh.vertices();
    let contact = |i: usize| {
        vertices.get(i).copied().with_context(|| {
            format!(
                "contact vertex {} is out of range, the {:?} mesh has {} vertices",
                i,
                args.shape,
                vertices.len()
            )
        })
    };
    let contact1 = contact(args.contact1)?;
    let contact2 = contact(args.contact2)?;
    info!(
        "grasping {:?} at vertices {} and {}",
        args.shape, args.contact1, args.contact2
    );

    let pose = contacts_to_hand_pose(contact1, contact2).with_context(|| {
        format!(
            "cannot grasp between {} and {}",
            format_vector(&contact1),
            format_vector(&contact2)
        )
    })?;
    let q = pose.quaternion();
    writeln!(out, "Translation {}", format_vector(&pose.translation))?;
    writeln!(
        out,
        "Rotation [w: {:.4}, x: {:.4}, y: {:.4}, z: {:.4}]",
        q.s, q.v.x, q.v.y, q.v.z
    )?;
    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&pose.pose_msg()).context("failed to encode pose")?
    )?;
    Ok(())
}
