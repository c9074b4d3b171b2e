use cgmath::{InnerSpace, Matrix, Matrix3, Quaternion};
use grasplab_mesh::{try_normalize, Vector3};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::GraspError;

pub const GRIPPER_FRAME: &str = "gripper";
pub const OBJECT_FRAME: &str = "obj";

/// Contacts closer than this are treated as one point.
pub const MIN_CONTACT_DISTANCE: f32 = 1e-6;

/// Smallest horizontal component of the unit contact axis that still fixes an approach
/// direction in the table plane.
pub const MIN_HORIZONTAL_COMPONENT: f32 = 1e-6;

/// A rotation followed by a translation, mapping coordinates in `from_frame` to
/// coordinates in `to_frame`.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidTransform {
    pub rotation: Matrix3<f32>,
    pub translation: Vector3,
    pub from_frame: String,
    pub to_frame: String,
}

impl RigidTransform {
    pub fn new(
        rotation: Matrix3<f32>,
        translation: Vector3,
        from_frame: impl Into<String>,
        to_frame: impl Into<String>,
    ) -> Self {
        Self {
            rotation,
            translation,
            from_frame: from_frame.into(),
            to_frame: to_frame.into(),
        }
    }

    /// The rotation as a unit quaternion with a non-negative scalar part.
    pub fn quaternion(&self) -> Quaternion<f32> {
        let q = Quaternion::from(self.rotation).normalize();
        if q.s < 0.0 {
            -q
        } else {
            q
        }
    }

    /// Maps a point given in `from_frame` into `to_frame`.
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        self.rotation * p + self.translation
    }

    /// The transform from `to_frame` back to `from_frame`.
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.transpose();
        Self {
            rotation,
            translation: -(rotation * self.translation),
            from_frame: self.to_frame.clone(),
            to_frame: self.from_frame.clone(),
        }
    }

    pub fn pose_msg(&self) -> PoseMsg {
        let q = self.quaternion();
        PoseMsg {
            position: PointMsg {
                x: self.translation.x,
                y: self.translation.y,
                z: self.translation.z,
            },
            orientation: QuaternionMsg {
                x: q.v.x,
                y: q.v.y,
                z: q.v.z,
                w: q.s,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMsg {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuaternionMsg {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Position and orientation laid out the way robot middleware expects a pose message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseMsg {
    pub position: PointMsg,
    pub orientation: QuaternionMsg,
}

/// Computes the pose of a parallel-jaw gripper closing on two contact points.
///
/// The gripper is centred between the contacts with its y axis (the closing direction)
/// running from `contact1` to `contact2`. The z axis is kept in the table plane, and x
/// completes a right-handed frame. The result maps gripper coordinates into object
/// coordinates.
pub fn contacts_to_hand_pose(
    contact1: Vector3,
    contact2: Vector3,
) -> Result<RigidTransform, GraspError> {
    let center = (contact1 + contact2) * 0.5;
    let y_axis = try_normalize(contact2 - contact1, MIN_CONTACT_DISTANCE)
        .ok_or(GraspError::CoincidentContacts)?;
    let z_axis = try_normalize(
        Vector3::new(y_axis.y, -y_axis.x, 0.0),
        MIN_HORIZONTAL_COMPONENT,
    )
    .ok_or(GraspError::VerticalApproach)?;
    let x_axis = y_axis.cross(z_axis);

    debug!(
        "hand pose: center {:?}, closing axis {:?}, approach {:?}",
        center, y_axis, z_axis
    );
    Ok(RigidTransform::new(
        Matrix3::from_cols(x_axis, y_axis, z_axis),
        center,
        GRIPPER_FRAME,
        OBJECT_FRAME,
    ))
}
