//! Conversion of contact points on an object into parallel-jaw gripper poses.

mod error;
mod pose;

pub use error::GraspError;
pub use pose::*;
