use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraspError {
    #[error("contact points coincide; the grasp axis is undefined")]
    CoincidentContacts,

    /// The gripper approach axis is kept in the table plane, which is impossible when the
    /// contacts are stacked vertically.
    #[error("contact axis is vertical; no approach direction lies in the table plane")]
    VerticalApproach,
}
