//! The host camera contract.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Camera projection type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectionType {
    /// Perspective projection.
    #[default]
    Perspective,
    /// Orthographic projection.
    Orthographic,
}

/// The subset of a host camera a view controller may write.
///
/// Poses are expressed in the coordinates of the node the camera is
/// attached to, which the host keeps at the tracked frame's origin.
/// Controllers only write through this trait; they never read the camera
/// back.
pub trait Camera {
    /// Sets the projection type.
    fn set_projection_type(&mut self, projection: ProjectionType);

    /// Sets the camera orientation.
    fn set_orientation(&mut self, orientation: Quat);

    /// Sets the camera position.
    fn set_position(&mut self, position: Vec3);

    /// Turns the camera so it faces `point`.
    fn look_at(&mut self, point: Vec3);
}
