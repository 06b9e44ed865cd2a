//! A concrete camera for hosts without their own.

use glam::{Mat3, Quat, Vec3};
use sphereview_core::{Camera, ProjectionType};

/// A camera posed by a position and an orientation.
///
/// Uses the renderer's native convention: the camera looks down its local
/// -Z axis with +Y up. `look_at` keeps +Y as a fixed yaw axis so the
/// horizon stays level.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCamera {
    /// Position in parent-node coordinates.
    pub position: Vec3,
    /// Orientation in parent-node coordinates.
    pub orientation: Quat,
    /// Projection type.
    pub projection: ProjectionType,
}

impl SceneCamera {
    /// Creates a camera at the origin.
    ///
    /// The camera starts orthographic; view controllers pick the projection
    /// they need when initialized.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            projection: ProjectionType::Orthographic,
        }
    }

    /// Direction the camera looks along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// The camera's up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// The camera's right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera for SceneCamera {
    fn set_projection_type(&mut self, projection: ProjectionType) {
        self.projection = projection;
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation.normalize();
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn look_at(&mut self, point: Vec3) {
        let direction = point - self.position;
        if direction.length_squared() < f32::EPSILON {
            return;
        }
        let back = -direction.normalize();
        let right = Vec3::Y.cross(back);
        if right.length_squared() < 1e-8 {
            // Looking straight up or down; the yaw axis gives no heading.
            self.orientation = Quat::from_rotation_arc(Vec3::NEG_Z, -back);
            return;
        }
        let right = right.normalize();
        let up = back.cross(right);
        self.orientation = Quat::from_mat3(&Mat3::from_cols(right, up, back)).normalize();
    }
}
