//! Poses and reference-frame tracking.

use std::collections::HashSet;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::property::StringProperty;
use crate::view_controller::ViewContext;

/// Placeholder frame name that resolves to the host's fixed frame.
pub const FIXED_FRAME_STRING: &str = "<Fixed Frame>";

/// A rigid pose: rotation followed by translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Translation.
    pub position: Vec3,
    /// Rotation.
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// The identity pose.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Creates a pose.
    #[must_use]
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Creates a pure translation.
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }
}

/// Follows a named reference frame.
///
/// The tracker owns the `Target Frame` property and the most recently
/// resolved reference pose. A frame that cannot be resolved keeps the last
/// known pose.
#[derive(Debug, Clone)]
pub struct FrameTracker {
    target_frame: StringProperty,
    reference: Pose,
    warned: HashSet<String>,
}

impl Default for FrameTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTracker {
    /// Creates a tracker following the fixed frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target_frame: StringProperty::new(
                "Target Frame",
                FIXED_FRAME_STRING,
                "Frame the camera follows.",
            ),
            reference: Pose::IDENTITY,
            warned: HashSet::new(),
        }
    }

    /// The `Target Frame` property.
    #[must_use]
    pub fn target_frame_property(&self) -> &StringProperty {
        &self.target_frame
    }

    /// The configured frame name, possibly the fixed-frame placeholder.
    #[must_use]
    pub fn target_frame(&self) -> &str {
        self.target_frame.get()
    }

    /// The last resolved reference pose.
    #[must_use]
    pub fn reference(&self) -> Pose {
        self.reference
    }

    /// Resolves the target frame for the first time.
    pub fn initialize(&mut self, context: &dyn ViewContext) {
        let _ = self.update(context);
    }

    /// Re-resolves the target frame.
    ///
    /// Returns `true` when the reference pose changed.
    pub fn update(&mut self, context: &dyn ViewContext) -> bool {
        let frame = self.resolved_frame(context);
        let Some(pose) = context.frame_transform(&frame) else {
            if self.warned.insert(frame.clone()) {
                log::warn!("cannot resolve target frame '{frame}', keeping last pose");
            }
            return false;
        };
        self.warned.remove(&frame);

        if pose == self.reference {
            return false;
        }
        self.reference = pose;
        true
    }

    /// Switches to another frame and resolves it.
    ///
    /// Returns the reference pose from before the switch.
    pub fn set_target_frame(&mut self, frame: &str, context: &dyn ViewContext) -> Pose {
        let old = self.reference;
        log::debug!(
            "target frame '{}' -> '{frame}'",
            self.target_frame.get()
        );
        self.target_frame.set(frame);
        let _ = self.update(context);
        old
    }

    fn resolved_frame(&self, context: &dyn ViewContext) -> String {
        match self.target_frame.get() {
            FIXED_FRAME_STRING => context.fixed_frame().to_string(),
            name => name.to_string(),
        }
    }
}
