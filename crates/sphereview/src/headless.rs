//! A windowless host for view controllers.
//!
//! [`HeadlessContext`] implements [`ViewContext`] with a [`SceneCamera`],
//! a static table of frame poses and a counter in place of the render
//! queue. Useful for integration tests, scripted camera paths and hosts
//! that only need the resulting pose.

use std::collections::HashMap;

use sphereview_core::{Camera, Pose, ViewContext};

use crate::camera::SceneCamera;

/// A host context without a window or renderer.
#[derive(Debug, Clone)]
pub struct HeadlessContext {
    camera: SceneCamera,
    fixed_frame: String,
    frames: HashMap<String, Pose>,
    render_requests: usize,
}

impl Default for HeadlessContext {
    fn default() -> Self {
        Self::new("map")
    }
}

impl HeadlessContext {
    /// Creates a context whose fixed frame is `fixed_frame`.
    pub fn new(fixed_frame: &str) -> Self {
        Self {
            camera: SceneCamera::default(),
            fixed_frame: fixed_frame.to_string(),
            frames: HashMap::new(),
            render_requests: 0,
        }
    }

    /// The camera driven by the controller.
    pub fn scene_camera(&self) -> &SceneCamera {
        &self.camera
    }

    /// Mutable access to the camera, e.g. to resize it.
    pub fn scene_camera_mut(&mut self) -> &mut SceneCamera {
        &mut self.camera
    }

    /// Current camera pose.
    pub fn camera_pose(&self) -> Pose {
        Pose::new(self.camera.position, self.camera.orientation)
    }

    /// Sets the pose of `frame` relative to the fixed frame.
    pub fn set_frame_pose(&mut self, frame: &str, pose: Pose) {
        self.frames.insert(frame.to_string(), pose);
    }

    /// Forgets a frame so it no longer resolves.
    pub fn remove_frame(&mut self, frame: &str) -> Option<Pose> {
        self.frames.remove(frame)
    }

    /// Number of redraws requested since the last [`Self::take_render_requests`].
    pub fn render_requests(&self) -> usize {
        self.render_requests
    }

    /// Returns and clears the redraw counter.
    pub fn take_render_requests(&mut self) -> usize {
        std::mem::take(&mut self.render_requests)
    }
}

impl ViewContext for HeadlessContext {
    fn camera(&mut self) -> &mut dyn Camera {
        &mut self.camera
    }

    fn queue_render(&mut self) {
        self.render_requests += 1;
    }

    fn fixed_frame(&self) -> &str {
        &self.fixed_frame
    }

    fn frame_transform(&self, frame: &str) -> Option<Pose> {
        if frame == self.fixed_frame {
            return Some(Pose::IDENTITY);
        }
        self.frames.get(frame).copied()
    }
}
