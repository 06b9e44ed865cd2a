//! The sphere-view camera controller.
//!
//! The camera sits at a radial offset from the tracked frame and is turned
//! in place by left-button drags. The wheel slides it along the frame's X
//! axis. Position and orientation offsets from the property editor are
//! applied on top every frame.

use std::any::Any;
use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat, Vec3};
use sphereview_core::{
    CursorShape, FloatProperty, FrameTracker, MouseEvent, MouseEventKind, Pose, ProjectionType,
    PropertyValue, Result, SphereViewError, ViewContext, ViewController, VectorProperty,
};

/// Class id the controller is registered under.
pub const CLASS_ID: &str = "sphereview/SphereView";

/// Drag rotation in radians per pixel.
pub const MOUSE_SENSITIVITY: f32 = 0.005;

/// Maps the camera's native axes (forward -Z, up +Y) onto the robot
/// convention (forward +X, up +Z).
///
/// Equal to `Ry(-π/2) * Rz(-π/2)`.
pub const ROBOT_TO_CAMERA_ROTATION: Quat = Quat::from_xyzw(0.5, -0.5, -0.5, 0.5);

/// Lowest allowed `Pitch`.
pub const PITCH_LIMIT_LOW: f32 = -FRAC_PI_2 + 0.001;

/// Highest allowed `Pitch`.
pub const PITCH_LIMIT_HIGH: f32 = FRAC_PI_2 - 0.001;

/// Minimum `Distance`.
pub const MIN_DISTANCE: f32 = 0.001;

const STATUS: &str = "<b>Left-Click:</b> Move yaw/pitch.  <b>Wheel:</b> Move distance.";

/// Property names, in the order configs are applied.
pub mod props {
    pub const TARGET_FRAME: &str = "Target Frame";
    pub const DISTANCE: &str = "Distance";
    pub const POS_OFFSET: &str = "Pos Offset";
    pub const ORI_OFFSET: &str = "Ori Offset[deg]";
    pub const YAW: &str = "Yaw";
    pub const PITCH: &str = "Pitch";
    pub const SCROLL_FLOOR: &str = "Scroll Floor";

    pub const ALL: &[&str] = &[
        TARGET_FRAME,
        DISTANCE,
        POS_OFFSET,
        ORI_OFFSET,
        YAW,
        PITCH,
        SCROLL_FLOOR,
    ];
}

/// Sphere-view controller.
///
/// Holds two independent orientation models: `orientation`, accumulated
/// from mouse drags and used for the camera, and the `Yaw`/`Pitch`
/// properties, used only to steer programmatic moves ([`Self::move_by`]).
pub struct SphereViewController {
    frame: FrameTracker,
    distance: FloatProperty,
    pos_offset: VectorProperty,
    ori_offset: VectorProperty,
    yaw: FloatProperty,
    pitch: FloatProperty,
    scroll_floor: FloatProperty,

    radial_offset: Vec3,
    orientation: Quat,

    status: &'static str,
    cursor: CursorShape,
}

impl Default for SphereViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl SphereViewController {
    /// Creates a controller with default properties.
    pub fn new() -> Self {
        let distance = FloatProperty::new(
            props::DISTANCE,
            0.0,
            "The distance to the target frame.",
        )
        .with_min(MIN_DISTANCE);
        let radial_offset = Vec3::new(-distance.get(), 0.0, 0.0);

        Self {
            frame: FrameTracker::new(),
            distance,
            pos_offset: VectorProperty::new(
                props::POS_OFFSET,
                Vec3::ZERO,
                "Position offset from the target frame.",
            ),
            ori_offset: VectorProperty::new(
                props::ORI_OFFSET,
                Vec3::ZERO,
                "Orientation offset from the target frame, in degrees.",
            ),
            yaw: FloatProperty::new(
                props::YAW,
                0.0,
                "Heading used for programmatic moves, in radians.",
            ),
            pitch: FloatProperty::new(
                props::PITCH,
                0.0,
                "Pitch used for programmatic moves, in radians.",
            )
            .with_min(PITCH_LIMIT_LOW)
            .with_max(PITCH_LIMIT_HIGH),
            scroll_floor: FloatProperty::new(
                props::SCROLL_FLOOR,
                0.0,
                "Closest the wheel may bring the camera to the frame. 0 disables the limit.",
            )
            .with_min(0.0),
            radial_offset,
            orientation: Quat::IDENTITY,
            status: "",
            cursor: CursorShape::Default,
        }
    }

    /// Constructor for the registry.
    pub fn boxed() -> Box<dyn ViewController> {
        Box::new(Self::new())
    }

    /// Camera position relative to the tracked frame, before `Pos Offset`.
    pub fn radial_offset(&self) -> Vec3 {
        self.radial_offset
    }

    /// Orientation accumulated from drags, before `Ori Offset[deg]`.
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// `Distance` property value.
    pub fn distance(&self) -> f32 {
        self.distance.get()
    }

    /// Sets `Distance`; takes effect on the next [`ViewController::reset`].
    pub fn set_distance(&mut self, distance: f32) {
        self.distance.set(distance);
    }

    /// `Pos Offset` property value.
    pub fn pos_offset(&self) -> Vec3 {
        self.pos_offset.get()
    }

    /// Sets `Pos Offset`.
    pub fn set_pos_offset(&mut self, offset: Vec3) {
        self.pos_offset.set(offset);
    }

    /// `Ori Offset[deg]` property value.
    pub fn ori_offset(&self) -> Vec3 {
        self.ori_offset.get()
    }

    /// Sets `Ori Offset[deg]`: roll about X, pitch about Y, yaw about Z.
    pub fn set_ori_offset(&mut self, degrees: Vec3) {
        self.ori_offset.set(degrees);
    }

    /// `Yaw` property value.
    pub fn yaw(&self) -> f32 {
        self.yaw.get()
    }

    /// Sets `Yaw`.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw.set(yaw);
    }

    /// `Pitch` property value.
    pub fn pitch(&self) -> f32 {
        self.pitch.get()
    }

    /// Sets `Pitch`, clamped just short of straight up or down.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch.set(pitch);
    }

    /// `Scroll Floor` property value.
    pub fn scroll_floor(&self) -> f32 {
        self.scroll_floor.get()
    }

    /// Sets `Scroll Floor`. Zero leaves scrolling unbounded.
    pub fn set_scroll_floor(&mut self, floor: f32) {
        self.scroll_floor.set(floor);
    }

    /// The tracked frame's name.
    pub fn target_frame(&self) -> &str {
        self.frame.target_frame()
    }

    /// Last resolved pose of the tracked frame.
    pub fn reference_pose(&self) -> Pose {
        self.frame.reference()
    }

    /// Camera pose relative to the tracked frame.
    ///
    /// Depends only on the controller state and properties.
    pub fn camera_pose(&self) -> Pose {
        Pose {
            position: self.radial_offset + self.pos_offset.get(),
            orientation: (self.orientation * orientation_offset(self.ori_offset.get()))
                .normalize(),
        }
    }

    /// Camera pose in the fixed frame.
    ///
    /// The tracked frame only carries the camera's position; its
    /// orientation is not applied.
    pub fn camera_world_pose(&self) -> Pose {
        let local = self.camera_pose();
        Pose {
            position: self.frame.reference().position + local.position,
            orientation: local.orientation,
        }
    }

    /// Writes the current pose into the host camera.
    pub fn update_camera(&self, context: &mut dyn ViewContext) {
        let pose = self.camera_pose();
        let camera = context.camera();
        camera.look_at(Vec3::ZERO);
        camera.set_orientation(pose.orientation);
        camera.set_position(pose.position);
    }

    /// Orientation used for programmatic moves: `Yaw` then `Pitch`, mapped
    /// into camera axes.
    pub fn pan_orientation(&self) -> Quat {
        let yaw = Quat::from_axis_angle(Vec3::Z, self.yaw.get());
        let pitch = Quat::from_axis_angle(Vec3::Y, self.pitch.get());
        yaw * pitch * ROBOT_TO_CAMERA_ROTATION
    }

    /// Moves the camera by `(x, y, z)` in camera axes (x right, y up, z back).
    pub fn move_by(&mut self, x: f32, y: f32, z: f32) {
        let translate = Vec3::new(x, y, z);
        self.pos_offset.add(self.pan_orientation() * translate);
    }

    /// Keeps the camera in place when the tracked frame is re-anchored.
    ///
    /// Only the position delta is compensated; the orientation change is
    /// ignored.
    pub fn on_target_frame_changed(&mut self, old_position: Vec3, _old_orientation: Quat) {
        let delta = old_position - self.frame.reference().position;
        self.pos_offset.add(delta);
    }

    /// Switches the tracked frame.
    pub fn set_target_frame(&mut self, frame: &str, context: &mut dyn ViewContext) {
        let old = self.frame.set_target_frame(frame, context);
        self.on_target_frame_changed(old.position, old.orientation);
        context.queue_render();
    }

    #[allow(clippy::cast_precision_loss)]
    fn rotate(&mut self, dx: i32, dy: i32) {
        let yaw = Quat::from_axis_angle(Vec3::Z, -(dx as f32) * MOUSE_SENSITIVITY);
        let pitch = Quat::from_axis_angle(Vec3::Y, dy as f32 * MOUSE_SENSITIVITY);
        self.orientation = (self.orientation * yaw * pitch).normalize();
    }

    #[allow(clippy::cast_precision_loss)]
    fn scroll(&mut self, wheel_delta: i32) {
        self.radial_offset.x -= wheel_delta as f32;
        let floor = self.scroll_floor.get();
        if floor > 0.0 {
            self.radial_offset.x = self.radial_offset.x.min(-floor);
        }
    }
}

/// Converts a degree offset (roll X, pitch Y, yaw Z) into a rotation
/// applied yaw first.
fn orientation_offset(degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::ZYX,
        degrees.z.to_radians(),
        degrees.y.to_radians(),
        degrees.x.to_radians(),
    )
}

impl ViewController for SphereViewController {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn class_id(&self) -> &'static str {
        CLASS_ID
    }

    fn initialize(&mut self, context: &mut dyn ViewContext) {
        self.frame.initialize(context);
        context
            .camera()
            .set_projection_type(ProjectionType::Perspective);
    }

    fn reset(&mut self, context: &mut dyn ViewContext) {
        self.radial_offset = Vec3::new(-self.distance.get(), 0.0, 0.0);
        self.orientation = Quat::IDENTITY;
        log::debug!("sphere view reset to distance {}", self.distance.get());
        self.update_camera(context);
    }

    fn handle_mouse_event(&mut self, event: &MouseEvent, context: &mut dyn ViewContext) {
        self.status = STATUS;

        let mut moved = false;

        if event.kind == MouseEventKind::Move {
            if event.left() {
                self.cursor = CursorShape::Rotate3D;
                let (dx, dy) = event.delta();
                self.rotate(dx, dy);
            } else {
                self.cursor = CursorShape::Default;
            }
            moved = true;
        }

        if event.wheel_delta != 0 {
            self.scroll(event.wheel_delta);
            moved = true;
        }

        if moved {
            log::trace!(
                "sphere view state: offset {:?}, orientation {:?}",
                self.radial_offset,
                self.orientation
            );
            context.queue_render();
        }
    }

    fn update(&mut self, _dt: f32, _sim_dt: f32, context: &mut dyn ViewContext) {
        if self.frame.update(context) {
            context.queue_render();
        }
        self.update_camera(context);
    }

    fn look_at(&mut self, point: Vec3, context: &mut dyn ViewContext) {
        context.camera().look_at(point);
    }

    fn mimic(&mut self, source: &dyn ViewController, context: &mut dyn ViewContext) {
        if let Some(PropertyValue::Text(frame)) = source.property(props::TARGET_FRAME) {
            self.set_target_frame(&frame, context);
        }
    }

    fn status(&self) -> &str {
        self.status
    }

    fn cursor(&self) -> CursorShape {
        self.cursor
    }

    fn property_names(&self) -> &'static [&'static str] {
        props::ALL
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        let value = match name {
            props::TARGET_FRAME => self.frame.target_frame_property().value(),
            props::DISTANCE => self.distance.value(),
            props::POS_OFFSET => self.pos_offset.value(),
            props::ORI_OFFSET => self.ori_offset.value(),
            props::YAW => self.yaw.value(),
            props::PITCH => self.pitch.value(),
            props::SCROLL_FLOOR => self.scroll_floor.value(),
            _ => return None,
        };
        Some(value)
    }

    fn set_property(
        &mut self,
        name: &str,
        value: &PropertyValue,
        context: &mut dyn ViewContext,
    ) -> Result<()> {
        match name {
            props::TARGET_FRAME => match value {
                PropertyValue::Text(frame) => {
                    self.set_target_frame(frame, context);
                    Ok(())
                }
                other => Err(SphereViewError::PropertyTypeMismatch {
                    name: name.to_string(),
                    expected: "text",
                    actual: other.kind_name(),
                }),
            },
            props::DISTANCE => self.distance.set_value(value),
            props::POS_OFFSET => self.pos_offset.set_value(value),
            props::ORI_OFFSET => self.ori_offset.set_value(value),
            props::YAW => self.yaw.set_value(value),
            props::PITCH => self.pitch.set_value(value),
            props::SCROLL_FLOOR => self.scroll_floor.set_value(value),
            _ => Err(SphereViewError::PropertyNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::headless::HeadlessContext;

    fn controller_at(distance: f32) -> (SphereViewController, HeadlessContext) {
        let mut context = HeadlessContext::default();
        let mut controller = SphereViewController::new();
        controller.initialize(&mut context);
        controller.set_distance(distance);
        controller.reset(&mut context);
        (controller, context)
    }

    #[test]
    fn test_new_state() {
        let controller = SphereViewController::new();
        assert_eq!(controller.distance(), 0.0);
        assert_eq!(controller.radial_offset(), Vec3::ZERO);
        assert_eq!(controller.orientation(), Quat::IDENTITY);
        assert_eq!(controller.target_frame(), sphereview_core::FIXED_FRAME_STRING);
        assert_eq!(controller.status(), "");
        assert_eq!(controller.cursor(), CursorShape::Default);
    }

    #[test]
    fn test_initialize_sets_perspective() {
        let mut context = HeadlessContext::default();
        assert_eq!(
            context.scene_camera().projection,
            ProjectionType::Orthographic
        );
        let mut controller = SphereViewController::new();
        controller.initialize(&mut context);
        assert_eq!(
            context.scene_camera().projection,
            ProjectionType::Perspective
        );
    }

    #[test]
    fn test_robot_to_camera_rotation() {
        let composed = Quat::from_axis_angle(Vec3::Y, -FRAC_PI_2)
            * Quat::from_axis_angle(Vec3::Z, -FRAC_PI_2);
        assert!(ROBOT_TO_CAMERA_ROTATION.abs_diff_eq(composed, 1e-6));
        assert!(ROBOT_TO_CAMERA_ROTATION.is_normalized());

        // Camera forward is robot forward, camera up is robot up.
        assert!((ROBOT_TO_CAMERA_ROTATION * Vec3::NEG_Z).abs_diff_eq(Vec3::X, 1e-6));
        assert!((ROBOT_TO_CAMERA_ROTATION * Vec3::Y).abs_diff_eq(Vec3::Z, 1e-6));
        assert!((ROBOT_TO_CAMERA_ROTATION * Vec3::X).abs_diff_eq(Vec3::NEG_Y, 1e-6));
    }

    #[test]
    fn test_reset_pose() {
        let (controller, context) = controller_at(5.0);
        assert_eq!(controller.radial_offset(), Vec3::new(-5.0, 0.0, 0.0));
        assert_eq!(controller.orientation(), Quat::IDENTITY);
        assert_eq!(context.camera_pose().position, Vec3::new(-5.0, 0.0, 0.0));
        assert!(context
            .camera_pose()
            .orientation
            .abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn test_drag_rotates_yaw_then_pitch() {
        let (mut controller, mut context) = controller_at(5.0);
        controller.handle_mouse_event(&MouseEvent::left_drag(10, 20), &mut context);

        let expected = Quat::from_axis_angle(Vec3::Z, -0.05) * Quat::from_axis_angle(Vec3::Y, 0.1);
        assert!(controller.orientation().abs_diff_eq(expected, 1e-6));

        // Pitch applied in the world frame would give a different result.
        let world_order =
            Quat::from_axis_angle(Vec3::Y, 0.1) * Quat::from_axis_angle(Vec3::Z, -0.05);
        assert!(!controller.orientation().abs_diff_eq(world_order, 1e-4));
    }

    #[test]
    fn test_drag_sets_status_and_cursor() {
        let (mut controller, mut context) = controller_at(1.0);
        context.take_render_requests();

        controller.handle_mouse_event(&MouseEvent::left_drag(3, 0), &mut context);
        assert_eq!(controller.cursor(), CursorShape::Rotate3D);
        assert!(controller.status().contains("Left-Click"));
        assert_eq!(context.take_render_requests(), 1);

        let hover = MouseEvent::moved(3, 0, 5, 1, sphereview_core::MouseButtons::default());
        let before = controller.orientation();
        controller.handle_mouse_event(&hover, &mut context);
        assert_eq!(controller.cursor(), CursorShape::Default);
        assert_eq!(controller.orientation(), before);
        assert_eq!(context.take_render_requests(), 1);
    }

    #[test]
    fn test_press_without_wheel_requests_nothing() {
        let (mut controller, mut context) = controller_at(1.0);
        context.take_render_requests();
        let press = MouseEvent {
            kind: MouseEventKind::Press,
            ..Default::default()
        };
        controller.handle_mouse_event(&press, &mut context);
        assert_eq!(context.render_requests(), 0);
        assert!(controller.status().contains("Wheel"));
    }

    #[test]
    fn test_drag_does_not_touch_camera_until_update() {
        let (mut controller, mut context) = controller_at(5.0);
        let before = context.camera_pose();
        controller.handle_mouse_event(&MouseEvent::left_drag(100, 0), &mut context);
        assert_eq!(context.camera_pose(), before);

        controller.update(0.016, 0.016, &mut context);
        assert!(context
            .camera_pose()
            .orientation
            .abs_diff_eq(Quat::from_rotation_z(-0.5), 1e-6));
    }

    #[test]
    fn test_drag_and_reverse_baseline() {
        let (mut controller, mut context) = controller_at(5.0);
        controller.handle_mouse_event(&MouseEvent::left_drag(40, 30), &mut context);
        controller.handle_mouse_event(&MouseEvent::left_drag(-40, -30), &mut context);

        let orientation = controller.orientation();
        assert!(!orientation.abs_diff_eq(Quat::IDENTITY, 1e-4));
        let baseline = Quat::from_xyzw(0.014_844_387, -0.001_489_407, -0.001_115_421, 0.999_888_1);
        assert!(orientation.abs_diff_eq(baseline, 1e-5));
    }

    #[test]
    fn test_drag_with_extreme_coordinates() {
        let (mut controller, mut context) = controller_at(1.0);
        let event = MouseEvent::moved(
            i32::MIN,
            0,
            i32::MAX,
            0,
            sphereview_core::MouseButtons {
                left: true,
                ..Default::default()
            },
        );
        controller.handle_mouse_event(&event, &mut context);
        assert!(controller.orientation().is_normalized());
    }

    #[test]
    fn test_scroll_moves_along_x() {
        let (mut controller, mut context) = controller_at(5.0);
        controller.handle_mouse_event(&MouseEvent::wheel(2), &mut context);
        assert_eq!(controller.radial_offset(), Vec3::new(-7.0, 0.0, 0.0));

        controller.handle_mouse_event(&MouseEvent::wheel(-10), &mut context);
        assert_eq!(controller.radial_offset(), Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_scroll_floor() {
        let (mut controller, mut context) = controller_at(5.0);
        controller.set_scroll_floor(1.0);
        controller.handle_mouse_event(&MouseEvent::wheel(-3), &mut context);
        assert_eq!(controller.radial_offset().x, -2.0);
        controller.handle_mouse_event(&MouseEvent::wheel(-3), &mut context);
        assert_eq!(controller.radial_offset().x, -1.0);
        controller.handle_mouse_event(&MouseEvent::wheel(4), &mut context);
        assert_eq!(controller.radial_offset().x, -5.0);
    }

    #[test]
    fn test_offsets_applied_to_camera() {
        let (mut controller, mut context) = controller_at(2.0);
        controller.set_pos_offset(Vec3::new(0.0, 1.0, 0.5));
        controller.set_ori_offset(Vec3::new(0.0, 0.0, 90.0));
        controller.update_camera(&mut context);

        let pose = context.camera_pose();
        assert!(pose.position.abs_diff_eq(Vec3::new(-2.0, 1.0, 0.5), 1e-6));
        assert!(pose
            .orientation
            .abs_diff_eq(Quat::from_rotation_z(FRAC_PI_2), 1e-6));
    }

    #[test]
    fn test_orientation_offset_composes_after_drag() {
        let (mut controller, mut context) = controller_at(2.0);
        controller.handle_mouse_event(&MouseEvent::left_drag(0, 100), &mut context);
        controller.set_ori_offset(Vec3::new(30.0, 0.0, 0.0));
        controller.update_camera(&mut context);

        let expected = Quat::from_rotation_y(0.5) * Quat::from_rotation_x(30f32.to_radians());
        assert!(context.camera_pose().orientation.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_update_camera_is_repeatable() {
        let (mut controller, mut context) = controller_at(3.0);
        controller.handle_mouse_event(&MouseEvent::left_drag(17, -9), &mut context);
        controller.set_ori_offset(Vec3::new(5.0, 10.0, 15.0));

        controller.update_camera(&mut context);
        let first = context.camera_pose();
        controller.update_camera(&mut context);
        assert_eq!(context.camera_pose(), first);
    }

    #[test]
    fn test_pan_orientation_defaults_to_robot_axes() {
        let controller = SphereViewController::new();
        assert!(controller
            .pan_orientation()
            .abs_diff_eq(ROBOT_TO_CAMERA_ROTATION, 1e-6));
    }

    #[test]
    fn test_move_by() {
        let mut controller = SphereViewController::new();
        // Camera back (+Z) is robot backward (-X).
        controller.move_by(0.0, 0.0, 1.0);
        assert!(controller.pos_offset().abs_diff_eq(Vec3::NEG_X, 1e-6));

        controller.set_yaw(FRAC_PI_2);
        controller.move_by(0.0, 0.0, -1.0);
        // Facing +Y after the yaw, so forward adds +Y.
        assert!(controller
            .pos_offset()
            .abs_diff_eq(Vec3::new(-1.0, 1.0, 0.0), 1e-6));

        controller.move_by(0.0, 2.0, 0.0);
        assert!(controller
            .pos_offset()
            .abs_diff_eq(Vec3::new(-1.0, 1.0, 2.0), 1e-6));
    }

    #[test]
    fn test_pitch_is_limited() {
        let mut controller = SphereViewController::new();
        controller.set_pitch(10.0);
        assert_eq!(controller.pitch(), PITCH_LIMIT_HIGH);
        controller.set_pitch(-10.0);
        assert_eq!(controller.pitch(), PITCH_LIMIT_LOW);
    }

    #[test]
    fn test_distance_minimum() {
        let mut controller = SphereViewController::new();
        controller.set_distance(0.0);
        assert_eq!(controller.distance(), MIN_DISTANCE);
    }

    #[test]
    fn test_target_frame_change_compensates_offset() {
        let mut context = HeadlessContext::default();
        context.set_frame_pose("base", Pose::from_position(Vec3::new(3.0, -1.0, 0.0)));

        let mut controller = SphereViewController::new();
        controller.initialize(&mut context);
        controller.set_target_frame("base", &mut context);

        assert_eq!(controller.target_frame(), "base");
        assert_eq!(controller.pos_offset(), Vec3::new(-3.0, 1.0, 0.0));

        // Re-anchored, the camera stays where it was in the fixed frame.
        let world = controller.camera_world_pose();
        assert!(world.position.abs_diff_eq(Vec3::ZERO, 1e-6));
    }

    #[test]
    fn test_target_frame_change_between_rotated_frames() {
        let mut context = HeadlessContext::default();
        let turn = Quat::from_rotation_z(FRAC_PI_2);
        context.set_frame_pose("a", Pose::new(Vec3::ZERO, turn));
        context.set_frame_pose("b", Pose::new(Vec3::X, turn));

        let mut controller = SphereViewController::new();
        controller.initialize(&mut context);
        controller.set_target_frame("a", &mut context);
        controller.set_distance(5.0);
        controller.reset(&mut context);
        let before = controller.camera_world_pose();
        assert!(before.position.abs_diff_eq(Vec3::new(-5.0, 0.0, 0.0), 1e-6));

        controller.set_target_frame("b", &mut context);
        let after = controller.camera_world_pose();
        assert!(after.position.abs_diff_eq(before.position, 1e-5));
        assert!(after.orientation.abs_diff_eq(before.orientation, 1e-6));
    }

    #[test]
    fn test_target_frame_unchanged_position_keeps_offset() {
        let (mut controller, _context) = controller_at(1.0);
        controller.set_pos_offset(Vec3::new(0.5, 0.5, 0.5));
        let current = controller.reference_pose();
        controller.on_target_frame_changed(current.position, Quat::from_rotation_z(1.0));
        assert_eq!(controller.pos_offset(), Vec3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_update_follows_moving_frame() {
        let mut context = HeadlessContext::default();
        context.set_frame_pose("base", Pose::IDENTITY);
        let mut controller = SphereViewController::new();
        controller.initialize(&mut context);
        controller.set_target_frame("base", &mut context);
        controller.set_distance(2.0);
        controller.reset(&mut context);
        context.take_render_requests();

        context.set_frame_pose("base", Pose::from_position(Vec3::new(0.0, 4.0, 0.0)));
        controller.update(0.016, 0.016, &mut context);
        assert_eq!(context.take_render_requests(), 1);
        assert_eq!(controller.pos_offset(), Vec3::ZERO);
        assert!(controller
            .camera_world_pose()
            .position
            .abs_diff_eq(Vec3::new(-2.0, 4.0, 0.0), 1e-6));

        controller.update(0.016, 0.016, &mut context);
        assert_eq!(context.take_render_requests(), 0);
    }

    #[test]
    fn test_properties_roundtrip_by_name() {
        let mut context = HeadlessContext::default();
        let mut controller = SphereViewController::new();

        controller
            .set_property(props::DISTANCE, &PropertyValue::Float(4.0), &mut context)
            .unwrap();
        controller
            .set_property(
                props::ORI_OFFSET,
                &PropertyValue::Vector(Vec3::new(1.0, 2.0, 3.0)),
                &mut context,
            )
            .unwrap();
        assert_eq!(
            controller.property(props::DISTANCE),
            Some(PropertyValue::Float(4.0))
        );
        assert_eq!(
            controller.property(props::ORI_OFFSET),
            Some(PropertyValue::Vector(Vec3::new(1.0, 2.0, 3.0)))
        );
        assert_eq!(controller.property("Nope"), None);

        let err = controller
            .set_property("Nope", &PropertyValue::Float(1.0), &mut context)
            .unwrap_err();
        assert!(matches!(err, SphereViewError::PropertyNotFound(_)));

        let err = controller
            .set_property(props::TARGET_FRAME, &PropertyValue::Float(1.0), &mut context)
            .unwrap_err();
        assert!(matches!(err, SphereViewError::PropertyTypeMismatch { .. }));
    }

    #[test]
    fn test_save_skips_values_json_cannot_hold() {
        let mut context = HeadlessContext::default();
        let mut controller = SphereViewController::new();
        controller.set_distance(f32::INFINITY);

        let saved = controller.save();
        assert!(saved.get(props::DISTANCE).is_none());
        assert_eq!(saved[props::YAW], 0.0);

        let mut restored = SphereViewController::new();
        restored.load(&saved, &mut context).unwrap();
        assert_eq!(restored.distance(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_scroll_is_linear(
            distance in 0.001f32..100.0,
            deltas in prop::collection::vec(-240i32..240, 0..20),
        ) {
            let (mut controller, mut context) = controller_at(distance);
            let start = controller.radial_offset().x;
            for delta in &deltas {
                controller.handle_mouse_event(&MouseEvent::wheel(*delta), &mut context);
            }
            let total: i32 = deltas.iter().sum();
            #[allow(clippy::cast_precision_loss)]
            let expected = start - total as f32;
            prop_assert!((controller.radial_offset().x - expected).abs() < 1e-2);
            prop_assert_eq!(controller.radial_offset().y, 0.0);
            prop_assert_eq!(controller.radial_offset().z, 0.0);
        }

        #[test]
        fn prop_reset_discards_state(
            distance in 0.001f32..100.0,
            drags in prop::collection::vec((-200i32..200, -200i32..200), 0..20),
            wheel in -500i32..500,
        ) {
            let (mut controller, mut context) = controller_at(distance);
            for (dx, dy) in &drags {
                controller.handle_mouse_event(&MouseEvent::left_drag(*dx, *dy), &mut context);
            }
            controller.handle_mouse_event(&MouseEvent::wheel(wheel), &mut context);
            controller.reset(&mut context);

            prop_assert_eq!(controller.orientation(), Quat::IDENTITY);
            prop_assert_eq!(controller.radial_offset(), Vec3::new(-distance, 0.0, 0.0));
            prop_assert_eq!(context.camera_pose().position, Vec3::new(-distance, 0.0, 0.0));
        }

        #[test]
        fn prop_update_is_pure(
            drags in prop::collection::vec((-200i32..200, -200i32..200), 0..10),
            pos in prop::array::uniform3(-10.0f32..10.0),
            ori in prop::array::uniform3(-180.0f32..180.0),
        ) {
            let (mut controller, mut context) = controller_at(2.0);
            for (dx, dy) in &drags {
                controller.handle_mouse_event(&MouseEvent::left_drag(*dx, *dy), &mut context);
            }
            controller.set_pos_offset(Vec3::from_array(pos));
            controller.set_ori_offset(Vec3::from_array(ori));

            controller.update(0.016, 0.016, &mut context);
            let first = context.camera_pose();
            controller.update(0.016, 0.016, &mut context);
            prop_assert_eq!(context.camera_pose(), first);
            prop_assert_eq!(first.position, controller.camera_pose().position);
        }

        #[test]
        fn prop_orientation_stays_normalized(
            drags in prop::collection::vec((-500i32..500, -500i32..500), 1..200),
        ) {
            let (mut controller, mut context) = controller_at(1.0);
            for (dx, dy) in &drags {
                controller.handle_mouse_event(&MouseEvent::left_drag(*dx, *dy), &mut context);
            }
            prop_assert!((controller.orientation().length() - 1.0).abs() < 1e-5);
        }
    }
}
