//! sphereview: a sphere-view camera controller for 3D viewers.
//!
//! The [`SphereViewController`] keeps a camera at a radial offset from a
//! tracked reference frame. Left-button drags turn it (yaw about Z, then
//! pitch about Y, both in the camera's local frame) and the wheel moves it
//! along the frame's X axis.
//!
//! # Quick Start
//!
//! ```
//! use sphereview::*;
//!
//! fn main() -> Result<()> {
//!     let mut context = HeadlessContext::default();
//!     let mut controller = create_view_controller(SPHERE_VIEW_CLASS_ID)?;
//!
//!     controller.initialize(&mut context);
//!     controller.set_property("Distance", &PropertyValue::Float(5.0), &mut context)?;
//!     controller.reset(&mut context);
//!     assert_eq!(context.camera_pose().position, Vec3::new(-5.0, 0.0, 0.0));
//!
//!     controller.handle_mouse_event(&MouseEvent::left_drag(100, 0), &mut context);
//!     controller.update(0.016, 0.016, &mut context);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`sphereview_core`] defines the host contracts: [`ViewController`],
//!   [`ViewContext`], [`Camera`], input events and properties.
//! - This crate provides the controller, a concrete [`SceneCamera`], a
//!   [`HeadlessContext`] host and the process-wide controller registry.

// Builder-style accessors don't need must_use
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod controller;
pub mod headless;
pub mod state;

// Re-export core types
pub use sphereview_core::{
    Camera, ControllerFactory, CursorShape, FrameTracker, MouseButtons, MouseEvent,
    MouseEventKind, Pose, ProjectionType, PropertyValue, Quat, Registry, Result,
    SphereViewError, Vec3, ViewContext, ViewController, CLASS_KEY, FIXED_FRAME_STRING,
};

pub use camera::SceneCamera;
pub use controller::{
    SphereViewController, CLASS_ID as SPHERE_VIEW_CLASS_ID, MOUSE_SENSITIVITY,
    ROBOT_TO_CAMERA_ROTATION,
};
pub use headless::HeadlessContext;
pub use state::{
    create_view_controller, register_view_controller, view_controller_class_ids, with_registry,
    with_registry_mut,
};
