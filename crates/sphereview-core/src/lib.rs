//! Core abstractions for sphereview.
//!
//! This crate provides the contracts a view controller is written against:
//! - [`ViewController`] and [`ViewContext`], the controller/host boundary
//! - [`Camera`], the write-only camera interface
//! - [`MouseEvent`] and friends for viewport input
//! - typed properties and their generic [`PropertyValue`] form
//! - [`Pose`] and the [`FrameTracker`] that follows a reference frame
//! - the [`Registry`] mapping class ids to controller constructors

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod error;
pub mod event;
pub mod frame;
pub mod property;
pub mod registry;
pub mod view_controller;

pub use camera::{Camera, ProjectionType};
pub use error::{Result, SphereViewError};
pub use event::{CursorShape, MouseButtons, MouseEvent, MouseEventKind};
pub use frame::{FrameTracker, Pose, FIXED_FRAME_STRING};
pub use property::{FloatProperty, PropertyValue, StringProperty, VectorProperty};
pub use registry::{ControllerFactory, Registry};
pub use view_controller::{ViewContext, ViewController, CLASS_KEY};

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec3};
