//! View controller and host context traits.
//!
//! A [`ViewController`] turns viewport input into a camera pose. The host
//! hands it a [`ViewContext`] on every call; that is the controller's only
//! window onto the camera, the frame resolver and the render scheduler.

use std::any::Any;

use glam::Vec3;
use serde_json::{Map, Value};

use crate::camera::Camera;
use crate::error::{Result, SphereViewError};
use crate::event::{CursorShape, MouseEvent};
use crate::frame::Pose;
use crate::property::PropertyValue;

/// Key holding the class id in saved configs.
pub const CLASS_KEY: &str = "Class";

/// Services the host provides to a view controller.
pub trait ViewContext {
    /// The camera the controller drives.
    fn camera(&mut self) -> &mut dyn Camera;

    /// Asks the host to redraw soon. Does not block and is not awaited.
    fn queue_render(&mut self);

    /// Name of the host's fixed (world) frame.
    fn fixed_frame(&self) -> &str;

    /// Pose of `frame` in the fixed frame, or `None` if it cannot be resolved.
    fn frame_transform(&self, frame: &str) -> Option<Pose>;
}

/// A camera interaction mode loaded by the host.
///
/// All methods run on the host's UI thread and complete before returning.
pub trait ViewController: Any {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns a mutable reference to self as `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The id this controller class is registered under.
    fn class_id(&self) -> &'static str;

    /// One-time setup after the host has created the camera.
    fn initialize(&mut self, context: &mut dyn ViewContext);

    /// Returns the camera to its default pose.
    fn reset(&mut self, context: &mut dyn ViewContext);

    /// Consumes one viewport mouse event.
    fn handle_mouse_event(&mut self, event: &MouseEvent, context: &mut dyn ViewContext);

    /// Per-frame update. `dt` is wall time, `sim_dt` simulation time, both in seconds.
    fn update(&mut self, dt: f32, sim_dt: f32, context: &mut dyn ViewContext);

    /// Points the camera at `point`.
    fn look_at(&mut self, point: Vec3, context: &mut dyn ViewContext);

    /// Takes over shared state from the previously active controller.
    fn mimic(&mut self, source: &dyn ViewController, context: &mut dyn ViewContext);

    /// Status-bar hint for the current interaction.
    fn status(&self) -> &str;

    /// Cursor the host should display.
    fn cursor(&self) -> CursorShape {
        CursorShape::Default
    }

    /// Names of all editable properties, in load order.
    fn property_names(&self) -> &'static [&'static str];

    /// Current value of a property.
    fn property(&self, name: &str) -> Option<PropertyValue>;

    /// Assigns a property.
    fn set_property(
        &mut self,
        name: &str,
        value: &PropertyValue,
        context: &mut dyn ViewContext,
    ) -> Result<()>;

    /// Serializes the class id and every property into a JSON object.
    ///
    /// Values JSON cannot hold, such as infinite floats, are skipped with a
    /// warning.
    fn save(&self) -> Value {
        let mut map = Map::new();
        map.insert(CLASS_KEY.to_string(), Value::from(self.class_id()));
        for name in self.property_names() {
            let Some(value) = self.property(name) else {
                continue;
            };
            match serde_json::to_value(&value) {
                Ok(Value::Null) => log::warn!("skipping property '{name}': not representable"),
                Ok(json) => {
                    map.insert((*name).to_string(), json);
                }
                Err(e) => log::warn!("skipping property '{name}': {e}"),
            }
        }
        Value::Object(map)
    }

    /// Restores properties saved by [`ViewController::save`].
    ///
    /// Properties are applied in [`ViewController::property_names`] order.
    /// Unknown keys are skipped with a warning; a mismatched class id or a
    /// value of the wrong kind is an error.
    fn load(&mut self, config: &Value, context: &mut dyn ViewContext) -> Result<()> {
        let object = config
            .as_object()
            .ok_or_else(|| SphereViewError::InvalidConfig("expected a JSON object".into()))?;

        if let Some(class) = object.get(CLASS_KEY) {
            if class.as_str() != Some(self.class_id()) {
                return Err(SphereViewError::InvalidConfig(format!(
                    "config is for class {class}, not '{}'",
                    self.class_id()
                )));
            }
        }

        for key in object.keys() {
            if key != CLASS_KEY && !self.property_names().contains(&key.as_str()) {
                log::warn!("ignoring unknown property '{key}' in config");
            }
        }

        for name in self.property_names() {
            if let Some(raw) = object.get(*name) {
                let value: PropertyValue = serde_json::from_value(raw.clone())?;
                self.set_property(name, &value, context)?;
            }
        }
        log::debug!("loaded config for '{}'", self.class_id());
        Ok(())
    }
}
