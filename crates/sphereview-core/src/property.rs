//! Host-editable controller properties.
//!
//! Controllers keep their configuration in typed property fields
//! ([`FloatProperty`], [`VectorProperty`], [`StringProperty`]). The host's
//! generic editor and serializer talk to them through [`PropertyValue`],
//! looked up by the property's display name.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SphereViewError};

/// A dynamically typed property value.
///
/// Serializes untagged: a number, an `[x, y, z]` array or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A scalar.
    Float(f32),
    /// A 3-vector.
    Vector(Vec3),
    /// A string.
    Text(String),
}

impl PropertyValue {
    /// Name of the value kind, for error messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            PropertyValue::Float(_) => "float",
            PropertyValue::Vector(_) => "vector",
            PropertyValue::Text(_) => "text",
        }
    }

    fn mismatch(&self, name: &str, expected: &'static str) -> SphereViewError {
        SphereViewError::PropertyTypeMismatch {
            name: name.to_string(),
            expected,
            actual: self.kind_name(),
        }
    }
}

/// A scalar property with optional bounds.
///
/// Bounds are enforced on [`FloatProperty::set`]; the default value given
/// at construction is stored as-is.
#[derive(Debug, Clone)]
pub struct FloatProperty {
    name: &'static str,
    description: &'static str,
    value: f32,
    min: f32,
    max: f32,
}

impl FloatProperty {
    /// Creates an unbounded property.
    #[must_use]
    pub fn new(name: &'static str, default: f32, description: &'static str) -> Self {
        Self {
            name,
            description,
            value: default,
            min: f32::NEG_INFINITY,
            max: f32::INFINITY,
        }
    }

    /// Sets the lower bound.
    #[must_use]
    pub fn with_min(mut self, min: f32) -> Self {
        self.min = min;
        self
    }

    /// Sets the upper bound.
    #[must_use]
    pub fn with_max(mut self, max: f32) -> Self {
        self.max = max;
        self
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Help text shown by the host editor.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Sets the value, clamped into `[min, max]`. NaN is ignored.
    pub fn set(&mut self, value: f32) {
        if value.is_nan() {
            log::warn!("ignoring NaN for property '{}'", self.name);
            return;
        }
        self.value = value.clamp(self.min, self.max);
    }

    /// Adds `delta` to the value, respecting the bounds.
    pub fn add(&mut self, delta: f32) {
        self.set(self.value + delta);
    }

    /// Returns the value wrapped for the generic editor.
    #[must_use]
    pub fn value(&self) -> PropertyValue {
        PropertyValue::Float(self.value)
    }

    /// Assigns from a generic value.
    pub fn set_value(&mut self, value: &PropertyValue) -> Result<()> {
        match value {
            PropertyValue::Float(v) => {
                self.set(*v);
                Ok(())
            }
            other => Err(other.mismatch(self.name, "float")),
        }
    }
}

/// A 3-vector property.
#[derive(Debug, Clone)]
pub struct VectorProperty {
    name: &'static str,
    description: &'static str,
    value: Vec3,
}

impl VectorProperty {
    /// Creates a vector property.
    #[must_use]
    pub fn new(name: &'static str, default: Vec3, description: &'static str) -> Self {
        Self {
            name,
            description,
            value: default,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Help text shown by the host editor.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> Vec3 {
        self.value
    }

    /// Sets the value. Vectors with non-finite components are ignored.
    pub fn set(&mut self, value: Vec3) {
        if !value.is_finite() {
            log::warn!("ignoring non-finite vector for property '{}'", self.name);
            return;
        }
        self.value = value;
    }

    /// Adds `delta` component-wise.
    pub fn add(&mut self, delta: Vec3) {
        self.set(self.value + delta);
    }

    /// Returns the value wrapped for the generic editor.
    #[must_use]
    pub fn value(&self) -> PropertyValue {
        PropertyValue::Vector(self.value)
    }

    /// Assigns from a generic value.
    pub fn set_value(&mut self, value: &PropertyValue) -> Result<()> {
        match value {
            PropertyValue::Vector(v) => {
                self.set(*v);
                Ok(())
            }
            other => Err(other.mismatch(self.name, "vector")),
        }
    }
}

/// A string property.
#[derive(Debug, Clone)]
pub struct StringProperty {
    name: &'static str,
    description: &'static str,
    value: String,
}

impl StringProperty {
    /// Creates a string property.
    #[must_use]
    pub fn new(name: &'static str, default: &str, description: &'static str) -> Self {
        Self {
            name,
            description,
            value: default.to_string(),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Help text shown by the host editor.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> &str {
        &self.value
    }

    /// Sets the value.
    pub fn set(&mut self, value: &str) {
        value.clone_into(&mut self.value);
    }

    /// Returns the value wrapped for the generic editor.
    #[must_use]
    pub fn value(&self) -> PropertyValue {
        PropertyValue::Text(self.value.clone())
    }

    /// Assigns from a generic value.
    pub fn set_value(&mut self, value: &PropertyValue) -> Result<()> {
        match value {
            PropertyValue::Text(v) => {
                self.set(v);
                Ok(())
            }
            other => Err(other.mismatch(self.name, "text")),
        }
    }
}
