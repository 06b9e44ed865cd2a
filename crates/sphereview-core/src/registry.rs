//! View controller class registry.

use std::collections::HashMap;

use crate::error::{Result, SphereViewError};
use crate::view_controller::ViewController;

/// Constructor for a registered view controller class.
pub type ControllerFactory = fn() -> Box<dyn ViewController>;

/// Maps class ids to view controller constructors.
///
/// The host instantiates controllers by class id, e.g. when restoring a
/// saved view or switching modes from a menu.
#[derive(Default)]
pub struct Registry {
    factories: HashMap<String, ControllerFactory>,
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a controller class.
    ///
    /// Returns an error if the class id is already taken.
    pub fn register(&mut self, class_id: &str, factory: ControllerFactory) -> Result<()> {
        if self.factories.contains_key(class_id) {
            return Err(SphereViewError::ControllerExists(class_id.to_string()));
        }
        self.factories.insert(class_id.to_string(), factory);
        log::info!("registered view controller '{class_id}'");
        Ok(())
    }

    /// Instantiates a controller by class id.
    pub fn create(&self, class_id: &str) -> Result<Box<dyn ViewController>> {
        let factory = self
            .factories
            .get(class_id)
            .ok_or_else(|| SphereViewError::ControllerNotFound(class_id.to_string()))?;
        Ok(factory())
    }

    /// Checks if a class id is registered.
    pub fn contains(&self, class_id: &str) -> bool {
        self.factories.contains_key(class_id)
    }

    /// Removes a class, returning its constructor.
    pub fn remove(&mut self, class_id: &str) -> Option<ControllerFactory> {
        self.factories.remove(class_id)
    }

    /// Removes every class.
    pub fn clear(&mut self) {
        self.factories.clear();
    }

    /// Registered class ids, sorted.
    pub fn class_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the number of registered classes.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
