//! Process-wide view controller registry.
//!
//! The registry is created on first access with the built-in controllers
//! already registered, so hosts can instantiate them by class id without
//! any setup call.

use std::sync::{OnceLock, PoisonError, RwLock};

use sphereview_core::{ControllerFactory, Registry, Result, ViewController};

use crate::controller::{SphereViewController, CLASS_ID};

/// Global registry singleton.
static REGISTRY: OnceLock<RwLock<Registry>> = OnceLock::new();

fn registry() -> &'static RwLock<Registry> {
    REGISTRY.get_or_init(|| {
        let mut registry = Registry::new();
        if let Err(e) = registry.register(CLASS_ID, SphereViewController::boxed) {
            log::error!("failed to register built-in controller: {e}");
        }
        RwLock::new(registry)
    })
}

/// Access the global registry for reading.
///
/// A poisoned lock is recovered.
pub fn with_registry<F, R>(f: F) -> R
where
    F: FnOnce(&Registry) -> R,
{
    let guard = registry().read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Access the global registry for writing.
pub fn with_registry_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Registry) -> R,
{
    let mut guard = registry().write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Registers an additional controller class.
///
/// # Errors
///
/// Returns an error if the class id is already registered.
pub fn register_view_controller(class_id: &str, factory: ControllerFactory) -> Result<()> {
    with_registry_mut(|registry| registry.register(class_id, factory))
}

/// Instantiates a controller by class id.
///
/// # Errors
///
/// Returns an error if no class is registered under `class_id`.
pub fn create_view_controller(class_id: &str) -> Result<Box<dyn ViewController>> {
    with_registry(|registry| registry.create(class_id))
}

/// Class ids of every registered controller, sorted.
#[must_use]
pub fn view_controller_class_ids() -> Vec<String> {
    with_registry(|registry| {
        registry
            .class_ids()
            .into_iter()
            .map(str::to_string)
            .collect()
    })
}
