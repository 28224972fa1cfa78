//! Explicit service registry
//!
//! Long-lived components (databases, the debug overlay, ...) are built once at
//! the application's composition root and stored here by type. The registry is
//! an ordinary value that is passed to whoever needs it; there is no global
//! instance and nothing is discovered lazily.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

struct ServiceEntry {
    name: &'static str,
    value: Box<dyn Any>,
}

/// Type-keyed store of single instances
#[derive(Default)]
pub struct ServiceRegistry {
    services: HashMap<TypeId, ServiceEntry>,
}

impl ServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` as the instance of `T`, returning the one it replaces
    pub fn insert<T: 'static>(&mut self, value: T) -> Option<T> {
        let previous = self.services.insert(
            TypeId::of::<T>(),
            ServiceEntry {
                name: type_name::<T>(),
                value: Box::new(value),
            },
        )?;

        log::warn!("Replacing registered service {}", previous.name);
        previous.value.downcast::<T>().ok().map(|boxed| *boxed)
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with<T: 'static>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Instance of `T`; logs an error when none was registered
    pub fn get<T: 'static>(&self) -> Option<&T> {
        let service = self
            .services
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.value.downcast_ref::<T>());
        if service.is_none() {
            log::error!("Cannot find service {} in ServiceRegistry", type_name::<T>());
        }
        service
    }

    /// Mutable instance of `T`; logs an error when none was registered
    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        let service = self
            .services
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.value.downcast_mut::<T>());
        if service.is_none() {
            log::error!("Cannot find service {} in ServiceRegistry", type_name::<T>());
        }
        service
    }

    /// Remove and return the instance of `T`
    pub fn remove<T: 'static>(&mut self) -> Option<T> {
        self.services
            .remove(&TypeId::of::<T>())
            .and_then(|entry| entry.value.downcast::<T>().ok())
            .map(|boxed| *boxed)
    }

    /// Whether `T` is registered
    pub fn contains<T: 'static>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<T>())
    }

    /// Type names of all registered services
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.services.values().map(|entry| entry.name).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry").field("services", &self.names()).finish()
    }
}
