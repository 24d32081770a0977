//! Service context - dependency container for services
//!
//! Holds the shared family store. Constructed once at startup and injected
//! into the request-handling layer; tests construct their own for isolation.

use std::sync::Arc;

use family_core::FamilyStructure;
use parking_lot::{Mutex, MutexGuard};

/// Service context containing all dependencies
///
/// The family store is shared mutable state across concurrently served
/// requests, so every access goes through a mutex. Lock scope is one store
/// operation; nothing holds the guard across an await point.
#[derive(Clone)]
pub struct ServiceContext {
    family: Arc<Mutex<FamilyStructure>>,
}

impl ServiceContext {
    /// Create a new service context owning the given store
    pub fn new(family: FamilyStructure) -> Self {
        Self {
            family: Arc::new(Mutex::new(family)),
        }
    }

    /// Lock the family store for the duration of one operation
    pub fn family(&self) -> MutexGuard<'_, FamilyStructure> {
        self.family.lock()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("family", &"FamilyStructure")
            .finish()
    }
}
