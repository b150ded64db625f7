//! Namespaced factory registry
//!
//! The page wiring a Leaflet-style widget locates its `pointToLayer`
//! callback by a namespace/sub-namespace path. This registry makes that
//! lookup explicit: entries are keyed by [`FactoryPath`] instead of being
//! merged onto a shared global object, so registration order cannot
//! silently shadow entries across files.

use std::sync::Arc;

use fxhash::FxHashMap;

use crate::factory::PointToLayer;

/// Fully-qualified registration path, e.g.
/// `myNamespace.mySubNamespace.pointToLayer`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FactoryPath {
    pub namespace: String,
    pub sub_namespace: String,
    pub name: String,
}

impl FactoryPath {
    pub fn new(
        namespace: impl Into<String>,
        sub_namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            sub_namespace: sub_namespace.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for FactoryPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.namespace, self.sub_namespace, self.name)
    }
}

/// Registry of point-to-layer factories keyed by path.
#[derive(Default)]
pub struct FactoryRegistry {
    entries: FxHashMap<FactoryPath, Arc<dyn PointToLayer>>,
}

impl FactoryRegistry {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Registers a factory under the given path.
    ///
    /// Last write wins, matching the merge semantics this registry
    /// replaces; the displaced factory is returned so callers can detect
    /// the collision.
    pub fn register(
        &mut self,
        path: FactoryPath,
        factory: Arc<dyn PointToLayer>,
    ) -> Option<Arc<dyn PointToLayer>> {
        let displaced = self.entries.insert(path.clone(), factory);
        if displaced.is_some() {
            log::warn!("factory at {} replaced by a later registration", path);
        } else {
            log::debug!("factory registered at {}", path);
        }
        displaced
    }

    /// Looks up the factory registered under the given path.
    pub fn resolve(&self, path: &FactoryPath) -> Option<Arc<dyn PointToLayer>> {
        self.entries.get(path).cloned()
    }

    pub fn contains(&self, path: &FactoryPath) -> bool {
        self.entries.contains_key(path)
    }

    pub fn remove(&mut self, path: &FactoryPath) -> Option<Arc<dyn PointToLayer>> {
        self.entries.remove(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
