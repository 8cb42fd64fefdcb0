//! # Per-Class Schema Cache
//!
//! Compiled schemas are keyed by [`ComponentId`], the class identity, so
//! every render of a class (including concurrent renders) shares one
//! resolution. Population runs under the map's entry lock, so a class is
//! resolved at most once even when its first renders race. Failed
//! resolutions are not cached.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use stencil_core::{Channel, ComponentId};
use stencil_render::ComponentClass;
use stencil_schema::{resolve_spec, ResolvedSchemas, SchemaError, SchemaRef};

/// Thread-safe, write-once store of resolved component schemas.
#[derive(Debug, Default)]
pub struct SchemaCache {
    entries: DashMap<ComponentId, Arc<ResolvedSchemas>>,
    resolutions: AtomicUsize,
}

impl SchemaCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The resolved schemas of `class`, resolving them on first use.
    pub fn get_or_resolve(&self, class: &ComponentClass) -> Result<Arc<ResolvedSchemas>, SchemaError> {
        if let Some(hit) = self.entries.get(&class.id()) {
            return Ok(Arc::clone(hit.value()));
        }

        let entry = self.entries.entry(class.id()).or_try_insert_with(|| {
            let resolved = resolve_spec(class.spec(), class.name())?;
            self.resolutions.fetch_add(1, Ordering::Relaxed);
            tracing::info!(
                component = %class.name(),
                class_id = %class.id(),
                checked_channels = resolved.checked_count(),
                "resolved component schemas"
            );
            Ok::<_, SchemaError>(Arc::new(resolved))
        })?;
        Ok(Arc::clone(entry.value()))
    }

    /// The schema for one channel of `class`, or `None` when the channel
    /// was not declared or was declared as the wildcard.
    pub fn get_schema(
        &self,
        class: &ComponentClass,
        channel: Channel,
    ) -> Result<Option<SchemaRef>, SchemaError> {
        Ok(self.get_or_resolve(class)?.get(channel).cloned())
    }

    /// Drop the entry for `id`. Returns whether one was cached.
    pub fn remove(&self, id: &ComponentId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// How many class resolutions have run.
    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::Relaxed)
    }

    /// Number of cached classes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no class has been resolved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
