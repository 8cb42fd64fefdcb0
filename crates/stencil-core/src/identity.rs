//! # Component Identity
//!
//! `ComponentName` is the human-facing name that appears in every failure
//! message. `ComponentId` is the class identity used as a cache key: two
//! registrations of components with the same name are still distinct classes.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::StencilError;

/// Validated component class name (e.g. `"TestComponent"`).
///
/// Any text that is not blank and carries no control characters, so names
/// such as `"Test Component"` or `"Ünïcode"` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentName(String);

impl ComponentName {
    /// Validate and wrap a component name.
    pub fn new(name: impl Into<String>) -> Result<Self, StencilError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StencilError::InvalidName {
                name,
                reason: "name must not be blank".into(),
            });
        }
        if let Some(bad) = name.chars().find(|c| c.is_control()) {
            return Err(StencilError::InvalidName {
                reason: format!("control character {bad:?} is not allowed"),
                name,
            });
        }
        Ok(Self(name))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ComponentName {
    type Error = StencilError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ComponentName> for String {
    fn from(name: ComponentName) -> Self {
        name.0
    }
}

impl std::borrow::Borrow<str> for ComponentName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Process-unique identity of a registered component class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(u64);

static NEXT_COMPONENT_ID: AtomicU64 = AtomicU64::new(1);

impl ComponentId {
    /// Allocate a fresh class identity.
    pub fn next() -> Self {
        Self(NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw identifier.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "component:{}", self.0)
    }
}
