//! # Slots
//!
//! Slot content supplied by the caller: a literal string, or a function
//! that produces content from the render context when the template asks
//! for it.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use stencil_core::ComponentName;

/// What a dynamic slot function can see.
#[derive(Debug, Clone, Copy)]
pub struct SlotContext<'a> {
    /// The component being rendered.
    pub component: &'a ComponentName,
    /// The slot being filled.
    pub slot: &'a str,
    /// The component's context data.
    pub data: &'a Map<String, Value>,
}

/// A dynamic slot function.
pub type SlotFn = Arc<dyn Fn(&SlotContext<'_>) -> String + Send + Sync>;

/// Content for one slot.
#[derive(Clone)]
pub enum SlotFill {
    /// Fixed content.
    Literal(String),
    /// Content computed at render time.
    Dynamic(SlotFn),
}

impl SlotFill {
    /// Fixed content.
    pub fn literal(content: impl Into<String>) -> Self {
        Self::Literal(content.into())
    }

    /// Content computed at render time.
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&SlotContext<'_>) -> String + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(f))
    }

    /// Whether this is a slot function.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }

    /// Produce the slot's content.
    pub fn resolve(&self, ctx: &SlotContext<'_>) -> String {
        match self {
            Self::Literal(content) => content.clone(),
            Self::Dynamic(f) => f(ctx),
        }
    }
}

impl fmt::Debug for SlotFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(content) => f.debug_tuple("Literal").field(content).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&str> for SlotFill {
    fn from(content: &str) -> Self {
        Self::literal(content)
    }
}

impl From<String> for SlotFill {
    fn from(content: String) -> Self {
        Self::Literal(content)
    }
}

/// Slot name to content.
pub type SlotMap = BTreeMap<String, SlotFill>;
