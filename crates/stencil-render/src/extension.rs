//! # Extension Hooks
//!
//! Extensions observe and veto stages of a render. The renderer calls each
//! hook on every extension in registration order; the first error aborts
//! the render and propagates to the caller unchanged.
//!
//! | Hook                      | When                                                 |
//! |---------------------------|------------------------------------------------------|
//! | `on_component_registered` | Once per class, when it is registered                |
//! | `on_component_discarded`  | A later extension rejected a class this one accepted |
//! | `on_before_context`       | Before `get_context_data`, with the call arguments   |
//! | `on_context_computed`     | After `get_context_data`, before the template        |
//! | `on_slots_assembled`      | After slots are collected, before the template       |
//!
//! All hooks default to accepting.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::component::ComponentClass;
use crate::error::BoxError;
use crate::slots::SlotMap;

/// Per-render information passed to every hook.
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    /// The class being rendered.
    pub class: &'a ComponentClass,
    /// Correlation id of this render.
    pub render_id: Uuid,
}

/// A pluggable render pipeline extension.
pub trait Extension: Send + Sync {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// A component class was registered.
    fn on_component_registered(&self, class: &ComponentClass) -> Result<(), BoxError> {
        let _ = class;
        Ok(())
    }

    /// A class this extension accepted was rejected by a later extension
    /// and will never be rendered. Per-class state for it can be dropped.
    fn on_component_discarded(&self, class: &ComponentClass) {
        let _ = class;
    }

    /// Call arguments are about to reach the component.
    fn on_before_context(
        &self,
        ctx: &HookContext<'_>,
        args: &[Value],
        kwargs: &Map<String, Value>,
    ) -> Result<(), BoxError> {
        let _ = (ctx, args, kwargs);
        Ok(())
    }

    /// The component produced its context data.
    fn on_context_computed(
        &self,
        ctx: &HookContext<'_>,
        data: &Map<String, Value>,
    ) -> Result<(), BoxError> {
        let _ = (ctx, data);
        Ok(())
    }

    /// Slot content was assembled.
    fn on_slots_assembled(&self, ctx: &HookContext<'_>, slots: &SlotMap) -> Result<(), BoxError> {
        let _ = (ctx, slots);
        Ok(())
    }
}
