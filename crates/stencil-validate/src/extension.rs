//! # Schema Validation Extension
//!
//! Plugs into the [`Renderer`](stencil_render::Renderer) as an
//! [`Extension`] and validates each channel at the hook where its value
//! first exists:
//!
//! | Hook                      | Channels                         |
//! |---------------------------|----------------------------------|
//! | `on_component_registered` | resolves and caches all schemas  |
//! | `on_component_discarded`  | evicts the cached schemas        |
//! | `on_before_context`       | args, then kwargs                |
//! | `on_context_computed`     | data                             |
//! | `on_slots_assembled`      | slots                            |
//!
//! Unchecked channels are skipped without building a validation value.
//! Values are never modified. A failure is returned as a boxed
//! [`ChannelValidationError`] and aborts the render.

use serde_json::{Map, Value};
use stencil_core::Channel;
use stencil_render::{BoxError, ComponentClass, Extension, HookContext, SlotMap};
use stencil_schema::{SchemaError, SchemaRef};

use crate::cache::SchemaCache;
use crate::config::ValidatorConfig;
use crate::error::ValidatorError;
use crate::event::{slots_instance, ValidationEvent};

/// Validates render channels against declared component types.
#[derive(Debug, Default)]
pub struct SchemaValidationExtension {
    config: ValidatorConfig,
    cache: SchemaCache,
}

impl SchemaValidationExtension {
    /// Create an extension with the given settings.
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            cache: SchemaCache::new(),
        }
    }

    /// Active settings.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The per-class schema cache.
    pub fn cache(&self) -> &SchemaCache {
        &self.cache
    }

    /// The declared schema of `class` for `channel`, or `None` when the
    /// channel is unchecked.
    pub fn get_schema(
        &self,
        class: &ComponentClass,
        channel: Channel,
    ) -> Result<Option<SchemaRef>, SchemaError> {
        self.cache.get_schema(class, channel)
    }

    /// Validate an already built value for one channel of `class`.
    pub fn validate_channel(
        &self,
        class: &ComponentClass,
        channel: Channel,
        value: &Value,
    ) -> Result<(), ValidatorError> {
        self.check(class, channel, || value.clone())
    }

    fn check<F>(&self, class: &ComponentClass, channel: Channel, instance: F) -> Result<(), ValidatorError>
    where
        F: FnOnce() -> Value,
    {
        if !self.config.is_enabled(channel) {
            tracing::debug!(channel = %channel, "channel disabled by config, skipping");
            return Ok(());
        }

        let resolved = self.cache.get_or_resolve(class)?;
        let Some(schema) = resolved.get(channel) else {
            tracing::debug!(channel = %channel, "channel unchecked, skipping");
            return Ok(());
        };

        let value = instance();
        let event = ValidationEvent {
            component: class.name(),
            channel,
            schema: Some(schema),
            value: &value,
        };
        event.check(self.config.max_violations)?;
        Ok(())
    }
}

fn into_hook_error(err: ValidatorError) -> BoxError {
    match err {
        ValidatorError::Channel(failure) => Box::new(failure),
        ValidatorError::Schema(schema) => Box::new(schema),
        other => Box::new(other),
    }
}

impl Extension for SchemaValidationExtension {
    fn name(&self) -> &str {
        "schema-validation"
    }

    fn on_component_registered(&self, class: &ComponentClass) -> Result<(), BoxError> {
        self.cache.get_or_resolve(class)?;
        Ok(())
    }

    fn on_component_discarded(&self, class: &ComponentClass) {
        if self.cache.remove(&class.id()) {
            tracing::debug!(component = %class.name(), class_id = %class.id(), "evicted discarded class");
        }
    }

    fn on_before_context(
        &self,
        ctx: &HookContext<'_>,
        args: &[Value],
        kwargs: &Map<String, Value>,
    ) -> Result<(), BoxError> {
        self.check(ctx.class, Channel::Args, || Value::Array(args.to_vec()))
            .map_err(into_hook_error)?;
        self.check(ctx.class, Channel::Kwargs, || Value::Object(kwargs.clone()))
            .map_err(into_hook_error)
    }

    fn on_context_computed(
        &self,
        ctx: &HookContext<'_>,
        data: &Map<String, Value>,
    ) -> Result<(), BoxError> {
        self.check(ctx.class, Channel::Data, || Value::Object(data.clone()))
            .map_err(into_hook_error)
    }

    fn on_slots_assembled(&self, ctx: &HookContext<'_>, slots: &SlotMap) -> Result<(), BoxError> {
        self.check(ctx.class, Channel::Slots, || slots_instance(slots))
            .map_err(into_hook_error)
    }
}
