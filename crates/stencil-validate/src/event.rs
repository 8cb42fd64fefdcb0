//! # Validation Events
//!
//! One [`ValidationEvent`] is built per channel per render, checked
//! immediately, and dropped. It borrows the schema from the class cache
//! and the value from the render; it owns neither.

use serde_json::{json, Value};
use stencil_core::{Channel, ComponentName};
use stencil_render::{SlotFill, SlotMap};
use stencil_schema::SchemaRef;

use crate::error::ChannelValidationError;

/// A value on its way through one channel of a render.
#[derive(Debug, Clone, Copy)]
pub struct ValidationEvent<'a> {
    /// The component being rendered.
    pub component: &'a ComponentName,
    /// The channel carrying the value.
    pub channel: Channel,
    /// The declared schema, or `None` when the channel is unchecked.
    pub schema: Option<&'a SchemaRef>,
    /// The runtime value.
    pub value: &'a Value,
}

impl ValidationEvent<'_> {
    /// Check the value. Unchecked channels always pass.
    ///
    /// `max_violations` caps the number of violations carried by the error.
    pub fn check(&self, max_violations: Option<usize>) -> Result<(), ChannelValidationError> {
        let Some(schema) = self.schema else {
            tracing::debug!(channel = %self.channel, "channel unchecked, skipping");
            return Ok(());
        };

        match schema.validate(self.value) {
            Ok(()) => {
                tracing::debug!(channel = %self.channel, "channel passed validation");
                Ok(())
            }
            Err(violations) => {
                let violations = match max_violations {
                    Some(max) => violations.truncate(max),
                    None => violations,
                };
                tracing::warn!(
                    component = %self.component,
                    channel = %self.channel,
                    violations = violations.len() + violations.omitted(),
                    "channel failed validation"
                );
                Err(ChannelValidationError {
                    component: self.component.clone(),
                    channel: self.channel,
                    violations,
                })
            }
        }
    }
}

/// The value slots are validated as.
///
/// Literal content becomes a string. A slot function becomes
/// `{"dynamic": true}`; it is never called during validation.
pub fn slots_instance(slots: &SlotMap) -> Value {
    Value::Object(
        slots
            .iter()
            .map(|(name, fill)| {
                let content = match fill {
                    SlotFill::Literal(content) => Value::String(content.clone()),
                    SlotFill::Dynamic(_) => json!({ "dynamic": true }),
                };
                (name.clone(), content)
            })
            .collect(),
    )
}
