//! # Declaration Resolution
//!
//! Turns a component's [`ComponentTypeSpec`] into one compiled schema per
//! checked channel. Declarations are checked first, so a malformed spec
//! fails with a [`SchemaResolutionError`](stencil_core::SchemaResolutionError)
//! before any compilation happens.

use std::collections::BTreeMap;

use stencil_core::{Channel, ComponentName, ComponentTypeSpec};

use crate::compile::{build_schema, SchemaRef};
use crate::error::SchemaError;

/// The compiled schemas of one component class.
///
/// Unchecked channels have no entry.
#[derive(Debug, Clone)]
pub struct ResolvedSchemas {
    component: ComponentName,
    schemas: BTreeMap<Channel, SchemaRef>,
}

impl ResolvedSchemas {
    /// Name of the component these schemas belong to.
    pub fn component(&self) -> &ComponentName {
        &self.component
    }

    /// The schema for a channel, or `None` if the channel is unchecked.
    pub fn get(&self, channel: Channel) -> Option<&SchemaRef> {
        self.schemas.get(&channel)
    }

    /// Number of checked channels.
    pub fn checked_count(&self) -> usize {
        self.schemas.len()
    }

    /// Checked channels and their schemas, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &SchemaRef)> {
        self.schemas.iter().map(|(c, s)| (*c, s))
    }
}

/// Check a declaration and compile every checked channel.
pub fn resolve_spec(
    spec: &ComponentTypeSpec,
    component: &ComponentName,
) -> Result<ResolvedSchemas, SchemaError> {
    spec.check_declaration(component)?;

    let mut schemas = BTreeMap::new();
    for channel in spec.checked_channels() {
        if let Some(descriptor) = spec.channel(channel).descriptor() {
            let schema = build_schema(descriptor)?;
            tracing::debug!(
                component = %component,
                channel = %channel,
                descriptor = %descriptor,
                "compiled channel schema"
            );
            schemas.insert(channel, schema);
        }
    }

    Ok(ResolvedSchemas {
        component: component.clone(),
        schemas,
    })
}
