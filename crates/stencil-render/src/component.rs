//! # Components
//!
//! A [`Component`] is user code: a name, a template, a type declaration,
//! and the step that turns call arguments into context data. Registering
//! a component with the [`Renderer`](crate::Renderer) produces a
//! [`ComponentClass`], the immutable identity that extensions key their
//! per-class state on.

use std::sync::Arc;

use serde_json::{Map, Value};
use stencil_core::{ComponentId, ComponentName, ComponentTypeSpec};

use crate::error::BoxError;

/// A renderable component definition.
pub trait Component: Send + Sync + 'static {
    /// The component class name used in every message about it.
    fn name(&self) -> &str;

    /// The declared types. Defaults to fully unchecked.
    fn type_spec(&self) -> ComponentTypeSpec {
        ComponentTypeSpec::unchecked()
    }

    /// The template text.
    fn template(&self) -> &str;

    /// Compute the context data exposed to the template.
    ///
    /// Runs after positional and keyword arguments have been checked.
    /// The default exposes the keyword arguments unchanged.
    fn get_context_data(
        &self,
        args: &[Value],
        kwargs: &Map<String, Value>,
    ) -> Result<Map<String, Value>, BoxError> {
        let _ = args;
        Ok(kwargs.clone())
    }
}

/// The registered identity of a component class.
///
/// Built once at registration; the type spec is shared, never copied per
/// render.
#[derive(Debug, Clone)]
pub struct ComponentClass {
    id: ComponentId,
    name: ComponentName,
    spec: Arc<ComponentTypeSpec>,
}

impl ComponentClass {
    /// Create a class with a fresh identity.
    pub fn new(name: ComponentName, spec: ComponentTypeSpec) -> Self {
        Self {
            id: ComponentId::next(),
            name,
            spec: Arc::new(spec),
        }
    }

    /// Class identity; distinct for every registration.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Class name.
    pub fn name(&self) -> &ComponentName {
        &self.name
    }

    /// Declared types.
    pub fn spec(&self) -> &ComponentTypeSpec {
        &self.spec
    }
}
