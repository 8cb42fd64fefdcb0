//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared by every stencil crate. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Declaration errors are programmer errors. They name the component, the
//!   type position, and the reason the declaration was rejected, and they are
//!   raised when a component class is registered rather than at render time.
//! - Lifecycle errors include the current phase and the attempted phase.
//! - Render-time validation failures are not defined here; they belong to
//!   the validator crate and carry the schema collaborator's violations.

use thiserror::Error;

use crate::channel::TypeParam;

/// Top-level error type for stencil core operations.
#[derive(Error, Debug)]
pub enum StencilError {
    /// A component type declaration is malformed or contradictory.
    #[error("schema resolution error: {0}")]
    Resolution(#[from] SchemaResolutionError),

    /// A render lifecycle transition was rejected.
    #[error("lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    /// A component name failed validation.
    #[error("invalid component name {name:?}: {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// A string did not name a known channel or type position.
    #[error("unknown {kind}: {value:?}")]
    UnknownIdentifier {
        /// What was being parsed ("channel", "type position").
        kind: &'static str,
        /// The unrecognized input.
        value: String,
    },
}

/// A component's type declaration cannot be turned into schemas.
///
/// Raised eagerly when a component class is registered. A component with a
/// malformed declaration never reaches render time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("component '{component}' declares an invalid {position} type: {reason}")]
pub struct SchemaResolutionError {
    /// Name of the component whose declaration was rejected.
    pub component: String,
    /// The type position holding the malformed declaration.
    pub position: TypeParam,
    /// Reason the declaration was rejected.
    pub reason: String,
}

impl SchemaResolutionError {
    /// Build a resolution error for one type position of a component.
    pub fn new(component: impl Into<String>, position: TypeParam, reason: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            position,
            reason: reason.into(),
        }
    }
}

/// Error in render lifecycle transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// Attempted a transition the lifecycle does not allow.
    #[error("invalid render transition from {from} to {to}: {reason}")]
    InvalidTransition {
        /// Current phase name.
        from: String,
        /// Attempted target phase name.
        to: String,
        /// Reason the transition was rejected.
        reason: String,
    },

    /// The render already reached a terminal phase.
    #[error("render is already {phase} and cannot transition")]
    Terminal {
        /// The terminal phase.
        phase: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_error_names_component_and_position() {
        let err = SchemaResolutionError::new("Card", TypeParam::Kwargs, "expected a mapping shape");
        assert_eq!(
            err.to_string(),
            "component 'Card' declares an invalid kwargs type: expected a mapping shape"
        );
    }

    #[test]
    fn stencil_error_wraps_resolution() {
        let err: StencilError =
            SchemaResolutionError::new("Card", TypeParam::Args, "bad").into();
        assert!(matches!(err, StencilError::Resolution(_)));
        assert!(err.to_string().starts_with("schema resolution error:"));
    }

    #[test]
    fn lifecycle_error_display() {
        let err = LifecycleError::InvalidTransition {
            from: "PENDING".into(),
            to: "RENDERED".into(),
            reason: "validation has not run".into(),
        };
        assert!(err.to_string().contains("PENDING"));
        assert!(err.to_string().contains("RENDERED"));
    }
}
