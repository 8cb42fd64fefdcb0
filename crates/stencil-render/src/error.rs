//! Render pipeline errors.

use stencil_core::{LifecycleError, StencilError};
use thiserror::Error;

/// Boxed error returned by extensions and component code.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error from registering or rendering a component.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No component is registered under the requested name.
    #[error("unknown component '{name}'")]
    UnknownComponent {
        /// The requested name.
        name: String,
    },

    /// A component with this name is already registered.
    #[error("component '{name}' is already registered")]
    DuplicateComponent {
        /// The conflicting name.
        name: String,
    },

    /// The component definition itself is invalid.
    #[error("invalid component: {0}")]
    InvalidComponent(#[from] StencilError),

    /// An extension rejected a component class at registration.
    #[error("extension '{extension}' rejected component '{component}': {source}")]
    Registration {
        /// Name of the rejecting extension.
        extension: String,
        /// Name of the rejected component.
        component: String,
        /// The extension's error.
        source: BoxError,
    },

    /// An extension hook failed during a render. Displays the hook's
    /// error unchanged.
    #[error("{source}")]
    Hook {
        /// Name of the failing extension.
        extension: String,
        /// The extension's error.
        source: BoxError,
    },

    /// The component failed to compute its context data.
    #[error("component '{component}' failed to compute context data: {source}")]
    Context {
        /// Name of the component.
        component: String,
        /// The component's error.
        source: BoxError,
    },

    /// The template could not be compiled or rendered.
    #[error("template error in component '{component}': {reason}")]
    Template {
        /// Name of the component (or `<engine>` for engine construction).
        component: String,
        /// Reason reported by the engine.
        reason: String,
    },

    /// The render lifecycle rejected a transition.
    #[error("lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),
}

impl RenderError {
    /// The typed error raised by an extension hook, if this is a hook
    /// failure of type `E`.
    pub fn downcast_hook_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Hook { source, .. } | Self::Registration { source, .. } => source.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Name of the extension that failed, for hook and registration errors.
    pub fn extension(&self) -> Option<&str> {
        match self {
            Self::Hook { extension, .. } | Self::Registration { extension, .. } => Some(extension),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Error, Debug)]
    #[error("Data of component 'Card' failed validation")]
    struct DataFailure;

    #[test]
    fn hook_error_displays_verbatim_and_downcasts() {
        let err = RenderError::Hook {
            extension: "validator".into(),
            source: Box::new(DataFailure),
        };
        assert_eq!(err.to_string(), "Data of component 'Card' failed validation");
        assert!(err.downcast_hook_error::<DataFailure>().is_some());
        assert!(err.downcast_hook_error::<std::io::Error>().is_none());
        assert_eq!(err.extension(), Some("validator"));
    }

    #[test]
    fn non_hook_errors_do_not_downcast() {
        let err = RenderError::UnknownComponent { name: "Card".into() };
        assert!(err.downcast_hook_error::<DataFailure>().is_none());
        assert_eq!(err.extension(), None);
    }
}
