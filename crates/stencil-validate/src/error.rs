//! # Validation Errors
//!
//! [`ChannelValidationError`] is what a render caller sees when a declared
//! type is violated. Its message names the channel and the component, then
//! lists each violation with its path:
//!
//! ```text
//! Keyword arguments of component 'TestComponent' failed validation:
//!   (root): "var3" is a required property
//! ```

use std::fmt;

use stencil_core::{Channel, ComponentName};
use stencil_schema::{SchemaError, SchemaViolations};
use thiserror::Error;

/// A render-time value failed its channel's declared schema.
#[derive(Debug, Clone)]
pub struct ChannelValidationError {
    /// The component whose declaration was violated.
    pub component: ComponentName,
    /// The failing channel.
    pub channel: Channel,
    /// Field-level detail from the schema collaborator.
    pub violations: SchemaViolations,
}

impl fmt::Display for ChannelValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of component '{}' failed validation",
            self.channel.label(),
            self.component
        )?;
        if !self.violations.is_empty() || self.violations.omitted() > 0 {
            write!(f, ":\n{}", self.violations)?;
        }
        Ok(())
    }
}

impl std::error::Error for ChannelValidationError {}

/// Error from the validator extension.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// A channel failed validation.
    #[error(transparent)]
    Channel(#[from] ChannelValidationError),

    /// Schemas could not be resolved for a component.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The validator configuration is invalid.
    #[error("config error for '{path}': {reason}")]
    Config {
        /// Path (or `<inline>`) of the configuration.
        path: String,
        /// Reason the configuration was rejected.
        reason: String,
    },

    /// IO error reading the configuration.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_schema::Violation;

    fn failure(channel: Channel) -> ChannelValidationError {
        ChannelValidationError {
            component: ComponentName::new("TestComponent").unwrap(),
            channel,
            violations: SchemaViolations::new(vec![Violation {
                instance_path: String::new(),
                schema_path: "/required".into(),
                message: "\"var3\" is a required property".into(),
            }]),
        }
    }

    #[test]
    fn message_names_channel_and_component() {
        let expected = [
            (Channel::Args, "Positional arguments of component 'TestComponent' failed validation"),
            (Channel::Kwargs, "Keyword arguments of component 'TestComponent' failed validation"),
            (Channel::Slots, "Slots of component 'TestComponent' failed validation"),
            (Channel::Data, "Data of component 'TestComponent' failed validation"),
        ];
        for (channel, prefix) in expected {
            assert!(failure(channel).to_string().starts_with(prefix));
        }
    }

    #[test]
    fn message_includes_violation_detail() {
        assert_eq!(
            failure(Channel::Kwargs).to_string(),
            "Keyword arguments of component 'TestComponent' failed validation:\n  (root): \"var3\" is a required property"
        );
    }

    #[test]
    fn validator_error_is_transparent_for_channels() {
        let err: ValidatorError = failure(Channel::Data).into();
        assert!(err.to_string().starts_with("Data of component"));
    }
}
