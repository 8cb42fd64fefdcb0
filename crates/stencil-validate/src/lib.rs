//! # stencil-validate — Declared-Type Validation for Renders
//!
//! An [`Extension`](stencil_render::Extension) that enforces each
//! component's declared types on the four render channels: positional
//! arguments, keyword arguments, slots, and computed context data.
//!
//! ```
//! use stencil_core::{ChannelType, ComponentTypeSpec};
//! use stencil_render::{Component, RenderInput, Renderer};
//! use stencil_validate::{ChannelValidationError, SchemaValidationExtension};
//!
//! struct Counter;
//!
//! impl Component for Counter {
//!     fn name(&self) -> &str { "Counter" }
//!     fn template(&self) -> &str { "" }
//!     fn type_spec(&self) -> ComponentTypeSpec {
//!         ComponentTypeSpec::builder().args(ChannelType::of::<(i64,)>()).build()
//!     }
//! }
//!
//! let renderer = Renderer::builder()
//!     .extension(SchemaValidationExtension::default())
//!     .component(Counter)
//!     .build()
//!     .unwrap();
//!
//! let err = renderer.render("Counter", RenderInput::new().arg("one")).unwrap_err();
//! assert!(err.downcast_hook_error::<ChannelValidationError>().is_some());
//! assert!(err.to_string().starts_with("Positional arguments of component 'Counter' failed validation"));
//! ```
//!
//! ## Behavior
//!
//! - Schemas are resolved when a class is registered and cached by class
//!   identity; malformed declarations fail registration.
//! - Unchecked channels (no declaration, or the wildcard) are skipped.
//! - Validation is a predicate. Values reach the component and template
//!   exactly as the caller or component produced them.
//! - Failures are never caught here; they abort the render.

pub mod cache;
pub mod config;
pub mod error;
pub mod event;
pub mod extension;

pub use cache::SchemaCache;
pub use config::ValidatorConfig;
pub use error::{ChannelValidationError, ValidatorError};
pub use event::{slots_instance, ValidationEvent};
pub use extension::SchemaValidationExtension;
