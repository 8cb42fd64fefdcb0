//! # stencil-core — Foundational Types
//!
//! The leaf crate of the stencil workspace. It defines what a component
//! *declares* about the data flowing through its render, and the lifecycle
//! each render moves through. It knows nothing about schema compilation or
//! rendering; those live in `stencil-schema` and `stencil-render`.
//!
//! ## Key Types
//!
//! - [`Channel`] — the four validated data surfaces: args, kwargs, slots, data.
//! - [`TypeParam`] — the six declared type positions, including the
//!   never-validated `JsData` and `CssData`.
//! - [`TypeDescriptor`] / [`RecordDescriptor`] — nested structural shapes.
//! - [`ChannelType`] — `Unchecked` or `Checked(descriptor)`; the wildcard
//!   normalizes to `Unchecked`.
//! - [`ComponentTypeSpec`] — the immutable six-position declaration of a
//!   component class, built with [`ComponentTypeSpec::builder`] or
//!   deserialized from a manifest.
//! - [`Describe`] — maps Rust types to descriptors.
//! - [`RenderLifecycle`] — the per-render state machine.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `stencil-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod channel;
pub mod describe;
pub mod descriptor;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod spec;

pub use channel::{Channel, TypeParam};
pub use describe::{AnyType, Describe, SlotContent};
pub use descriptor::{ChannelType, RecordDescriptor, TypeDescriptor};
pub use error::{LifecycleError, SchemaResolutionError, StencilError};
pub use identity::{ComponentId, ComponentName};
pub use lifecycle::{PhaseTransition, RenderLifecycle, RenderPhase};
pub use spec::{ComponentTypeSpec, ComponentTypeSpecBuilder};
