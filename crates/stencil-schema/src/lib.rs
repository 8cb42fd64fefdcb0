//! # stencil-schema — Schema Compilation & Validation
//!
//! The schema collaborator. It compiles type descriptors into JSON Schema
//! (Draft 2020-12) validators and reports structured violations. It also
//! loads component manifests and request documents for tooling.
//!
//! ## Operations
//!
//! - [`build_schema`] — compile a [`TypeDescriptor`](stencil_core::TypeDescriptor)
//!   into a shareable [`SchemaRef`]. Nested composites (tuples of records,
//!   records of tuples, tuples of tuples) compile transitively.
//! - [`SchemaRef::validate`] — check a value, returning every violation
//!   with its instance path. Values are never modified.
//! - [`resolve_spec`] — check a component declaration and compile each of
//!   its checked channels.
//! - [`ComponentManifest`] / [`load_document`] — YAML and JSON input.
//!
//! ## Crate Policy
//!
//! - Depends only on `stencil-core` internally.
//! - Knows nothing about rendering or lifecycle hooks.

pub mod compile;
pub mod document;
pub mod error;
pub mod manifest;
pub mod resolve;
pub mod violation;

pub use compile::{build_schema, to_json_schema, SchemaRef};
pub use document::{load_document, yaml_to_json_value};
pub use error::SchemaError;
pub use manifest::{ComponentDeclaration, ComponentManifest};
pub use resolve::{resolve_spec, ResolvedSchemas};
pub use violation::{SchemaViolations, Violation};
