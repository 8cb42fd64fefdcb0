//! # stencil-render — Host Rendering Framework
//!
//! A small rendering pipeline that exposes typed lifecycle hooks to
//! extensions. It is the host side of the extension contract: it owns
//! components, assembles arguments and slots, computes context data, and
//! calls each [`Extension`] at the documented points of every render.
//!
//! ```
//! use stencil_render::{Component, RenderInput, Renderer};
//!
//! struct Hello;
//!
//! impl Component for Hello {
//!     fn name(&self) -> &str { "Hello" }
//!     fn template(&self) -> &str { "Hello {{ who }}" }
//! }
//!
//! let renderer = Renderer::builder().component(Hello).build().unwrap();
//! let out = renderer.render("Hello", RenderInput::new().kwarg("who", "world")).unwrap();
//! assert_eq!(out.output, "Hello world");
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `stencil-core` internally.
//! - Extension errors propagate to the render caller unchanged.

pub mod component;
pub mod error;
pub mod extension;
pub mod renderer;
pub mod slots;
pub mod template;

pub use component::{Component, ComponentClass};
pub use error::{BoxError, RenderError};
pub use extension::{Extension, HookContext};
pub use renderer::{RenderInput, Rendered, Renderer, RendererBuilder};
pub use slots::{SlotContext, SlotFill, SlotFn, SlotMap};
pub use template::{Interpolator, TemplateContext, TemplateEngine};
