//! # Renderer
//!
//! Owns the registered component classes, the ordered extension list, and
//! the template engine. Extensions are injected at construction; there is
//! no global registry.
//!
//! ## Render Pipeline
//!
//! ```text
//! PENDING
//!   └─ on_before_context(args, kwargs)      ──▶ ARGS_KWARGS_CHECKED
//!   └─ Component::get_context_data          ──▶ CONTEXT_COMPUTED
//!   └─ on_context_computed(data)            ──▶ DATA_CHECKED
//!   └─ on_slots_assembled(slots)            ──▶ SLOTS_CHECKED
//!   └─ TemplateEngine::render               ──▶ RENDERED
//! ```
//!
//! Any failure moves the lifecycle to `ABORTED` and is returned to the
//! caller as-is. Nothing is rendered after a failure.
//!
//! A `Renderer` is `Send + Sync`; concurrent renders share it through an
//! `Arc` and run independently on the calling thread.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use stencil_core::{ComponentName, RenderLifecycle, RenderPhase};
use uuid::Uuid;

use crate::component::{Component, ComponentClass};
use crate::error::{BoxError, RenderError};
use crate::extension::{Extension, HookContext};
use crate::slots::{SlotFill, SlotMap};
use crate::template::{Interpolator, TemplateContext, TemplateEngine};

/// Arguments of one render call.
#[derive(Debug, Clone, Default)]
pub struct RenderInput {
    /// Positional arguments.
    pub args: Vec<Value>,
    /// Keyword arguments.
    pub kwargs: Map<String, Value>,
    /// Slot content.
    pub slots: SlotMap,
}

impl RenderInput {
    /// Empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Replace the positional arguments.
    pub fn args<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.args = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set a keyword argument.
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }

    /// Fill a slot.
    pub fn slot(mut self, name: impl Into<String>, fill: impl Into<SlotFill>) -> Self {
        self.slots.insert(name.into(), fill.into());
        self
    }
}

/// Result of a successful render.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Template output.
    pub output: String,
    /// Correlation id of this render.
    pub render_id: Uuid,
    /// The completed lifecycle, ending in `RENDERED`.
    pub lifecycle: RenderLifecycle,
}

struct Registration {
    class: Arc<ComponentClass>,
    component: Arc<dyn Component>,
}

/// The host rendering pipeline.
pub struct Renderer {
    extensions: Vec<Arc<dyn Extension>>,
    engine: Arc<dyn TemplateEngine>,
    components: HashMap<ComponentName, Registration>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field(
                "extensions",
                &self.extensions.iter().map(|e| e.name()).collect::<Vec<_>>(),
            )
            .field("components", &self.components.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Renderer {
    /// Start building a renderer.
    pub fn builder() -> RendererBuilder {
        RendererBuilder::default()
    }

    /// Register a component class, notifying every extension.
    ///
    /// Extensions may reject the class (for example, a malformed type
    /// declaration); the class is then not registered, and extensions that
    /// already accepted it are told to discard it.
    pub fn register<C: Component>(&mut self, component: C) -> Result<Arc<ComponentClass>, RenderError> {
        let component: Arc<dyn Component> = Arc::new(component);
        let name = ComponentName::new(component.name())?;
        if self.components.contains_key(&name) {
            return Err(RenderError::DuplicateComponent {
                name: name.to_string(),
            });
        }

        let class = Arc::new(ComponentClass::new(name.clone(), component.type_spec()));
        for (accepted, ext) in self.extensions.iter().enumerate() {
            if let Err(source) = ext.on_component_registered(&class) {
                for earlier in &self.extensions[..accepted] {
                    earlier.on_component_discarded(&class);
                }
                return Err(RenderError::Registration {
                    extension: ext.name().to_string(),
                    component: name.to_string(),
                    source,
                });
            }
        }

        tracing::info!(
            component = %name,
            class_id = %class.id(),
            checked_channels = class.spec().checked_channels().len(),
            "registered component"
        );
        self.components.insert(
            name,
            Registration {
                class: Arc::clone(&class),
                component,
            },
        );
        Ok(class)
    }

    /// The registered class for `name`.
    pub fn class(&self, name: &str) -> Option<&Arc<ComponentClass>> {
        self.components.get(name).map(|r| &r.class)
    }

    /// Names of registered components, sorted.
    pub fn component_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(ComponentName::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Render a registered component.
    pub fn render(&self, name: &str, input: RenderInput) -> Result<Rendered, RenderError> {
        let registration = self
            .components
            .get(name)
            .ok_or_else(|| RenderError::UnknownComponent {
                name: name.to_string(),
            })?;

        let render_id = Uuid::new_v4();
        let span = tracing::debug_span!(
            "render",
            component = %registration.class.name(),
            render_id = %render_id
        );
        let _guard = span.enter();

        let mut lifecycle = RenderLifecycle::new();
        match self.run(registration, render_id, input, &mut lifecycle) {
            Ok(output) => Ok(Rendered {
                output,
                render_id,
                lifecycle,
            }),
            Err(err) => {
                lifecycle.abort(err.to_string());
                tracing::warn!(error = %err, "render aborted");
                Err(err)
            }
        }
    }

    fn run(
        &self,
        registration: &Registration,
        render_id: Uuid,
        input: RenderInput,
        lifecycle: &mut RenderLifecycle,
    ) -> Result<String, RenderError> {
        let class = registration.class.as_ref();
        let ctx = HookContext { class, render_id };
        let RenderInput { args, kwargs, slots } = input;

        self.each_extension(|ext| ext.on_before_context(&ctx, &args, &kwargs))?;
        advance(lifecycle, RenderPhase::ArgsKwargsChecked)?;

        let data = registration
            .component
            .get_context_data(&args, &kwargs)
            .map_err(|source| RenderError::Context {
                component: class.name().to_string(),
                source,
            })?;
        advance(lifecycle, RenderPhase::ContextComputed)?;

        self.each_extension(|ext| ext.on_context_computed(&ctx, &data))?;
        advance(lifecycle, RenderPhase::DataChecked)?;

        self.each_extension(|ext| ext.on_slots_assembled(&ctx, &slots))?;
        advance(lifecycle, RenderPhase::SlotsChecked)?;

        let template_ctx = TemplateContext {
            component: class.name(),
            data: &data,
            slots: &slots,
        };
        let output = self
            .engine
            .render(registration.component.template(), &template_ctx)
            .map_err(|reason| RenderError::Template {
                component: class.name().to_string(),
                reason,
            })?;
        advance(lifecycle, RenderPhase::Rendered)?;
        Ok(output)
    }

    fn each_extension<F>(&self, mut hook: F) -> Result<(), RenderError>
    where
        F: FnMut(&dyn Extension) -> Result<(), BoxError>,
    {
        for ext in &self.extensions {
            hook(ext.as_ref()).map_err(|source| RenderError::Hook {
                extension: ext.name().to_string(),
                source,
            })?;
        }
        Ok(())
    }
}

fn advance(lifecycle: &mut RenderLifecycle, next: RenderPhase) -> Result<(), RenderError> {
    let from = lifecycle.phase();
    lifecycle.advance(next)?;
    tracing::debug!(%from, to = %next, "render phase");
    Ok(())
}

/// Builder for [`Renderer`].
#[derive(Default)]
pub struct RendererBuilder {
    extensions: Vec<Arc<dyn Extension>>,
    engine: Option<Arc<dyn TemplateEngine>>,
    components: Vec<Box<dyn FnOnce(&mut Renderer) -> Result<Arc<ComponentClass>, RenderError>>>,
}

impl RendererBuilder {
    /// Append an extension. Hooks run in the order extensions are added.
    pub fn extension<E: Extension + 'static>(mut self, extension: E) -> Self {
        self.extensions.push(Arc::new(extension));
        self
    }

    /// Append an already shared extension.
    pub fn shared_extension(mut self, extension: Arc<dyn Extension>) -> Self {
        self.extensions.push(extension);
        self
    }

    /// Use a template engine other than [`Interpolator`].
    pub fn engine<T: TemplateEngine + 'static>(mut self, engine: T) -> Self {
        self.engine = Some(Arc::new(engine));
        self
    }

    /// Register a component when the renderer is built.
    pub fn component<C: Component>(mut self, component: C) -> Self {
        self.components
            .push(Box::new(move |renderer: &mut Renderer| renderer.register(component)));
        self
    }

    /// Build the renderer, registering queued components in order.
    pub fn build(self) -> Result<Renderer, RenderError> {
        let engine = match self.engine {
            Some(engine) => engine,
            None => Arc::new(Interpolator::new().map_err(|e| RenderError::Template {
                component: "<engine>".to_string(),
                reason: e.to_string(),
            })?),
        };

        let mut renderer = Renderer {
            extensions: self.extensions,
            engine,
            components: HashMap::new(),
        };
        for register in self.components {
            register(&mut renderer)?;
        }
        Ok(renderer)
    }
}
