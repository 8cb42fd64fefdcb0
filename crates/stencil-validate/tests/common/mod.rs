#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Map, Value};
use stencil_core::{ChannelType, ComponentTypeSpec, RecordDescriptor, TypeDescriptor};
use stencil_render::{BoxError, Component, RenderInput, Renderer, SlotFill};
use stencil_validate::SchemaValidationExtension;

pub type ContextFn = Arc<dyn Fn(&[Value], &Map<String, Value>) -> Map<String, Value> + Send + Sync>;

pub const TEMPLATE: &str = r#"
    {% load component_tags %}
    Variable: <strong>{{ variable }}</strong>
    Slot 1: {% slot "my_slot" / %}
    Slot 2: {% slot "my_slot2" / %}
"#;

pub const DATA_TEMPLATE: &str = r#"
    {% load component_tags %}
    Data 1: <strong>{{ data1 }}</strong>
    Data 2: <strong>{{ data2 }}</strong>
    Slot 1: {% slot "slot1" / %}
    Slot 2: {% slot "slot2" / %}
"#;

/// A component named `TestComponent` with a configurable declaration.
pub struct TestComponent {
    pub spec: ComponentTypeSpec,
    pub context: ContextFn,
    pub template: &'static str,
}

impl TestComponent {
    /// Context `{variable: kwargs.variable, invalid_key: args[0]}`.
    pub fn with_invalid_key(spec: ComponentTypeSpec) -> Self {
        Self {
            spec,
            context: Arc::new(|args: &[Value], kwargs: &Map<String, Value>| {
                let mut data = Map::new();
                data.insert("variable".into(), kwargs.get("variable").cloned().unwrap_or(Value::Null));
                data.insert("invalid_key".into(), args.first().cloned().unwrap_or(Value::Null));
                data
            }),
            template: TEMPLATE,
        }
    }

    /// Context `{data1: kwargs.var1, data2: kwargs.var2}`.
    pub fn with_data(spec: ComponentTypeSpec) -> Self {
        Self {
            spec,
            context: Arc::new(|_args: &[Value], kwargs: &Map<String, Value>| {
                let mut data = Map::new();
                data.insert("data1".into(), kwargs.get("var1").cloned().unwrap_or(Value::Null));
                data.insert("data2".into(), kwargs.get("var2").cloned().unwrap_or(Value::Null));
                data
            }),
            template: DATA_TEMPLATE,
        }
    }
}

impl Component for TestComponent {
    fn name(&self) -> &str {
        "TestComponent"
    }

    fn type_spec(&self) -> ComponentTypeSpec {
        self.spec.clone()
    }

    fn template(&self) -> &str {
        self.template
    }

    fn get_context_data(
        &self,
        args: &[Value],
        kwargs: &Map<String, Value>,
    ) -> Result<Map<String, Value>, BoxError> {
        Ok((self.context)(args, kwargs))
    }
}

pub fn renderer(component: TestComponent) -> Renderer {
    Renderer::builder()
        .extension(SchemaValidationExtension::default())
        .component(component)
        .build()
        .expect("renderer builds")
}

pub fn test_args() -> ChannelType {
    ChannelType::of::<(i64, String, i64)>()
}

pub fn test_kwargs() -> RecordDescriptor {
    RecordDescriptor::new()
        .field("var1", TypeDescriptor::Int)
        .field("var2", TypeDescriptor::Str)
        .field("var3", TypeDescriptor::Int)
}

pub fn test_slots() -> RecordDescriptor {
    RecordDescriptor::new()
        .field("slot1", TypeDescriptor::SlotContent)
        .field("slot2", TypeDescriptor::SlotContent)
}

pub fn test_data() -> RecordDescriptor {
    RecordDescriptor::new()
        .field("data1", TypeDescriptor::Int)
        .field("data2", TypeDescriptor::Str)
}

/// `args=(123, "str")`, `kwargs={variable, another}`, slots `my_slot` / `my_slot2`.
pub fn loose_input() -> RenderInput {
    RenderInput::new()
        .args([json!(123), json!("str")])
        .kwarg("variable", "test")
        .kwarg("another", 1)
        .slot("my_slot", "MY_SLOT")
        .slot("my_slot2", SlotFill::dynamic(|_| "abc".to_string()))
}

/// `args=(123, "str", 456)`, `kwargs={var1, var2, var3}`, slots `slot1` / `slot2`.
pub fn typed_input() -> RenderInput {
    RenderInput::new()
        .args([json!(123), json!("str"), json!(456)])
        .kwarg("var1", 1)
        .kwarg("var2", "str")
        .kwarg("var3", 456)
        .slot("slot1", "SLOT1")
        .slot("slot2", SlotFill::dynamic(|_| "abc".to_string()))
}
