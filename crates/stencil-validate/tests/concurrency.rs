//! Concurrent renders share one renderer and one schema resolution per class.

mod common;

use std::sync::Arc;
use std::thread;

use common::*;
use serde_json::json;
use stencil_core::ComponentTypeSpec;
use stencil_render::{Component, RenderInput, Renderer};
use stencil_validate::{ChannelValidationError, SchemaValidationExtension};

struct Other;

impl Component for Other {
    fn name(&self) -> &str {
        "Other"
    }

    fn template(&self) -> &str {
        "{{ title }}"
    }

    fn type_spec(&self) -> ComponentTypeSpec {
        ComponentTypeSpec::builder()
            .kwargs(stencil_core::RecordDescriptor::new().field("title", stencil_core::TypeDescriptor::Str))
            .build()
    }
}

#[test]
fn concurrent_renders_resolve_each_class_once() {
    let validator = Arc::new(SchemaValidationExtension::default());
    let spec = ComponentTypeSpec::builder()
        .args(test_args())
        .kwargs(test_kwargs())
        .slots(test_slots())
        .data(test_data())
        .build();
    let renderer = Arc::new(
        Renderer::builder()
            .shared_extension(validator.clone())
            .component(TestComponent::with_data(spec))
            .component(Other)
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let renderer = Arc::clone(&renderer);
            thread::spawn(move || {
                for j in 0..25 {
                    if (i + j) % 2 == 0 {
                        renderer.render("TestComponent", typed_input()).unwrap();
                    } else {
                        let err = renderer
                            .render("Other", RenderInput::new().kwarg("title", 7))
                            .unwrap_err();
                        assert!(err.downcast_hook_error::<ChannelValidationError>().is_some());
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(validator.cache().resolutions(), 2);
    assert_eq!(validator.cache().len(), 2);

    let ok = renderer
        .render("Other", RenderInput::new().kwarg("title", json!("Hello")))
        .unwrap();
    assert_eq!(ok.output, "Hello");
}

#[test]
fn racing_first_resolution_runs_once() {
    use stencil_core::ComponentName;
    use stencil_render::ComponentClass;

    let validator = Arc::new(SchemaValidationExtension::default());
    let class = Arc::new(ComponentClass::new(
        ComponentName::new("Racer").unwrap(),
        ComponentTypeSpec::builder().args(test_args()).build(),
    ));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let validator = Arc::clone(&validator);
            let class = Arc::clone(&class);
            thread::spawn(move || {
                validator
                    .get_schema(&class, stencil_core::Channel::Args)
                    .unwrap()
                    .is_some()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(validator.cache().resolutions(), 1);
}
