//! # Template Engine
//!
//! The renderer treats templating as a collaborator behind
//! [`TemplateEngine`]. [`Interpolator`] is the built-in engine and supports
//! only what components need to exercise the pipeline:
//!
//! - `{{ key }}` and `{{ key.nested.0 }}` — context data lookup. Strings
//!   render raw, other values as JSON, missing keys as nothing.
//! - `{% slot "name" / %}` — slot content, or nothing when unfilled.
//! - `{% load ... %}` — accepted and ignored.
//!
//! Any other tag is an error.

use regex::{Captures, Regex};
use serde_json::{Map, Value};
use stencil_core::ComponentName;

use crate::slots::{SlotContext, SlotMap};

/// What a template can see.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    /// The component being rendered.
    pub component: &'a ComponentName,
    /// Context data.
    pub data: &'a Map<String, Value>,
    /// Slot content.
    pub slots: &'a SlotMap,
}

/// Turns template text plus context into output.
pub trait TemplateEngine: Send + Sync {
    /// Render `template` against `ctx`. Errors are human-readable reasons.
    fn render(&self, template: &str, ctx: &TemplateContext<'_>) -> Result<String, String>;
}

/// Minimal `{{ var }}` / `{% slot %}` engine.
#[derive(Debug, Clone)]
pub struct Interpolator {
    token: Regex,
    slot_tag: Regex,
}

impl Interpolator {
    /// Compile the engine's patterns.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            token: Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_.]*)\s*\}\}|\{%\s*(.*?)\s*%\}")?,
            slot_tag: Regex::new(r#"^slot\s+"([^"]+)"\s*/$"#)?,
        })
    }

    fn expand(&self, caps: &Captures<'_>, ctx: &TemplateContext<'_>) -> Result<String, String> {
        if let Some(path) = caps.get(1) {
            return Ok(lookup(ctx.data, path.as_str()).map(display).unwrap_or_default());
        }

        let tag = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        if let Some(slot) = self.slot_tag.captures(tag).and_then(|c| c.get(1)) {
            let slot = slot.as_str();
            let slot_ctx = SlotContext {
                component: ctx.component,
                slot,
                data: ctx.data,
            };
            return Ok(ctx
                .slots
                .get(slot)
                .map(|fill| fill.resolve(&slot_ctx))
                .unwrap_or_default());
        }
        if tag == "load" || tag.starts_with("load ") {
            return Ok(String::new());
        }
        Err(format!("unsupported tag '{{% {tag} %}}'"))
    }
}

impl TemplateEngine for Interpolator {
    fn render(&self, template: &str, ctx: &TemplateContext<'_>) -> Result<String, String> {
        let mut out = String::with_capacity(template.len());
        let mut last = 0;
        for caps in self.token.captures_iter(template) {
            let Some(whole) = caps.get(0) else { continue };
            out.push_str(&template[last..whole.start()]);
            out.push_str(&self.expand(&caps, ctx)?);
            last = whole.end();
        }
        out.push_str(&template[last..]);
        Ok(out)
    }
}

fn lookup<'v>(data: &'v Map<String, Value>, path: &str) -> Option<&'v Value> {
    let mut parts = path.split('.');
    let mut current = data.get(parts.next()?)?;
    for part in parts {
        current = match current {
            Value::Object(map) => map.get(part)?,
            Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::SlotFill;
    use serde_json::json;

    fn render(template: &str, data: Value, slots: SlotMap) -> Result<String, String> {
        let name = ComponentName::new("Card").unwrap();
        let Value::Object(data) = data else {
            panic!("data must be an object")
        };
        let ctx = TemplateContext {
            component: &name,
            data: &data,
            slots: &slots,
        };
        Interpolator::new().unwrap().render(template, &ctx)
    }

    #[test]
    fn interpolates_variables() {
        let out = render(
            "Data 1: <strong>{{ data1 }}</strong> Data 2: {{data2}}",
            json!({"data1": 123, "data2": "str"}),
            SlotMap::new(),
        )
        .unwrap();
        assert_eq!(out, "Data 1: <strong>123</strong> Data 2: str");
    }

    #[test]
    fn dotted_paths_reach_into_objects_and_arrays() {
        let out = render(
            "{{ a.nested }} {{ b.1 }} {{ missing.x }}",
            json!({"a": {"nested": 1}, "b": [1, "str", 456]}),
            SlotMap::new(),
        )
        .unwrap();
        assert_eq!(out, "1 str ");
    }

    #[test]
    fn renders_literal_and_dynamic_slots() {
        let mut slots = SlotMap::new();
        slots.insert("slot1".into(), SlotFill::from("SLOT1"));
        slots.insert("slot2".into(), SlotFill::dynamic(|_| "abc".to_string()));
        let out = render(
            "{% load component_tags %}Slot 1: {% slot \"slot1\" / %} Slot 2: {% slot \"slot2\" / %}{% slot \"slot3\" / %}",
            json!({}),
            slots,
        )
        .unwrap();
        assert_eq!(out, "Slot 1: SLOT1 Slot 2: abc");
    }

    #[test]
    fn unknown_tags_are_errors() {
        let err = render("{% if x %}", json!({}), SlotMap::new()).unwrap_err();
        assert!(err.contains("unsupported tag"));
    }
}
