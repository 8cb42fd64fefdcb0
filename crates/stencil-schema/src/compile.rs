//! # Schema Compilation
//!
//! Compiles a [`TypeDescriptor`] into a JSON Schema (Draft 2020-12)
//! document and a reusable `jsonschema` validator.
//!
//! ## Mapping
//!
//! | Descriptor      | JSON Schema                                                     |
//! |-----------------|-----------------------------------------------------------------|
//! | `Int`           | `{"type": "integer"}`                                           |
//! | `Float`         | `{"type": "number"}` (integers accepted)                        |
//! | `Str` / `Bool` / `Null` | `string` / `boolean` / `null`                           |
//! | `Any`           | `{}`                                                            |
//! | `SlotContent`   | `{"title": "slot_content"}` (any present value)                 |
//! | `Optional(t)`   | `{"anyOf": [t, {"type": "null"}]}`                              |
//! | `List(t)`       | `{"type": "array", "items": t}`                                 |
//! | `Tuple(ts)`     | `{"type": "array", "prefixItems": ts, "items": false, ...}`     |
//! | `Map(t)`        | `{"type": "object", "additionalProperties": t}`                 |
//! | `Record`        | `properties` + `required`, `additionalProperties: false` if closed |
//! | `Union(ts)`     | `{"anyOf": ts}`                                                 |
//!
//! Tuples pin their length with `minItems`/`maxItems`, so a call with too
//! few positional arguments is rejected rather than partially checked. The
//! empty tuple has no `prefixItems` (the keyword requires at least one
//! schema) and accepts only `[]`.
//!
//! Validation never mutates the value: a [`SchemaRef`] is a predicate.

use std::fmt;
use std::sync::Arc;

use jsonschema::Validator;
use serde_json::{json, Map, Value};
use stencil_core::{RecordDescriptor, TypeDescriptor};

use crate::error::SchemaError;
use crate::violation::{SchemaViolations, Violation};

/// Translate a descriptor into a JSON Schema document.
pub fn to_json_schema(descriptor: &TypeDescriptor) -> Value {
    match descriptor {
        TypeDescriptor::Any => json!({}),
        TypeDescriptor::SlotContent => json!({ "title": "slot_content" }),
        TypeDescriptor::Null => json!({ "type": "null" }),
        TypeDescriptor::Bool => json!({ "type": "boolean" }),
        TypeDescriptor::Int => json!({ "type": "integer" }),
        TypeDescriptor::Float => json!({ "type": "number" }),
        TypeDescriptor::Str => json!({ "type": "string" }),
        TypeDescriptor::Optional(inner) => json!({
            "anyOf": [to_json_schema(inner), { "type": "null" }]
        }),
        TypeDescriptor::List(item) => json!({
            "type": "array",
            "items": to_json_schema(item),
        }),
        TypeDescriptor::Tuple(items) if items.is_empty() => json!({
            "type": "array",
            "items": false,
            "minItems": 0,
            "maxItems": 0,
        }),
        TypeDescriptor::Tuple(items) => json!({
            "type": "array",
            "prefixItems": items.iter().map(to_json_schema).collect::<Vec<_>>(),
            "items": false,
            "minItems": items.len(),
            "maxItems": items.len(),
        }),
        TypeDescriptor::Map(value) => json!({
            "type": "object",
            "additionalProperties": to_json_schema(value),
        }),
        TypeDescriptor::Record(record) => record_schema(record),
        TypeDescriptor::Union(alternatives) => json!({
            "anyOf": alternatives.iter().map(to_json_schema).collect::<Vec<_>>()
        }),
    }
}

fn record_schema(record: &RecordDescriptor) -> Value {
    let properties: Map<String, Value> = record
        .fields
        .iter()
        .map(|(name, ty)| (name.clone(), to_json_schema(ty)))
        .collect();

    let mut schema = Map::new();
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), Value::Object(properties));

    let required: Vec<&str> = record.required().collect();
    if !required.is_empty() {
        schema.insert("required".into(), json!(required));
    }
    if record.closed {
        schema.insert("additionalProperties".into(), Value::Bool(false));
    }
    Value::Object(schema)
}

/// Compile a descriptor into a reusable, shareable schema.
pub fn build_schema(descriptor: &TypeDescriptor) -> Result<SchemaRef, SchemaError> {
    let json_schema = to_json_schema(descriptor);

    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);
    let validator = opts.build(&json_schema).map_err(|e| SchemaError::Build {
        descriptor: descriptor.to_string(),
        reason: e.to_string(),
    })?;

    Ok(SchemaRef(Arc::new(CompiledSchema {
        descriptor: descriptor.clone(),
        json_schema,
        validator,
    })))
}

struct CompiledSchema {
    descriptor: TypeDescriptor,
    json_schema: Value,
    validator: Validator,
}

/// A compiled schema, cheap to clone and safe to share across threads.
#[derive(Clone)]
pub struct SchemaRef(Arc<CompiledSchema>);

impl SchemaRef {
    /// Validate `value`, collecting every violation.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolations> {
        let violations: Vec<Violation> = self
            .0
            .validator
            .iter_errors(value)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaViolations::new(violations))
        }
    }

    /// Whether `value` satisfies the schema.
    pub fn is_valid(&self, value: &Value) -> bool {
        self.0.validator.is_valid(value)
    }

    /// The descriptor this schema was compiled from.
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.0.descriptor
    }

    /// The generated JSON Schema document.
    pub fn json_schema(&self) -> &Value {
        &self.0.json_schema
    }

    /// Whether two handles share one compiled schema.
    pub fn ptr_eq(&self, other: &SchemaRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaRef")
            .field("descriptor", &self.0.descriptor.to_string())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_schema() -> SchemaRef {
        build_schema(&TypeDescriptor::tuple([
            TypeDescriptor::Int,
            TypeDescriptor::Str,
            TypeDescriptor::Int,
        ]))
        .unwrap()
    }

    fn kwargs_record() -> RecordDescriptor {
        RecordDescriptor::new()
            .field("var1", TypeDescriptor::Int)
            .field("var2", TypeDescriptor::Str)
            .field("var3", TypeDescriptor::Int)
    }

    #[test]
    fn tuple_accepts_exact_arity() {
        assert!(args_schema().is_valid(&json!([123, "str", 456])));
    }

    #[test]
    fn tuple_rejects_short_and_long_sequences() {
        let schema = args_schema();
        assert!(schema.validate(&json!([123, "str"])).is_err());
        assert!(schema.validate(&json!([123, "str", 456, 789])).is_err());
    }

    #[test]
    fn tuple_reports_positional_path() {
        let err = args_schema().validate(&json!([123, 456, 789])).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.violations()[0].instance_path, "/1");
    }

    #[test]
    fn empty_tuple_accepts_only_empty_sequence() {
        let schema = build_schema(&TypeDescriptor::Tuple(vec![])).unwrap();
        assert!(schema.is_valid(&json!([])));
        assert!(!schema.is_valid(&json!([1])));
        assert_eq!(schema.json_schema()["maxItems"], json!(0));
        assert!(schema.json_schema().get("prefixItems").is_none());
    }

    #[test]
    fn record_reports_missing_field() {
        let schema = build_schema(&kwargs_record().into()).unwrap();
        let err = schema
            .validate(&json!({"var1": 1, "var2": "x"}))
            .unwrap_err();
        assert!(err.violations()[0].message.contains("var3"));
        assert_eq!(err.violations()[0].instance_path, "");
    }

    #[test]
    fn closed_record_rejects_unknown_keys() {
        let schema = build_schema(&kwargs_record().into()).unwrap();
        let err = schema
            .validate(&json!({"var1": 1, "var2": "x", "var3": 2, "extra": true}))
            .unwrap_err();
        assert!(err.to_string().contains("extra"));
    }

    #[test]
    fn open_record_accepts_unknown_keys() {
        let schema = build_schema(&kwargs_record().open().into()).unwrap();
        assert!(schema.is_valid(&json!({"var1": 1, "var2": "x", "var3": 2, "extra": true})));
    }

    #[test]
    fn optional_fields_may_be_absent_or_null() {
        let record = RecordDescriptor::new()
            .field("title", TypeDescriptor::Str)
            .optional_field("subtitle", TypeDescriptor::optional(TypeDescriptor::Str));
        let schema = build_schema(&record.into()).unwrap();
        assert!(schema.is_valid(&json!({"title": "a"})));
        assert!(schema.is_valid(&json!({"title": "a", "subtitle": null})));
        assert!(!schema.is_valid(&json!({"title": "a", "subtitle": 3})));
    }

    #[test]
    fn float_accepts_integers_without_coercion() {
        let schema = build_schema(&TypeDescriptor::Float).unwrap();
        let value = json!(3);
        assert!(schema.is_valid(&value));
        assert_eq!(value, json!(3));
    }

    #[test]
    fn int_rejects_strings() {
        let schema = build_schema(&TypeDescriptor::Int).unwrap();
        assert!(!schema.is_valid(&json!("3")));
    }

    #[test]
    fn map_checks_every_value() {
        let schema = build_schema(&TypeDescriptor::map(TypeDescriptor::Int)).unwrap();
        assert!(schema.is_valid(&json!({"a": 1, "b": 2})));
        let err = schema.validate(&json!({"a": 1, "b": "x"})).unwrap_err();
        assert_eq!(err.violations()[0].instance_path, "/b");
    }

    #[test]
    fn union_accepts_any_alternative() {
        let schema = build_schema(&TypeDescriptor::union([
            TypeDescriptor::Int,
            TypeDescriptor::Str,
        ]))
        .unwrap();
        assert!(schema.is_valid(&json!(1)));
        assert!(schema.is_valid(&json!("a")));
        assert!(!schema.is_valid(&json!(true)));
    }

    #[test]
    fn slot_content_accepts_literal_and_dynamic_markers() {
        let schema = build_schema(&TypeDescriptor::SlotContent).unwrap();
        assert!(schema.is_valid(&json!("<b>hi</b>")));
        assert!(schema.is_valid(&json!({"dynamic": true})));
    }

    #[test]
    fn generated_tuple_schema_shape() {
        let schema = to_json_schema(&TypeDescriptor::tuple([TypeDescriptor::Int]));
        assert_eq!(
            schema,
            json!({
                "type": "array",
                "prefixItems": [{"type": "integer"}],
                "items": false,
                "minItems": 1,
                "maxItems": 1,
            })
        );
    }

    #[test]
    fn clones_share_compiled_schema() {
        let a = args_schema();
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&args_schema()));
        assert!(format!("{a:?}").contains("tuple[int, str, int]"));
    }
}
