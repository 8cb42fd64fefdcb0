//! # Component Type Specs
//!
//! A `ComponentTypeSpec` is the six-position type declaration attached to a
//! component class: `(Args, Kwargs, Slots, Data, JsData, CssData)`. It is
//! fixed when the class is defined and never mutated afterwards; the
//! renderer wraps it in an `Arc` at registration and shares it with every
//! render of that class.
//!
//! ## Declaration Checks
//!
//! [`ComponentTypeSpec::check_declaration`] rejects contradictory
//! declarations eagerly, before any schema is compiled:
//!
//! - positional arguments must be a sequence shape (tuple, list, or a union
//!   of sequence shapes);
//! - keyword arguments, slots, and data must be a mapping shape (record,
//!   map, or a union of mapping shapes);
//! - record fields must have non-empty names, and `optional` may only name
//!   declared fields;
//! - slot records may only declare slot-content fields (optionally
//!   nullable);
//! - unions must declare at least one alternative.
//!
//! The empty tuple is a valid declaration: a component that takes no
//! positional arguments.

use serde::{Deserialize, Serialize};

use crate::channel::{Channel, TypeParam};
use crate::descriptor::{ChannelType, RecordDescriptor, TypeDescriptor};
use crate::error::SchemaResolutionError;
use crate::identity::ComponentName;

/// The declared types of a component class.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentTypeSpec {
    /// Positional arguments.
    #[serde(default)]
    pub args: ChannelType,
    /// Keyword arguments.
    #[serde(default)]
    pub kwargs: ChannelType,
    /// Slot content.
    #[serde(default)]
    pub slots: ChannelType,
    /// Computed context data.
    #[serde(default)]
    pub data: ChannelType,
    /// Script data. Declared only.
    #[serde(default)]
    pub js_data: ChannelType,
    /// Style data. Declared only.
    #[serde(default)]
    pub css_data: ChannelType,
}

impl ComponentTypeSpec {
    /// A spec with every position unchecked.
    pub fn unchecked() -> Self {
        Self::default()
    }

    /// Start building a spec.
    pub fn builder() -> ComponentTypeSpecBuilder {
        ComponentTypeSpecBuilder::default()
    }

    /// The declared type at a position.
    pub fn get(&self, param: TypeParam) -> &ChannelType {
        match param {
            TypeParam::Args => &self.args,
            TypeParam::Kwargs => &self.kwargs,
            TypeParam::Slots => &self.slots,
            TypeParam::Data => &self.data,
            TypeParam::JsData => &self.js_data,
            TypeParam::CssData => &self.css_data,
        }
    }

    /// The declared type for a validated channel.
    pub fn channel(&self, channel: Channel) -> &ChannelType {
        self.get(channel.type_param())
    }

    /// Channels with a checked declaration, in declaration order.
    pub fn checked_channels(&self) -> Vec<Channel> {
        Channel::ALL
            .into_iter()
            .filter(|c| self.channel(*c).is_checked())
            .collect()
    }

    /// Whether no channel is validated.
    pub fn is_fully_unchecked(&self) -> bool {
        self.checked_channels().is_empty()
    }

    /// Reject malformed or contradictory declarations.
    ///
    /// Only the four validated positions are checked; `JsData` and
    /// `CssData` are carried as declared.
    pub fn check_declaration(&self, component: &ComponentName) -> Result<(), SchemaResolutionError> {
        for channel in Channel::ALL {
            let Some(descriptor) = self.channel(channel).descriptor() else {
                continue;
            };
            let param = channel.type_param();
            let fail = |reason: String| SchemaResolutionError::new(component.as_str(), param, reason);

            match channel {
                Channel::Args if !descriptor.is_sequence_shape() => {
                    return Err(fail(format!(
                        "positional arguments must be a tuple or list, found {descriptor}"
                    )));
                }
                Channel::Kwargs | Channel::Slots | Channel::Data if !descriptor.is_mapping_shape() => {
                    return Err(fail(format!(
                        "{channel} must be a record or map, found {descriptor}"
                    )));
                }
                _ => {}
            }

            check_nested(descriptor).map_err(fail)?;

            if channel == Channel::Slots {
                check_slot_fields(descriptor).map_err(fail)?;
            }
        }
        Ok(())
    }
}

fn check_nested(descriptor: &TypeDescriptor) -> Result<(), String> {
    match descriptor {
        TypeDescriptor::Tuple(items) => items.iter().try_for_each(check_nested),
        TypeDescriptor::Union(alts) => {
            if alts.is_empty() {
                return Err("unions must declare at least one alternative".into());
            }
            alts.iter().try_for_each(check_nested)
        }
        TypeDescriptor::Record(record) => {
            check_record(record)?;
            record.fields.values().try_for_each(check_nested)
        }
        TypeDescriptor::Optional(inner) | TypeDescriptor::List(inner) | TypeDescriptor::Map(inner) => {
            check_nested(inner)
        }
        _ => Ok(()),
    }
}

fn check_record(record: &RecordDescriptor) -> Result<(), String> {
    if record.fields.keys().any(|name| name.is_empty()) {
        return Err("record field names must not be empty".into());
    }
    if let Some(unknown) = record.optional.iter().find(|name| !record.fields.contains_key(*name)) {
        return Err(format!("optional field '{unknown}' is not declared"));
    }
    Ok(())
}

fn check_slot_fields(descriptor: &TypeDescriptor) -> Result<(), String> {
    let is_slot_content = |ty: &TypeDescriptor| match ty {
        TypeDescriptor::SlotContent | TypeDescriptor::Any => true,
        TypeDescriptor::Optional(inner) => {
            matches!(**inner, TypeDescriptor::SlotContent | TypeDescriptor::Any)
        }
        _ => false,
    };

    match descriptor {
        TypeDescriptor::Record(record) => {
            match record.fields.iter().find(|(_, ty)| !is_slot_content(ty)) {
                Some((name, ty)) => Err(format!("slot '{name}' must be slot_content, found {ty}")),
                None => Ok(()),
            }
        }
        TypeDescriptor::Map(inner) if !is_slot_content(inner) => {
            Err(format!("slot values must be slot_content, found {inner}"))
        }
        TypeDescriptor::Union(alts) => alts.iter().try_for_each(check_slot_fields),
        _ => Ok(()),
    }
}

/// Builder for [`ComponentTypeSpec`]. Unset positions stay unchecked.
#[derive(Debug, Clone, Default)]
pub struct ComponentTypeSpecBuilder {
    spec: ComponentTypeSpec,
}

impl ComponentTypeSpecBuilder {
    /// Declare positional arguments.
    pub fn args(mut self, ty: impl Into<ChannelType>) -> Self {
        self.spec.args = ty.into();
        self
    }

    /// Declare keyword arguments.
    pub fn kwargs(mut self, ty: impl Into<ChannelType>) -> Self {
        self.spec.kwargs = ty.into();
        self
    }

    /// Declare slots.
    pub fn slots(mut self, ty: impl Into<ChannelType>) -> Self {
        self.spec.slots = ty.into();
        self
    }

    /// Declare computed context data.
    pub fn data(mut self, ty: impl Into<ChannelType>) -> Self {
        self.spec.data = ty.into();
        self
    }

    /// Declare script data.
    pub fn js_data(mut self, ty: impl Into<ChannelType>) -> Self {
        self.spec.js_data = ty.into();
        self
    }

    /// Declare style data.
    pub fn css_data(mut self, ty: impl Into<ChannelType>) -> Self {
        self.spec.css_data = ty.into();
        self
    }

    /// Finish the spec.
    pub fn build(self) -> ComponentTypeSpec {
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::{AnyType, SlotContent};

    fn name() -> ComponentName {
        ComponentName::new("TestComponent").unwrap()
    }

    fn test_kwargs() -> RecordDescriptor {
        RecordDescriptor::new()
            .field("var1", TypeDescriptor::Int)
            .field("var2", TypeDescriptor::Str)
            .field("var3", TypeDescriptor::Int)
    }

    fn test_slots() -> RecordDescriptor {
        RecordDescriptor::new()
            .field("slot1", TypeDescriptor::SlotContent)
            .field("slot2", TypeDescriptor::SlotContent)
    }

    #[test]
    fn default_spec_is_fully_unchecked() {
        let spec = ComponentTypeSpec::unchecked();
        assert!(spec.is_fully_unchecked());
        assert!(spec.check_declaration(&name()).is_ok());
    }

    #[test]
    fn all_wildcards_are_unchecked() {
        let spec = ComponentTypeSpec::builder()
            .args(ChannelType::of::<AnyType>())
            .kwargs(ChannelType::of::<AnyType>())
            .slots(ChannelType::of::<AnyType>())
            .data(ChannelType::of::<AnyType>())
            .js_data(ChannelType::of::<AnyType>())
            .css_data(ChannelType::of::<AnyType>())
            .build();
        assert!(spec.is_fully_unchecked());
    }

    #[test]
    fn checked_channels_in_order() {
        let spec = ComponentTypeSpec::builder()
            .data(RecordDescriptor::new().field("data1", TypeDescriptor::Int))
            .args(ChannelType::of::<(i64, String, i64)>())
            .build();
        assert_eq!(spec.checked_channels(), vec![Channel::Args, Channel::Data]);
        assert!(spec.check_declaration(&name()).is_ok());
    }

    #[test]
    fn js_and_css_data_are_never_channels() {
        let spec = ComponentTypeSpec::builder()
            .js_data(TypeDescriptor::Int)
            .css_data(TypeDescriptor::Str)
            .build();
        assert!(spec.is_fully_unchecked());
        assert!(spec.get(TypeParam::JsData).is_checked());
        // Not a mapping, but never validated, so the declaration is accepted.
        assert!(spec.check_declaration(&name()).is_ok());
    }

    #[test]
    fn full_spec_passes_checks() {
        let spec = ComponentTypeSpec::builder()
            .args(ChannelType::of::<(i64, String, i64)>())
            .kwargs(test_kwargs())
            .slots(test_slots())
            .data(
                RecordDescriptor::new()
                    .field("data1", TypeDescriptor::Int)
                    .field("data2", TypeDescriptor::Str),
            )
            .build();
        assert_eq!(spec.checked_channels(), Channel::ALL.to_vec());
        spec.check_declaration(&name()).unwrap();
    }

    #[test]
    fn args_must_be_sequence() {
        let spec = ComponentTypeSpec::builder().args(test_kwargs()).build();
        let err = spec.check_declaration(&name()).unwrap_err();
        assert_eq!(err.position, TypeParam::Args);
        assert!(err.reason.contains("tuple or list"));
    }

    #[test]
    fn kwargs_must_be_mapping() {
        let spec = ComponentTypeSpec::builder().kwargs(ChannelType::of::<(i64,)>()).build();
        let err = spec.check_declaration(&name()).unwrap_err();
        assert_eq!(err.position, TypeParam::Kwargs);
    }

    #[test]
    fn slots_must_be_slot_content() {
        let spec = ComponentTypeSpec::builder()
            .slots(RecordDescriptor::new().field("slot1", TypeDescriptor::Int))
            .build();
        let err = spec.check_declaration(&name()).unwrap_err();
        assert!(err.reason.contains("slot 'slot1'"));

        let nullable = ComponentTypeSpec::builder()
            .slots(RecordDescriptor::new().optional_field(
                "footer",
                ChannelType::of::<Option<SlotContent>>().descriptor().cloned().unwrap(),
            ))
            .build();
        assert!(nullable.check_declaration(&name()).is_ok());
    }

    #[test]
    fn undeclared_optional_field_rejected() {
        let mut record = test_kwargs();
        record.optional.insert("missing".into());
        let spec = ComponentTypeSpec::builder().kwargs(record).build();
        let err = spec.check_declaration(&name()).unwrap_err();
        assert!(err.reason.contains("'missing'"));
    }

    #[test]
    fn empty_tuple_declares_no_positional_arguments() {
        let spec = ComponentTypeSpec::builder().args(ChannelType::of::<()>()).build();
        assert_eq!(spec.args.descriptor(), Some(&TypeDescriptor::Tuple(vec![])));
        assert!(spec.check_declaration(&name()).is_ok());

        let nested = ComponentTypeSpec::builder()
            .args(TypeDescriptor::tuple([TypeDescriptor::Tuple(vec![])]))
            .build();
        assert!(nested.check_declaration(&name()).is_ok());
    }

    #[test]
    fn empty_union_rejected() {
        let spec = ComponentTypeSpec::builder()
            .args(TypeDescriptor::tuple([TypeDescriptor::Union(vec![])]))
            .build();
        let err = spec.check_declaration(&name()).unwrap_err();
        assert!(err.reason.contains("at least one alternative"));
    }

    #[test]
    fn deserializes_with_missing_positions_unchecked() {
        let spec: ComponentTypeSpec = serde_json::from_str(
            r#"{"args": {"tuple": ["int", "str", "int"]}, "data": "any"}"#,
        )
        .unwrap();
        assert!(spec.args.is_checked());
        assert!(!spec.kwargs.is_checked());
        assert!(!spec.data.is_checked());
    }

    #[test]
    fn rejects_misspelled_positions() {
        let result = serde_json::from_str::<ComponentTypeSpec>(r#"{"kwarg": "int"}"#);
        assert!(result.is_err());
    }
}
