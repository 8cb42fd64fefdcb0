//! # Type Descriptors
//!
//! A `TypeDescriptor` is the structural description of a value that a
//! component declares for one of its type positions. Descriptors nest
//! arbitrarily: tuples of records, records containing tuples, tuples of
//! tuples. The schema collaborator compiles a descriptor into a reusable
//! schema; this crate only describes shapes.
//!
//! ## Wildcards
//!
//! `TypeDescriptor::Any` accepts every value. At the top level of a type
//! position it is normalized to [`ChannelType::Unchecked`], which skips
//! validation entirely instead of validating against a permissive schema.
//!
//! ## Serialized form
//!
//! Descriptors use serde's externally tagged form, so manifests read
//! naturally:
//!
//! ```text
//! int                                   -> Int
//! { tuple: [int, str, int] }            -> Tuple([Int, Str, Int])
//! { record: { fields: { var1: int } } } -> Record (closed)
//! { optional: str }                     -> Optional(Str)
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Structural description of a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// Any value at all.
    Any,
    /// The null value.
    Null,
    /// A boolean.
    Bool,
    /// An integer.
    Int,
    /// A number. Integers are accepted.
    Float,
    /// A string.
    Str,
    /// Slot content: either literal content or a dynamic slot function.
    /// Any present value satisfies it.
    SlotContent,
    /// The inner type, or null.
    Optional(Box<TypeDescriptor>),
    /// A homogeneous sequence of any length.
    List(Box<TypeDescriptor>),
    /// A fixed-length sequence with one type per position.
    Tuple(Vec<TypeDescriptor>),
    /// A mapping from string keys to values of one type.
    Map(Box<TypeDescriptor>),
    /// A mapping with named, individually typed fields.
    Record(RecordDescriptor),
    /// A value matching at least one of the alternatives.
    Union(Vec<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Fixed-length tuple of the given element types.
    pub fn tuple(items: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        Self::Tuple(items.into_iter().collect())
    }

    /// Homogeneous list of `item`.
    pub fn list(item: TypeDescriptor) -> Self {
        Self::List(Box::new(item))
    }

    /// `inner` or null.
    pub fn optional(inner: TypeDescriptor) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// String-keyed mapping with values of `value`.
    pub fn map(value: TypeDescriptor) -> Self {
        Self::Map(Box::new(value))
    }

    /// Union of the given alternatives.
    pub fn union(alternatives: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        Self::Union(alternatives.into_iter().collect())
    }

    /// Whether this descriptor accepts every value.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Whether values of this shape are sequences (suitable for positional
    /// arguments).
    pub fn is_sequence_shape(&self) -> bool {
        match self {
            Self::Tuple(_) | Self::List(_) => true,
            Self::Union(alts) => !alts.is_empty() && alts.iter().all(Self::is_sequence_shape),
            _ => false,
        }
    }

    /// Whether values of this shape are string-keyed mappings (suitable for
    /// keyword arguments, slots, and context data).
    pub fn is_mapping_shape(&self) -> bool {
        match self {
            Self::Record(_) | Self::Map(_) => true,
            Self::Union(alts) => !alts.is_empty() && alts.iter().all(Self::is_mapping_shape),
            _ => false,
        }
    }

    /// Nesting depth; scalars are depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Any
            | Self::Null
            | Self::Bool
            | Self::Int
            | Self::Float
            | Self::Str
            | Self::SlotContent => 1,
            Self::Optional(inner) | Self::List(inner) | Self::Map(inner) => 1 + inner.depth(),
            Self::Tuple(items) | Self::Union(items) => {
                1 + items.iter().map(Self::depth).max().unwrap_or(0)
            }
            Self::Record(record) => {
                1 + record.fields.values().map(Self::depth).max().unwrap_or(0)
            }
        }
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn join(f: &mut std::fmt::Formatter<'_>, items: &[TypeDescriptor], sep: &str) -> std::fmt::Result {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(sep)?;
                }
                write!(f, "{item}")?;
            }
            Ok(())
        }

        match self {
            Self::Any => f.write_str("any"),
            Self::Null => f.write_str("null"),
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::Str => f.write_str("str"),
            Self::SlotContent => f.write_str("slot_content"),
            Self::Optional(inner) => write!(f, "optional[{inner}]"),
            Self::List(inner) => write!(f, "list[{inner}]"),
            Self::Map(inner) => write!(f, "map[str, {inner}]"),
            Self::Tuple(items) => {
                f.write_str("tuple[")?;
                join(f, items, ", ")?;
                f.write_str("]")
            }
            Self::Union(items) => join(f, items, " | "),
            Self::Record(record) => write!(f, "{record}"),
        }
    }
}

fn closed_by_default() -> bool {
    true
}

/// A mapping with named fields.
///
/// Fields are required unless listed in `optional`. A closed record (the
/// default) rejects keys it does not declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDescriptor {
    /// Declared fields and their types.
    #[serde(default)]
    pub fields: BTreeMap<String, TypeDescriptor>,
    /// Names of fields that may be absent.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub optional: BTreeSet<String>,
    /// Whether undeclared keys are rejected.
    #[serde(default = "closed_by_default")]
    pub closed: bool,
}

impl RecordDescriptor {
    /// An empty closed record.
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
            optional: BTreeSet::new(),
            closed: true,
        }
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    /// Add a field that may be absent.
    pub fn optional_field(mut self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        let name = name.into();
        self.optional.insert(name.clone());
        self.fields.insert(name, ty);
        self
    }

    /// Accept keys that are not declared.
    pub fn open(mut self) -> Self {
        self.closed = false;
        self
    }

    /// Names of fields that must be present, in sorted order.
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.fields
            .keys()
            .filter(|name| !self.optional.contains(*name))
            .map(String::as_str)
    }
}

impl Default for RecordDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl From<RecordDescriptor> for TypeDescriptor {
    fn from(record: RecordDescriptor) -> Self {
        TypeDescriptor::Record(record)
    }
}

impl std::fmt::Display for RecordDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("record{")?;
        for (i, (name, ty)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let marker = if self.optional.contains(name) { "?" } else { "" };
            write!(f, "{name}{marker}: {ty}")?;
        }
        if !self.closed {
            f.write_str(if self.fields.is_empty() { "..." } else { ", ..." })?;
        }
        f.write_str("}")
    }
}

/// The declared type of one position: validated against a descriptor, or
/// not validated at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChannelType {
    /// No schema was declared, or the wildcard was declared.
    #[default]
    Unchecked,
    /// Values are validated against this descriptor.
    Checked(TypeDescriptor),
}

impl ChannelType {
    /// The channel type declared by a Rust type.
    pub fn of<T: crate::describe::Describe + ?Sized>() -> Self {
        Self::from(T::describe())
    }

    /// The descriptor, if this position is checked.
    pub fn descriptor(&self) -> Option<&TypeDescriptor> {
        match self {
            Self::Unchecked => None,
            Self::Checked(descriptor) => Some(descriptor),
        }
    }

    /// Whether values at this position are validated.
    pub fn is_checked(&self) -> bool {
        matches!(self, Self::Checked(_))
    }
}

impl From<TypeDescriptor> for ChannelType {
    fn from(descriptor: TypeDescriptor) -> Self {
        if descriptor.is_wildcard() {
            Self::Unchecked
        } else {
            Self::Checked(descriptor)
        }
    }
}

impl From<RecordDescriptor> for ChannelType {
    fn from(record: RecordDescriptor) -> Self {
        Self::Checked(TypeDescriptor::Record(record))
    }
}

impl Serialize for ChannelType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unchecked => TypeDescriptor::Any.serialize(serializer),
            Self::Checked(descriptor) => descriptor.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ChannelType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<TypeDescriptor>::deserialize(deserializer)
            .map(|declared| declared.map(Self::from).unwrap_or_default())
    }
}
