//! # Describing Rust Types
//!
//! The `Describe` trait maps a Rust type to the [`TypeDescriptor`] of the
//! values it stands for, so a component can declare its positions with
//! ordinary Rust types:
//!
//! ```
//! use stencil_core::{ChannelType, ComponentTypeSpec, TypeDescriptor};
//!
//! let spec = ComponentTypeSpec::builder()
//!     .args(ChannelType::of::<(i64, String, i64)>())
//!     .build();
//! assert_eq!(
//!     spec.args.descriptor(),
//!     Some(&TypeDescriptor::tuple([TypeDescriptor::Int, TypeDescriptor::Str, TypeDescriptor::Int])),
//! );
//! ```
//!
//! Records are described by implementing the trait by hand with a
//! [`RecordDescriptor`](crate::RecordDescriptor) builder.

use std::collections::{BTreeMap, HashMap};

use crate::descriptor::TypeDescriptor;

/// A Rust type with a structural description.
pub trait Describe {
    /// The descriptor for values of this type.
    fn describe() -> TypeDescriptor;
}

/// Wildcard marker: declaring a position as `AnyType` leaves it unchecked.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyType;

/// Marker for a slot field: literal content or a dynamic slot function.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotContent;

impl Describe for AnyType {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Any
    }
}

impl Describe for SlotContent {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::SlotContent
    }
}

impl Describe for serde_json::Value {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Any
    }
}

/// The unit tuple: no elements.
impl Describe for () {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Tuple(Vec::new())
    }
}

macro_rules! describe_as {
    ($descriptor:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::$descriptor
                }
            }
        )+
    };
}

describe_as!(Int: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
describe_as!(Float: f32, f64);
describe_as!(Bool: bool);
describe_as!(Str: String, str, char);

impl<T: Describe + ?Sized> Describe for &T {
    fn describe() -> TypeDescriptor {
        T::describe()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe() -> TypeDescriptor {
        T::describe()
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::optional(T::describe())
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list(T::describe())
    }
}

impl<T: Describe> Describe for [T] {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list(T::describe())
    }
}

impl<T: Describe> Describe for BTreeMap<String, T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::map(T::describe())
    }
}

impl<T: Describe, S> Describe for HashMap<String, T, S> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::map(T::describe())
    }
}

macro_rules! describe_tuple {
    ($($name:ident),+) => {
        impl<$($name: Describe),+> Describe for ($($name,)+) {
            fn describe() -> TypeDescriptor {
                TypeDescriptor::Tuple(vec![$($name::describe()),+])
            }
        }
    };
}

describe_tuple!(A);
describe_tuple!(A, B);
describe_tuple!(A, B, C);
describe_tuple!(A, B, C, D);
describe_tuple!(A, B, C, D, E);
describe_tuple!(A, B, C, D, E, F);
