//! # Channels and Type Positions
//!
//! A component declares up to six types, in a fixed order:
//! `(Args, Kwargs, Slots, Data, JsData, CssData)`. Only the first four are
//! validation **channels**: distinct data surfaces that are checked
//! independently during a render. `JsData` and `CssData` are carried in the
//! declaration but never validated.
//!
//! `Channel` is the single definition of the validated surfaces. Every
//! `match` on it is exhaustive, so adding a channel forces every call site
//! to handle it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::StencilError;

/// A data surface of a render that is validated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Positional arguments passed to the render call.
    Args,
    /// Keyword arguments passed to the render call.
    Kwargs,
    /// Slot content supplied by the caller.
    Slots,
    /// Context data computed by the component.
    Data,
}

impl Channel {
    /// All validated channels in declaration order.
    pub const ALL: [Channel; 4] = [Channel::Args, Channel::Kwargs, Channel::Slots, Channel::Data];

    /// The snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Args => "args",
            Self::Kwargs => "kwargs",
            Self::Slots => "slots",
            Self::Data => "data",
        }
    }

    /// Human-readable label used in validation failure messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Args => "Positional arguments",
            Self::Kwargs => "Keyword arguments",
            Self::Slots => "Slots",
            Self::Data => "Data",
        }
    }

    /// The declared type position backing this channel.
    pub fn type_param(&self) -> TypeParam {
        match self {
            Self::Args => TypeParam::Args,
            Self::Kwargs => TypeParam::Kwargs,
            Self::Slots => TypeParam::Slots,
            Self::Data => TypeParam::Data,
        }
    }

    /// Whether the value is supplied by the caller (a pre-condition) rather
    /// than computed by the component (a post-condition).
    pub fn is_caller_supplied(&self) -> bool {
        !matches!(self, Self::Data)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = StencilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "args" => Ok(Self::Args),
            "kwargs" => Ok(Self::Kwargs),
            "slots" => Ok(Self::Slots),
            "data" => Ok(Self::Data),
            other => Err(StencilError::UnknownIdentifier {
                kind: "channel",
                value: other.to_string(),
            }),
        }
    }
}

/// One of the six positions of a component's type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeParam {
    /// Position 0: positional arguments.
    Args,
    /// Position 1: keyword arguments.
    Kwargs,
    /// Position 2: slots.
    Slots,
    /// Position 3: computed context data.
    Data,
    /// Position 4: data handed to the component's script. Not validated.
    JsData,
    /// Position 5: data handed to the component's styles. Not validated.
    CssData,
}

impl TypeParam {
    /// All six positions in declaration order.
    pub const ALL: [TypeParam; 6] = [
        TypeParam::Args,
        TypeParam::Kwargs,
        TypeParam::Slots,
        TypeParam::Data,
        TypeParam::JsData,
        TypeParam::CssData,
    ];

    /// Zero-based index of this position in the declaration tuple.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Args => "args",
            Self::Kwargs => "kwargs",
            Self::Slots => "slots",
            Self::Data => "data",
            Self::JsData => "js_data",
            Self::CssData => "css_data",
        }
    }

    /// The validated channel at this position, if any.
    pub fn channel(&self) -> Option<Channel> {
        match self {
            Self::Args => Some(Channel::Args),
            Self::Kwargs => Some(Channel::Kwargs),
            Self::Slots => Some(Channel::Slots),
            Self::Data => Some(Channel::Data),
            Self::JsData | Self::CssData => None,
        }
    }
}

impl std::fmt::Display for TypeParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeParam {
    type Err = StencilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeParam::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| StencilError::UnknownIdentifier {
                kind: "type position",
                value: s.to_string(),
            })
    }
}
