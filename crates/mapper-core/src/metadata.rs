// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declarative metadata records.
//!
//! Each record is attached to a type or a member by a step outside this crate
//! (usually `#[derive(Mapped)]`) and is never mutated afterwards. A record is
//! either wholly absent or fully present; absent fields of a present record
//! take the defaults documented on each field.
//!
//! | Record | Attached to | Consumed by |
//! |--------|-------------|-------------|
//! | [`PropertyMeta`] | field, method, enum constant | naming, required/default/index/access |
//! | [`CreatorMeta`] | constructor, factory method | creator eligibility and binding |
//! | [`DeserializeMeta`] | type | builder type discovery |
//! | [`BuilderConvention`] | builder type | build method name and setter prefix |
//! | [`IgnoreMeta`] | any member | ignore resolution |
//! | [`EnumNameMeta`] | enum constant | enum value naming |

use std::borrow::Cow;

use crate::member::TypeRef;

/// Index value meaning "no explicit position".
pub const INDEX_UNKNOWN: i32 = -1;

/// Default name of the builder completion method.
pub const DEFAULT_BUILD_METHOD: &str = "build";

/// Default prefix of builder setter methods.
pub const DEFAULT_WITH_PREFIX: &str = "with";

/// Read/write restriction declared on a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Access {
    /// Visibility rules decide.
    #[default]
    Auto,

    /// Only written out, ignored when reading.
    ReadOnly,

    /// Only read in, never written out.
    WriteOnly,

    /// Both directions regardless of visibility.
    ReadWrite
}

/// Property-level metadata.
///
/// # Example
///
/// ```rust
/// use mapper_core::{Access, PropertyMeta};
///
/// let meta = PropertyMeta::new()
///     .with_name("user_name")
///     .with_required(true)
///     .with_access(Access::ReadOnly);
///
/// assert_eq!(meta.name(), Some("user_name"));
/// assert_eq!(meta.index(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PropertyMeta {
    /// External name; empty means no override.
    pub name: Cow<'static, str>,

    /// Whether the property must be present.
    pub required: bool,

    /// Position in a fixed ordering, [`INDEX_UNKNOWN`] when unset.
    pub index: i32,

    /// Textual default value; empty means unset.
    pub default_value: Cow<'static, str>,

    /// Read/write restriction.
    pub access: Access
}

impl PropertyMeta {
    /// Create a record with every field at its default.
    pub const fn new() -> Self {
        Self {
            name:          Cow::Borrowed(""),
            required:      false,
            index:         INDEX_UNKNOWN,
            default_value: Cow::Borrowed(""),
            access:        Access::Auto
        }
    }

    /// Set the external name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the required flag.
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the ordering index.
    #[must_use]
    pub fn with_index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    /// Set the textual default value.
    #[must_use]
    pub fn with_default_value(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Set the access restriction.
    #[must_use]
    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// External name, `None` when empty.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    /// Ordering index, `None` when equal to [`INDEX_UNKNOWN`].
    #[must_use]
    pub const fn index(&self) -> Option<i32> {
        if self.index == INDEX_UNKNOWN {
            None
        } else {
            Some(self.index)
        }
    }

    /// Default value, `None` when empty.
    ///
    /// An empty default cannot be told apart from a missing one.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        non_empty(&self.default_value)
    }
}

impl Default for PropertyMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// Binding mode declared on a creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CreatorMode {
    /// The host picks the mode.
    #[default]
    Default,

    /// A single argument receives the whole incoming value.
    Delegating,

    /// Arguments are matched to incoming named values.
    Properties,

    /// The member must not be used as a creator.
    Disabled
}

/// Creator metadata attached to a constructor or factory method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CreatorMeta {
    /// Requested binding mode.
    pub mode: CreatorMode
}

impl CreatorMeta {
    /// Create creator metadata with the given mode.
    pub const fn new(mode: CreatorMode) -> Self {
        Self {
            mode
        }
    }
}

/// Type-level deserialization metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeserializeMeta {
    /// Builder type, [`TypeRef::NONE`] when not set.
    pub builder: TypeRef
}

impl DeserializeMeta {
    /// Create metadata pointing at a builder type.
    pub const fn new(builder: TypeRef) -> Self {
        Self {
            builder
        }
    }

    /// Builder type, `None` for the sentinel.
    #[must_use]
    pub fn builder(&self) -> Option<&TypeRef> {
        if self.builder.is_none() {
            None
        } else {
            Some(&self.builder)
        }
    }
}

/// Naming convention of a builder type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderConvention {
    /// Zero-argument method producing the built instance.
    pub build_method_name: Cow<'static, str>,

    /// Prefix identifying setter-like methods.
    pub with_prefix: Cow<'static, str>
}

impl BuilderConvention {
    /// Create a convention from both names.
    pub fn new(
        build_method_name: impl Into<Cow<'static, str>>,
        with_prefix: impl Into<Cow<'static, str>>
    ) -> Self {
        Self {
            build_method_name: build_method_name.into(),
            with_prefix:       with_prefix.into()
        }
    }
}

impl Default for BuilderConvention {
    fn default() -> Self {
        Self {
            build_method_name: Cow::Borrowed(DEFAULT_BUILD_METHOD),
            with_prefix:       Cow::Borrowed(DEFAULT_WITH_PREFIX)
        }
    }
}

/// Ignore marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IgnoreMeta {
    /// Whether the member is excluded.
    pub ignored: bool
}

impl IgnoreMeta {
    /// Create an ignore marker.
    pub const fn new(ignored: bool) -> Self {
        Self {
            ignored
        }
    }
}

impl Default for IgnoreMeta {
    fn default() -> Self {
        Self::new(true)
    }
}

/// External name of an enum constant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnumNameMeta {
    /// Override name; empty means no override.
    pub name: Cow<'static, str>
}

impl EnumNameMeta {
    /// Create an enum naming record.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into()
        }
    }

    /// Override name, `None` when empty.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}
