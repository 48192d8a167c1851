// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Host introspection interface.
//!
//! An object mapper building its internal schema for a type asks an
//! [`Introspector`] about every member, type and enum constant it considers.
//! Each answer is either an explicit decision or `None`, meaning "no opinion,
//! use your own default". Introspectors are composed with
//! [`IntrospectorPair`]: the primary is asked first, the secondary only when
//! the primary has no opinion.
//!
//! # Architecture
//!
//! ```text
//! introspect.rs (trait + host value types)
//! ├── pair.rs        - "try override, else delegate" chain
//! └── convention.rs  - host default strategy (identifier-derived naming)
//! ```

mod convention;
mod pair;

use std::{fmt, sync::Arc};

pub use convention::{ConventionIntrospector, NamingConvention, ParseNamingConventionError};
pub use pair::IntrospectorPair;

use crate::{
    member::{MemberDescriptor, TypeRef},
    metadata::{Access, BuilderConvention, CreatorMode, DEFAULT_BUILD_METHOD, DEFAULT_WITH_PREFIX}
};

/// External name of a property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyName(String);

impl PropertyName {
    /// Wrap a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into a `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for PropertyName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PropertyName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Host read/write access restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropertyAccess {
    /// Visibility rules decide.
    #[default]
    Auto,

    /// Serialize only.
    ReadOnly,

    /// Deserialize only.
    WriteOnly,

    /// Both directions.
    ReadWrite
}

impl From<Access> for PropertyAccess {
    fn from(access: Access) -> Self {
        match access {
            Access::Auto => Self::Auto,
            Access::ReadOnly => Self::ReadOnly,
            Access::WriteOnly => Self::WriteOnly,
            Access::ReadWrite => Self::ReadWrite
        }
    }
}

/// Host creator binding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CreatorBinding {
    /// Host heuristics pick the mode.
    #[default]
    Default,

    /// Whole-value binding to a single argument.
    Delegating,

    /// Named-property binding.
    Properties,

    /// Not a creator.
    Disabled
}

impl From<CreatorMode> for CreatorBinding {
    fn from(mode: CreatorMode) -> Self {
        match mode {
            CreatorMode::Default => Self::Default,
            CreatorMode::Delegating => Self::Delegating,
            CreatorMode::Properties => Self::Properties,
            CreatorMode::Disabled => Self::Disabled
        }
    }
}

/// Host builder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuilderConfig {
    /// Completion method name.
    pub build_method_name: String,

    /// Setter-like method prefix.
    pub with_prefix: String
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            build_method_name: DEFAULT_BUILD_METHOD.to_string(),
            with_prefix:       DEFAULT_WITH_PREFIX.to_string()
        }
    }
}

impl From<&BuilderConvention> for BuilderConfig {
    fn from(convention: &BuilderConvention) -> Self {
        Self {
            build_method_name: convention.build_method_name.to_string(),
            with_prefix:       convention.with_prefix.to_string()
        }
    }
}

/// Metadata questions a host mapper asks while building a type's schema.
///
/// Every method defaults to "no opinion". Implementations must be pure: same
/// inputs, same answer, no shared mutable state.
pub trait Introspector: Send + Sync {
    /// External name used when writing the member.
    fn find_name_for_serialization(&self, _member: &MemberDescriptor) -> Option<PropertyName> {
        None
    }

    /// External name used when reading the member.
    fn find_name_for_deserialization(&self, _member: &MemberDescriptor) -> Option<PropertyName> {
        None
    }

    /// External name of a single enum constant.
    fn find_enum_value(&self, _enum_type: &TypeRef, _constant: &str) -> Option<String> {
        None
    }

    /// Overlay external names onto `names`, positionally matching
    /// `constants`.
    ///
    /// Positions without an opinion must be left untouched.
    fn find_enum_values(&self, _enum_type: &TypeRef, _constants: &[&str], _names: &mut [String]) {}

    /// Whether the member is mandatory.
    fn has_required_marker(&self, _member: &MemberDescriptor) -> Option<bool> {
        None
    }

    /// Textual default value.
    fn find_property_default_value(&self, _member: &MemberDescriptor) -> Option<String> {
        None
    }

    /// Position in a fixed ordering.
    fn find_property_index(&self, _member: &MemberDescriptor) -> Option<i32> {
        None
    }

    /// Read/write access restriction.
    fn find_property_access(&self, _member: &MemberDescriptor) -> Option<PropertyAccess> {
        None
    }

    /// Whether the member is an explicitly eligible creator.
    fn has_creator_annotation(&self, _member: &MemberDescriptor) -> Option<bool> {
        None
    }

    /// Binding mode of a creator.
    fn find_creator_binding(&self, _member: &MemberDescriptor) -> Option<CreatorBinding> {
        None
    }

    /// Builder type used to construct `ty`.
    fn find_builder_type(&self, _ty: &TypeRef) -> Option<TypeRef> {
        None
    }

    /// Naming convention of a builder type.
    fn find_builder_config(&self, _builder: &TypeRef) -> Option<BuilderConfig> {
        None
    }

    /// Whether the member is excluded from mapping.
    fn is_ignored(&self, _member: &MemberDescriptor) -> Option<bool> {
        None
    }
}

/// Introspector without any opinion.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopIntrospector;

impl Introspector for NopIntrospector {}

macro_rules! forward_introspector {
    ($($target:ty),*) => {$(
        impl<I: Introspector + ?Sized> Introspector for $target {
            fn find_name_for_serialization(&self, member: &MemberDescriptor) -> Option<PropertyName> {
                (**self).find_name_for_serialization(member)
            }

            fn find_name_for_deserialization(&self, member: &MemberDescriptor) -> Option<PropertyName> {
                (**self).find_name_for_deserialization(member)
            }

            fn find_enum_value(&self, enum_type: &TypeRef, constant: &str) -> Option<String> {
                (**self).find_enum_value(enum_type, constant)
            }

            fn find_enum_values(&self, enum_type: &TypeRef, constants: &[&str], names: &mut [String]) {
                (**self).find_enum_values(enum_type, constants, names)
            }

            fn has_required_marker(&self, member: &MemberDescriptor) -> Option<bool> {
                (**self).has_required_marker(member)
            }

            fn find_property_default_value(&self, member: &MemberDescriptor) -> Option<String> {
                (**self).find_property_default_value(member)
            }

            fn find_property_index(&self, member: &MemberDescriptor) -> Option<i32> {
                (**self).find_property_index(member)
            }

            fn find_property_access(&self, member: &MemberDescriptor) -> Option<PropertyAccess> {
                (**self).find_property_access(member)
            }

            fn has_creator_annotation(&self, member: &MemberDescriptor) -> Option<bool> {
                (**self).has_creator_annotation(member)
            }

            fn find_creator_binding(&self, member: &MemberDescriptor) -> Option<CreatorBinding> {
                (**self).find_creator_binding(member)
            }

            fn find_builder_type(&self, ty: &TypeRef) -> Option<TypeRef> {
                (**self).find_builder_type(ty)
            }

            fn find_builder_config(&self, builder: &TypeRef) -> Option<BuilderConfig> {
                (**self).find_builder_config(builder)
            }

            fn is_ignored(&self, member: &MemberDescriptor) -> Option<bool> {
                (**self).is_ignored(member)
            }
        }
    )*};
}

forward_introspector!(&I, Box<I>, Arc<I>);
