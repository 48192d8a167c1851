// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type and member handles.
//!
//! Handles are supplied by the host and only ever compared and read by
//! resolvers.

use std::{borrow::Cow, fmt};

/// Opaque type identity.
///
/// Built from the fully qualified type name, so [`TypeRef::of`] and a
/// [`TypeRef::named`] with the same path compare equal.
///
/// # Example
///
/// ```rust
/// use mapper_core::TypeRef;
///
/// struct User;
///
/// let ty = TypeRef::of::<User>();
/// assert!(ty.name().ends_with("User"));
/// assert!(!ty.is_none());
/// assert!(TypeRef::NONE.is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TypeRef(Cow<'static, str>);

impl TypeRef {
    /// "No type" sentinel, the unit type.
    pub const NONE: Self = Self(Cow::Borrowed("()"));

    /// Reference to a Rust type.
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self(Cow::Borrowed(std::any::type_name::<T>()))
    }

    /// Reference by fully qualified name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Fully qualified name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether this is the [`TypeRef::NONE`] sentinel.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0 == Self::NONE.0
    }
}

impl Default for TypeRef {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({})", self.0)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of member a descriptor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MemberKind {
    /// Named field.
    Field,

    /// Accessor or setter-like method.
    Method,

    /// Constructor or factory function.
    Constructor,

    /// Enum constant (unit variant).
    EnumConstant
}

impl MemberKind {
    /// Whether members of this kind can carry property values.
    pub const fn is_property(&self) -> bool {
        matches!(self, Self::Field | Self::Method)
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Field => "field",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::EnumConstant => "enum constant"
        };
        f.write_str(label)
    }
}

/// Handle to a member of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberDescriptor {
    declaring_type: TypeRef,
    name:           Cow<'static, str>,
    kind:           MemberKind
}

impl MemberDescriptor {
    /// Create a descriptor.
    pub fn new(declaring_type: TypeRef, name: impl Into<Cow<'static, str>>, kind: MemberKind) -> Self {
        Self {
            declaring_type,
            name: name.into(),
            kind
        }
    }

    /// Descriptor for a field.
    pub fn field(declaring_type: TypeRef, name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(declaring_type, name, MemberKind::Field)
    }

    /// Descriptor for a method.
    pub fn method(declaring_type: TypeRef, name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(declaring_type, name, MemberKind::Method)
    }

    /// Descriptor for a constructor or factory function.
    pub fn constructor(declaring_type: TypeRef, name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(declaring_type, name, MemberKind::Constructor)
    }

    /// Descriptor for an enum constant.
    pub fn enum_constant(declaring_type: TypeRef, name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(declaring_type, name, MemberKind::EnumConstant)
    }

    /// Type declaring this member.
    #[must_use]
    pub fn declaring_type(&self) -> &TypeRef {
        &self.declaring_type
    }

    /// Member identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member kind.
    #[must_use]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }
}

impl fmt::Display for MemberDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}::{}", self.kind, self.declaring_type, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    #[test]
    fn of_and_named_agree() {
        let named = TypeRef::named(std::any::type_name::<Sample>());
        assert_eq!(TypeRef::of::<Sample>(), named);
    }

    #[test]
    fn unit_is_the_sentinel() {
        assert!(TypeRef::of::<()>().is_none());
        assert!(TypeRef::default().is_none());
        assert!(!TypeRef::of::<Sample>().is_none());
    }

    #[test]
    fn descriptor_accessors() {
        let ty = TypeRef::named("app::User");
        let member = MemberDescriptor::field(ty.clone(), "email");
        assert_eq!(member.declaring_type(), &ty);
        assert_eq!(member.name(), "email");
        assert_eq!(member.kind(), MemberKind::Field);
        assert_eq!(member.to_string(), "field app::User::email");
    }

    #[test]
    fn kinds_with_same_name_differ() {
        let ty = TypeRef::named("app::User");
        assert_ne!(
            MemberDescriptor::field(ty.clone(), "name"),
            MemberDescriptor::method(ty, "name")
        );
    }

    #[test]
    fn property_kinds() {
        assert!(MemberKind::Field.is_property());
        assert!(MemberKind::Method.is_property());
        assert!(!MemberKind::Constructor.is_property());
        assert!(!MemberKind::EnumConstant.is_property());
    }
}
