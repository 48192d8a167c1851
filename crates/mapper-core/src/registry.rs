// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Registration table of attached metadata.
//!
//! Types describe themselves through [`Mapped`] (usually derived), and the
//! table is filled once before resolution starts:
//!
//! ```rust
//! use mapper_core::{
//!     MemberDescriptor, MemberMetadata, MetadataRegistry, MetadataSource, PropertyMeta,
//!     TypeMetadata, TypeRef
//! };
//!
//! let ty = TypeRef::named("app::User");
//! let mut registry = MetadataRegistry::new();
//! registry.insert(
//!     TypeMetadata::new(ty.clone())
//!         .with_member(MemberMetadata::field("name").with_property(PropertyMeta::new().with_name("foo")))
//! );
//!
//! let member = MemberDescriptor::field(ty, "name");
//! assert_eq!(registry.property(&member).and_then(|p| p.name()), Some("foo"));
//! ```

use std::{borrow::Cow, collections::HashMap};

use tracing::{debug, warn};

use crate::{
    error::LookupError,
    member::{MemberDescriptor, MemberKind, TypeRef},
    metadata::{
        BuilderConvention, CreatorMeta, DeserializeMeta, EnumNameMeta, IgnoreMeta, PropertyMeta
    },
    source::MetadataSource
};

/// Types that carry attached metadata.
///
/// Implemented by `#[derive(Mapped)]`.
pub trait Mapped {
    /// Metadata record of this type.
    fn type_metadata() -> TypeMetadata;
}

/// Metadata attached to one member.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberMetadata {
    /// Member identifier.
    pub name: Cow<'static, str>,

    /// Member kind.
    pub kind: MemberKind,

    /// Property metadata.
    #[cfg_attr(feature = "serde", serde(default))]
    pub property: Option<PropertyMeta>,

    /// Creator metadata.
    #[cfg_attr(feature = "serde", serde(default))]
    pub creator: Option<CreatorMeta>,

    /// Ignore marker.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ignore: Option<IgnoreMeta>,

    /// Enum constant naming.
    #[cfg_attr(feature = "serde", serde(default))]
    pub enum_name: Option<EnumNameMeta>
}

impl MemberMetadata {
    /// Member without any attached record.
    pub fn new(name: impl Into<Cow<'static, str>>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
            property: None,
            creator: None,
            ignore: None,
            enum_name: None
        }
    }

    /// Field member.
    pub fn field(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, MemberKind::Field)
    }

    /// Method member.
    pub fn method(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, MemberKind::Method)
    }

    /// Constructor or factory member.
    pub fn constructor(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, MemberKind::Constructor)
    }

    /// Enum constant member.
    pub fn enum_constant(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, MemberKind::EnumConstant)
    }

    /// Attach property metadata.
    #[must_use]
    pub fn with_property(mut self, property: PropertyMeta) -> Self {
        self.property = Some(property);
        self
    }

    /// Attach creator metadata.
    #[must_use]
    pub fn with_creator(mut self, creator: CreatorMeta) -> Self {
        self.creator = Some(creator);
        self
    }

    /// Attach an ignore marker.
    #[must_use]
    pub fn with_ignore(mut self, ignore: IgnoreMeta) -> Self {
        self.ignore = Some(ignore);
        self
    }

    /// Attach enum constant naming.
    #[must_use]
    pub fn with_enum_name(mut self, enum_name: EnumNameMeta) -> Self {
        self.enum_name = Some(enum_name);
        self
    }

    fn matches(&self, name: &str, kind: MemberKind) -> bool {
        self.kind == kind && self.name == name
    }
}

/// Metadata attached to one type and its members.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeMetadata {
    /// The described type.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_ref: TypeRef,

    /// Deserialization metadata.
    #[cfg_attr(feature = "serde", serde(default))]
    pub deserialize: Option<DeserializeMeta>,

    /// Builder convention, when this type is a builder.
    #[cfg_attr(feature = "serde", serde(default))]
    pub builder_convention: Option<BuilderConvention>,

    /// Declared members in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub members: Vec<MemberMetadata>
}

impl TypeMetadata {
    /// Type without attached records.
    pub fn new(type_ref: TypeRef) -> Self {
        Self {
            type_ref,
            deserialize: None,
            builder_convention: None,
            members: Vec::new()
        }
    }

    /// Attach deserialization metadata.
    #[must_use]
    pub fn with_deserialize(mut self, deserialize: DeserializeMeta) -> Self {
        self.deserialize = Some(deserialize);
        self
    }

    /// Attach a builder convention.
    #[must_use]
    pub fn with_builder_convention(mut self, convention: BuilderConvention) -> Self {
        self.builder_convention = Some(convention);
        self
    }

    /// Append a member.
    #[must_use]
    pub fn with_member(mut self, member: MemberMetadata) -> Self {
        self.members.push(member);
        self
    }

    /// Find a member by identifier and kind.
    #[must_use]
    pub fn member(&self, name: &str, kind: MemberKind) -> Option<&MemberMetadata> {
        self.members.iter().find(|m| m.matches(name, kind))
    }
}

/// In-memory table of [`TypeMetadata`], keyed by type.
///
/// Filled once, then shared read-only (for example behind an `Arc`) by any
/// number of resolvers on any number of threads.
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
    types: HashMap<TypeRef, TypeMetadata>
}

impl MetadataRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type through its [`Mapped`] implementation.
    pub fn register<T: Mapped + ?Sized>(&mut self) -> &mut Self {
        self.insert(T::type_metadata());
        self
    }

    /// Register a metadata record, replacing any previous record of the same
    /// type.
    pub fn insert(&mut self, metadata: TypeMetadata) -> Option<TypeMetadata> {
        debug!(
            type_name = metadata.type_ref.name(),
            members = metadata.members.len(),
            "registering type metadata"
        );
        let previous = self.types.insert(metadata.type_ref.clone(), metadata);
        if let Some(previous) = &previous {
            warn!(
                type_name = previous.type_ref.name(),
                "type metadata registered twice, keeping the latest record"
            );
        }
        previous
    }

    /// Record of a type.
    #[must_use]
    pub fn get(&self, ty: &TypeRef) -> Option<&TypeMetadata> {
        self.types.get(ty)
    }

    /// Whether a type is registered.
    #[must_use]
    pub fn contains(&self, ty: &TypeRef) -> bool {
        self.types.contains_key(ty)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered types, in no particular order.
    pub fn types(&self) -> impl Iterator<Item = &TypeRef> {
        self.types.keys()
    }

    /// Load a registry from a JSON array of [`TypeMetadata`].
    ///
    /// Absent fields of present records take their documented defaults.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Parse`](crate::RegistryError::Parse) when the input is
    /// not a valid table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mapper_core::{MemberDescriptor, MetadataRegistry, MetadataSource, TypeRef};
    ///
    /// let registry = MetadataRegistry::from_json(
    ///     r#"[{ "type": "app::User",
    ///           "members": [{ "name": "name", "kind": "field", "property": { "name": "foo" } }] }]"#
    /// )
    /// .unwrap();
    ///
    /// let member = MemberDescriptor::field(TypeRef::named("app::User"), "name");
    /// let property = registry.property(&member).unwrap();
    /// assert_eq!(property.name(), Some("foo"));
    /// assert_eq!(property.index(), None);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, crate::error::RegistryError> {
        let records: Vec<TypeMetadata> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for record in records {
            registry.insert(record);
        }
        Ok(registry)
    }

    fn member(&self, member: &MemberDescriptor) -> Option<&MemberMetadata> {
        self.types
            .get(member.declaring_type())?
            .member(member.name(), member.kind())
    }
}

impl MetadataSource for MetadataRegistry {
    fn property(&self, member: &MemberDescriptor) -> Option<&PropertyMeta> {
        self.member(member)?.property.as_ref()
    }

    fn creator(&self, member: &MemberDescriptor) -> Option<&CreatorMeta> {
        self.member(member)?.creator.as_ref()
    }

    fn ignore(&self, member: &MemberDescriptor) -> Option<&IgnoreMeta> {
        self.member(member)?.ignore.as_ref()
    }

    fn enum_name(&self, member: &MemberDescriptor) -> Option<&EnumNameMeta> {
        self.member(member)?.enum_name.as_ref()
    }

    fn deserialize(&self, ty: &TypeRef) -> Option<&DeserializeMeta> {
        self.types.get(ty)?.deserialize.as_ref()
    }

    fn builder_convention(&self, ty: &TypeRef) -> Option<&BuilderConvention> {
        self.types.get(ty)?.builder_convention.as_ref()
    }

    fn find_member(
        &self,
        ty: &TypeRef,
        name: &str,
        kind: MemberKind
    ) -> Result<MemberDescriptor, LookupError> {
        let record = self.types.get(ty).ok_or_else(|| LookupError::UnknownType {
            type_name: ty.name().to_string()
        })?;
        let member = record
            .member(name, kind)
            .ok_or_else(|| LookupError::NoSuchMember {
                type_name: ty.name().to_string(),
                member: name.to_string(),
                kind
            })?;
        Ok(MemberDescriptor::new(ty.clone(), member.name.clone(), kind))
    }

    fn declared_members(&self, ty: &TypeRef) -> Result<Vec<MemberDescriptor>, LookupError> {
        let record = self.types.get(ty).ok_or_else(|| LookupError::UnknownType {
            type_name: ty.name().to_string()
        })?;
        Ok(record
            .members
            .iter()
            .map(|m| MemberDescriptor::new(ty.clone(), m.name.clone(), m.kind))
            .collect())
    }
}
