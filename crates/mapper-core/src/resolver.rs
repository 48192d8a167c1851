// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata-driven resolution.
//!
//! [`MetadataIntrospector`] answers every [`Introspector`] query from attached
//! metadata and has no opinion wherever metadata is absent. It is meant to be
//! the primary of an [`IntrospectorPair`](crate::IntrospectorPair) whose
//! secondary is the host's default strategy.
//!
//! # Architecture
//!
//! ```text
//! resolver.rs (MetadataIntrospector)
//! ├── naming.rs    - serialization / deserialization names
//! ├── enums.rs     - enum constant names, single and bulk
//! ├── property.rs  - required, default value, index, access
//! ├── creator.rs   - creator eligibility and binding mode
//! ├── builder.rs   - builder type and builder convention
//! └── ignore.rs    - ignore marker
//! ```
//!
//! Every function is total: a missing record or a failed lookup yields "no
//! opinion", never an error.

pub mod builder;
pub mod creator;
pub mod enums;
pub mod ignore;
pub mod naming;
pub mod property;

use crate::{
    introspect::{BuilderConfig, CreatorBinding, Introspector, PropertyAccess, PropertyName},
    member::{MemberDescriptor, TypeRef},
    source::MetadataSource
};

/// [`Introspector`] backed by a [`MetadataSource`].
///
/// Holds nothing but the source, so one instance can serve any number of
/// threads.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use mapper_core::{
///     Introspector, MemberDescriptor, MemberMetadata, MetadataIntrospector, MetadataRegistry,
///     PropertyMeta, TypeMetadata, TypeRef
/// };
///
/// let ty = TypeRef::named("app::User");
/// let mut registry = MetadataRegistry::new();
/// registry.insert(
///     TypeMetadata::new(ty.clone()).with_member(
///         MemberMetadata::field("a").with_property(PropertyMeta::new().with_name("foo").with_required(true))
///     )
/// );
/// let introspector = MetadataIntrospector::new(Arc::new(registry));
///
/// let a = MemberDescriptor::field(ty.clone(), "a");
/// let b = MemberDescriptor::field(ty, "b");
/// assert_eq!(introspector.find_name_for_serialization(&a).unwrap(), "foo");
/// assert_eq!(introspector.has_required_marker(&a), Some(true));
/// assert_eq!(introspector.find_name_for_serialization(&b), None);
/// assert_eq!(introspector.has_required_marker(&b), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetadataIntrospector<S> {
    source: S
}

impl<S: MetadataSource> MetadataIntrospector<S> {
    /// Resolve against `source`.
    pub const fn new(source: S) -> Self {
        Self {
            source
        }
    }

    /// The underlying source.
    pub const fn source(&self) -> &S {
        &self.source
    }
}

impl<S: MetadataSource> Introspector for MetadataIntrospector<S> {
    fn find_name_for_serialization(&self, member: &MemberDescriptor) -> Option<PropertyName> {
        naming::serialization_name(&self.source, member)
    }

    fn find_name_for_deserialization(&self, member: &MemberDescriptor) -> Option<PropertyName> {
        naming::deserialization_name(&self.source, member)
    }

    fn find_enum_value(&self, enum_type: &TypeRef, constant: &str) -> Option<String> {
        Some(enums::enum_value_name(&self.source, enum_type, constant))
    }

    fn find_enum_values(&self, enum_type: &TypeRef, constants: &[&str], names: &mut [String]) {
        enums::enum_value_names(&self.source, enum_type, constants, names);
    }

    fn has_required_marker(&self, member: &MemberDescriptor) -> Option<bool> {
        property::required(&self.source, member)
    }

    fn find_property_default_value(&self, member: &MemberDescriptor) -> Option<String> {
        property::default_value(&self.source, member)
    }

    fn find_property_index(&self, member: &MemberDescriptor) -> Option<i32> {
        property::index(&self.source, member)
    }

    fn find_property_access(&self, member: &MemberDescriptor) -> Option<PropertyAccess> {
        property::access(&self.source, member)
    }

    fn has_creator_annotation(&self, member: &MemberDescriptor) -> Option<bool> {
        creator::eligible(&self.source, member)
    }

    fn find_creator_binding(&self, member: &MemberDescriptor) -> Option<CreatorBinding> {
        creator::binding(&self.source, member)
    }

    fn find_builder_type(&self, ty: &TypeRef) -> Option<TypeRef> {
        builder::builder_type(&self.source, ty)
    }

    fn find_builder_config(&self, builder: &TypeRef) -> Option<BuilderConfig> {
        builder::builder_config(&self.source, builder)
    }

    fn is_ignored(&self, member: &MemberDescriptor) -> Option<bool> {
        ignore::ignored(&self.source, member)
    }
}
