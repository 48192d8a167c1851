// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Host-side schema assembly.
//!
//! [`TypeShape::resolve`] performs the walk a mapper does once per type:
//! ask the introspector chain about every member, apply the host's final
//! defaults to whatever is still undecided, and settle how instances get
//! constructed.
//!
//! # Ordering
//!
//! Properties with an explicit index come first, ascending by index (ties
//! keep declaration order); the remaining properties follow in declaration
//! order.
//!
//! # Construction
//!
//! | Resolved | Result |
//! |----------|--------|
//! | builder type | [`Construction::Builder`] with the builder's convention, or the defaults |
//! | eligible creators | [`Construction::Creators`] |
//! | neither | [`Construction::Implicit`] |

use tracing::debug;

use crate::{
    introspect::{BuilderConfig, CreatorBinding, Introspector, PropertyAccess, PropertyName},
    member::{MemberDescriptor, MemberKind, TypeRef}
};

/// Fully resolved property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyShape {
    /// The member backing this property.
    pub member: MemberDescriptor,

    /// Name written out.
    pub serialized_name: PropertyName,

    /// Name read in.
    pub deserialized_name: PropertyName,

    /// Whether the property must be present.
    pub required: bool,

    /// Textual default value.
    pub default_value: Option<String>,

    /// Explicit position.
    pub index: Option<i32>,

    /// Access restriction.
    pub access: PropertyAccess
}

/// Eligible creator and its binding mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorShape {
    /// The constructor or factory.
    pub member: MemberDescriptor,

    /// Binding mode; [`CreatorBinding::Default`] leaves the choice to the
    /// host's arity heuristics.
    pub binding: CreatorBinding
}

/// How instances are constructed during deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Construction {
    /// Through an auxiliary builder type.
    Builder {
        /// Builder type.
        builder: TypeRef,
        /// Builder method naming.
        config:  BuilderConfig
    },

    /// Through explicitly eligible creators.
    Creators(Vec<CreatorShape>),

    /// Host default instantiation.
    Implicit
}

/// Resolved shape of one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeShape {
    /// The resolved type.
    pub type_ref: TypeRef,

    /// Mapped properties in serialization order.
    pub properties: Vec<PropertyShape>,

    /// External names of enum constants, in declaration order.
    pub enum_values: Vec<String>,

    /// Construction strategy.
    pub construction: Construction
}

impl TypeShape {
    /// Resolve `ty` from its declared `members` through `introspector`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mapper_core::{
    ///     Construction, MemberDescriptor, NopIntrospector, TypeRef, TypeShape
    /// };
    ///
    /// let ty = TypeRef::named("app::Point");
    /// let members = [
    ///     MemberDescriptor::field(ty.clone(), "x"),
    ///     MemberDescriptor::field(ty.clone(), "y")
    /// ];
    /// let shape = TypeShape::resolve(&NopIntrospector, &ty, &members);
    ///
    /// assert_eq!(shape.property_names(), ["x", "y"]);
    /// assert_eq!(shape.construction, Construction::Implicit);
    /// ```
    pub fn resolve(
        introspector: &dyn Introspector,
        ty: &TypeRef,
        members: &[MemberDescriptor]
    ) -> Self {
        let mut properties: Vec<PropertyShape> = members
            .iter()
            .filter(|m| m.kind().is_property())
            .filter(|m| !introspector.is_ignored(m).unwrap_or(false))
            .map(|m| resolve_property(introspector, m))
            .collect();
        // stable: ties and unindexed keep declaration order
        properties.sort_by_key(|p| match p.index {
            Some(index) => (0, index),
            None => (1, 0)
        });

        let constants: Vec<&str> = members
            .iter()
            .filter(|m| m.kind() == MemberKind::EnumConstant)
            .map(MemberDescriptor::name)
            .collect();
        let mut enum_values: Vec<String> = constants.iter().map(|c| (*c).to_string()).collect();
        introspector.find_enum_values(ty, &constants, &mut enum_values);

        let construction = resolve_construction(introspector, ty, members);

        debug!(
            type_name = ty.name(),
            properties = properties.len(),
            enum_values = enum_values.len(),
            "resolved type shape"
        );

        Self {
            type_ref: ty.clone(),
            properties,
            enum_values,
            construction
        }
    }

    /// Serialized property names, in order.
    #[must_use]
    pub fn property_names(&self) -> Vec<&str> {
        self.properties
            .iter()
            .map(|p| p.serialized_name.as_str())
            .collect()
    }

    /// Property backed by the member named `name`.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyShape> {
        self.properties.iter().find(|p| p.member.name() == name)
    }
}

fn resolve_property(introspector: &dyn Introspector, member: &MemberDescriptor) -> PropertyShape {
    let identifier = || PropertyName::new(member.name());
    PropertyShape {
        member:            member.clone(),
        serialized_name:   introspector
            .find_name_for_serialization(member)
            .unwrap_or_else(identifier),
        deserialized_name: introspector
            .find_name_for_deserialization(member)
            .unwrap_or_else(identifier),
        required:          introspector.has_required_marker(member).unwrap_or(false),
        default_value:     introspector.find_property_default_value(member),
        index:             introspector.find_property_index(member),
        access:            introspector
            .find_property_access(member)
            .unwrap_or_default()
    }
}

fn resolve_construction(
    introspector: &dyn Introspector,
    ty: &TypeRef,
    members: &[MemberDescriptor]
) -> Construction {
    if let Some(builder) = introspector.find_builder_type(ty) {
        let config = introspector
            .find_builder_config(&builder)
            .unwrap_or_default();
        return Construction::Builder {
            builder,
            config
        };
    }

    let creators: Vec<CreatorShape> = members
        .iter()
        .filter(|m| m.kind() == MemberKind::Constructor)
        .filter(|m| !introspector.is_ignored(m).unwrap_or(false))
        .filter(|m| introspector.has_creator_annotation(m).unwrap_or(false))
        .map(|m| CreatorShape {
            member:  m.clone(),
            binding: introspector.find_creator_binding(m).unwrap_or_default()
        })
        .collect();

    if creators.is_empty() {
        Construction::Implicit
    } else {
        Construction::Creators(creators)
    }
}
