// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Chain of two introspectors.

use super::{BuilderConfig, CreatorBinding, Introspector, PropertyAccess, PropertyName};
use crate::member::{MemberDescriptor, TypeRef};

/// Asks `primary` first and falls back to `secondary` on "no opinion".
///
/// For the bulk enum path the order is reversed: `secondary` fills in its
/// default names, then `primary` overlays explicit overrides.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use mapper_core::{
///     ConventionIntrospector, Introspector, IntrospectorPair, MemberDescriptor, MemberMetadata,
///     MetadataIntrospector, MetadataRegistry, NamingConvention, PropertyMeta, TypeMetadata, TypeRef
/// };
///
/// let ty = TypeRef::named("app::User");
/// let mut registry = MetadataRegistry::new();
/// registry.insert(
///     TypeMetadata::new(ty.clone())
///         .with_member(MemberMetadata::field("user_id").with_property(PropertyMeta::new().with_name("id")))
/// );
///
/// let chain = IntrospectorPair::new(
///     MetadataIntrospector::new(Arc::new(registry)),
///     ConventionIntrospector::new().with_naming(NamingConvention::Camel)
/// );
///
/// let explicit = MemberDescriptor::field(ty.clone(), "user_id");
/// let implicit = MemberDescriptor::field(ty, "created_at");
/// assert_eq!(chain.find_name_for_serialization(&explicit).unwrap(), "id");
/// assert_eq!(chain.find_name_for_serialization(&implicit).unwrap(), "createdAt");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntrospectorPair<P, S> {
    primary:   P,
    secondary: S
}

impl<P, S> IntrospectorPair<P, S> {
    /// Chain `primary` in front of `secondary`.
    pub const fn new(primary: P, secondary: S) -> Self {
        Self {
            primary,
            secondary
        }
    }

    /// The introspector asked first.
    pub const fn primary(&self) -> &P {
        &self.primary
    }

    /// The fallback introspector.
    pub const fn secondary(&self) -> &S {
        &self.secondary
    }
}

impl<P: Introspector, S: Introspector> Introspector for IntrospectorPair<P, S> {
    fn find_name_for_serialization(&self, member: &MemberDescriptor) -> Option<PropertyName> {
        self.primary
            .find_name_for_serialization(member)
            .or_else(|| self.secondary.find_name_for_serialization(member))
    }

    fn find_name_for_deserialization(&self, member: &MemberDescriptor) -> Option<PropertyName> {
        self.primary
            .find_name_for_deserialization(member)
            .or_else(|| self.secondary.find_name_for_deserialization(member))
    }

    fn find_enum_value(&self, enum_type: &TypeRef, constant: &str) -> Option<String> {
        self.primary
            .find_enum_value(enum_type, constant)
            .or_else(|| self.secondary.find_enum_value(enum_type, constant))
    }

    fn find_enum_values(&self, enum_type: &TypeRef, constants: &[&str], names: &mut [String]) {
        self.secondary.find_enum_values(enum_type, constants, names);
        self.primary.find_enum_values(enum_type, constants, names);
    }

    fn has_required_marker(&self, member: &MemberDescriptor) -> Option<bool> {
        self.primary
            .has_required_marker(member)
            .or_else(|| self.secondary.has_required_marker(member))
    }

    fn find_property_default_value(&self, member: &MemberDescriptor) -> Option<String> {
        self.primary
            .find_property_default_value(member)
            .or_else(|| self.secondary.find_property_default_value(member))
    }

    fn find_property_index(&self, member: &MemberDescriptor) -> Option<i32> {
        self.primary
            .find_property_index(member)
            .or_else(|| self.secondary.find_property_index(member))
    }

    fn find_property_access(&self, member: &MemberDescriptor) -> Option<PropertyAccess> {
        self.primary
            .find_property_access(member)
            .or_else(|| self.secondary.find_property_access(member))
    }

    fn has_creator_annotation(&self, member: &MemberDescriptor) -> Option<bool> {
        self.primary
            .has_creator_annotation(member)
            .or_else(|| self.secondary.has_creator_annotation(member))
    }

    fn find_creator_binding(&self, member: &MemberDescriptor) -> Option<CreatorBinding> {
        self.primary
            .find_creator_binding(member)
            .or_else(|| self.secondary.find_creator_binding(member))
    }

    fn find_builder_type(&self, ty: &TypeRef) -> Option<TypeRef> {
        self.primary
            .find_builder_type(ty)
            .or_else(|| self.secondary.find_builder_type(ty))
    }

    fn find_builder_config(&self, builder: &TypeRef) -> Option<BuilderConfig> {
        self.primary
            .find_builder_config(builder)
            .or_else(|| self.secondary.find_builder_config(builder))
    }

    fn is_ignored(&self, member: &MemberDescriptor) -> Option<bool> {
        self.primary
            .is_ignored(member)
            .or_else(|| self.secondary.is_ignored(member))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::NopIntrospector;

    /// Fixed answers for every query.
    struct Fixed(&'static str);

    impl Introspector for Fixed {
        fn find_name_for_serialization(&self, _: &MemberDescriptor) -> Option<PropertyName> {
            Some(PropertyName::new(self.0))
        }

        fn has_required_marker(&self, _: &MemberDescriptor) -> Option<bool> {
            Some(true)
        }

        fn find_enum_values(&self, _: &TypeRef, constants: &[&str], names: &mut [String]) {
            for (i, constant) in constants.iter().enumerate() {
                if *constant == "B" {
                    names[i] = self.0.to_string();
                }
            }
        }
    }

    /// Renames every enum constant.
    struct Lowercase;

    impl Introspector for Lowercase {
        fn find_enum_values(&self, _: &TypeRef, constants: &[&str], names: &mut [String]) {
            for (name, constant) in names.iter_mut().zip(constants) {
                *name = constant.to_lowercase();
            }
        }
    }

    fn member() -> MemberDescriptor {
        MemberDescriptor::field(TypeRef::named("app::User"), "name")
    }

    #[test]
    fn primary_wins() {
        let pair = IntrospectorPair::new(Fixed("primary"), Fixed("secondary"));
        assert_eq!(pair.find_name_for_serialization(&member()).unwrap(), "primary");
    }

    #[test]
    fn secondary_answers_when_primary_has_no_opinion() {
        let pair = IntrospectorPair::new(NopIntrospector, Fixed("secondary"));
        assert_eq!(pair.find_name_for_serialization(&member()).unwrap(), "secondary");
        assert_eq!(pair.has_required_marker(&member()), Some(true));
    }

    #[test]
    fn both_silent_is_no_opinion() {
        let pair = IntrospectorPair::new(NopIntrospector, NopIntrospector);
        assert_eq!(pair.find_name_for_serialization(&member()), None);
        assert_eq!(pair.find_property_index(&member()), None);
    }

    #[test]
    fn enum_overlay_runs_secondary_then_primary() {
        let pair = IntrospectorPair::new(Fixed("bee"), Lowercase);
        let mut names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        pair.find_enum_values(&TypeRef::named("app::Letter"), &["A", "B", "C"], &mut names);
        assert_eq!(names, ["a", "bee", "c"]);
    }

    #[test]
    fn accessors() {
        let pair = IntrospectorPair::new(Fixed("p"), NopIntrospector);
        assert_eq!(pair.primary().0, "p");
        let _: &NopIntrospector = pair.secondary();
    }
}
