// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Enum constant naming.
//!
//! Two paths share one rule, an explicit non-empty name wins:
//!
//! - [`enum_value_name`] resolves one constant and always produces a name,
//!   falling back to the constant's identifier.
//! - [`enum_value_names`] overlays overrides onto host-supplied defaults for a
//!   whole enum. Positions without an override keep the host's name; order
//!   and length never change.
//!
//! Lookup failures are never surfaced. They are logged at `trace` level and
//! treated as "no override".

use std::collections::HashMap;

use tracing::trace;

use crate::{
    member::{MemberKind, TypeRef},
    metadata::EnumNameMeta,
    source::MetadataSource
};

/// External name of one enum constant.
pub fn enum_value_name(source: &impl MetadataSource, enum_type: &TypeRef, constant: &str) -> String {
    let member = match source.find_member(enum_type, constant, MemberKind::EnumConstant) {
        Ok(member) => member,
        Err(err) => {
            trace!(enum_type = enum_type.name(), constant, %err, "enum constant lookup failed");
            return constant.to_string();
        }
    };

    source
        .enum_name(&member)
        .and_then(EnumNameMeta::name)
        .unwrap_or(constant)
        .to_string()
}

/// Overlay explicit names onto `names`.
///
/// `constants[i]` is the identifier of the constant whose default external
/// name is `names[i]`.
pub fn enum_value_names(
    source: &impl MetadataSource,
    enum_type: &TypeRef,
    constants: &[&str],
    names: &mut [String]
) {
    let members = match source.declared_members(enum_type) {
        Ok(members) => members,
        Err(err) => {
            trace!(enum_type = enum_type.name(), %err, "enum constants could not be enumerated");
            return;
        }
    };

    let overrides: HashMap<&str, &str> = members
        .iter()
        .filter(|m| m.kind() == MemberKind::EnumConstant)
        .filter_map(|m| {
            let name = source.enum_name(m)?.name()?;
            Some((m.name(), name))
        })
        .collect();

    if overrides.is_empty() {
        return;
    }

    for (name, constant) in names.iter_mut().zip(constants) {
        if let Some(explicit) = overrides.get(constant) {
            *name = (*explicit).to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        EnumNameMeta, LookupError, MemberMetadata, MetadataRegistry, PropertyMeta, TypeMetadata,
        member::MemberDescriptor, metadata::*
    };

    fn letter() -> TypeRef {
        TypeRef::named("app::Letter")
    }

    fn registry() -> MetadataRegistry {
        let mut registry = MetadataRegistry::new();
        registry.insert(
            TypeMetadata::new(letter())
                .with_member(MemberMetadata::enum_constant("A"))
                .with_member(MemberMetadata::enum_constant("B").with_enum_name(EnumNameMeta::new("bee")))
                .with_member(MemberMetadata::enum_constant("C").with_enum_name(EnumNameMeta::new("")))
                // a non-constant member with the same identifier never counts
                .with_member(
                    MemberMetadata::field("A").with_enum_name(EnumNameMeta::new("not-a-constant"))
                )
        );
        registry
    }

    #[test]
    fn single_constant_override() {
        let registry = registry();
        assert_eq!(enum_value_name(&registry, &letter(), "B"), "bee");
    }

    #[test]
    fn single_constant_falls_back_to_identifier() {
        let registry = registry();
        assert_eq!(enum_value_name(&registry, &letter(), "A"), "A");
        assert_eq!(enum_value_name(&registry, &letter(), "C"), "C");
    }

    #[test]
    fn failed_lookup_degrades_to_identifier() {
        let registry = registry();
        assert_eq!(enum_value_name(&registry, &letter(), "Z"), "Z");
        assert_eq!(enum_value_name(&registry, &TypeRef::named("app::Other"), "A"), "A");
    }

    #[test]
    fn bulk_overlay_keeps_positions() {
        let registry = registry();
        let mut names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        enum_value_names(&registry, &letter(), &["A", "B", "C"], &mut names);
        assert_eq!(names, ["A", "bee", "C"]);
    }

    #[test]
    fn bulk_overlay_keeps_host_defaults() {
        let registry = registry();
        let mut names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        enum_value_names(&registry, &letter(), &["A", "B", "C"], &mut names);
        assert_eq!(names, ["a", "bee", "c"]);
    }

    #[test]
    fn bulk_overlay_unknown_enum_is_untouched() {
        let registry = registry();
        let mut names = vec!["X".to_string()];
        enum_value_names(&registry, &TypeRef::named("app::Other"), &["X"], &mut names);
        assert_eq!(names, ["X"]);
    }

    /// Source that refuses every member lookup.
    struct Denying;

    impl MetadataSource for Denying {
        fn property(&self, _: &MemberDescriptor) -> Option<&PropertyMeta> {
            None
        }

        fn creator(&self, _: &MemberDescriptor) -> Option<&CreatorMeta> {
            None
        }

        fn ignore(&self, _: &MemberDescriptor) -> Option<&IgnoreMeta> {
            None
        }

        fn enum_name(&self, _: &MemberDescriptor) -> Option<&EnumNameMeta> {
            None
        }

        fn deserialize(&self, _: &TypeRef) -> Option<&DeserializeMeta> {
            None
        }

        fn builder_convention(&self, _: &TypeRef) -> Option<&BuilderConvention> {
            None
        }

        fn find_member(
            &self,
            ty: &TypeRef,
            name: &str,
            _: MemberKind
        ) -> Result<MemberDescriptor, LookupError> {
            Err(LookupError::AccessDenied {
                type_name: ty.name().to_string(),
                member:    name.to_string()
            })
        }

        fn declared_members(&self, ty: &TypeRef) -> Result<Vec<MemberDescriptor>, LookupError> {
            Err(LookupError::AccessDenied {
                type_name: ty.name().to_string(),
                member:    "*".to_string()
            })
        }
    }

    #[test]
    fn access_denied_degrades_to_identifier() {
        assert_eq!(enum_value_name(&Denying, &letter(), "B"), "B");

        let mut names = vec!["B".to_string()];
        enum_value_names(&Denying, &letter(), &["B"], &mut names);
        assert_eq!(names, ["B"]);
    }
}
