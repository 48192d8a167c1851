// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Construction strategy.
//!
//! Only explicit creator metadata is honored here. Choosing between
//! delegating and property binding for an unannotated single-argument
//! creator is left to the host.

use crate::{
    introspect::CreatorBinding, member::MemberDescriptor, metadata::CreatorMode,
    source::MetadataSource
};

/// Whether `member` may construct instances.
///
/// Annotated creators are eligible unless disabled; unannotated members get
/// `None` so the host applies its own rules.
pub fn eligible(source: &impl MetadataSource, member: &MemberDescriptor) -> Option<bool> {
    source
        .creator(member)
        .map(|c| c.mode != CreatorMode::Disabled)
}

/// Binding mode of an annotated creator.
pub fn binding(source: &impl MetadataSource, member: &MemberDescriptor) -> Option<CreatorBinding> {
    source.creator(member).map(|c| c.mode.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CreatorMeta, MemberMetadata, MetadataRegistry, TypeMetadata, member::TypeRef};

    fn registry() -> MetadataRegistry {
        let creator = |name: &'static str, mode| {
            MemberMetadata::constructor(name).with_creator(CreatorMeta::new(mode))
        };
        let mut registry = MetadataRegistry::new();
        registry.insert(
            TypeMetadata::new(TypeRef::named("app::Point"))
                .with_member(creator("new", CreatorMode::Default))
                .with_member(creator("from_value", CreatorMode::Delegating))
                .with_member(creator("from_parts", CreatorMode::Properties))
                .with_member(creator("legacy", CreatorMode::Disabled))
                .with_member(MemberMetadata::constructor("origin"))
        );
        registry
    }

    fn ctor(name: &'static str) -> MemberDescriptor {
        MemberDescriptor::constructor(TypeRef::named("app::Point"), name)
    }

    #[test]
    fn disabled_is_never_eligible() {
        let registry = registry();
        assert_eq!(eligible(&registry, &ctor("legacy")), Some(false));
    }

    #[test]
    fn other_modes_are_eligible() {
        let registry = registry();
        for name in ["new", "from_value", "from_parts"] {
            assert_eq!(eligible(&registry, &ctor(name)), Some(true), "{name}");
        }
    }

    #[test]
    fn unannotated_defers_to_host() {
        let registry = registry();
        assert_eq!(eligible(&registry, &ctor("origin")), None);
        assert_eq!(binding(&registry, &ctor("origin")), None);
    }

    #[test]
    fn binding_maps_modes() {
        let registry = registry();
        assert_eq!(binding(&registry, &ctor("new")), Some(CreatorBinding::Default));
        assert_eq!(binding(&registry, &ctor("from_value")), Some(CreatorBinding::Delegating));
        assert_eq!(binding(&registry, &ctor("from_parts")), Some(CreatorBinding::Properties));
        assert_eq!(binding(&registry, &ctor("legacy")), Some(CreatorBinding::Disabled));
    }
}
