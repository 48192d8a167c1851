// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Builder strategy.
//!
//! An explicit builder type replaces host discovery entirely; the
//! [`TypeRef::NONE`] sentinel counts as not set.

use crate::{introspect::BuilderConfig, member::TypeRef, source::MetadataSource};

/// Builder type declared for `ty`.
pub fn builder_type(source: &impl MetadataSource, ty: &TypeRef) -> Option<TypeRef> {
    source.deserialize(ty)?.builder().cloned()
}

/// Convention declared on a builder type.
pub fn builder_config(source: &impl MetadataSource, builder: &TypeRef) -> Option<BuilderConfig> {
    source.builder_convention(builder).map(BuilderConfig::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuilderConvention, DeserializeMeta, MetadataRegistry, TypeMetadata};

    fn registry() -> MetadataRegistry {
        let mut registry = MetadataRegistry::new();
        registry.insert(
            TypeMetadata::new(TypeRef::named("app::User"))
                .with_deserialize(DeserializeMeta::new(TypeRef::named("app::UserMaker")))
        );
        registry.insert(
            TypeMetadata::new(TypeRef::named("app::Session"))
                .with_deserialize(DeserializeMeta::new(TypeRef::NONE))
        );
        registry.insert(
            TypeMetadata::new(TypeRef::named("app::UserMaker"))
                .with_builder_convention(BuilderConvention::new("create", "set"))
        );
        registry.insert(TypeMetadata::new(TypeRef::named("app::PlainBuilder")));
        registry
    }

    #[test]
    fn explicit_builder_type() {
        let registry = registry();
        assert_eq!(
            builder_type(&registry, &TypeRef::named("app::User")),
            Some(TypeRef::named("app::UserMaker"))
        );
    }

    #[test]
    fn sentinel_and_absent_defer() {
        let registry = registry();
        assert_eq!(builder_type(&registry, &TypeRef::named("app::Session")), None);
        assert_eq!(builder_type(&registry, &TypeRef::named("app::Missing")), None);
    }

    #[test]
    fn builder_convention_lookup() {
        let registry = registry();
        let config = builder_config(&registry, &TypeRef::named("app::UserMaker")).unwrap();
        assert_eq!(config.build_method_name, "create");
        assert_eq!(config.with_prefix, "set");
        assert_eq!(builder_config(&registry, &TypeRef::named("app::PlainBuilder")), None);
    }
}
