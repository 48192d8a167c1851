// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Host default strategy.
//!
//! What a mapper does when no explicit metadata speaks up: names derived from
//! identifiers, builders discovered by the `{Type}Builder` naming convention,
//! and the default builder method names.

use std::{collections::HashSet, str::FromStr};

use convert_case::{Case, Casing};
use thiserror::Error;

use super::{BuilderConfig, Introspector, PropertyName};
use crate::member::{MemberDescriptor, TypeRef};

/// Suffix used to discover builder types by name.
pub const DEFAULT_BUILDER_SUFFIX: &str = "Builder";

/// Case convention applied to identifiers.
///
/// # Accepted Values
///
/// | Value | Example |
/// |-------|---------|
/// | `"camelCase"`, `"camel"` | `createdAt` |
/// | `"PascalCase"`, `"pascal"` | `CreatedAt` |
/// | `"snake_case"`, `"snake"` | `created_at` |
/// | `"kebab-case"`, `"kebab"` | `created-at` |
/// | `"SCREAMING_SNAKE_CASE"`, `"screaming_snake"` | `CREATED_AT` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamingConvention {
    /// `camelCase`.
    #[cfg_attr(feature = "serde", serde(rename = "camelCase", alias = "camel"))]
    Camel,

    /// `PascalCase`.
    #[cfg_attr(feature = "serde", serde(rename = "PascalCase", alias = "pascal"))]
    Pascal,

    /// `snake_case`.
    #[cfg_attr(feature = "serde", serde(rename = "snake_case", alias = "snake"))]
    Snake,

    /// `kebab-case`.
    #[cfg_attr(feature = "serde", serde(rename = "kebab-case", alias = "kebab"))]
    Kebab,

    /// `SCREAMING_SNAKE_CASE`.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "SCREAMING_SNAKE_CASE", alias = "screaming_snake")
    )]
    ScreamingSnake
}

impl NamingConvention {
    /// Convert an identifier.
    #[must_use]
    pub fn apply(&self, ident: &str) -> String {
        match self {
            Self::Camel => ident.to_case(Case::Camel),
            Self::Pascal => ident.to_case(Case::Pascal),
            Self::Snake => ident.to_case(Case::Snake),
            Self::Kebab => ident.to_case(Case::Kebab),
            Self::ScreamingSnake => ident.to_case(Case::Constant)
        }
    }
}

/// Unrecognized naming convention.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown naming convention `{0}`")]
pub struct ParseNamingConventionError(String);

impl FromStr for NamingConvention {
    type Err = ParseNamingConventionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "camelCase" | "camel" => Ok(Self::Camel),
            "PascalCase" | "pascal" => Ok(Self::Pascal),
            "snake_case" | "snake" => Ok(Self::Snake),
            "kebab-case" | "kebab" => Ok(Self::Kebab),
            "SCREAMING_SNAKE_CASE" | "screaming_snake" => Ok(Self::ScreamingSnake),
            _ => Err(ParseNamingConventionError(value.to_string()))
        }
    }
}

/// Identifier-driven defaults.
///
/// # Example
///
/// ```rust
/// use mapper_core::{ConventionIntrospector, Introspector, NamingConvention, TypeRef};
///
/// let host = ConventionIntrospector::new()
///     .with_naming(NamingConvention::Kebab)
///     .with_known_type(TypeRef::named("app::UserBuilder"));
///
/// assert_eq!(
///     host.find_builder_type(&TypeRef::named("app::User")),
///     Some(TypeRef::named("app::UserBuilder"))
/// );
/// assert_eq!(host.find_enum_value(&TypeRef::named("app::Kind"), "BigBox").unwrap(), "big-box");
/// ```
#[derive(Debug, Clone)]
pub struct ConventionIntrospector {
    naming:         Option<NamingConvention>,
    builder_suffix: String,
    known_types:    HashSet<TypeRef>
}

impl ConventionIntrospector {
    /// Identifiers used verbatim, builder suffix `"Builder"`, no known types.
    #[must_use]
    pub fn new() -> Self {
        Self {
            naming:         None,
            builder_suffix: DEFAULT_BUILDER_SUFFIX.to_string(),
            known_types:    HashSet::new()
        }
    }

    /// Convert identifiers with `naming`.
    #[must_use]
    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = Some(naming);
        self
    }

    /// Discover builders named `{Type}{suffix}`.
    #[must_use]
    pub fn with_builder_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.builder_suffix = suffix.into();
        self
    }

    /// Make a type discoverable as a builder.
    #[must_use]
    pub fn with_known_type(mut self, ty: TypeRef) -> Self {
        self.known_types.insert(ty);
        self
    }

    /// Make several types discoverable as builders.
    #[must_use]
    pub fn with_known_types<'a>(mut self, types: impl IntoIterator<Item = &'a TypeRef>) -> Self {
        self.known_types.extend(types.into_iter().cloned());
        self
    }

    fn external_name(&self, ident: &str) -> String {
        match self.naming {
            Some(naming) => naming.apply(ident),
            None => ident.to_string()
        }
    }

    fn property_name(&self, member: &MemberDescriptor) -> Option<PropertyName> {
        member
            .kind()
            .is_property()
            .then(|| PropertyName::new(self.external_name(member.name())))
    }
}

impl Default for ConventionIntrospector {
    fn default() -> Self {
        Self::new()
    }
}

impl Introspector for ConventionIntrospector {
    fn find_name_for_serialization(&self, member: &MemberDescriptor) -> Option<PropertyName> {
        self.property_name(member)
    }

    fn find_name_for_deserialization(&self, member: &MemberDescriptor) -> Option<PropertyName> {
        self.property_name(member)
    }

    /// Reached only when the primary of an [`IntrospectorPair`] has no
    /// opinion. [`MetadataIntrospector`] always answers the single-constant
    /// query, so behind it the converted names come through
    /// [`Introspector::find_enum_values`] alone.
    ///
    /// [`IntrospectorPair`]: crate::IntrospectorPair
    /// [`MetadataIntrospector`]: crate::MetadataIntrospector
    fn find_enum_value(&self, _enum_type: &TypeRef, constant: &str) -> Option<String> {
        self.naming.map(|naming| naming.apply(constant))
    }

    fn find_enum_values(&self, _enum_type: &TypeRef, constants: &[&str], names: &mut [String]) {
        let Some(naming) = self.naming else {
            return;
        };
        for (name, constant) in names.iter_mut().zip(constants) {
            *name = naming.apply(constant);
        }
    }

    fn find_builder_type(&self, ty: &TypeRef) -> Option<TypeRef> {
        if ty.name().contains('<') {
            return None;
        }
        let candidate = TypeRef::named(format!("{}{}", ty.name(), self.builder_suffix));
        self.known_types.contains(&candidate).then_some(candidate)
    }

    fn find_builder_config(&self, _builder: &TypeRef) -> Option<BuilderConfig> {
        Some(BuilderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conventions_convert_identifiers() {
        assert_eq!(NamingConvention::Camel.apply("created_at"), "createdAt");
        assert_eq!(NamingConvention::Pascal.apply("created_at"), "CreatedAt");
        assert_eq!(NamingConvention::Snake.apply("createdAt"), "created_at");
        assert_eq!(NamingConvention::Kebab.apply("created_at"), "created-at");
        assert_eq!(NamingConvention::ScreamingSnake.apply("createdAt"), "CREATED_AT");
        assert_eq!(NamingConvention::ScreamingSnake.apply("http-server"), "HTTP_SERVER");
    }

    #[test]
    fn parse_conventions() {
        assert_eq!("camelCase".parse(), Ok(NamingConvention::Camel));
        assert_eq!("pascal".parse(), Ok(NamingConvention::Pascal));
        assert_eq!("snake_case".parse(), Ok(NamingConvention::Snake));
        assert_eq!("kebab-case".parse(), Ok(NamingConvention::Kebab));
        assert_eq!("SCREAMING_SNAKE_CASE".parse(), Ok(NamingConvention::ScreamingSnake));
        assert!("Train-Case".parse::<NamingConvention>().is_err());
    }

    #[test]
    fn identifier_is_the_default_name() {
        let host = ConventionIntrospector::new();
        let member = MemberDescriptor::field(TypeRef::named("app::User"), "created_at");
        assert_eq!(host.find_name_for_serialization(&member).unwrap(), "created_at");
        assert_eq!(host.find_name_for_deserialization(&member).unwrap(), "created_at");
    }

    #[test]
    fn constructors_have_no_property_name() {
        let host = ConventionIntrospector::new();
        let member = MemberDescriptor::constructor(TypeRef::named("app::User"), "new");
        assert_eq!(host.find_name_for_serialization(&member), None);
    }

    #[test]
    fn enum_names_untouched_without_naming() {
        let host = ConventionIntrospector::new();
        let ty = TypeRef::named("app::Letter");
        let mut names = vec!["Alpha".to_string()];
        host.find_enum_values(&ty, &["Alpha"], &mut names);
        assert_eq!(names, ["Alpha"]);
        assert_eq!(host.find_enum_value(&ty, "Alpha"), None);
    }

    #[test]
    fn builder_discovery_needs_known_type() {
        let user = TypeRef::named("app::User");
        assert_eq!(ConventionIntrospector::new().find_builder_type(&user), None);

        let host = ConventionIntrospector::new()
            .with_builder_suffix("Factory")
            .with_known_types(&[TypeRef::named("app::UserFactory")]);
        assert_eq!(
            host.find_builder_type(&user),
            Some(TypeRef::named("app::UserFactory"))
        );
    }

    #[test]
    fn builder_config_is_always_default() {
        let host = ConventionIntrospector::default();
        assert_eq!(
            host.find_builder_config(&TypeRef::named("app::UserBuilder")),
            Some(BuilderConfig::default())
        );
    }
}
