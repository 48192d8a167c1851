// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Container-level attribute parsing.
//!
//! Parses `#[mapped(...)]` with darling and provides [`MappedDef`], the
//! structure consumed by code generation.

use std::collections::HashSet;

use darling::{FromDeriveInput, FromMeta};
use syn::{DeriveInput, Generics, Ident, LitStr};

use super::{creator_mode::CreatorModeAttr, member::MemberDef};

/// `#[mapped(builder_convention(...))]`.
///
/// Unset names fall back to `build` and `with`.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromMeta)]
#[darling(default)]
pub struct ConventionAttr {
    /// Completion method name.
    pub build_method: Option<String>,

    /// Setter-like method prefix.
    pub with_prefix: Option<String>
}

/// `#[mapped(creator(...))]`.
///
/// Names must be unique within one type.
#[derive(Debug, Clone, FromMeta)]
pub struct CreatorAttr {
    /// Associated function acting as creator.
    pub name: LitStr,

    /// Binding mode.
    #[darling(default)]
    pub mode: CreatorModeAttr
}

/// Container attributes parsed from `#[mapped(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(mapped))]
struct MappedAttrs {
    ident: Ident,

    generics: Generics,

    /// Builder used to construct the type.
    ///
    /// ```rust,ignore
    /// #[mapped(builder = "UserBuilder")]
    /// #[mapped(builder = "crate::builders::UserBuilder")]
    /// ```
    #[darling(default)]
    builder: Option<syn::Path>,

    /// Naming convention, when this type is itself a builder.
    #[darling(default)]
    builder_convention: Option<ConventionAttr>,

    #[darling(multiple, rename = "creator")]
    creators: Vec<CreatorAttr>
}

/// Complete parsed definition of a mapped type.
#[derive(Debug)]
pub struct MappedDef {
    /// Type identifier.
    pub ident: Ident,

    /// Type generics, carried into the generated impl.
    pub generics: Generics,

    /// Explicit builder type.
    pub builder: Option<syn::Path>,

    /// Builder convention of this type.
    pub builder_convention: Option<ConventionAttr>,

    /// Creators in declaration order.
    pub creators: Vec<CreatorAttr>,

    /// Fields or enum constants in declaration order.
    pub members: Vec<MemberDef>
}

impl MappedDef {
    /// Parse a mapped type from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Tuple structs, unions and enums with data-carrying variants
    /// - Unknown `#[mapped]` keys or values
    /// - Creators declared twice under the same name
    /// - Invalid member attributes, all reported together
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = MappedAttrs::from_derive_input(input)?;

        let parsed: Vec<darling::Result<MemberDef>> = match &input.data {
            syn::Data::Struct(data) => data.fields.iter().map(MemberDef::from_field).collect(),
            syn::Data::Enum(data) => data.variants.iter().map(MemberDef::from_variant).collect(),
            syn::Data::Union(_) => {
                return Err(darling::Error::custom("Mapped can not be derived for unions")
                    .with_span(&input.ident));
            }
        };

        let mut errors = darling::Error::accumulator();
        let members: Vec<MemberDef> = parsed
            .into_iter()
            .filter_map(|member| errors.handle(member))
            .collect();

        let mut seen = HashSet::new();
        for creator in &attrs.creators {
            let name = creator.name.value();
            if !seen.insert(name.clone()) {
                errors.push(
                    darling::Error::custom(format!("duplicate creator `{name}`"))
                        .with_span(&creator.name)
                );
            }
        }
        errors.finish()?;

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            builder: attrs.builder,
            builder_convention: attrs.builder_convention,
            creators: attrs.creators,
            members
        })
    }
}
