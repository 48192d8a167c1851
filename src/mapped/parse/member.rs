// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Member-level attribute parsing.
//!
//! Handles `#[property(...)]` and `#[ignored]` on struct fields and enum
//! variants.
//!
//! # Attribute Keys
//!
//! | Key | Syntax | Fields | Variants |
//! |-----|--------|--------|----------|
//! | `name` | `name = "foo"` | yes | yes |
//! | `required` | `required`, `required = false` | yes | no |
//! | `index` | `index = 0` | yes | no |
//! | `default_value` | `default_value = "x"` | yes | no |
//! | `access` | `access = "read_only"` | yes | no |

use darling::FromMeta;
use syn::{Attribute, Field, LitBool, LitInt, LitStr, Meta, Token, Variant, ext::IdentExt};

use super::access::AccessAttr;

/// Kind of a parsed member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKindDef {
    /// Named struct field.
    Field,

    /// Unit enum variant.
    EnumConstant
}

/// Parsed `#[property(...)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyAttr {
    /// Explicit external name.
    pub name: Option<String>,

    /// Mandatory marker.
    pub required: bool,

    /// Explicit position.
    pub index: Option<i32>,

    /// Textual default value.
    pub default_value: Option<String>,

    /// Access restriction.
    pub access: AccessAttr
}

impl PropertyAttr {
    /// Whether anything besides `name` was set.
    fn has_field_only_keys(&self) -> bool {
        self.required
            || self.index.is_some()
            || self.default_value.is_some()
            || self.access != AccessAttr::Auto
    }
}

/// One member with its parsed attributes.
#[derive(Debug, Clone)]
pub struct MemberDef {
    /// Identifier, without any raw prefix.
    pub name: String,

    /// Field or enum constant.
    pub kind: MemberKindDef,

    /// `#[property(...)]`, if present.
    pub property: Option<PropertyAttr>,

    /// `#[ignored]` value, if present.
    pub ignored: Option<bool>
}

impl MemberDef {
    /// Parse a named struct field.
    ///
    /// # Errors
    ///
    /// Unknown `#[property]` keys, malformed values and duplicate attributes.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(darling::Error::custom("Mapped requires named fields").with_span(field));
        };
        let (property, ignored) = parse_attrs(&field.attrs)?;

        Ok(Self {
            name: ident.unraw().to_string(),
            kind: MemberKindDef::Field,
            property,
            ignored
        })
    }

    /// Parse a unit enum variant.
    ///
    /// # Errors
    ///
    /// Non-unit variants and `#[property]` keys other than `name`.
    pub fn from_variant(variant: &Variant) -> darling::Result<Self> {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(
                darling::Error::custom("Mapped enums must only have unit variants")
                    .with_span(&variant.ident)
            );
        }
        let (property, ignored) = parse_attrs(&variant.attrs)?;
        if property.as_ref().is_some_and(PropertyAttr::has_field_only_keys) {
            return Err(darling::Error::custom(
                "only `name` is supported in `#[property]` on enum variants"
            )
            .with_span(&variant.ident));
        }

        Ok(Self {
            name: variant.ident.unraw().to_string(),
            kind: MemberKindDef::EnumConstant,
            property,
            ignored
        })
    }
}

fn parse_attrs(attrs: &[Attribute]) -> darling::Result<(Option<PropertyAttr>, Option<bool>)> {
    let mut errors = darling::Error::accumulator();
    let mut property = None;
    let mut ignored = None;

    for attr in attrs {
        if attr.path().is_ident("property") {
            if property.is_some() {
                errors.push(darling::Error::custom("duplicate `#[property]`").with_span(attr));
                continue;
            }
            property = errors.handle(parse_property(attr).map_err(darling::Error::from));
        } else if attr.path().is_ident("ignored") {
            if ignored.is_some() {
                errors.push(darling::Error::custom("duplicate `#[ignored]`").with_span(attr));
                continue;
            }
            ignored = errors.handle(bool::from_meta(&attr.meta));
        }
    }

    errors.finish_with((property, ignored))
}

/// Parse `#[property]` or `#[property(...)]`.
fn parse_property(attr: &Attribute) -> syn::Result<PropertyAttr> {
    let mut property = PropertyAttr::default();
    if let Meta::Path(_) = attr.meta {
        return Ok(property);
    }

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("name") {
            let value: LitStr = meta.value()?.parse()?;
            property.name = Some(value.value());
        } else if meta.path.is_ident("required") {
            property.required = if meta.input.peek(Token![=]) {
                meta.value()?.parse::<LitBool>()?.value
            } else {
                true
            };
        } else if meta.path.is_ident("index") {
            let value: LitInt = meta.value()?.parse()?;
            property.index = Some(value.base10_parse()?);
        } else if meta.path.is_ident("default_value") {
            let value: LitStr = meta.value()?.parse()?;
            property.default_value = Some(value.value());
        } else if meta.path.is_ident("access") {
            let value: LitStr = meta.value()?.parse()?;
            property.access = AccessAttr::from_string(&value.value()).map_err(|_| {
                syn::Error::new(
                    value.span(),
                    format!(
                        "unknown access `{}`, expected one of `auto`, `read_only`, \
                         `write_only`, `read_write`",
                        value.value()
                    )
                )
            })?;
        } else {
            return Err(meta.error(
                "unknown `#[property]` key, expected one of `name`, `required`, `index`, \
                 `default_value`, `access`"
            ));
        }
        Ok(())
    })?;

    Ok(property)
}
