// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Creator binding mode.

use darling::FromMeta;

/// Value of `#[mapped(creator(mode = "..."))]`.
///
/// # Accepted Values
///
/// | Value | Meaning |
/// |-------|---------|
/// | `"default"` | Host heuristics pick the mode (default) |
/// | `"delegating"` | Whole value bound to the single argument |
/// | `"properties"` | Arguments bound to named properties |
/// | `"disabled"` | Not a creator |
///
/// Values are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreatorModeAttr {
    /// Host heuristics pick the mode.
    #[default]
    Default,

    /// Whole-value binding.
    Delegating,

    /// Named-property binding.
    Properties,

    /// Not a creator.
    Disabled
}

impl CreatorModeAttr {
    /// Variant name on `mapper_core::CreatorMode`.
    pub fn variant(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Delegating => "Delegating",
            Self::Properties => "Properties",
            Self::Disabled => "Disabled"
        }
    }
}

impl FromMeta for CreatorModeAttr {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "delegating" => Ok(Self::Delegating),
            "properties" => Ok(Self::Properties),
            "disabled" => Ok(Self::Disabled),
            _ => Err(darling::Error::unknown_value(value))
        }
    }

    fn from_value(value: &syn::Lit) -> darling::Result<Self> {
        let syn::Lit::Str(lit) = value else {
            return Err(darling::Error::unexpected_lit_type(value));
        };
        Self::from_string(&lit.value()).map_err(|_| {
            darling::Error::custom(format!(
                "unknown creator mode `{}`, expected one of `default`, `delegating`, \
                 `properties`, `disabled`",
                lit.value()
            ))
            .with_span(lit)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_default() {
        assert_eq!(CreatorModeAttr::default(), CreatorModeAttr::Default);
    }

    #[test]
    fn from_meta_values() {
        assert_eq!(CreatorModeAttr::from_string("default").unwrap(), CreatorModeAttr::Default);
        assert_eq!(
            CreatorModeAttr::from_string("Delegating").unwrap(),
            CreatorModeAttr::Delegating
        );
        assert_eq!(
            CreatorModeAttr::from_string("properties").unwrap(),
            CreatorModeAttr::Properties
        );
        assert_eq!(CreatorModeAttr::from_string("DISABLED").unwrap(), CreatorModeAttr::Disabled);
    }

    #[test]
    fn from_meta_invalid() {
        assert!(CreatorModeAttr::from_string("props").is_err());
    }

    #[test]
    fn from_value_names_the_mode() {
        let lit: syn::Lit = syn::parse_quote!("fields");
        let err = CreatorModeAttr::from_value(&lit).unwrap_err();
        assert!(err.to_string().contains("unknown creator mode `fields`"));
    }

    #[test]
    fn from_value_rejects_non_strings() {
        let lit: syn::Lit = syn::parse_quote!(3);
        assert!(CreatorModeAttr::from_value(&lit).is_err());
    }
}
