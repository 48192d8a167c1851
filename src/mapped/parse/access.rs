// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property access restriction.

use darling::FromMeta;

/// Value of `#[property(access = "...")]`.
///
/// # Accepted Values
///
/// | Value | Meaning |
/// |-------|---------|
/// | `"auto"` | Visibility rules decide (default) |
/// | `"read_only"` | Serialize only |
/// | `"write_only"` | Deserialize only |
/// | `"read_write"` | Both directions |
///
/// Values are case-insensitive; `-` may replace `_`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessAttr {
    /// Visibility rules decide.
    #[default]
    Auto,

    /// Serialize only.
    ReadOnly,

    /// Deserialize only.
    WriteOnly,

    /// Both directions.
    ReadWrite
}

impl AccessAttr {
    /// Variant name on `mapper_core::Access`.
    pub fn variant(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::ReadOnly => "ReadOnly",
            Self::WriteOnly => "WriteOnly",
            Self::ReadWrite => "ReadWrite"
        }
    }
}

impl FromMeta for AccessAttr {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().replace('-', "_").as_str() {
            "auto" => Ok(Self::Auto),
            "read_only" => Ok(Self::ReadOnly),
            "write_only" => Ok(Self::WriteOnly),
            "read_write" => Ok(Self::ReadWrite),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}
