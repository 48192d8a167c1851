// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types of the metadata lookup capability.
//!
//! Resolvers never return these: a failed lookup degrades to "no opinion".
//! They exist for [`MetadataSource`](crate::MetadataSource) implementations
//! and for loading registration tables.

use thiserror::Error;

use crate::member::MemberKind;

/// Failure to locate a type or member in a metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The type has no registered metadata.
    #[error("no metadata registered for type `{type_name}`")]
    UnknownType {
        /// Fully qualified type name.
        type_name: String
    },

    /// The type is known but declares no such member.
    #[error("type `{type_name}` declares no {kind} named `{member}`")]
    NoSuchMember {
        /// Fully qualified type name.
        type_name: String,
        /// Member identifier.
        member:    String,
        /// Member kind searched for.
        kind:      MemberKind
    },

    /// The source refuses to expose the member.
    #[error("access to `{type_name}::{member}` denied")]
    AccessDenied {
        /// Fully qualified type name.
        type_name: String,
        /// Member identifier.
        member:    String
    }
}

/// Failure to load a registration table from external configuration.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The configuration is not valid JSON for a metadata table.
    #[error("invalid metadata table: {0}")]
    Parse(#[from] serde_json::Error)
}
