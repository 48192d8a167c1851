// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Required flag, default value, index and access.
//!
//! Four independent lookups against property metadata; each returns `None`
//! when the metadata is absent.

use crate::{introspect::PropertyAccess, member::MemberDescriptor, source::MetadataSource};

/// Required flag, verbatim.
pub fn required(source: &impl MetadataSource, member: &MemberDescriptor) -> Option<bool> {
    source.property(member).map(|p| p.required)
}

/// Default value; empty is treated as unset.
pub fn default_value(source: &impl MetadataSource, member: &MemberDescriptor) -> Option<String> {
    source
        .property(member)?
        .default_value()
        .map(str::to_string)
}

/// Ordering index; [`INDEX_UNKNOWN`](crate::INDEX_UNKNOWN) is treated as
/// unset.
pub fn index(source: &impl MetadataSource, member: &MemberDescriptor) -> Option<i32> {
    source.property(member)?.index()
}

/// Access restriction mapped to the host enum.
pub fn access(source: &impl MetadataSource, member: &MemberDescriptor) -> Option<PropertyAccess> {
    source.property(member).map(|p| p.access.into())
}
