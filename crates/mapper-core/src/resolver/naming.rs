// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property naming.
//!
//! Property metadata carries a single name, used for both directions. An
//! empty name is the same as no metadata.

use crate::{introspect::PropertyName, member::MemberDescriptor, source::MetadataSource};

/// External name for writing `member`.
pub fn serialization_name(
    source: &impl MetadataSource,
    member: &MemberDescriptor
) -> Option<PropertyName> {
    explicit_name(source, member)
}

/// External name for reading `member`.
pub fn deserialization_name(
    source: &impl MetadataSource,
    member: &MemberDescriptor
) -> Option<PropertyName> {
    explicit_name(source, member)
}

fn explicit_name(source: &impl MetadataSource, member: &MemberDescriptor) -> Option<PropertyName> {
    source
        .property(member)?
        .name()
        .map(PropertyName::new)
}
