// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Ignore resolution.

use crate::{member::MemberDescriptor, source::MetadataSource};

/// Whether `member` is excluded; `None` lets the host use its own marker.
pub fn ignored(source: &impl MetadataSource, member: &MemberDescriptor) -> Option<bool> {
    source.ignore(member).map(|i| i.ignored)
}
