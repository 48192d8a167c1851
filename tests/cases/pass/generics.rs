// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_core::{Mapped, MemberKind, TypeRef};

#[derive(mapper_derive::Mapped)]
pub struct Page<T>
where
    T: Clone,
{
    #[property(index = 1)]
    pub items: Vec<T>,

    #[property(name = "type", index = 0)]
    pub r#type: String,
}

fn main() {
    let meta = Page::<u32>::type_metadata();
    assert_eq!(meta.type_ref, TypeRef::of::<Page<u32>>());
    assert_ne!(meta.type_ref, TypeRef::of::<Page<String>>());

    let kind = meta.member("type", MemberKind::Field).unwrap();
    assert_eq!(kind.property.as_ref().and_then(|p| p.index()), Some(0));
}
