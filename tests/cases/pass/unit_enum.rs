// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_core::{Mapped, MemberKind};

#[derive(mapper_derive::Mapped)]
pub enum Letter {
    A,
    #[property(name = "bee")]
    B,
    C,
}

fn main() {
    let meta = Letter::type_metadata();
    assert_eq!(meta.members.len(), 3);

    let b = meta.member("B", MemberKind::EnumConstant).unwrap();
    assert_eq!(b.enum_name.as_ref().and_then(|e| e.name()), Some("bee"));

    let a = meta.member("A", MemberKind::EnumConstant).unwrap();
    assert!(a.enum_name.is_none());
}
