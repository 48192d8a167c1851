// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_core::{Access, Mapped, MemberKind};

#[derive(mapper_derive::Mapped)]
pub struct User {
    #[property(name = "foo", required, index = 0, default_value = "x", access = "read_only")]
    pub a: String,

    pub b: String,

    #[ignored]
    pub cache: Vec<u8>,
}

fn main() {
    let meta = User::type_metadata();
    assert_eq!(meta.members.len(), 3);

    let a = meta.member("a", MemberKind::Field).unwrap();
    let property = a.property.as_ref().unwrap();
    assert_eq!(property.name(), Some("foo"));
    assert!(property.required);
    assert_eq!(property.index(), Some(0));
    assert_eq!(property.default_value(), Some("x"));
    assert_eq!(property.access, Access::ReadOnly);

    let b = meta.member("b", MemberKind::Field).unwrap();
    assert!(b.property.is_none());
    assert!(b.ignore.is_none());

    let cache = meta.member("cache", MemberKind::Field).unwrap();
    assert!(cache.ignore.as_ref().unwrap().ignored);
}
