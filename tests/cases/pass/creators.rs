// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_core::{CreatorMode, Mapped, MemberKind};

#[derive(mapper_derive::Mapped)]
#[mapped(
    creator(name = "new", mode = "properties"),
    creator(name = "from_name", mode = "delegating"),
    creator(name = "legacy", mode = "disabled")
)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: String) -> Self {
        Self { name }
    }

    pub fn from_name(name: String) -> Self {
        Self { name }
    }

    pub fn legacy() -> Self {
        Self { name: String::new() }
    }
}

fn mode(name: &str) -> CreatorMode {
    User::type_metadata()
        .member(name, MemberKind::Constructor)
        .and_then(|m| m.creator.clone())
        .unwrap()
        .mode
}

fn main() {
    assert_eq!(mode("new"), CreatorMode::Properties);
    assert_eq!(mode("from_name"), CreatorMode::Delegating);
    assert_eq!(mode("legacy"), CreatorMode::Disabled);

    let user = User::new("a".to_string());
    assert_eq!(user.name, User::from_name("a".to_string()).name);
    assert!(User::legacy().name.is_empty());
}
