// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_core::{Mapped, TypeRef};

#[derive(mapper_derive::Mapped)]
#[mapped(builder_convention(build_method = "create", with_prefix = "set"))]
pub struct UserMaker;

#[derive(mapper_derive::Mapped)]
#[mapped(builder_convention())]
pub struct AccountBuilder;

#[derive(mapper_derive::Mapped)]
#[mapped(builder = "UserMaker")]
pub struct User {
    pub name: String,
}

fn main() {
    let user = User::type_metadata();
    let deserialize = user.deserialize.unwrap();
    assert_eq!(deserialize.builder(), Some(&TypeRef::of::<UserMaker>()));

    let maker = UserMaker::type_metadata();
    let convention = maker.builder_convention.unwrap();
    assert_eq!(convention.build_method_name, "create");
    assert_eq!(convention.with_prefix, "set");

    let account = AccountBuilder::type_metadata();
    let convention = account.builder_convention.unwrap();
    assert_eq!(convention.build_method_name, "build");
    assert_eq!(convention.with_prefix, "with");
    assert!(account.members.is_empty());
}
