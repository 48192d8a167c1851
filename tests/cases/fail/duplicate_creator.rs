// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#[derive(mapper_derive::Mapped)]
#[mapped(creator(name = "new", mode = "disabled"), creator(name = "new", mode = "properties"))]
pub struct User {
    pub id: u64,
}

fn main() {}
