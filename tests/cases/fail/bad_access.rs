// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#[derive(mapper_derive::Mapped)]
pub struct User {
    #[property(access = "sometimes")]
    pub id: u64,
}

fn main() {}
