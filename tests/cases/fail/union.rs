// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#[derive(mapper_derive::Mapped)]
pub union Bits {
    int: u32,
    float: f32,
}

fn main() {}
