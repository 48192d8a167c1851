// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#[derive(mapper_derive::Mapped)]
pub enum Shape {
    Circle(f64),
    Empty,
}

fn main() {}
