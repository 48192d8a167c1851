// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapped derive macro implementation.

mod codegen;
pub mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::MappedDef;

/// Main entry point for the Mapped derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match MappedDef::from_derive_input(&input) {
        Ok(def) => generate(&def),
        Err(err) => err.write_errors().into()
    }
}

fn generate(def: &MappedDef) -> TokenStream {
    codegen::generate(def).into()
}
