// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Derive macro attaching mapping metadata to types.
//!
//! `#[derive(Mapped)]` implements `mapper_core::Mapped`, turning attributes
//! into the metadata records a `MetadataRegistry` serves to the resolver.
//!
//! # Attributes
//!
//! | Attribute | Target | Record |
//! |-----------|--------|--------|
//! | `#[mapped(builder = "Path")]` | type | deserialization builder |
//! | `#[mapped(builder_convention(build_method = "..", with_prefix = ".."))]` | builder type | builder convention |
//! | `#[mapped(creator(name = "new", mode = "properties"))]` | type, repeatable | creator on an associated fn |
//! | `#[property(name = "..", required, index = 0, default_value = "..", access = "read_only")]` | field | property |
//! | `#[property(name = "..")]` | enum variant | enum constant name |
//! | `#[ignored]`, `#[ignored = false]` | field, variant | ignore marker |
//!
//! # Example
//!
//! ```rust,ignore
//! use mapper_core::{Mapped, MetadataRegistry};
//!
//! #[derive(Mapped)]
//! #[mapped(creator(name = "new", mode = "properties"))]
//! struct User {
//!     #[property(name = "user_id", index = 0)]
//!     id: u64,
//!
//!     #[property(required)]
//!     email: String,
//!
//!     #[ignored]
//!     cache: Vec<u8>
//! }
//!
//! #[derive(Mapped)]
//! enum Status {
//!     Active,
//!     #[property(name = "gone")]
//!     Deleted
//! }
//!
//! let mut registry = MetadataRegistry::new();
//! registry.register::<User>().register::<Status>();
//! ```
//!
//! Supported on structs with named fields, unit structs and enums whose
//! variants are all unit variants.

mod mapped;

use proc_macro::TokenStream;

/// Derive `mapper_core::Mapped` from `#[mapped]`, `#[property]` and
/// `#[ignored]` attributes.
#[proc_macro_derive(Mapped, attributes(mapped, property, ignored))]
pub fn derive_mapped(input: TokenStream) -> TokenStream {
    mapped::derive(input)
}
