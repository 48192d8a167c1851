// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Mapped derive macro.
//!
//! Container attributes (`#[mapped(...)]`) are parsed with darling's
//! `FromDeriveInput`. Member attributes (`#[property(...)]`, `#[ignored]`)
//! are parsed by hand since `#[property]` mixes flags with key-value pairs
//! and applies to both fields and enum variants.
//!
//! # Module Structure
//!
//! - [`container`] - `#[mapped(...)]` and the main [`MappedDef`]
//! - [`member`] - `#[property(...)]` and `#[ignored]`
//! - [`access`] - `access = "..."` values
//! - [`creator_mode`] - `mode = "..."` values
//!
//! # Data Structures
//!
//! ```text
//! MappedDef
//! ├── ident, generics
//! ├── builder: Option<Path>              (#[mapped(builder = "..")])
//! ├── builder_convention: Option<..>     (#[mapped(builder_convention(..))])
//! ├── creators: Vec<CreatorAttr>         (#[mapped(creator(..))], repeatable)
//! └── members: Vec<MemberDef>
//!     └── MemberDef
//!         ├── name: String
//!         ├── kind: Field | EnumConstant
//!         ├── property: Option<PropertyAttr>
//!         └── ignored: Option<bool>
//! ```

pub mod access;
pub mod container;
pub mod creator_mode;
pub mod member;

pub use self::{
    access::AccessAttr,
    container::{ConventionAttr, CreatorAttr, MappedDef},
    member::{MemberDef, MemberKindDef, PropertyAttr}
};
