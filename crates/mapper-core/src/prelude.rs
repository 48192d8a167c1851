// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! `Mapped` brings in both the trait and, with the `derive` feature, the
//! derive macro.
//!
//! # Usage
//!
//! ```rust
//! use mapper_core::prelude::*;
//! ```

pub use crate::{
    ConventionIntrospector, Introspector, IntrospectorPair, Mapped, MemberDescriptor,
    MetadataIntrospector, MetadataRegistry, MetadataSource, NopIntrospector, TypeRef, TypeShape
};
