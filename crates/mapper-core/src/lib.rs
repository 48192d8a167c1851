// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata resolution for object mappers.
//!
//! A mapper building its internal schema for a type asks an [`Introspector`]
//! which external name each member gets, whether it is required, how the type
//! is constructed and so on. This crate answers those questions from explicit
//! metadata and stays silent wherever none is attached, leaving the decision
//! to the host's own defaults.
//!
//! # Layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`metadata`] | Attachable metadata records and their defaults |
//! | [`member`] | Type and member descriptors |
//! | [`source`] | Lookup of metadata by descriptor |
//! | [`registry`] | In-memory source filled by [`Mapped`] types |
//! | [`introspect`] | Host interface, chaining and host defaults |
//! | [`resolver`] | Metadata-backed resolution |
//! | [`schema`] | Per-type schema assembly |
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use mapper_core::{
//!     ConventionIntrospector, IntrospectorPair, MemberMetadata, MetadataIntrospector,
//!     MetadataRegistry, MetadataSource, PropertyMeta, TypeMetadata, TypeRef, TypeShape
//! };
//!
//! let ty = TypeRef::named("app::User");
//! let mut registry = MetadataRegistry::new();
//! registry.insert(
//!     TypeMetadata::new(ty.clone())
//!         .with_member(MemberMetadata::field("a").with_property(PropertyMeta::new().with_name("foo")))
//!         .with_member(MemberMetadata::field("b"))
//! );
//! let registry = Arc::new(registry);
//!
//! let chain = IntrospectorPair::new(
//!     MetadataIntrospector::new(Arc::clone(&registry)),
//!     ConventionIntrospector::new()
//! );
//! let members = registry.declared_members(&ty).unwrap();
//! let shape = TypeShape::resolve(&chain, &ty, &members);
//!
//! assert_eq!(shape.property_names(), ["foo", "b"]);
//! ```
//!
//! # Features
//!
//! - `derive` - `#[derive(Mapped)]` attaching metadata from attributes
//! - `serde` - metadata records (de)serialize; [`MetadataRegistry::from_json`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod introspect;
pub mod member;
pub mod metadata;
pub mod prelude;
pub mod registry;
pub mod resolver;
pub mod schema;
pub mod source;

#[cfg(feature = "serde")]
pub use error::RegistryError;
pub use error::LookupError;
pub use introspect::{
    BuilderConfig, ConventionIntrospector, CreatorBinding, Introspector, IntrospectorPair,
    NamingConvention, NopIntrospector, ParseNamingConventionError, PropertyAccess, PropertyName
};
/// Derive macro attaching metadata from `#[mapped]`, `#[property]` and
/// `#[ignored]` attributes.
#[cfg(feature = "derive")]
pub use mapper_derive::Mapped;
pub use member::{MemberDescriptor, MemberKind, TypeRef};
pub use metadata::{
    Access, BuilderConvention, CreatorMeta, CreatorMode, DEFAULT_BUILD_METHOD,
    DEFAULT_WITH_PREFIX, DeserializeMeta, EnumNameMeta, INDEX_UNKNOWN, IgnoreMeta, PropertyMeta
};
pub use registry::{Mapped, MemberMetadata, MetadataRegistry, TypeMetadata};
pub use resolver::MetadataIntrospector;
pub use schema::{Construction, CreatorShape, PropertyShape, TypeShape};
pub use source::MetadataSource;
