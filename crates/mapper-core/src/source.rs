// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata lookup capability.
//!
//! [`MetadataSource`] is the only thing resolvers know about how metadata is
//! attached. The bundled implementation is
//! [`MetadataRegistry`](crate::MetadataRegistry); anything that can answer
//! these questions (a generated table, a config file, a test stub) works too.

use std::sync::Arc;

use crate::{
    error::LookupError,
    member::{MemberDescriptor, MemberKind, TypeRef},
    metadata::{
        BuilderConvention, CreatorMeta, DeserializeMeta, EnumNameMeta, IgnoreMeta, PropertyMeta
    }
};

/// Read-only access to attached metadata.
///
/// Every getter returns `None` when the record is absent. Implementations must
/// not change their answers once resolution has started.
pub trait MetadataSource: Send + Sync {
    /// Property metadata of a member.
    fn property(&self, member: &MemberDescriptor) -> Option<&PropertyMeta>;

    /// Creator metadata of a constructor.
    fn creator(&self, member: &MemberDescriptor) -> Option<&CreatorMeta>;

    /// Ignore marker of a member.
    fn ignore(&self, member: &MemberDescriptor) -> Option<&IgnoreMeta>;

    /// Naming metadata of an enum constant.
    fn enum_name(&self, member: &MemberDescriptor) -> Option<&EnumNameMeta>;

    /// Deserialization metadata of a type.
    fn deserialize(&self, ty: &TypeRef) -> Option<&DeserializeMeta>;

    /// Builder convention declared on a builder type.
    fn builder_convention(&self, ty: &TypeRef) -> Option<&BuilderConvention>;

    /// Identify a member of `ty` by identifier and kind.
    ///
    /// # Errors
    ///
    /// [`LookupError`] when the type or member cannot be located or the
    /// source refuses access.
    fn find_member(
        &self,
        ty: &TypeRef,
        name: &str,
        kind: MemberKind
    ) -> Result<MemberDescriptor, LookupError>;

    /// All members declared by `ty`, in declaration order.
    ///
    /// # Errors
    ///
    /// [`LookupError`] when the type cannot be enumerated.
    fn declared_members(&self, ty: &TypeRef) -> Result<Vec<MemberDescriptor>, LookupError>;
}

macro_rules! forward_source {
    ($($target:ty),*) => {$(
        impl<S: MetadataSource + ?Sized> MetadataSource for $target {
            fn property(&self, member: &MemberDescriptor) -> Option<&PropertyMeta> {
                (**self).property(member)
            }

            fn creator(&self, member: &MemberDescriptor) -> Option<&CreatorMeta> {
                (**self).creator(member)
            }

            fn ignore(&self, member: &MemberDescriptor) -> Option<&IgnoreMeta> {
                (**self).ignore(member)
            }

            fn enum_name(&self, member: &MemberDescriptor) -> Option<&EnumNameMeta> {
                (**self).enum_name(member)
            }

            fn deserialize(&self, ty: &TypeRef) -> Option<&DeserializeMeta> {
                (**self).deserialize(ty)
            }

            fn builder_convention(&self, ty: &TypeRef) -> Option<&BuilderConvention> {
                (**self).builder_convention(ty)
            }

            fn find_member(
                &self,
                ty: &TypeRef,
                name: &str,
                kind: MemberKind
            ) -> Result<MemberDescriptor, LookupError> {
                (**self).find_member(ty, name, kind)
            }

            fn declared_members(&self, ty: &TypeRef) -> Result<Vec<MemberDescriptor>, LookupError> {
                (**self).declared_members(ty)
            }
        }
    )*};
}

forward_source!(&S, Arc<S>, Box<S>);
