// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Mapped` implementation generation.
//!
//! For a type `User`, generates:
//!
//! ```rust,ignore
//! impl ::mapper_core::Mapped for User {
//!     fn type_metadata() -> ::mapper_core::TypeMetadata {
//!         ::mapper_core::TypeMetadata::new(::mapper_core::TypeRef::of::<Self>())
//!             .with_deserialize(::mapper_core::DeserializeMeta::new(
//!                 ::mapper_core::TypeRef::of::<UserBuilder>()
//!             ))
//!             .with_member(
//!                 ::mapper_core::MemberMetadata::field("a")
//!                     .with_property(::mapper_core::PropertyMeta::new().with_name("foo"))
//!             )
//!             .with_member(::mapper_core::MemberMetadata::field("b"))
//!     }
//! }
//! ```
//!
//! Every field and variant is listed, with or without attributes, so that the
//! registry can enumerate declared members.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::{
    AccessAttr, ConventionAttr, CreatorAttr, MappedDef, MemberDef, MemberKindDef, PropertyAttr
};

/// Generates `impl ::mapper_core::Mapped`.
pub fn generate(def: &MappedDef) -> TokenStream {
    let ident = &def.ident;
    let (impl_generics, ty_generics, where_clause) = def.generics.split_for_impl();

    let deserialize = def.builder.as_ref().map(|builder| {
        quote! {
            .with_deserialize(::mapper_core::DeserializeMeta::new(
                ::mapper_core::TypeRef::of::<#builder>()
            ))
        }
    });
    let convention = def.builder_convention.as_ref().map(convention);
    let members = def.members.iter().map(member);
    let creators = def.creators.iter().map(creator);

    quote! {
        impl #impl_generics ::mapper_core::Mapped for #ident #ty_generics #where_clause {
            fn type_metadata() -> ::mapper_core::TypeMetadata {
                ::mapper_core::TypeMetadata::new(::mapper_core::TypeRef::of::<Self>())
                    #deserialize
                    #convention
                    #(#members)*
                    #(#creators)*
            }
        }
    }
}

fn convention(attr: &ConventionAttr) -> TokenStream {
    let build_method = match &attr.build_method {
        Some(name) => quote! { #name },
        None => quote! { ::mapper_core::DEFAULT_BUILD_METHOD }
    };
    let with_prefix = match &attr.with_prefix {
        Some(prefix) => quote! { #prefix },
        None => quote! { ::mapper_core::DEFAULT_WITH_PREFIX }
    };
    quote! {
        .with_builder_convention(::mapper_core::BuilderConvention::new(#build_method, #with_prefix))
    }
}

fn member(member: &MemberDef) -> TokenStream {
    let name = &member.name;
    let constructor = match member.kind {
        MemberKindDef::Field => quote! { ::mapper_core::MemberMetadata::field(#name) },
        MemberKindDef::EnumConstant => {
            quote! { ::mapper_core::MemberMetadata::enum_constant(#name) }
        }
    };
    let property = member.property.as_ref().map(|attr| match member.kind {
        MemberKindDef::Field => {
            let meta = property(attr);
            quote! { .with_property(#meta) }
        }
        MemberKindDef::EnumConstant => {
            let enum_name = attr.name.as_deref().unwrap_or_default();
            quote! { .with_enum_name(::mapper_core::EnumNameMeta::new(#enum_name)) }
        }
    });
    let ignore = member.ignored.map(|ignored| {
        quote! { .with_ignore(::mapper_core::IgnoreMeta::new(#ignored)) }
    });

    quote! {
        .with_member(#constructor #property #ignore)
    }
}

fn property(attr: &PropertyAttr) -> TokenStream {
    let name = attr.name.as_ref().map(|name| quote! { .with_name(#name) });
    let required = attr.required.then(|| quote! { .with_required(true) });
    let index = attr.index.map(|index| quote! { .with_index(#index) });
    let default_value = attr
        .default_value
        .as_ref()
        .map(|value| quote! { .with_default_value(#value) });
    let access = (attr.access != AccessAttr::Auto).then(|| {
        let variant = format_ident!("{}", attr.access.variant());
        quote! { .with_access(::mapper_core::Access::#variant) }
    });

    quote! {
        ::mapper_core::PropertyMeta::new() #name #required #index #default_value #access
    }
}

fn creator(attr: &CreatorAttr) -> TokenStream {
    let name = &attr.name;
    let mode = format_ident!("{}", attr.mode.variant());
    quote! {
        .with_member(
            ::mapper_core::MemberMetadata::constructor(#name)
                .with_creator(::mapper_core::CreatorMeta::new(::mapper_core::CreatorMode::#mode))
        )
    }
}
