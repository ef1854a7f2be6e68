//! Struct-specific `Maskable` derivation.
//!
//! This module generates the record view of struct fields and collects generic
//! parameters that require trait bounds.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DataStruct, Fields, Result, ext::IdentExt, spanned::Spanned};

use crate::{
    DeriveOutput, crate_path,
    strategy::parse_field_strategy,
    transform::{DeriveContext, FieldEntry, generate_field_entry},
};

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<DeriveOutput> {
    let mut used_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        used_generics: &mut used_generics,
    };
    let node = crate_path("Node");

    let node_body = match data.fields {
        Fields::Named(fields) => {
            let (patterns, entries) = named_fields(&mut ctx, fields)?;
            quote! {
                let Self { #(#patterns),* } = self;
                #node::Record(::std::vec![#(#entries),*])
            }
        }
        Fields::Unnamed(fields) => {
            let (patterns, entries) = unnamed_fields(&mut ctx, fields)?;
            quote! {
                let Self ( #(#patterns),* ) = self;
                #node::Record(::std::vec![#(#entries),*])
            }
        }
        Fields::Unit => quote! { #node::Record(::std::vec::Vec::new()) },
    };

    Ok(DeriveOutput {
        node_body,
        used_generics,
    })
}

/// Builds `name` / `name: _` patterns and field entries for named fields.
pub(crate) fn named_fields(
    ctx: &mut DeriveContext<'_>,
    fields: syn::FieldsNamed,
) -> Result<(Vec<TokenStream>, Vec<TokenStream>)> {
    let mut patterns = Vec::new();
    let mut entries = Vec::new();

    for field in fields.named {
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        let ident = field
            .ident
            .ok_or_else(|| syn::Error::new(span, "named field should have an identifier"))?;
        let name = ident.unraw().to_string();

        let FieldEntry { binding, entry } =
            generate_field_entry(ctx, &field.ty, &name, ident.clone(), span, &strategy);
        patterns.push(match binding {
            Some(binding) => quote! { #binding },
            None => quote! { #ident: _ },
        });
        entries.push(entry);
    }

    Ok((patterns, entries))
}

/// Builds `field_N` / `_` patterns and field entries for tuple fields.
/// Fields are named by their index.
pub(crate) fn unnamed_fields(
    ctx: &mut DeriveContext<'_>,
    fields: syn::FieldsUnnamed,
) -> Result<(Vec<TokenStream>, Vec<TokenStream>)> {
    let mut patterns = Vec::new();
    let mut entries = Vec::new();

    for (index, field) in fields.unnamed.into_iter().enumerate() {
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        let binding = format_ident!("field_{index}");
        let name = index.to_string();

        let FieldEntry { binding, entry } =
            generate_field_entry(ctx, &field.ty, &name, binding, span, &strategy);
        patterns.push(match binding {
            Some(binding) => quote! { #binding },
            None => quote! { _ },
        });
        entries.push(entry);
    }

    Ok((patterns, entries))
}
