//! Enum-specific `Maskable` derivation.
//!
//! Each variant becomes a match arm that views the active variant's fields as
//! a record. The variant name itself is left to serde.

use quote::quote;
use syn::{DataEnum, Fields, Result};

use crate::{
    DeriveOutput, crate_path,
    derive_struct::{named_fields, unnamed_fields},
    transform::DeriveContext,
};

pub(crate) fn derive_enum(data: DataEnum, generics: &syn::Generics) -> Result<DeriveOutput> {
    let mut used_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        used_generics: &mut used_generics,
    };
    let node = crate_path("Node");

    if data.variants.is_empty() {
        return Ok(DeriveOutput {
            node_body: quote! { match *self {} },
            used_generics,
        });
    }

    let mut arms = Vec::new();
    for variant in data.variants {
        let variant_ident = variant.ident;
        let arm = match variant.fields {
            Fields::Named(fields) => {
                let (patterns, entries) = named_fields(&mut ctx, fields)?;
                quote! {
                    Self::#variant_ident { #(#patterns),* } => {
                        #node::Record(::std::vec![#(#entries),*])
                    }
                }
            }
            Fields::Unnamed(fields) => {
                let (patterns, entries) = unnamed_fields(&mut ctx, fields)?;
                quote! {
                    Self::#variant_ident ( #(#patterns),* ) => {
                        #node::Record(::std::vec![#(#entries),*])
                    }
                }
            }
            Fields::Unit => quote! {
                Self::#variant_ident => #node::Record(::std::vec::Vec::new())
            },
        };
        arms.push(arm);
    }

    Ok(DeriveOutput {
        node_body: quote! {
            match self {
                #(#arms),*
            }
        },
        used_generics,
    })
}
