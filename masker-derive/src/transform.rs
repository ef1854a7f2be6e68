//! Field entry generation shared by struct and enum derivation.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, quote_spanned};

use crate::{crate_path, generics::collect_generics_from_type, strategy::Strategy};

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) used_generics: &'a mut Vec<Ident>,
}

/// A generated field: how to bind it in a pattern and the `Field` expression
/// that describes it to the walker.
pub(crate) struct FieldEntry {
    pub(crate) binding: Option<Ident>,
    pub(crate) entry: TokenStream,
}

/// Generates the `Field::new(...)` expression for a single field.
///
/// ## Field Rules
///
/// | Annotation      | Binding | Node                         |
/// |-----------------|---------|------------------------------|
/// | None            | bound   | `Maskable::mask_node(field)` |
/// | `#[tags(...)]`  | bound   | `Maskable::mask_node(field)` |
/// | `#[opaque]`     | `_`     | `Node::unsupported()`        |
///
/// Walked fields contribute their type's generics to the `Maskable` bounds.
pub(crate) fn generate_field_entry(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    name: &str,
    binding: Ident,
    span: Span,
    strategy: &Strategy,
) -> FieldEntry {
    let field_path = crate_path("Field");
    match strategy {
        Strategy::Walk { tags } => {
            collect_generics_from_type(ty, ctx.generics, ctx.used_generics);
            let maskable = crate_path("Maskable");
            let entry = quote_spanned! { span =>
                #field_path::new(#name, &[#(#tags),*], #maskable::mask_node(#binding))
            };
            FieldEntry {
                binding: Some(binding),
                entry,
            }
        }
        Strategy::Opaque => {
            let node = crate_path("Node");
            FieldEntry {
                binding: None,
                entry: quote! { #field_path::new(#name, &[], #node::unsupported()) },
            }
        }
    }
}
