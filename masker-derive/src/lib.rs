//! Derive macro for `masker`.
//!
//! This crate generates the traversal code behind `#[derive(Maskable)]`. It:
//! - reads `#[tags(...)]` and `#[opaque]` field attributes
//! - emits a `masker::Maskable` implementation that borrows every field as a
//!   `masker::Node`
//!
//! It does **not** decide which fields get masked. The marker name is chosen
//! at runtime by `masker::Masker`; the derive only records the tags.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, spanned::Spanned};

mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_maskable_bounds;

/// Derives `masker::Maskable` for structs and enums.
///
/// # Field Attributes
///
/// - **No annotation**: the field is walked but never marked. Nested records
///   are still walked, and their own tagged fields are masked.
///
/// - `#[tags(name, ...)]`: declares marker names on the field. A field is masked
///   when the `Masker` in use was created with one of these names. Values are
///   accepted and ignored (`#[tags(mask = "")]` is the same as `#[tags(mask)]`).
///   The attribute may be repeated; names accumulate.
///
/// - `#[opaque]`: the field is not walked at all and its type does not need to
///   implement `Maskable`. Use this for foreign types. It cannot be combined
///   with `#[tags]`.
///
/// Sequences (`Vec<T>`, arrays, `VecDeque<T>`) pass their field's marking to
/// every element. `Option`, `Box`, `Rc` and `Arc` are transparent.
///
/// Unions are rejected at compile time.
///
/// # Example
///
/// ```ignore
/// use masker::Maskable;
///
/// #[derive(Maskable, serde::Serialize)]
/// struct Payment {
///     payee: String,
///     #[tags(mask, pci)]
///     card_number: String,
///     #[tags(mask)]
///     cvv: Option<i32>,
/// }
/// ```
#[proc_macro_derive(Maskable, attributes(tags, opaque))]
pub fn derive_maskable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the masker crate root.
///
/// Handles crate renaming (e.g., `my_mask = { package = "masker", ... }`).
/// Inside `masker` itself the crate declares `extern crate self as masker`, so
/// the absolute path resolves there too, including its integration tests.
fn crate_root() -> TokenStream {
    match crate_name("masker") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::masker },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = syn::parse_str::<syn::Path>(item).expect("masker crate path should parse");
    quote! { #root::#item_ident }
}

struct DeriveOutput {
    node_body: TokenStream,
    used_generics: Vec<Ident>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    // Markers describe fields; a tag on the type itself would be silently
    // meaningless, so reject it.
    for attr in &attrs {
        if attr.path().is_ident("tags") || attr.path().is_ident("opaque") {
            return Err(syn::Error::new(
                attr.span(),
                "`#[tags]` and `#[opaque]` belong on fields, not on the type",
            ));
        }
    }

    let output = match data {
        Data::Struct(data) => derive_struct(data, &generics)?,
        Data::Enum(data) => derive_enum(data, &generics)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Maskable` cannot be derived for unions",
            ));
        }
    };

    let generics = add_maskable_bounds(generics, &output.used_generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let maskable = crate_path("Maskable");
    let node = crate_path("Node");
    let node_body = output.node_body;

    Ok(quote! {
        impl #impl_generics #maskable for #ident #ty_generics #where_clause {
            fn mask_node(&mut self) -> #node<'_> {
                #node_body
            }
        }
    })
}
