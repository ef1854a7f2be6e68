//! Parsing of `#[tags(...)]` and `#[opaque]` field attributes.
//!
//! This module maps attribute syntax to traversal decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{
    Attribute, Meta, Result, Token, ext::IdentExt, punctuated::Punctuated, spanned::Spanned,
};

/// How a field takes part in the walk.
///
/// ## Strategy Mapping
///
/// | Attribute           | Strategy             | Behavior                                 |
/// |---------------------|----------------------|------------------------------------------|
/// | None                | `Walk { tags: [] }`  | Walked, never marked                     |
/// | `#[tags(a, b)]`     | `Walk { tags }`      | Walked, marked for markers `a` and `b`   |
/// | `#[opaque]`         | `Opaque`             | Not walked, no `Maskable` bound required |
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    Walk { tags: Vec<String> },
    Opaque,
}

fn push_tag(tags: &mut Vec<String>, meta: &Meta) -> Result<()> {
    let path = match meta {
        Meta::Path(path) => path,
        // Only presence matters; the value is accepted so existing
        // `name = "..."` annotations keep working.
        Meta::NameValue(name_value) => &name_value.path,
        Meta::List(list) => {
            return Err(syn::Error::new(
                list.span(),
                "tag names do not take arguments: use #[tags(name)] or #[tags(name = \"...\")]",
            ));
        }
    };
    let Some(ident) = path.get_ident() else {
        return Err(syn::Error::new(
            path.span(),
            "expected a plain tag name (e.g., #[tags(mask)])",
        ));
    };
    let tag = ident.unraw().to_string();
    if tags.contains(&tag) {
        return Err(syn::Error::new(
            ident.span(),
            format!("duplicate tag `{tag}`"),
        ));
    }
    tags.push(tag);
    Ok(())
}

fn opaque_conflict(span: Span) -> syn::Error {
    syn::Error::new(span, "#[opaque] fields cannot carry #[tags]")
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut tags: Option<Vec<String>> = None;
    let mut opaque: Option<Span> = None;

    for attr in attrs {
        if attr.path().is_ident("opaque") {
            if !matches!(attr.meta, Meta::Path(_)) {
                return Err(syn::Error::new(
                    attr.span(),
                    "#[opaque] does not take arguments",
                ));
            }
            if opaque.is_some() {
                return Err(syn::Error::new(
                    attr.span(),
                    "multiple #[opaque] attributes on the same field",
                ));
            }
            if tags.is_some() {
                return Err(opaque_conflict(attr.span()));
            }
            opaque = Some(attr.span());
            continue;
        }

        if !attr.path().is_ident("tags") {
            continue;
        }

        if opaque.is_some() {
            return Err(opaque_conflict(attr.span()));
        }

        let list = match &attr.meta {
            Meta::List(list) => list,
            _ => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected #[tags(name, ...)] syntax (e.g., #[tags(mask)])",
                ));
            }
        };
        let metas = list.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        if metas.is_empty() {
            return Err(syn::Error::new(
                attr.span(),
                "#[tags()] needs at least one tag name",
            ));
        }
        let collected = tags.get_or_insert_with(Vec::new);
        for meta in &metas {
            push_tag(collected, meta)?;
        }
    }

    if opaque.is_some() {
        return Ok(Strategy::Opaque);
    }
    Ok(Strategy::Walk {
        tags: tags.unwrap_or_default(),
    })
}
