//! Collects the type parameters a walked field needs `Maskable` for.
//!
//! A field's type is walked through paths, references, slices, arrays and
//! parentheses; those are the only shapes with a `Maskable` impl. Arguments
//! of types whose impl ignores them are skipped:
//!
//! ```ignore
//! struct TypedId<T> {
//!     #[tags(mask)]
//!     id: String,
//!     _marker: PhantomData<T>,   // no `T: Maskable`
//!     index: HashMap<String, T>, // no `T: Maskable`
//! }
//! ```
//!
//! `#[opaque]` fields are never visited.

use syn::{GenericArgument, Ident, PathArguments, Type, parse_quote};

use crate::crate_path;

/// Types whose `Maskable` impl holds for any arguments.
const ARGUMENTS_IGNORED: &[&str] = &[
    "PhantomData",
    "HashMap",
    "BTreeMap",
    "HashSet",
    "BTreeSet",
];

struct UsedParams<'a> {
    generics: &'a syn::Generics,
    found: &'a mut Vec<Ident>,
}

impl UsedParams<'_> {
    fn note(&mut self, ident: &Ident) {
        let declared = self.generics.type_params().any(|param| param.ident == *ident);
        if declared && !self.found.contains(ident) {
            self.found.push(ident.clone());
        }
    }

    fn ty(&mut self, ty: &Type) {
        match ty {
            Type::Path(type_path) => {
                if let Some(qself) = &type_path.qself {
                    self.ty(&qself.ty);
                }
                self.path(&type_path.path);
            }
            Type::Reference(reference) => self.ty(&reference.elem),
            Type::Slice(slice) => self.ty(&slice.elem),
            Type::Array(array) => self.ty(&array.elem),
            Type::Paren(paren) => self.ty(&paren.elem),
            Type::Group(group) => self.ty(&group.elem),
            _ => {}
        }
    }

    fn path(&mut self, path: &syn::Path) {
        let ignored = path
            .segments
            .last()
            .is_some_and(|last| ARGUMENTS_IGNORED.iter().any(|name| last.ident == *name));
        if ignored {
            return;
        }
        for segment in &path.segments {
            self.note(&segment.ident);
            let PathArguments::AngleBracketed(args) = &segment.arguments else {
                continue;
            };
            for arg in &args.args {
                match arg {
                    GenericArgument::Type(inner) => self.ty(inner),
                    GenericArgument::AssocType(assoc) => self.ty(&assoc.ty),
                    _ => {}
                }
            }
        }
    }
}

pub(crate) fn collect_generics_from_type(
    ty: &Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    UsedParams {
        generics,
        found: result,
    }
    .ty(ty);
}

/// Adds `Maskable` bounds to generic parameters used in walked fields.
pub(crate) fn add_maskable_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
) -> syn::Generics {
    let maskable = crate_path("Maskable");
    for param in generics.type_params_mut() {
        if used_generics.contains(&param.ident) {
            param.bounds.push(parse_quote!(#maskable));
        }
    }
    generics
}
