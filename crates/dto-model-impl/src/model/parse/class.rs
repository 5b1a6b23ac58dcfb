// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class shape: a struct together with its inherent impls.
//!
//! A struct in Rust does not contain its constructors, so the class seen by
//! the engine is assembled from the struct item and every inherent `impl`
//! block for it in the same module, in source order.
//!
//! # Constructors
//!
//! An associated function is a constructor when it has no `self` receiver
//! and returns the class itself:
//!
//! | Return type | Constructor |
//! |-------------|-------------|
//! | `Self`, `User` | yes |
//! | `Option<Self>`, `Result<User, E>` | yes |
//! | `()`, `String`, `Box<Self>` | no |

use syn::{
    Field, Fields, GenericArgument, Ident, ImplItem, ImplItemFn, Item, ItemImpl, ItemStruct,
    PathArguments, ReturnType, Signature, Type
};

/// A struct with named fields and its inherent impls.
#[derive(Debug, Clone)]
pub struct ClassDef<'a> {
    /// The struct declaration.
    pub item:  &'a ItemStruct,
    /// Inherent impl blocks in source order.
    pub impls: Vec<&'a ItemImpl>
}

impl<'a> ClassDef<'a> {
    /// Assemble the class of `item` from the items of its module.
    ///
    /// Returns `None` for tuple and unit structs.
    pub fn collect(item: &'a ItemStruct, items: &'a [Item]) -> Option<Self> {
        if !matches!(item.fields, Fields::Named(_)) {
            return None;
        }

        let impls = items
            .iter()
            .filter_map(|candidate| match candidate {
                Item::Impl(imp) if impl_self_ident(imp) == Some(&item.ident) => Some(imp),
                _ => None
            })
            .collect();

        Some(Self {
            item,
            impls
        })
    }

    /// Struct name.
    pub fn ident(&self) -> &'a Ident {
        &self.item.ident
    }

    /// Named fields in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &'a Field> {
        self.item.fields.iter()
    }

    /// Constructors of every inherent impl, in source order.
    pub fn constructors(&self) -> impl Iterator<Item = &'a ImplItemFn> + use<'a> {
        let ident = self.ident();
        self.impls
            .clone()
            .into_iter()
            .flat_map(|imp| imp.items.iter())
            .filter_map(move |item| match item {
                ImplItem::Fn(func) if is_constructor(&func.sig, Some(ident)) => Some(func),
                _ => None
            })
    }
}

/// Name of the type an inherent impl block is for.
///
/// `None` for trait impls and for self types that are not a plain
/// single-segment path.
pub fn impl_self_ident(imp: &ItemImpl) -> Option<&Ident> {
    if imp.trait_.is_some() {
        return None;
    }
    match imp.self_ty.as_ref() {
        Type::Path(ty) if ty.qself.is_none() => ty.path.get_ident(),
        _ => None
    }
}

/// Whether `sig` is a constructor of `class`.
///
/// Without a known class, `Self` and any capitalized single-segment type
/// are accepted.
pub fn is_constructor(sig: &Signature, class: Option<&Ident>) -> bool {
    if sig.receiver().is_some() {
        return false;
    }
    match &sig.output {
        ReturnType::Type(_, ty) => returns_class(ty, class, true),
        ReturnType::Default => false
    }
}

fn returns_class(ty: &Type, class: Option<&Ident>, unwrap: bool) -> bool {
    let Type::Path(ty) = ty else {
        return false;
    };
    if ty.qself.is_some() {
        return false;
    }
    let Some(segment) = ty.path.segments.last() else {
        return false;
    };

    if unwrap && (segment.ident == "Option" || segment.ident == "Result") {
        return match &segment.arguments {
            PathArguments::AngleBracketed(args) => match args.args.first() {
                Some(GenericArgument::Type(inner)) => returns_class(inner, class, false),
                _ => false
            },
            _ => false
        };
    }

    if ty.path.segments.len() != 1 {
        return false;
    }
    if segment.ident == "Self" {
        return true;
    }
    match class {
        Some(class) => segment.ident == *class,
        None => segment
            .ident
            .to_string()
            .starts_with(|c: char| c.is_ascii_uppercase())
    }
}
