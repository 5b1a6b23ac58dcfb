// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Token lists built from resolved fields.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::model::resolve::ResolvedField;

/// Generate `#[doc] pub name: Type` field declarations.
pub fn definitions(fields: &[ResolvedField]) -> Vec<TokenStream> {
    fields
        .iter()
        .map(|f: &ResolvedField| {
            let ResolvedField {
                name, ty, docs, ..
            } = f;
            quote! { #(#docs)* pub #name: #ty }
        })
        .collect()
}

/// Generate `name: Type` parameters.
pub fn params(fields: &[ResolvedField]) -> Vec<TokenStream> {
    fields
        .iter()
        .map(|f: &ResolvedField| {
            let ResolvedField {
                name, ty, ..
            } = f;
            quote! { #name: #ty }
        })
        .collect()
}

/// Field names in order.
pub fn names(fields: &[ResolvedField]) -> Vec<&Ident> {
    fields.iter().map(|f: &ResolvedField| &f.name).collect()
}

/// Generate `source.name.clone()` arguments.
pub fn clones(fields: &[ResolvedField], source: &str) -> Vec<TokenStream> {
    let src = Ident::new(source, Span::call_site());
    fields
        .iter()
        .map(|f: &ResolvedField| {
            let name = &f.name;
            quote! { #src.#name.clone() }
        })
        .collect()
}
