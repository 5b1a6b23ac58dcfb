// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DTO model macro implementation.
//!
//! This module contains the analysis-and-synthesis engine behind the four
//! attributes. It parses annotations, dispatches them through a static
//! registry and turns resolved field lists into generated types.
//!
//! # Architecture
//!
//! ```text
//! model.rs (entry points)
//! │
//! ├── parse/        → Annotation arguments, options, class shape
//! ├── registry.rs   → Annotation name → handler table, targets, scope
//! ├── module.rs     → Module walker: dispatch, strip markers, insert output
//! │
//! ├── class.rs      → #[dto_model]    (resolve + synthesize)
//! ├── property.rs   → #[dto_property] (validate only)
//! ├── init.rs       → #[dto_init]     (validate only)
//! │
//! ├── resolve.rs    → Field resolver (fields vs constructor, optionality)
//! └── synth.rs      → Type synthesizer (struct, constructors, Model alias)
//! ```
//!
//! # Expansion Flow
//!
//! Every entry point funnels into [`module::expand_items`]. A standalone
//! `#[dto_model(...)]` struct is expanded as a one-item module with the
//! attribute put back on the struct; `#[dto_property]` and `#[dto_init]`
//! used on their own call their validators directly and return the item
//! unchanged.

mod class;
mod init;
mod module;
pub mod parse;
mod property;
mod registry;
pub mod resolve;
mod synth;


use darling::{FromMeta, ast::NestedMeta};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{ImplItemFn, Item, ItemMod, parse_quote};

use self::{
    parse::{Annotation, ModuleOptions, class::is_constructor, item_attrs_mut},
    registry::{Scope, Target}
};
use crate::diagnostic::{DiagnosticId, Diagnostics};

/// Entry point for `#[dto_models]`.
pub fn models(args: TokenStream, item: TokenStream) -> TokenStream {
    let options = match parse_module_options(args) {
        Ok(options) => options,
        Err(err) => return err.write_errors()
    };
    let mut module: ItemMod = match syn::parse2(item) {
        Ok(module) => module,
        Err(err) => return err.to_compile_error()
    };
    if module.content.is_none() {
        return syn::Error::new_spanned(
            &module,
            "`#[dto_models]` requires an inline module body"
        )
        .to_compile_error();
    }

    let mut diagnostics = Diagnostics::new();
    if let Some((_, content)) = module.content.as_mut() {
        let items = std::mem::take(content);
        *content = module::expand_items(items, &options, &mut diagnostics);
    }

    quote! {
        #module
        #diagnostics
    }
}

/// Entry point for a standalone `#[dto_model(...)]`.
pub fn model(args: TokenStream, item: TokenStream) -> TokenStream {
    let mut item: Item = match syn::parse2(item) {
        Ok(item) => item,
        Err(err) => return err.to_compile_error()
    };
    let mut diagnostics = Diagnostics::new();
    let Some(attrs) = item_attrs_mut(&mut item) else {
        diagnostics.emit(DiagnosticId::OnlyApplicableToClass, &args);
        return quote! {
            #item
            #diagnostics
        };
    };
    attrs.insert(0, parse_quote!(#[dto_model(#args)]));

    let items = module::expand_items(vec![item], &ModuleOptions::default(), &mut diagnostics);

    quote! {
        #(#items)*
        #diagnostics
    }
}

/// Entry point for a standalone `#[dto_property(...)]`.
///
/// Attribute macros never run on fields, so the target is always reported
/// as misplaced. The arguments are checked as well.
pub fn property(args: TokenStream, item: TokenStream) -> TokenStream {
    let annotation = Annotation::from_args(args);
    let mut diagnostics = Diagnostics::new();
    property::validate(&annotation, &Target::Other, &mut Scope::default(), &mut diagnostics);

    quote! {
        #item
        #diagnostics
    }
}

/// Entry point for a standalone `#[dto_init(...)]`.
pub fn init(args: TokenStream, item: TokenStream) -> TokenStream {
    let annotation = Annotation::from_args(args);
    let mut diagnostics = Diagnostics::new();

    let target = match syn::parse2::<ImplItemFn>(item.clone()) {
        Ok(func) if is_constructor(&func.sig, None) => Target::Constructor,
        _ => Target::Other
    };
    init::validate(&annotation, &target, &mut Scope::default(), &mut diagnostics);

    quote! {
        #item
        #diagnostics
    }
}

fn parse_module_options(args: TokenStream) -> darling::Result<ModuleOptions> {
    let list = NestedMeta::parse_meta_list(args)?;
    ModuleOptions::from_list(&list)
}
