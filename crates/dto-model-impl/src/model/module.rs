// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Module walker.
//!
//! Expansion of a module body runs in two passes over its items:
//!
//! 1. **Analyze** (read-only). Every registered attribute is dispatched to
//!    its handler together with the declaration it is attached to. Structs
//!    are grouped with their inherent impls, so `#[dto_model]` sees both
//!    fields and constructors.
//! 2. **Strip** (mutating). Registered attributes are removed, since field
//!    and parameter attributes are not valid attribute macro positions, and
//!    the generated modules are inserted right after their struct.
//!
//! Nested inline modules are expanded on their own with the same options.
//!
//! Attribute sites covered by both passes:
//!
//! | Item | Sites |
//! |------|-------|
//! | struct, union | item, fields |
//! | enum | item, variants, variant fields |
//! | impl | item, associated items, fn parameters |
//! | trait | item, associated items |
//! | anything else | item |

use syn::{Attribute, Fields, FnArg, Ident, ImplItem, Item, ItemImpl, ItemMod, TraitItem};

use super::{
    parse::{
        Annotation, ClassDef, ModuleOptions,
        class::{impl_self_ident, is_constructor},
        item_attrs, item_attrs_mut
    },
    registry::{MODEL, Scope, Target, is_named, is_registered, lookup},
    synth::{SynthesizedType, class_module}
};
use crate::diagnostic::{DiagnosticId, Diagnostics};

/// Expand the items of one module body.
pub fn expand_items(
    items: Vec<Item>,
    options: &ModuleOptions,
    diagnostics: &mut Diagnostics
) -> Vec<Item> {
    let generated = analyze(&items, options, diagnostics);
    let mut generated = generated.into_iter().peekable();

    let mut expanded = Vec::with_capacity(items.len() + generated.len());
    for (index, mut item) in items.into_iter().enumerate() {
        strip(&mut item, options, diagnostics);
        expanded.push(item);
        if let Some((_, module)) = generated.next_if(|(at, _)| *at == index) {
            expanded.push(Item::Mod(module));
        }
    }
    expanded
}

fn analyze(
    items: &[Item],
    options: &ModuleOptions,
    diagnostics: &mut Diagnostics
) -> Vec<(usize, ItemMod)> {
    let models: Vec<_> = items
        .iter()
        .filter_map(|item| match item {
            Item::Struct(item) if item.attrs.iter().any(|attr| is_named(attr, MODEL)) => {
                Some(&item.ident)
            }
            _ => None
        })
        .collect();
    let new_scope = |in_model: bool| Scope {
        strict: options.strict,
        in_model,
        claimed: Vec::new()
    };

    let mut taken: Vec<Ident> = items.iter().filter_map(type_ident).cloned().collect();

    let mut generated = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match item {
            Item::Struct(strukt) => {
                let mut scope = new_scope(models.contains(&&strukt.ident));
                let target = ClassDef::collect(strukt, items).map_or(Target::Other, Target::Class);

                let types = dispatch(&strukt.attrs, &target, &mut scope, diagnostics);
                analyze_fields(&strukt.fields, &mut scope, diagnostics);

                if types.is_empty() {
                    continue;
                }
                let module = class_module(strukt, &types);
                if taken.contains(&module.ident) {
                    diagnostics.emit(DiagnosticId::ModuleNameTaken, &strukt.ident);
                    continue;
                }
                taken.push(module.ident.clone());
                generated.push((index, module));
            }
            Item::Impl(imp) => {
                let self_ident = impl_self_ident(imp);
                let mut scope = new_scope(self_ident.is_some_and(|ident| models.contains(&ident)));
                analyze_impl(imp, &mut scope, diagnostics);
            }
            Item::Enum(item) => {
                let mut scope = new_scope(false);
                dispatch(&item.attrs, &Target::Other, &mut scope, diagnostics);
                for variant in &item.variants {
                    dispatch(&variant.attrs, &Target::Other, &mut scope, diagnostics);
                    for field in &variant.fields {
                        dispatch(&field.attrs, &Target::Other, &mut scope, diagnostics);
                    }
                }
            }
            Item::Union(item) => {
                let mut scope = new_scope(false);
                dispatch(&item.attrs, &Target::Other, &mut scope, diagnostics);
                for field in &item.fields.named {
                    dispatch(&field.attrs, &Target::Other, &mut scope, diagnostics);
                }
            }
            Item::Trait(item) => {
                let mut scope = new_scope(false);
                dispatch(&item.attrs, &Target::Other, &mut scope, diagnostics);
                for trait_item in &item.items {
                    dispatch(trait_item_attrs(trait_item), &Target::Other, &mut scope, diagnostics);
                }
            }
            other => {
                dispatch(item_attrs(other), &Target::Other, &mut new_scope(false), diagnostics);
            }
        }
    }
    generated
}

/// Name an item declares in the type namespace, where generated modules live.
fn type_ident(item: &Item) -> Option<&Ident> {
    match item {
        Item::Mod(item) => Some(&item.ident),
        Item::Struct(item) => Some(&item.ident),
        Item::Enum(item) => Some(&item.ident),
        Item::Union(item) => Some(&item.ident),
        Item::Trait(item) => Some(&item.ident),
        Item::TraitAlias(item) => Some(&item.ident),
        Item::Type(item) => Some(&item.ident),
        Item::ExternCrate(item) => Some(
            item.rename
                .as_ref()
                .map_or(&item.ident, |(_, rename)| rename)
        ),
        _ => None
    }
}

fn analyze_fields(fields: &Fields, scope: &mut Scope, diagnostics: &mut Diagnostics) {
    for field in fields {
        let target = match field.ident {
            Some(_) => Target::Property,
            None => Target::Other
        };
        dispatch(&field.attrs, &target, scope, diagnostics);
    }
}

fn analyze_impl(imp: &ItemImpl, scope: &mut Scope, diagnostics: &mut Diagnostics) {
    let self_ident = impl_self_ident(imp);
    dispatch(&imp.attrs, &Target::Other, scope, diagnostics);

    for impl_item in &imp.items {
        let ImplItem::Fn(func) = impl_item else {
            dispatch(impl_item_attrs(impl_item), &Target::Other, scope, diagnostics);
            continue;
        };

        let target = match self_ident {
            Some(ident) if is_constructor(&func.sig, Some(ident)) => Target::Constructor,
            _ => Target::Other
        };
        dispatch(&func.attrs, &target, scope, diagnostics);

        for input in &func.sig.inputs {
            dispatch(fn_arg_attrs(input), &Target::Other, scope, diagnostics);
        }
    }
}

fn dispatch(
    attrs: &[Attribute],
    target: &Target<'_>,
    scope: &mut Scope,
    diagnostics: &mut Diagnostics
) -> Vec<SynthesizedType> {
    let mut types = Vec::new();
    for attr in attrs {
        if let Some(handler) = lookup(attr) {
            types.extend(handler(&Annotation::from_attr(attr), target, scope, diagnostics));
        }
    }
    types
}

fn strip(item: &mut Item, options: &ModuleOptions, diagnostics: &mut Diagnostics) {
    if let Some(attrs) = item_attrs_mut(item) {
        retain_foreign(attrs);
    }

    match item {
        Item::Struct(item) => {
            for field in &mut item.fields {
                retain_foreign(&mut field.attrs);
            }
        }
        Item::Union(item) => {
            for field in &mut item.fields.named {
                retain_foreign(&mut field.attrs);
            }
        }
        Item::Enum(item) => {
            for variant in &mut item.variants {
                retain_foreign(&mut variant.attrs);
                for field in &mut variant.fields {
                    retain_foreign(&mut field.attrs);
                }
            }
        }
        Item::Impl(item) => {
            for impl_item in &mut item.items {
                if let ImplItem::Fn(func) = impl_item {
                    for input in &mut func.sig.inputs {
                        retain_foreign(fn_arg_attrs_mut(input));
                    }
                }
                if let Some(attrs) = impl_item_attrs_mut(impl_item) {
                    retain_foreign(attrs);
                }
            }
        }
        Item::Trait(item) => {
            for trait_item in &mut item.items {
                if let Some(attrs) = trait_item_attrs_mut(trait_item) {
                    retain_foreign(attrs);
                }
            }
        }
        Item::Mod(item) => {
            if let Some((_, content)) = item.content.as_mut() {
                let items = std::mem::take(content);
                *content = expand_items(items, options, diagnostics);
            }
        }
        _ => {}
    }
}

fn retain_foreign(attrs: &mut Vec<Attribute>) {
    attrs.retain(|attr| !is_registered(attr));
}

fn fn_arg_attrs(arg: &FnArg) -> &[Attribute] {
    match arg {
        FnArg::Receiver(receiver) => &receiver.attrs,
        FnArg::Typed(arg) => &arg.attrs
    }
}

fn fn_arg_attrs_mut(arg: &mut FnArg) -> &mut Vec<Attribute> {
    match arg {
        FnArg::Receiver(receiver) => &mut receiver.attrs,
        FnArg::Typed(arg) => &mut arg.attrs
    }
}

fn impl_item_attrs(item: &ImplItem) -> &[Attribute] {
    match item {
        ImplItem::Const(item) => &item.attrs,
        ImplItem::Fn(item) => &item.attrs,
        ImplItem::Type(item) => &item.attrs,
        ImplItem::Macro(item) => &item.attrs,
        _ => &[]
    }
}

fn impl_item_attrs_mut(item: &mut ImplItem) -> Option<&mut Vec<Attribute>> {
    match item {
        ImplItem::Const(item) => Some(&mut item.attrs),
        ImplItem::Fn(item) => Some(&mut item.attrs),
        ImplItem::Type(item) => Some(&mut item.attrs),
        ImplItem::Macro(item) => Some(&mut item.attrs),
        _ => None
    }
}

fn trait_item_attrs(item: &TraitItem) -> &[Attribute] {
    match item {
        TraitItem::Const(item) => &item.attrs,
        TraitItem::Fn(item) => &item.attrs,
        TraitItem::Type(item) => &item.attrs,
        TraitItem::Macro(item) => &item.attrs,
        _ => &[]
    }
}

fn trait_item_attrs_mut(item: &mut TraitItem) -> Option<&mut Vec<Attribute>> {
    match item {
        TraitItem::Const(item) => Some(&mut item.attrs),
        TraitItem::Fn(item) => Some(&mut item.attrs),
        TraitItem::Type(item) => Some(&mut item.attrs),
        TraitItem::Macro(item) => Some(&mut item.attrs),
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use quote::ToTokens;
    use syn::parse_quote;

    use super::*;
    use crate::diagnostic::DiagnosticId;

    fn expand(file: syn::File, options: &ModuleOptions) -> (Vec<Item>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let items = expand_items(file.items, options, &mut diagnostics);
        (items, diagnostics)
    }

    fn render(items: &[Item]) -> String {
        items.iter().map(|item| item.to_token_stream().to_string()).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn markers_are_stripped_everywhere() {
        let file: syn::File = parse_quote! {
            #[derive(Debug)]
            #[dto_model(create)]
            pub struct User {
                /// Login.
                #[dto_property(create, required)]
                pub email: String,
            }

            impl User {
                #[dto_init(update)]
                pub fn rename(email: String) -> Self { Self { email } }
            }
        };
        let (items, diagnostics) = expand(file, &ModuleOptions::default());
        let output = render(&items);

        assert!(diagnostics.is_empty(), "{:?}", diagnostics.ids());
        assert!(!output.contains("dto_model ("));
        assert!(!output.contains("dto_property"));
        assert!(!output.contains("dto_init"));
        assert!(output.contains("derive (Debug)"));
    }

    #[test]
    fn generated_module_follows_its_struct() {
        let file: syn::File = parse_quote! {
            pub struct Plain { pub a: u8 }

            #[dto_model(output)]
            pub struct User {
                #[dto_property(output)]
                pub email: String,
            }

            pub fn after() {}
        };
        let (items, _) = expand(file, &ModuleOptions::default());

        assert_eq!(items.len(), 4);
        let Item::Mod(module) = &items[2] else {
            panic!("expected generated module after the struct");
        };
        assert_eq!(module.ident, "user");
        assert!(matches!(items[3], Item::Fn(_)));
    }

    #[test]
    fn nested_modules_are_expanded() {
        let file: syn::File = parse_quote! {
            pub mod inner {
                #[dto_model(create)]
                pub struct Item {
                    #[dto_property(create, optional)]
                    pub name: String,
                }
            }
        };
        let (items, diagnostics) = expand(file, &ModuleOptions::default());
        assert!(diagnostics.is_empty());

        let Item::Mod(inner) = &items[0] else {
            panic!("expected module");
        };
        let content = &inner.content.as_ref().unwrap().1;
        assert_eq!(content.len(), 2);
        assert!(!render(content).contains("dto_property"));
    }

    #[test]
    fn misplaced_markers_are_reported() {
        let file: syn::File = parse_quote! {
            #[dto_model(create)]
            pub enum Kind {
                #[dto_property(create, required)]
                A,
            }

            #[dto_init(create)]
            pub fn free() {}

            #[dto_model(output)]
            pub struct Id(u64);
        };
        let (_, diagnostics) = expand(file, &ModuleOptions::default());
        assert_eq!(
            diagnostics.ids(),
            vec![
                DiagnosticId::OnlyApplicableToClass,
                DiagnosticId::OnlyApplicableToVariables,
                DiagnosticId::OnlyApplicableToInits,
                DiagnosticId::OnlyApplicableToClass,
            ]
        );
    }

    #[test]
    fn misplaced_markers_still_check_arguments() {
        let file: syn::File = parse_quote! {
            pub enum Kind {
                #[dto_property(update)]
                A,
            }

            #[dto_init]
            pub fn free() {}
        };
        let (_, diagnostics) = expand(file, &ModuleOptions::default());
        assert_eq!(
            diagnostics.ids(),
            vec![
                DiagnosticId::OnlyApplicableToVariables,
                DiagnosticId::ExpectRequired,
                DiagnosticId::OnlyApplicableToInits,
                DiagnosticId::ExpectPurpose,
            ]
        );
    }

    #[test]
    fn clashing_module_names_are_reported() {
        let file: syn::File = parse_quote! {
            #[dto_model(output)]
            pub struct HttpServer {
                #[dto_property(output)]
                pub port: u16,
            }

            #[dto_model(output)]
            pub struct HTTPServer {
                #[dto_property(output)]
                pub port: u16,
            }
        };
        let (items, diagnostics) = expand(file, &ModuleOptions::default());

        assert_eq!(diagnostics.ids(), vec![DiagnosticId::ModuleNameTaken]);
        let modules: Vec<String> = items
            .iter()
            .filter_map(|item| match item {
                Item::Mod(module) => Some(module.ident.to_string()),
                _ => None
            })
            .collect();
        assert_eq!(modules, vec!["http_server"]);
    }

    #[test]
    fn existing_item_names_are_not_reused() {
        let file: syn::File = parse_quote! {
            pub mod user {}

            #[dto_model(output)]
            pub struct User {
                #[dto_property(output)]
                pub email: String,
            }
        };
        let (items, diagnostics) = expand(file, &ModuleOptions::default());

        assert_eq!(diagnostics.ids(), vec![DiagnosticId::ModuleNameTaken]);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn methods_and_trait_impls_are_not_constructors() {
        let file: syn::File = parse_quote! {
            pub struct User { pub a: u8 }

            impl User {
                #[dto_init(create)]
                pub fn rename(&mut self, a: u8) -> Self { todo!() }
            }

            impl Default for User {
                #[dto_init(create)]
                fn default() -> Self { todo!() }
            }
        };
        let (_, diagnostics) = expand(file, &ModuleOptions::default());
        assert_eq!(
            diagnostics.ids(),
            vec![DiagnosticId::OnlyApplicableToInits, DiagnosticId::OnlyApplicableToInits]
        );
    }

    #[test]
    fn strict_mode_requires_enclosing_model() {
        let file: syn::File = parse_quote! {
            pub struct Plain {
                #[dto_property(output)]
                pub a: u8,
            }

            impl Plain {
                #[dto_init(create)]
                pub fn new(a: u8) -> Self { Self { a } }
            }
        };
        let (_, diagnostics) = expand(file.clone(), &ModuleOptions::default());
        assert!(diagnostics.is_empty());

        let (_, diagnostics) = expand(file, &ModuleOptions {
            strict: true
        });
        assert_eq!(
            diagnostics.ids(),
            vec![
                DiagnosticId::OnlyApplicableToModelProperties,
                DiagnosticId::OnlyApplicableToModelInits,
            ]
        );
    }

    #[test]
    fn foreign_attributes_survive() {
        let file: syn::File = parse_quote! {
            impl Plain {
                #[inline]
                pub fn get(#[allow(unused)] a: u8) -> u8 { a }
            }
        };
        let (items, _) = expand(file, &ModuleOptions::default());
        let output = render(&items);
        assert!(output.contains("inline"));
        assert!(output.contains("allow (unused)"));
    }
}
