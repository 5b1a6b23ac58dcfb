// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type synthesis.
//!
//! Turns a resolved field list into the generated declaration and places
//! every type generated for one struct in a module named after it.
//!
//! # Generated Code
//!
//! For `#[dto_model(output)]` on `User` with fields `name` and `age`:
//!
//! ```rust,ignore
//! /// DTOs generated from [`User`](super::User).
//! pub mod user {
//!     #[allow(unused_imports)]
//!     use super::*;
//!
//!     /// `output` DTO of [`User`](super::User), from its fields.
//!     pub struct DTOOutput {
//!         pub name: String,
//!         pub age: u8,
//!     }
//!
//!     pub type Model = super::User;
//!
//!     impl DTOOutput {
//!         pub fn new(name: String, age: u8) -> Self { Self { name, age } }
//!         pub fn with_model(model: &Model) -> Self {
//!             Self::new(model.name.clone(), model.age.clone())
//!         }
//!     }
//!
//!     impl ::dto_model_core::Content for DTOOutput {
//!         const PURPOSE: ::dto_model_core::Purpose = ::dto_model_core::Purpose::Output;
//!     }
//!
//!     impl ::core::convert::From<&Model> for DTOOutput { /* with_model */ }
//! }
//! ```
//!
//! `create` and `update` types get `new` only and no `Model` alias.

use convert_case::{Case, Casing};
use dto_model_core::Purpose;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Ident, ImplItemFn, ItemMod, ItemStruct, ItemType, ext::IdentExt, parse_quote};

use super::{
    parse::ModelOptions,
    resolve::{FieldSource, ResolvedField}
};
use crate::utils::fields;

/// Generated declaration for one (struct, purpose) pair.
#[derive(Debug, Clone)]
pub struct SynthesizedType {
    /// Purpose the type was generated for.
    pub purpose:      Purpose,
    /// Type name.
    pub ident:        Ident,
    /// The struct with its fields.
    pub item:         ItemStruct,
    /// `pub type Model = super::Class;`, output only.
    pub alias:        Option<ItemType>,
    /// `new`, then `with_model` for output.
    pub constructors: Vec<ImplItemFn>
}

impl SynthesizedType {
    /// Build the declaration from a non-empty field list.
    pub fn new(
        class: &Ident,
        purpose: Purpose,
        fields: &[ResolvedField],
        options: &ModelOptions
    ) -> Self {
        let ident = options
            .name
            .clone()
            .unwrap_or_else(|| Ident::new(purpose.struct_name(), class.span()));

        let definitions = fields::definitions(fields);
        let derives: &[syn::Path] = &options.derive;
        let derive = (!derives.is_empty()).then(|| quote! { #[derive(#(#derives),*)] });
        let origin = match fields.first().map(|field| field.source) {
            Some(FieldSource::Parameter) => "constructor parameters",
            _ => "fields"
        };
        let doc = format!(" `{}` DTO of [`{class}`](super::{class}), from its {origin}.", purpose.name());
        let item: ItemStruct = parse_quote! {
            #[doc = #doc]
            #derive
            pub struct #ident {
                #(#definitions,)*
            }
        };

        let params = fields::params(fields);
        let names = fields::names(fields);
        let mut constructors: Vec<ImplItemFn> = vec![parse_quote! {
            #[must_use]
            #[allow(clippy::too_many_arguments)]
            pub fn new(#(#params),*) -> Self {
                Self { #(#names),* }
            }
        }];

        let alias: Option<ItemType> = (purpose == Purpose::Output).then(|| {
            let args = fields::clones(fields, "model");
            constructors.push(parse_quote! {
                #[must_use]
                #[allow(clippy::clone_on_copy)]
                pub fn with_model(model: &Model) -> Self {
                    Self::new(#(#args),*)
                }
            });
            parse_quote! {
                pub type Model = super::#class;
            }
        });

        Self {
            purpose,
            ident,
            item,
            alias,
            constructors
        }
    }
}

impl ToTokens for SynthesizedType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            purpose,
            ident,
            item,
            alias,
            constructors
        } = self;
        let variant = Ident::new(&purpose.name().to_case(Case::Pascal), ident.span());

        tokens.extend(quote! {
            #item

            #alias

            impl #ident {
                #(#constructors)*
            }

            impl ::dto_model_core::Content for #ident {
                const PURPOSE: ::dto_model_core::Purpose = ::dto_model_core::Purpose::#variant;
            }
        });

        if alias.is_some() {
            tokens.extend(quote! {
                impl ::core::convert::From<&Model> for #ident {
                    fn from(model: &Model) -> Self {
                        Self::with_model(model)
                    }
                }
            });
        }
    }
}

/// Module holding every type generated for `item`.
pub fn class_module(item: &ItemStruct, types: &[SynthesizedType]) -> ItemMod {
    let vis = &item.vis;
    let class = &item.ident;
    let module = module_ident(class);
    let doc = format!(" DTOs generated from [`{class}`](super::{class}).");

    parse_quote! {
        #[doc = #doc]
        #vis mod #module {
            #[allow(unused_imports)]
            use super::*;

            #(#types)*
        }
    }
}

/// Snake-case module name for a struct; keywords get a `_dto` suffix.
pub fn module_ident(class: &Ident) -> Ident {
    let snake = class.unraw().to_string().to_case(Case::Snake);
    let name = match syn::parse_str::<Ident>(&snake) {
        Ok(_) => snake,
        Err(_) => format!("{snake}_dto")
    };
    Ident::new(&name, class.span())
}

#[cfg(test)]
mod tests {
    use darling::{FromMeta, ast::NestedMeta};

    use super::*;

    fn field(name: &str, ty: syn::Type) -> ResolvedField {
        ResolvedField {
            source: FieldSource::Property,
            name: Ident::new(name, proc_macro2::Span::call_site()),
            ty,
            docs: Vec::new()
        }
    }

    fn fields() -> Vec<ResolvedField> {
        vec![
            field("output_variable1", parse_quote!(T1)),
            field("output_variable2", parse_quote!(T2)),
        ]
    }

    fn class() -> Ident {
        parse_quote!(TestModel)
    }

    #[test]
    fn output_has_alias_and_two_constructors() {
        let synth = SynthesizedType::new(&class(), Purpose::Output, &fields(), &ModelOptions::default());
        assert_eq!(synth.ident, "DTOOutput");
        assert!(synth.alias.is_some());

        let names: Vec<String> = synth.constructors.iter().map(|f| f.sig.ident.to_string()).collect();
        assert_eq!(names, vec!["new", "with_model"]);

        let with_model = synth.constructors[1].to_token_stream().to_string();
        assert!(with_model.contains(&quote!(model.output_variable1.clone()).to_string()));
        assert!(with_model.contains(&quote!(model.output_variable2.clone()).to_string()));
    }

    #[test]
    fn create_has_one_constructor_and_no_alias() {
        for purpose in [Purpose::Create, Purpose::Update] {
            let synth = SynthesizedType::new(&class(), purpose, &fields(), &ModelOptions::default());
            assert_eq!(synth.ident, purpose.struct_name());
            assert!(synth.alias.is_none());
            assert_eq!(synth.constructors.len(), 1);
        }
    }

    #[test]
    fn fields_keep_order() {
        let synth = SynthesizedType::new(&class(), Purpose::Create, &fields(), &ModelOptions::default());
        let names: Vec<String> = synth
            .item
            .fields
            .iter()
            .filter_map(|f| f.ident.as_ref().map(ToString::to_string))
            .collect();
        assert_eq!(names, vec!["output_variable1", "output_variable2"]);
    }

    #[test]
    fn content_impl_names_purpose() {
        let synth = SynthesizedType::new(&class(), Purpose::Update, &fields(), &ModelOptions::default());
        let output = synth.to_token_stream().to_string();
        assert!(output.contains(&quote!(::dto_model_core::Purpose::Update).to_string()));
        assert!(!output.contains("From"));
    }

    #[test]
    fn output_implements_from_model() {
        let synth = SynthesizedType::new(&class(), Purpose::Output, &fields(), &ModelOptions::default());
        let output = synth.to_token_stream().to_string();
        assert!(output.contains(&quote!(From<&Model> for DTOOutput).to_string()));
        assert!(output.contains(&quote!(pub type Model = super::TestModel;).to_string()));
    }

    #[test]
    fn options_rename_and_derive() {
        let list = NestedMeta::parse_meta_list(quote!(derive(Debug, Clone), name = "TestView")).unwrap();
        let options = ModelOptions::from_list(&list).unwrap();
        let synth = SynthesizedType::new(&class(), Purpose::Output, &fields(), &options);

        assert_eq!(synth.ident, "TestView");
        let item = synth.item.to_token_stream().to_string();
        assert!(item.contains(&quote!(#[derive(Debug, Clone)]).to_string()));
    }

    #[test]
    fn module_is_snake_case_with_class_visibility() {
        let item: ItemStruct = parse_quote!(pub(crate) struct TestModel { a: u8 });
        let synth = SynthesizedType::new(&item.ident, Purpose::Create, &fields(), &ModelOptions::default());
        let module = class_module(&item, &[synth]);

        assert_eq!(module.ident, "test_model");
        assert_eq!(
            module.vis.to_token_stream().to_string(),
            quote!(pub(crate)).to_string()
        );
        let content = module.content.unwrap().1;
        assert_eq!(content.len(), 4);
    }

    #[test]
    fn keyword_module_names_are_suffixed() {
        assert_eq!(module_ident(&parse_quote!(Type)), "type_dto");
        assert_eq!(module_ident(&parse_quote!(Mod)), "mod_dto");
        assert_eq!(module_ident(&parse_quote!(HttpRequest)), "http_request");
    }
}
