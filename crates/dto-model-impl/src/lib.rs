// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Quick Navigation
//!
//! - [`dto_models`](macro@dto_models): module-level entry point, the one
//!   most code should use
//! - [`dto_model`](macro@dto_model): struct-level entry point for structs
//!   outside a `#[dto_models]` module
//! - [`dto_property`](macro@dto_property), [`dto_init`](macro@dto_init):
//!   markers, validated in place when used on their own
//!
//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[dto_models]                                  // or #[dto_models(strict)]
//! mod models {
//!     #[dto_model(create)]                       // DTOCreate from marked fields
//!     #[dto_model(update)]                       // DTOUpdate from a marked constructor
//!     #[dto_model(output, derive(Clone, Debug))] // DTOOutput + Model alias + with_model
//!     pub struct User {
//!         #[dto_property(create, required)]      // kept as `String`
//!         #[dto_property(output)]
//!         pub name: String,
//!
//!         #[dto_property(create, optional)]      // becomes `Option<String>`
//!         #[dto_property(output)]
//!         pub nickname: String,
//!     }
//!
//!     impl User {
//!         #[dto_init(update)]                    // parameters become DTOUpdate fields
//!         pub fn rename(name: String) -> Self { /* ... */ }
//!     }
//! }
//!
//! // models::user::DTOCreate, models::user::DTOUpdate, models::user::DTOOutput
//! ```
//!
//! # Generated Code Overview
//!
//! | Purpose | Type | Members |
//! |---------|------|---------|
//! | `create` | `DTOCreate` | fields, `new` |
//! | `update` | `DTOUpdate` | fields, `new` |
//! | `output` | `DTOOutput` | fields, `Model` alias, `new`, `with_model`, `From<&Model>` |
//!
//! Every generated type implements `dto_model_core::Content`.

mod diagnostic;
mod model;
mod utils;

use proc_macro::TokenStream;

/// Expand every DTO annotation inside an inline module.
///
/// Structs carrying `#[dto_model(...)]` are grouped with the inherent
/// `impl` blocks of the same module, so fields and constructors can both
/// serve as the source of a DTO. Generated types are placed in a module
/// named after the struct in snake case, right after the struct.
///
/// # Options
///
/// | Option | Default | Description |
/// |--------|---------|-------------|
/// | `strict` | off | Also report markers outside a `#[dto_model]` struct and ambiguous `#[dto_init]` constructors |
///
/// # Example
///
/// ```rust,ignore
/// use dto_model::dto_models;
///
/// #[dto_models]
/// mod models {
///     #[dto_model(create)]
///     pub struct TestModel {
///         #[dto_property(create, optional)]
///         pub create_optional_variable: String,
///
///         #[dto_property(create, required)]
///         pub create_required_variable: u32,
///
///         pub not_create_variable: bool,
///     }
/// }
///
/// let dto = models::test_model::DTOCreate::new(None, 7);
/// ```
#[proc_macro_attribute]
pub fn dto_models(args: TokenStream, item: TokenStream) -> TokenStream {
    model::models(args.into(), item.into()).into()
}

/// Generate one DTO for a standalone struct.
///
/// Outside a `#[dto_models]` module the macro only sees the struct, so
/// fields are the only possible source; use `#[dto_models]` for
/// constructor-sourced DTOs.
///
/// # Arguments
///
/// | Position | Value |
/// |----------|-------|
/// | first | `create`, `update` or `output` |
/// | `derive(...)` | Derives added to the generated struct |
/// | `name = "..."` | Overrides the generated type name |
///
/// # Example
///
/// ```rust,ignore
/// use dto_model::dto_model;
///
/// #[dto_model(output, derive(Debug, Clone))]
/// pub struct Account {
///     #[dto_property(output)]
///     pub email: String,
///
///     pub password_hash: String,
/// }
///
/// let view = account::DTOOutput::from(&account);
/// ```
#[proc_macro_attribute]
pub fn dto_model(args: TokenStream, item: TokenStream) -> TokenStream {
    model::model(args.into(), item.into()).into()
}

/// Mark a struct field as part of a DTO.
///
/// `#[dto_property(create | update, required | optional)]` or
/// `#[dto_property(output)]`. The marker is consumed by `#[dto_models]` or
/// `#[dto_model]`; used anywhere else it only reports why it does not apply.
#[proc_macro_attribute]
pub fn dto_property(args: TokenStream, item: TokenStream) -> TokenStream {
    model::property(args.into(), item.into()).into()
}

/// Mark a constructor whose parameters become the fields of a DTO.
///
/// `#[dto_init(create | update | output)]` on an associated function that
/// returns `Self`. The marker is consumed by `#[dto_models]`; used anywhere
/// else it is validated and the function is left untouched.
#[proc_macro_attribute]
pub fn dto_init(args: TokenStream, item: TokenStream) -> TokenStream {
    model::init(args.into(), item.into()).into()
}
