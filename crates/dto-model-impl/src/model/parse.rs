// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the DTO model macros.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── annotation.rs - Positional arguments: purpose first, requirement last
//! ├── options.rs    - darling options (`derive(...)`, `name`, `strict`)
//! ├── class.rs      - Struct + inherent impls, constructor detection
//! └── attrs.rs      - Attribute lists of arbitrary items
//! ```
//!
//! # Parsing Strategy
//!
//! Purpose and requirement are positional words, so they are read from a
//! [`darling::ast::NestedMeta`] list by position instead of by key. Anything
//! after the purpose of a `#[dto_model]` is a key-value option and goes
//! through `darling::FromMeta`.
//!
//! ```text
//! #[dto_property(create, optional)]
//!                ^^^^^^  ^^^^^^^^
//!                first   last
//!
//! #[dto_model(output, derive(Debug), name = "UserView")]
//!             ^^^^^^  ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//!             first   ModelOptions
//! ```

mod annotation;
mod attrs;
pub mod class;
mod options;

pub use annotation::{Annotation, ConstructorAnnotation, PropertyAnnotation};
pub use attrs::{item_attrs, item_attrs_mut};
pub use class::ClassDef;
pub use options::{ModelOptions, ModuleOptions};
