// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Key-value options parsed with darling.
//!
//! # Model Options
//!
//! Follow the purpose in `#[dto_model(...)]`:
//!
//! ```rust,ignore
//! #[dto_model(output, derive(Debug, Clone, serde::Serialize), name = "UserView")]
//! ```
//!
//! | Option | Default | Effect |
//! |--------|---------|--------|
//! | `derive(...)` | none | Derives on the generated struct |
//! | `name = "..."` | `DTOCreate`, `DTOUpdate`, `DTOOutput` | Generated type name |
//!
//! # Module Options
//!
//! Arguments of `#[dto_models(...)]`:
//!
//! | Option | Default | Effect |
//! |--------|---------|--------|
//! | `strict` | `false` | Report markers outside models and ambiguous constructors |

use darling::{FromMeta, util::PathList};
use syn::Ident;

/// Options that follow the purpose of a `#[dto_model]`.
#[derive(Debug, Default, FromMeta)]
pub struct ModelOptions {
    /// Derive macros applied to the generated struct.
    #[darling(default)]
    pub derive: PathList,

    /// Generated type name; the purpose's `DTO*` name when absent.
    pub name: Option<Ident>
}

/// Options of `#[dto_models]`.
#[derive(Debug, Default, FromMeta)]
pub struct ModuleOptions {
    /// Enables the strict-mode checks.
    #[darling(default)]
    pub strict: bool
}
