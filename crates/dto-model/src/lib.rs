// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # dto-model
//!
//! One crate, all features. Re-exports:
//! - [`dto_models`], [`dto_model`], [`dto_property`] and [`dto_init`] from
//!   `dto-model-impl`
//! - All types from `dto-model-core` ([`Content`], [`Purpose`],
//!   [`Requirement`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dto_model::{Content, Purpose, dto_models};
//!
//! #[dto_models]
//! mod models {
//!     #[dto_model(create)]
//!     #[dto_model(output)]
//!     pub struct User {
//!         #[dto_property(create, required)]
//!         #[dto_property(output)]
//!         pub email: String,
//!
//!         #[dto_property(create, optional)]
//!         #[dto_property(output)]
//!         pub name: String,
//!     }
//! }
//!
//! let create = models::user::DTOCreate::new("a@b.c".into(), None);
//! assert_eq!(<models::user::DTOCreate as Content>::PURPOSE, Purpose::Create);
//! ```

pub use dto_model_core::*;
pub use dto_model_impl::{dto_init, dto_model, dto_models, dto_property};
