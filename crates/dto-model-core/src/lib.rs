// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for dto-model.
//!
//! This crate provides the types that code generated by `dto-model` refers
//! to at runtime. It can also be used standalone to name a purpose or to
//! bound generic code on generated DTOs.
//!
//! # Overview
//!
//! - [`Content`]: Marker trait implemented by every generated DTO
//! - [`Purpose`]: Which view a DTO represents (create, update, output)
//! - [`Requirement`]: Whether a create/update field is required or optional
//! - [`prelude`]: Convenient re-exports
//!
//! # Usage
//!
//! ```rust
//! use dto_model_core::{Content, Purpose};
//!
//! fn purpose_of<T: Content>() -> Purpose {
//!     T::PURPOSE
//! }
//!
//! struct Manual;
//!
//! impl Content for Manual {
//!     const PURPOSE: Purpose = Purpose::Output;
//! }
//!
//! assert_eq!(purpose_of::<Manual>().struct_name(), "DTOOutput");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod prelude;
mod purpose;

pub use purpose::{Purpose, Requirement};

/// Marker capability of a transportable data view.
///
/// Every struct generated by `#[dto_model(...)]` implements this trait,
/// signaling that it is a data-transfer object and recording the purpose it
/// was generated for.
///
/// # Example
///
/// Generated code follows this pattern:
///
/// ```rust,ignore
/// pub struct DTOCreate {
///     pub name: Option<String>,
/// }
///
/// impl ::dto_model_core::Content for DTOCreate {
///     const PURPOSE: ::dto_model_core::Purpose = ::dto_model_core::Purpose::Create;
/// }
/// ```
pub trait Content {
    /// Purpose the DTO was generated for.
    const PURPOSE: Purpose;
}
