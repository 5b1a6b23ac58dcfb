// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Positional annotation arguments.
//!
//! The same routine reads the purpose of `#[dto_model]`, `#[dto_property]`
//! and `#[dto_init]`. Words are matched on the last path segment converted
//! to snake case, so `create`, `Create` and `Purpose::Create` all name
//! [`Purpose::Create`].

use convert_case::{Case, Casing};
use darling::ast::NestedMeta;
use dto_model_core::{Purpose, Requirement};
use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Attribute, Meta, ext::IdentExt};

use crate::diagnostic::DiagnosticId;

/// One occurrence of a DTO attribute.
///
/// Arguments that do not form a comma-separated meta list are treated as
/// absent, which surfaces as [`DiagnosticId::ExpectPurpose`].
#[derive(Debug, Clone)]
pub struct Annotation {
    args:   Vec<NestedMeta>,
    origin: TokenStream
}

impl Annotation {
    /// Read the arguments of an attribute in a syntax tree.
    pub fn from_attr(attr: &Attribute) -> Self {
        let args = match &attr.meta {
            Meta::List(list) => NestedMeta::parse_meta_list(list.tokens.clone()).unwrap_or_default(),
            Meta::Path(_) | Meta::NameValue(_) => Vec::new()
        };

        Self {
            args,
            origin: attr.to_token_stream()
        }
    }

    /// Read the arguments handed to an attribute macro.
    ///
    /// Diagnostics are anchored at the arguments, or at the attribute itself
    /// when there are none.
    pub fn from_args(args: TokenStream) -> Self {
        Self {
            args:   NestedMeta::parse_meta_list(args.clone()).unwrap_or_default(),
            origin: args
        }
    }

    /// Tokens diagnostics about this annotation point at.
    pub fn origin(&self) -> &TokenStream {
        &self.origin
    }

    /// Purpose named by the first argument.
    ///
    /// # Errors
    ///
    /// [`DiagnosticId::ExpectPurpose`] if the first argument is missing or is
    /// not a purpose word.
    pub fn purpose(&self) -> Result<Purpose, DiagnosticId> {
        self.args
            .first()
            .and_then(word)
            .and_then(|word| Purpose::from_name(&word))
            .ok_or(DiagnosticId::ExpectPurpose)
    }

    /// Requirement named by the last argument.
    ///
    /// # Errors
    ///
    /// [`DiagnosticId::ExpectRequired`] if the last argument is missing or is
    /// not a requirement word.
    pub fn requirement(&self) -> Result<Requirement, DiagnosticId> {
        self.args
            .last()
            .and_then(word)
            .and_then(|word| Requirement::from_name(&word))
            .ok_or(DiagnosticId::ExpectRequired)
    }

    /// Arguments after the purpose.
    pub fn options(&self) -> &[NestedMeta] {
        self.args.get(1..).unwrap_or_default()
    }
}

/// `#[dto_property(...)]` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyAnnotation {
    /// Purpose the field takes part in.
    pub purpose:     Purpose,
    /// Requirement; always `None` for [`Purpose::Output`].
    pub requirement: Option<Requirement>
}

impl PropertyAnnotation {
    /// Parse purpose and, for create/update, the requirement.
    ///
    /// # Errors
    ///
    /// [`DiagnosticId::ExpectPurpose`] or [`DiagnosticId::ExpectRequired`].
    pub fn parse(annotation: &Annotation) -> Result<Self, DiagnosticId> {
        let purpose = annotation.purpose()?;
        let requirement = if purpose.takes_requirement() {
            Some(annotation.requirement()?)
        } else {
            None
        };

        Ok(Self {
            purpose,
            requirement
        })
    }
}

/// `#[dto_init(...)]` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructorAnnotation {
    /// Purpose the constructor's parameters are used for.
    pub purpose: Purpose
}

impl ConstructorAnnotation {
    /// Parse the purpose; further arguments are ignored.
    ///
    /// # Errors
    ///
    /// [`DiagnosticId::ExpectPurpose`].
    pub fn parse(annotation: &Annotation) -> Result<Self, DiagnosticId> {
        Ok(Self {
            purpose: annotation.purpose()?
        })
    }
}

/// Snake-case word of a bare path argument.
fn word(meta: &NestedMeta) -> Option<String> {
    match meta {
        NestedMeta::Meta(Meta::Path(path)) => path
            .segments
            .last()
            .map(|segment| segment.ident.unraw().to_string().to_case(Case::Snake)),
        _ => None
    }
}
