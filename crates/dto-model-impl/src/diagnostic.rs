// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Diagnostics collected during expansion.
//!
//! Handlers never abort on a bad annotation. They record a [`Diagnostic`]
//! in the shared [`Diagnostics`] sink and move on, so one misused attribute
//! does not hide problems (or generated code) elsewhere in the module.
//!
//! # Rendering
//!
//! | Severity | Emitted as |
//! |----------|------------|
//! | `Error` | `compile_error!` spanned at the annotation |
//! | `Warning` | use of a `#[deprecated]` constant spanned at the annotation |
//!
//! Stable Rust has no API for proc-macro warnings; the deprecation lint is
//! the one channel that reaches the user as a warning without failing the
//! build.
//!
//! Every message ends with its stable identifier, e.g.
//! `[dto_model::no_properties_or_init_found]`.

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote_spanned};

/// Domain prefix of every diagnostic identifier.
pub const DOMAIN: &str = "dto_model";

/// How a diagnostic affects the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fails compilation.
    Error,

    /// Reported, compilation continues.
    Warning
}

/// Stable identifier of every diagnostic the macros can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticId {
    /// First argument is missing or not a purpose word.
    ExpectPurpose,

    /// Create/update property annotation without a requirement word last.
    ExpectRequired,

    /// `#[dto_property]` on something other than a named field.
    OnlyApplicableToVariables,

    /// `#[dto_init]` on something other than a constructor.
    OnlyApplicableToInits,

    /// `#[dto_model]` on something other than a struct with named fields.
    OnlyApplicableToClass,

    /// Both marked fields and a marked constructor for one purpose.
    BothPropertiesAndInitPresent,

    /// Neither marked fields nor a marked constructor for the purpose.
    NoPropertiesOrInitFound,

    /// Marked constructor has a parameter that is not a plain identifier.
    ExpectNamedParameter,

    /// `#[dto_model]` on a struct with generic parameters.
    GenericModelUnsupported,

    /// Second `#[dto_model]` with the same purpose on one struct.
    DuplicatePurpose,

    /// The generated module would reuse a name already declared in the
    /// enclosing module.
    ModuleNameTaken,

    /// Strict mode: more than one marked constructor for a purpose.
    MultipleInitsForPurpose,

    /// Strict mode: `#[dto_property]` in a struct without `#[dto_model]`.
    OnlyApplicableToModelProperties,

    /// Strict mode: `#[dto_init]` in an impl of a struct without
    /// `#[dto_model]`.
    OnlyApplicableToModelInits
}

impl DiagnosticId {
    /// Severity of this diagnostic.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::NoPropertiesOrInitFound => Severity::Warning,
            _ => Severity::Error
        }
    }

    /// Identifier within [`DOMAIN`].
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ExpectPurpose => "expect_purpose",
            Self::ExpectRequired => "expect_required",
            Self::OnlyApplicableToVariables => "only_applicable_to_variables",
            Self::OnlyApplicableToInits => "only_applicable_to_inits",
            Self::OnlyApplicableToClass => "only_applicable_to_class",
            Self::BothPropertiesAndInitPresent => "both_properties_and_init_present",
            Self::NoPropertiesOrInitFound => "no_properties_or_init_found",
            Self::ExpectNamedParameter => "expect_named_parameter",
            Self::GenericModelUnsupported => "generic_model_unsupported",
            Self::DuplicatePurpose => "duplicate_purpose",
            Self::ModuleNameTaken => "module_name_taken",
            Self::MultipleInitsForPurpose => "multiple_inits_for_purpose",
            Self::OnlyApplicableToModelProperties => "only_applicable_to_model_properties",
            Self::OnlyApplicableToModelInits => "only_applicable_to_model_inits"
        }
    }

    /// Domain-qualified identifier, e.g. `dto_model::expect_purpose`.
    #[must_use]
    pub fn qualified(self) -> String {
        format!("{DOMAIN}::{}", self.code())
    }

    /// Human-readable message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ExpectPurpose => {
                "expected a DTO purpose (`create`, `update` or `output`) as the first argument"
            }
            Self::ExpectRequired => {
                "expected a requirement (`required` or `optional`) as the last argument"
            }
            Self::OnlyApplicableToVariables => {
                "`#[dto_property]` can only be applied to a named struct field"
            }
            Self::OnlyApplicableToInits => {
                "`#[dto_init]` can only be applied to a constructor (an associated function \
                 returning `Self`)"
            }
            Self::OnlyApplicableToClass => {
                "`#[dto_model]` can only be applied to a struct with named fields"
            }
            Self::BothPropertiesAndInitPresent => {
                "`#[dto_property]` and `#[dto_init]` can't be used for the same purpose; remove \
                 one or the other"
            }
            Self::NoPropertiesOrInitFound => {
                "`#[dto_model]` without `#[dto_property]` fields or a `#[dto_init]` constructor \
                 for this purpose does nothing; mark up fields or a constructor, or remove the \
                 attribute"
            }
            Self::ExpectNamedParameter => {
                "`#[dto_init]` constructor parameters must be plain identifiers"
            }
            Self::GenericModelUnsupported => "`#[dto_model]` does not support generic structs",
            Self::DuplicatePurpose => {
                "this purpose is already generated by an earlier `#[dto_model]` on the same struct"
            }
            Self::ModuleNameTaken => {
                "the module generated for this struct clashes with another item of the same name; \
                 rename one of them"
            }
            Self::MultipleInitsForPurpose => {
                "another `#[dto_init]` constructor already provides fields for this purpose"
            }
            Self::OnlyApplicableToModelProperties => {
                "`#[dto_property]` can only be used in a `#[dto_model]` struct"
            }
            Self::OnlyApplicableToModelInits => {
                "`#[dto_init]` can only be used in an impl of a `#[dto_model]` struct"
            }
        }
    }
}

/// One reported problem, anchored at the tokens of an annotation or
/// declaration.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    id:     DiagnosticId,
    origin: TokenStream
}

impl Diagnostic {
    /// Create a diagnostic anchored at `origin`.
    pub fn new(id: DiagnosticId, origin: &impl ToTokens) -> Self {
        Self {
            id,
            origin: origin.to_token_stream()
        }
    }

    /// Stable identifier.
    #[cfg(test)]
    #[must_use]
    pub fn id(&self) -> DiagnosticId {
        self.id
    }

    /// Severity, derived from the identifier.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.id.severity()
    }

    /// Full text shown to the user.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} [{}]", self.id.message(), self.id.qualified())
    }

    fn span(&self) -> Span {
        self.origin
            .clone()
            .into_iter()
            .next()
            .map_or_else(Span::call_site, |token| token.span())
    }
}

impl ToTokens for Diagnostic {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let text = self.text();
        match self.severity() {
            Severity::Error => {
                tokens.extend(syn::Error::new_spanned(&self.origin, text).to_compile_error());
            }
            Severity::Warning => {
                let span = self.span();
                tokens.extend(quote_spanned! {span=>
                    const _: () = {
                        #[deprecated(note = #text)]
                        #[allow(non_upper_case_globals)]
                        const dto_model_warning: () = ();
                        dto_model_warning
                    };
                });
            }
        }
    }
}

/// Sink for everything reported during one macro invocation.
///
/// Option errors from `darling` are kept apart from [`Diagnostic`]s because
/// they carry their own messages and spans.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items:   Vec<Diagnostic>,
    options: Vec<TokenStream>
}

impl Diagnostics {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic anchored at `origin`.
    pub fn emit(&mut self, id: DiagnosticId, origin: &impl ToTokens) {
        self.items.push(Diagnostic::new(id, origin));
    }

    /// Record an option parsing error.
    pub fn push_darling(&mut self, error: darling::Error) {
        self.options.push(error.write_errors());
    }

    /// Reported diagnostics in emission order.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Identifiers of reported diagnostics in emission order.
    #[cfg(test)]
    #[must_use]
    pub fn ids(&self) -> Vec<DiagnosticId> {
        self.items.iter().map(Diagnostic::id).collect()
    }

    /// Number of errors, option errors included.
    #[cfg(test)]
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error) + self.options.len()
    }

    /// Number of warnings.
    #[cfg(test)]
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Whether nothing was reported.
    #[cfg(test)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.options.is_empty()
    }

    #[cfg(test)]
    fn count(&self, severity: Severity) -> usize {
        self.items
            .iter()
            .filter(|diagnostic| diagnostic.severity() == severity)
            .count()
    }
}

impl ToTokens for Diagnostics {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        for diagnostic in &self.items {
            diagnostic.to_tokens(tokens);
        }
        for error in &self.options {
            tokens.extend(error.clone());
        }
    }
}
