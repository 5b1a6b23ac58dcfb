// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[dto_property]` validation.
//!
//! The marker itself generates nothing; the class-level engine reads it when
//! resolving fields. Here it is only checked for placement and arguments.

use super::{
    parse::{Annotation, PropertyAnnotation},
    registry::{Scope, Target},
    synth::SynthesizedType
};
use crate::diagnostic::{DiagnosticId, Diagnostics};

/// Validate one `#[dto_property(...)]`.
pub fn validate(
    annotation: &Annotation,
    target: &Target<'_>,
    scope: &mut Scope,
    diagnostics: &mut Diagnostics
) -> Vec<SynthesizedType> {
    if !matches!(target, Target::Property) {
        diagnostics.emit(DiagnosticId::OnlyApplicableToVariables, annotation.origin());
    } else if scope.strict && !scope.in_model {
        diagnostics.emit(DiagnosticId::OnlyApplicableToModelProperties, annotation.origin());
    }
    if let Err(id) = PropertyAnnotation::parse(annotation) {
        diagnostics.emit(id, annotation.origin());
    }
    Vec::new()
}
