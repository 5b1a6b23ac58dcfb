// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[dto_init]` validation.

use super::{
    parse::{Annotation, ConstructorAnnotation},
    registry::{Scope, Target},
    synth::SynthesizedType
};
use crate::diagnostic::{DiagnosticId, Diagnostics};

/// Validate one `#[dto_init(...)]`.
///
/// Only the purpose is read; the parameters are consulted by the
/// class-level engine.
pub fn validate(
    annotation: &Annotation,
    target: &Target<'_>,
    scope: &mut Scope,
    diagnostics: &mut Diagnostics
) -> Vec<SynthesizedType> {
    if !matches!(target, Target::Constructor) {
        diagnostics.emit(DiagnosticId::OnlyApplicableToInits, annotation.origin());
    } else if scope.strict && !scope.in_model {
        diagnostics.emit(DiagnosticId::OnlyApplicableToModelInits, annotation.origin());
    }
    if let Err(id) = ConstructorAnnotation::parse(annotation) {
        diagnostics.emit(id, annotation.origin());
    }
    Vec::new()
}
