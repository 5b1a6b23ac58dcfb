// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[dto_model]` expansion.
//!
//! Resolves both field sources for the annotated purpose and synthesizes a
//! type from whichever one is present:
//!
//! | Marked fields | Marked constructor | Outcome |
//! |---------------|--------------------|---------|
//! | yes | yes | error, nothing generated |
//! | yes | no | type from fields |
//! | no | yes | type from constructor parameters |
//! | no | no | warning, nothing generated |

use darling::FromMeta;

use super::{
    parse::{Annotation, ModelOptions},
    registry::{Scope, Target},
    resolve::{constructor_fields, property_fields},
    synth::SynthesizedType
};
use crate::diagnostic::{DiagnosticId, Diagnostics};

/// Expand one `#[dto_model(...)]`.
pub fn expand(
    annotation: &Annotation,
    target: &Target<'_>,
    scope: &mut Scope,
    diagnostics: &mut Diagnostics
) -> Vec<SynthesizedType> {
    let Target::Class(class) = target else {
        diagnostics.emit(DiagnosticId::OnlyApplicableToClass, annotation.origin());
        return Vec::new();
    };

    let purpose = match annotation.purpose() {
        Ok(purpose) => purpose,
        Err(id) => {
            diagnostics.emit(id, annotation.origin());
            return Vec::new();
        }
    };

    if !class.item.generics.params.is_empty() {
        diagnostics.emit(DiagnosticId::GenericModelUnsupported, annotation.origin());
        return Vec::new();
    }

    if scope.claimed.contains(&purpose) {
        diagnostics.emit(DiagnosticId::DuplicatePurpose, annotation.origin());
        return Vec::new();
    }
    scope.claimed.push(purpose);

    let options = match ModelOptions::from_list(annotation.options()) {
        Ok(options) => options,
        Err(err) => {
            diagnostics.push_darling(err);
            return Vec::new();
        }
    };

    let properties = property_fields(class, purpose);
    let Some(parameters) = constructor_fields(class, purpose, scope.strict, diagnostics) else {
        return Vec::new();
    };

    let fields = match (properties.is_empty(), parameters.is_empty()) {
        (false, false) => {
            diagnostics.emit(DiagnosticId::BothPropertiesAndInitPresent, annotation.origin());
            return Vec::new();
        }
        (false, true) => properties,
        (true, false) => parameters,
        (true, true) => {
            diagnostics.emit(DiagnosticId::NoPropertiesOrInitFound, annotation.origin());
            return Vec::new();
        }
    };

    vec![SynthesizedType::new(class.ident(), purpose, &fields, &options)]
}
