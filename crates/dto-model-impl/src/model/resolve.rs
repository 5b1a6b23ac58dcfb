// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field resolution.
//!
//! A generated type takes its fields from one of two sources:
//!
//! | Source | Selection | Type |
//! |--------|-----------|------|
//! | Property | fields with a `#[dto_property]` for the purpose, in declaration order | optionality transform applied |
//! | Parameter | parameters of the first `#[dto_init]` constructor for the purpose | verbatim |
//!
//! Which source wins is decided by the class-level engine.

use dto_model_core::{Purpose, Requirement};
use syn::{
    Attribute, FnArg, GenericArgument, Ident, ImplItemFn, Pat, PathArguments, Type, parse_quote
};

use super::{
    parse::{Annotation, ClassDef, ConstructorAnnotation, PropertyAnnotation},
    registry::{INIT, PROPERTY, is_named}
};
use crate::{
    diagnostic::{DiagnosticId, Diagnostics},
    utils::docs::doc_attrs
};

/// Where a resolved field came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// A marked struct field.
    Property,
    /// A parameter of a marked constructor.
    Parameter
}

/// One member of a generated type.
#[derive(Debug, Clone)]
pub struct ResolvedField {
    /// Origin of the field.
    pub source: FieldSource,
    /// Field name.
    pub name:   Ident,
    /// Field type.
    pub ty:     Type,
    /// Doc attributes forwarded to the generated field.
    pub docs:   Vec<Attribute>
}

/// Fields of `class` marked for `purpose`.
pub fn property_fields(class: &ClassDef<'_>, purpose: Purpose) -> Vec<ResolvedField> {
    class
        .properties()
        .filter_map(|field| {
            let name = field.ident.clone()?;
            let marker = field
                .attrs
                .iter()
                .filter(|attr| is_named(attr, PROPERTY))
                .map(Annotation::from_attr)
                .find(|annotation| annotation.purpose() == Ok(purpose))?;

            let ty = match PropertyAnnotation::parse(&marker).ok()?.requirement {
                Some(requirement) => optionalize(&field.ty, requirement),
                None => field.ty.clone()
            };

            Some(ResolvedField {
                source: FieldSource::Property,
                name,
                ty,
                docs: doc_attrs(&field.attrs)
            })
        })
        .collect()
}

/// Parameters of the first constructor of `class` marked for `purpose`.
///
/// Returns `None` after reporting [`DiagnosticId::ExpectNamedParameter`]
/// when a parameter is not a plain identifier. In strict mode every further
/// marked constructor is reported as [`DiagnosticId::MultipleInitsForPurpose`].
pub fn constructor_fields(
    class: &ClassDef<'_>,
    purpose: Purpose,
    strict: bool,
    diagnostics: &mut Diagnostics
) -> Option<Vec<ResolvedField>> {
    let mut marked = class.constructors().filter_map(|func| {
        func.attrs
            .iter()
            .filter(|attr| is_named(attr, INIT))
            .find(|attr| {
                ConstructorAnnotation::parse(&Annotation::from_attr(attr))
                    .is_ok_and(|annotation| annotation.purpose == purpose)
            })
            .map(|attr| (func, attr))
    });

    let Some((func, _)) = marked.next() else {
        return Some(Vec::new());
    };
    if strict {
        for (_, attr) in marked {
            diagnostics.emit(DiagnosticId::MultipleInitsForPurpose, attr);
        }
    }

    parameters(func, diagnostics)
}

fn parameters(func: &ImplItemFn, diagnostics: &mut Diagnostics) -> Option<Vec<ResolvedField>> {
    let mut fields = Vec::with_capacity(func.sig.inputs.len());
    for input in &func.sig.inputs {
        let FnArg::Typed(arg) = input else {
            continue;
        };
        match arg.pat.as_ref() {
            Pat::Ident(pat) if pat.subpat.is_none() => fields.push(ResolvedField {
                source: FieldSource::Parameter,
                name:   pat.ident.clone(),
                ty:     arg.ty.as_ref().clone(),
                docs:   doc_attrs(&arg.attrs)
            }),
            _ => {
                diagnostics.emit(DiagnosticId::ExpectNamedParameter, arg);
                return None;
            }
        }
    }
    Some(fields)
}

/// Apply the optionality transform.
///
/// An optional requirement wraps a plain path type in `Option`; a type that
/// already is an `Option`, and any type that is not a plain path, is kept
/// verbatim.
pub fn optionalize(ty: &Type, requirement: Requirement) -> Type {
    match (requirement, ty) {
        (Requirement::Optional, Type::Path(path)) if path.qself.is_none() && !is_option(ty) => {
            parse_quote!(Option<#ty>)
        }
        _ => ty.clone()
    }
}

fn is_option(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    path.path.segments.last().is_some_and(|segment| {
        segment.ident == "Option"
            && matches!(
                &segment.arguments,
                PathArguments::AngleBracketed(args)
                    if matches!(args.args.first(), Some(GenericArgument::Type(_)))
            )
    })
}
