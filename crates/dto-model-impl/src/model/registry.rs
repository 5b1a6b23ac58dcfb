// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Annotation name to handler table.
//!
//! The module walker looks every attribute up here. Attributes are matched
//! on the last path segment, so `dto_model`, `dto_model::dto_model` and
//! `crate::dto_model` all resolve to the same handler.
//!
//! | Attribute | Handler | Output |
//! |-----------|---------|--------|
//! | `dto_model` | [`class::expand`] | synthesized types |
//! | `dto_property` | [`property::validate`] | nothing |
//! | `dto_init` | [`init::validate`] | nothing |

use dto_model_core::Purpose;
use syn::Attribute;

use super::{
    class, init,
    parse::{Annotation, ClassDef},
    property,
    synth::SynthesizedType
};
use crate::diagnostic::Diagnostics;

/// Class-level annotation name.
pub const MODEL: &str = "dto_model";

/// Property annotation name.
pub const PROPERTY: &str = "dto_property";

/// Constructor annotation name.
pub const INIT: &str = "dto_init";

/// Signature shared by every annotation handler.
pub type Handler =
    fn(&Annotation, &Target<'_>, &mut Scope, &mut Diagnostics) -> Vec<SynthesizedType>;

/// Every annotation the walker recognizes.
pub static REGISTRY: [(&str, Handler); 3] = [
    (MODEL, class::expand as Handler),
    (PROPERTY, property::validate as Handler),
    (INIT, init::validate as Handler)
];

/// Declaration an annotation is attached to.
#[derive(Debug)]
pub enum Target<'a> {
    /// A struct with named fields, grouped with its inherent impls.
    Class(ClassDef<'a>),
    /// A named struct field.
    Property,
    /// An associated function returning the type it is implemented for.
    Constructor,
    /// Anything else.
    Other
}

/// State shared by the annotations of one declaration.
#[derive(Debug, Default)]
pub struct Scope {
    /// `#[dto_models(strict)]` is in effect.
    pub strict:   bool,
    /// The declaration belongs to a struct carrying `#[dto_model]`.
    pub in_model: bool,
    /// Purposes already synthesized for the current struct.
    pub claimed:  Vec<Purpose>
}

/// Handler registered for an attribute, if any.
pub fn lookup(attr: &Attribute) -> Option<Handler> {
    let name = attr.path().segments.last()?.ident.to_string();
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, handler)| *handler)
}

/// Whether the attribute is the annotation called `name`.
pub fn is_named(attr: &Attribute, name: &str) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == name)
}

/// Whether the attribute is any registered annotation.
pub fn is_registered(attr: &Attribute) -> bool {
    lookup(attr).is_some()
}
