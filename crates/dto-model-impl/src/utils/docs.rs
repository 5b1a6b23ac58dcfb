// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Documentation forwarding.
//!
//! Doc comments (`///` and `/** */`) are stored as `#[doc = "..."]`
//! attributes. Generated fields carry the doc attributes of the property
//! they were resolved from, unchanged.

use syn::Attribute;

/// Doc attributes of a declaration, in order.
pub fn doc_attrs(attrs: &[Attribute]) -> Vec<Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .cloned()
        .collect()
}
