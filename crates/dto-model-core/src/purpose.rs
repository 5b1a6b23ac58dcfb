// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Purpose and requirement vocabulary.
//!
//! Both sets are closed. Their snake-case names are the words accepted in
//! `#[dto_model(...)]`, `#[dto_property(...)]` and `#[dto_init(...)]`.

use std::fmt;

/// Which data-transfer view a DTO represents.
///
/// | Purpose | Attribute word | Generated type |
/// |---------|----------------|----------------|
/// | `Create` | `create` | `DTOCreate` |
/// | `Update` | `update` | `DTOUpdate` |
/// | `Output` | `output` | `DTOOutput` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    /// Payload for creating a new model.
    Create,

    /// Payload for updating an existing model.
    Update,

    /// View of an existing model sent back to clients.
    ///
    /// Output DTOs also get a conversion constructor from the model.
    Output
}

impl Purpose {
    /// All purposes in declaration order.
    pub const ALL: [Self; 3] = [Self::Create, Self::Update, Self::Output];

    /// Attribute word for this purpose.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Output => "output"
        }
    }

    /// Canonical name of the generated struct.
    #[must_use]
    pub const fn struct_name(self) -> &'static str {
        match self {
            Self::Create => "DTOCreate",
            Self::Update => "DTOUpdate",
            Self::Output => "DTOOutput"
        }
    }

    /// Look up a purpose by its attribute word.
    ///
    /// Matching is exact: `"create"` is accepted, `"Create"` is not.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|purpose| purpose.name() == name)
    }

    /// Whether fields of this purpose carry a [`Requirement`].
    #[must_use]
    pub const fn takes_requirement(self) -> bool {
        !matches!(self, Self::Output)
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a create/update field must be provided.
///
/// `Optional` fields of a plain type `T` become `Option<T>` in the
/// generated DTO; `Required` fields keep their declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// Field keeps its declared type.
    Required,

    /// Field is wrapped in `Option` unless it already is one.
    Optional
}

impl Requirement {
    /// All requirements in declaration order.
    pub const ALL: [Self; 2] = [Self::Required, Self::Optional];

    /// Attribute word for this requirement.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional"
        }
    }

    /// Look up a requirement by its attribute word.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|requirement| requirement.name() == name)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
