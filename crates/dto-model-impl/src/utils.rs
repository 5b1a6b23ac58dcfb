// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for code generation.
//!
//! # Submodules
//!
//! - [`docs`]: Doc comment forwarding
//! - [`fields`]: Field, parameter and argument lists for generated types

pub mod docs;
pub mod fields;
