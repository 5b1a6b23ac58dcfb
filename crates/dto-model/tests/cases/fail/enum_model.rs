// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_model::dto_model;

#[dto_model(output)]
pub enum Status {
    Active,
    Disabled,
}

fn main() {}
