// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_model::dto_models;

#[dto_models]
mod models {
    #[dto_model(update)]
    pub struct User {
        #[dto_property(update)]
        pub email: String,

        #[dto_property(update, optional)]
        pub name: String,
    }
}

fn main() {}
