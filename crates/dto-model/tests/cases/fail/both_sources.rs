// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_model::dto_models;

#[dto_models]
mod models {
    #[dto_model(create)]
    pub struct User {
        #[dto_property(create, required)]
        pub email: String,
    }

    impl User {
        #[dto_init(create)]
        pub fn new(email: String) -> Self {
            Self { email }
        }
    }
}

fn main() {}
