// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

// Compiles with a `no_properties_or_init_found` warning and generates nothing.

use dto_model::dto_models;

#[dto_models]
mod models {
    #[dto_model(update)]
    pub struct Settings {
        #[dto_property(create, required)]
        pub theme: String,
    }

    impl Settings {
        pub fn new(theme: String) -> Self {
            Self { theme }
        }
    }
}

fn main() {
    let settings = models::Settings::new("dark".to_string());
    assert_eq!(settings.theme, "dark");
}
