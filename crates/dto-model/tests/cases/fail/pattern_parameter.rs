// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_model::dto_models;

#[dto_models]
mod models {
    #[dto_model(create)]
    pub struct Point {
        pub x: i32,
        pub y: i32,
    }

    impl Point {
        #[dto_init(create)]
        pub fn new((x, y): (i32, i32)) -> Self {
            Self { x, y }
        }
    }
}

fn main() {}
