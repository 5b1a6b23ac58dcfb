// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_model::dto_models;

#[dto_models(strict)]
mod models {
    #[dto_model(create)]
    #[dto_model(update)]
    pub struct Article {
        pub title: String,
        pub body: Option<String>,
        pub views: u64,
    }

    impl Article {
        #[dto_init(create)]
        pub fn new(title: String, body: Option<String>) -> Self {
            Self {
                title,
                body,
                views: 0,
            }
        }

        #[dto_init(update)]
        pub fn retitled(title: String) -> Option<Self> {
            if title.is_empty() {
                None
            } else {
                Some(Self {
                    title,
                    body: None,
                    views: 0,
                })
            }
        }
    }
}

use models::{Article, article};

fn main() {
    // Parameter types are taken verbatim
    let create = article::DTOCreate::new("Hello".to_string(), None);
    let post = Article::new(create.title, create.body);
    assert_eq!(post.views, 0);

    let update = article::DTOUpdate::new("Renamed".to_string());
    assert!(Article::retitled(update.title).is_some());
}
