// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_model::{Content, Purpose, dto_models};

#[dto_models]
mod models {
    #[dto_model(output, derive(Debug, Clone, PartialEq))]
    pub struct User {
        /// Login.
        #[dto_property(output)]
        pub email: String,

        #[dto_property(output)]
        pub age: u8,

        #[dto_property(output)]
        pub tags: Vec<String>,

        pub password_hash: String,
    }
}

use models::{User, user};

fn main() {
    let model = User {
        email: "user@example.com".to_string(),
        age: 30,
        tags: vec!["admin".to_string()],
        password_hash: "secret".to_string(),
    };

    let view = user::DTOOutput::with_model(&model);
    assert_eq!(view.email, model.email);
    assert_eq!(view.age, 30);
    assert_eq!(view.tags, vec!["admin".to_string()]);

    let from: user::DTOOutput = (&model).into();
    assert_eq!(from, view);

    let model_alias: &user::Model = &model;
    assert_eq!(model_alias.password_hash, "secret");

    let manual = user::DTOOutput::new("a@b.c".to_string(), 1, Vec::new());
    assert_eq!(manual.clone().age, 1);

    assert_eq!(<user::DTOOutput as Content>::PURPOSE, Purpose::Output);
}
