// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_model::{Content, Purpose, dto_models};

#[dto_models]
mod models {
    #[dto_model(create)]
    pub struct TestModel {
        #[dto_property(create, optional)]
        pub create_optional_variable: String,

        #[dto_property(create, required)]
        pub create_required_variable: u32,

        pub not_create_variable: bool,
    }
}

use models::test_model::DTOCreate;

fn main() {
    // DTOCreate has: create_optional_variable (Option), create_required_variable
    let dto = DTOCreate::new(None, 7);
    assert!(dto.create_optional_variable.is_none());
    assert_eq!(dto.create_required_variable, 7);

    let dto = DTOCreate {
        create_optional_variable: Some("set".to_string()),
        create_required_variable: 1,
    };
    assert_eq!(dto.create_optional_variable.as_deref(), Some("set"));

    assert_eq!(<DTOCreate as Content>::PURPOSE, Purpose::Create);
}
