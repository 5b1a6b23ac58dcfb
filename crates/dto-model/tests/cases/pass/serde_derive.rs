// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_model::dto_models;

#[dto_models]
mod models {
    #[dto_model(create, derive(serde::Deserialize))]
    #[dto_model(output, derive(serde::Serialize))]
    pub struct Product {
        #[dto_property(create, required)]
        #[dto_property(output)]
        pub name: String,

        #[dto_property(create, optional)]
        #[dto_property(output)]
        pub price: u32,

        pub internal_cost: u32,
    }
}

use models::{Product, product};

fn main() {
    let create: product::DTOCreate = serde_json::from_str(r#"{"name":"Widget","price":null}"#).unwrap();
    assert_eq!(create.name, "Widget");
    assert!(create.price.is_none());

    let model = Product {
        name: create.name,
        price: create.price.unwrap_or(19),
        internal_cost: 7,
    };
    let json = serde_json::to_string(&product::DTOOutput::from(&model)).unwrap();
    assert_eq!(json, r#"{"name":"Widget","price":19}"#);
    assert_eq!(model.internal_cost, 7);
}
