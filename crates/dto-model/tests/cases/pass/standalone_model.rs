// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_model::{Content, Purpose, dto_model};

#[dto_model(output, name = "AccountView", derive(Debug))]
#[dto_model(update)]
pub struct Account {
    #[dto_property(output)]
    #[dto_property(update, optional)]
    pub email: String,

    #[dto_property(update, required)]
    pub active: bool,

    pub password_hash: String,
}

fn main() {
    let model = Account {
        email: "user@example.com".to_string(),
        active: true,
        password_hash: "secret".to_string(),
    };

    let view = account::AccountView::from(&model);
    assert_eq!(view.email, "user@example.com");
    assert_eq!(<account::AccountView as Content>::PURPOSE, Purpose::Output);

    let update = account::DTOUpdate::new(None, false);
    assert!(update.email.is_none());
    assert!(!update.active);
    assert_eq!(model.password_hash, "secret");
}
