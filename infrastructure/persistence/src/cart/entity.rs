use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartItem;
use business::domain::cart::value_objects::CartItemId;

/// Stored shape of one cart line: `{id, title, image_url, price, quantity}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartItemEntity {
    pub id: CartItemId,
    pub title: String,
    pub image_url: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

impl CartItemEntity {
    pub fn from_domain(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            image_url: item.image_url.clone(),
            price: item.price,
            quantity: item.quantity,
        }
    }

    pub fn into_domain(self) -> CartItem {
        CartItem::from_repository(self.id, self.title, self.image_url, self.price, self.quantity)
    }
}
