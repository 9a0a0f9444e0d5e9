use std::collections::HashSet;

use rust_decimal::Decimal;

use super::value_objects::CartItemId;

/// Product data handed to `add_to_cart`. Quantity is owned by the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub id: CartItemId,
    pub title: String,
    pub image_url: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: CartItemId,
    pub title: String,
    pub image_url: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl CartItem {
    fn first(item: NewCartItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            image_url: item.image_url,
            price: item.price,
            quantity: 1,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: CartItemId,
        title: String,
        image_url: String,
        price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            title,
            image_url,
            price,
            quantity,
        }
    }

    /// Price of this line: unit price times quantity.
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The cart line items, in insertion order, keyed by id.
///
/// Every item holds `quantity >= 1`; an item whose quantity would reach zero
/// is removed instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from stored items, dropping entries with a zero quantity
    /// and keeping only the first entry of each id.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| item.quantity > 0)
            .filter(|item| seen.insert(item.id.clone()))
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    fn position(&self, id: &CartItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Adds one unit of the product and returns the resulting quantity.
    ///
    /// An already present id keeps its title, image and price.
    pub fn add(&mut self, item: NewCartItem) -> u32 {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
                existing.quantity
            }
            None => {
                self.items.push(CartItem::first(item));
                1
            }
        }
    }

    /// Returns false when no item has this id.
    pub fn increment(&mut self, id: &CartItemId) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Removes the item when its quantity is one. Returns false when no item
    /// has this id.
    pub fn decrement(&mut self, id: &CartItemId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        if self.items[index].quantity > 1 {
            self.items[index].quantity -= 1;
        } else {
            self.items.remove(index);
        }
        true
    }

    /// Sum of `price * quantity` over all items.
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Sum of quantities over all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
