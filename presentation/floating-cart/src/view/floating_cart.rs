use std::sync::Arc;

use tokio::sync::watch;

use business::application::cart::provider::CartScope;
use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::formatter::PriceFormatter;
use business::domain::navigation::{CART_SCREEN, Navigator};

const ITEM_COUNT_LABEL: &str = "itens";

/// What the floating cart shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingCartView {
    pub item_count: u64,
    pub item_count_label: String,
    pub total_price: String,
}

impl FloatingCartView {
    fn derive(cart: &Cart, formatter: &dyn PriceFormatter) -> Self {
        let item_count = cart.total_quantity();
        Self {
            item_count,
            item_count_label: format!("{} {}", item_count, ITEM_COUNT_LABEL),
            total_price: formatter.format(cart.total_price()),
        }
    }
}

/// Floating cart summary: item count, formatted total and a button to the
/// cart screen. Reads the cart, never mutates it.
///
/// Totals are derived again only after a cart-changed notification, so
/// re-rendering an unchanged cart never reaches the formatter.
pub struct FloatingCart {
    changes: watch::Receiver<Arc<Cart>>,
    formatter: Arc<dyn PriceFormatter>,
    navigator: Arc<dyn Navigator>,
    view: FloatingCartView,
}

impl FloatingCart {
    pub fn new(
        scope: &CartScope,
        formatter: Arc<dyn PriceFormatter>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, CartError> {
        let mut changes = scope.use_cart()?.subscribe();
        let view = FloatingCartView::derive(&changes.borrow_and_update(), formatter.as_ref());

        Ok(Self {
            changes,
            formatter,
            navigator,
            view,
        })
    }

    pub fn render(&mut self) -> &FloatingCartView {
        // A closed channel still holds the last published cart.
        let changed = match self.changes.has_changed() {
            Ok(changed) => changed,
            Err(_) => self.changes.borrow().has_changed(),
        };
        if changed {
            self.refresh();
        }
        &self.view
    }

    /// Waits for the next cart change and returns the refreshed view.
    pub async fn next_change(&mut self) -> Result<&FloatingCartView, CartError> {
        self.changes
            .changed()
            .await
            .map_err(|_| CartError::ProviderClosed)?;
        self.refresh();
        Ok(&self.view)
    }

    pub fn press(&self) {
        self.navigator.navigate(CART_SCREEN);
    }

    fn refresh(&mut self) {
        let cart = self.changes.borrow_and_update().clone();
        self.view = FloatingCartView::derive(&cart, self.formatter.as_ref());
    }
}
