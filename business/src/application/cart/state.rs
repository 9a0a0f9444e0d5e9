use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, watch};

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::value_objects::MutationOutcome;
use crate::domain::logger::Logger;

/// Sole owner of the in-memory cart.
///
/// Writers take the lock and keep it until the snapshot write has settled, so
/// at most one persistence operation is in flight. Readers never touch the
/// lock: every change is published on a watch channel, which doubles as the
/// "cart changed" notification.
pub struct CartState {
    cart: Mutex<Cart>,
    published: watch::Sender<Arc<Cart>>,
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

impl CartState {
    pub fn new() -> Self {
        let (published, _) = watch::channel(Arc::new(Cart::new()));
        Self {
            cart: Mutex::new(Cart::new()),
            published,
        }
    }

    /// Latest published cart.
    pub fn snapshot(&self) -> Arc<Cart> {
        self.published.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Cart>> {
        self.published.subscribe()
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().await
    }

    pub(crate) fn publish(&self, cart: &Cart) {
        self.published.send_replace(Arc::new(cart.clone()));
    }

    /// Applies `mutate` under the writer lock. When it reports a change, the
    /// new cart is published and then written to the repository before the
    /// lock is released.
    pub(crate) async fn commit<F>(
        &self,
        repository: &dyn CartRepository,
        logger: &dyn Logger,
        mutate: F,
    ) -> MutationOutcome
    where
        F: FnOnce(&mut Cart) -> bool + Send,
    {
        let mut cart = self.lock().await;
        if !mutate(&mut cart) {
            return MutationOutcome::Unchanged;
        }
        self.publish(&cart);

        match repository.save(&cart).await {
            Ok(()) => MutationOutcome::Applied,
            Err(err) => {
                logger.error(&format!("Failed to persist cart snapshot: {}", err));
                MutationOutcome::NotPersisted
            }
        }
    }
}
